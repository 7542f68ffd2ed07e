use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;
use crate::services::subdomain::current_shop;
use crate::session::use_session;

#[derive(Properties, PartialEq)]
pub struct ShopProps {
    pub shop_name: String,
}

/// Per-shop page, normally reached on the shop's own subdomain after the
/// full-page hop from the dashboard.
#[function_component(Shop)]
pub fn shop(props: &ShopProps) -> Html {
    let session = use_session();

    let claims = match session.authorize() {
        Ok(claims) => claims,
        Err(_) => return html! { <Redirect<Route> to={Route::Login} /> },
    };

    // The hostname's first label names the shop; the route parameter only
    // matters when the page is visited on the parent host.
    let host_label = web_sys::window()
        .and_then(|window| window.location().hostname().ok())
        .map(|hostname| current_shop(&hostname).to_string())
        .unwrap_or_default();
    let shop = if host_label.is_empty() {
        props.shop_name.clone()
    } else {
        host_label
    };

    html! {
        <div class="shop-page">
            <div class="card">
                <h1>{ format!("This is {shop} shop") }</h1>
                <p>{ format!("Logged in as: {}", claims.username) }</p>
            </div>
        </div>
    }
}

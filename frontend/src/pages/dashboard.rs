use gloo::dialogs::confirm;
use shared::models::Claims;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::shop_list::{ShopList, ShopListState};
use crate::router::Route;
use crate::services::api::ApiService;
use crate::services::subdomain::navigate_to_shop;
use crate::session::use_session;

#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let session = use_session();
    let navigator = use_navigator().expect("router context");
    let claims = use_state(|| None::<Claims>);
    let shop_state = use_state(|| ShopListState::Idle);

    {
        let session = session.clone();
        let navigator = navigator.clone();
        let claims = claims.clone();
        use_effect_with((), move |_| {
            match session.authorize() {
                Ok(decoded) => claims.set(Some(decoded)),
                Err(_) => navigator.push(&Route::Login),
            }
            || ()
        });
    }

    let on_show_shops = {
        let session = session.clone();
        let claims = claims.clone();
        let shop_state = shop_state.clone();
        Callback::from(move |_: MouseEvent| {
            if shop_state.is_loading() {
                return;
            }
            let (Some(decoded), Some(token)) = ((*claims).clone(), session.token()) else {
                return;
            };
            shop_state.set(ShopListState::Loading);

            let shop_state = shop_state.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match ApiService::my_shops(&decoded.username, &token).await {
                    Ok(shops) => shop_state.set(ShopListState::Loaded(shops)),
                    Err(err) => {
                        tracing::error!(%err, "failed to fetch shops");
                        shop_state.set(ShopListState::Failed(err.to_string()));
                    }
                }
            });
        })
    };

    let on_logout = {
        let session = session.clone();
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            if confirm("You will be logged out from this session. Continue?") {
                session.logout();
                navigator.push(&Route::Login);
            }
        })
    };

    let on_select_shop = Callback::from(|shop: String| navigate_to_shop(&shop));

    let username = (*claims)
        .as_ref()
        .map(|decoded| decoded.username.clone())
        .unwrap_or_default();
    let expires = (*claims)
        .as_ref()
        .and_then(|decoded| decoded.expires_at())
        .map(|at| at.format("%Y-%m-%d %H:%M UTC").to_string());

    html! {
        <div class="dashboard">
            <aside class="sidebar">
                <button class="profile" onclick={on_show_shops}>{ &username }</button>
                <button class="logout" onclick={on_logout}>{ "Logout" }</button>
            </aside>

            <main class="content">
                <h2>{ "Dashboard" }</h2>
                {match &*shop_state {
                    ShopListState::Idle => html! {
                        <>
                            <p>{ "Welcome to Dashboard" }</p>
                            if let Some(expires) = &expires {
                                <p class="session-note">{ format!("Signed in until {expires}") }</p>
                            }
                        </>
                    },
                    ShopListState::Loading => html! {
                        <div class="loading">
                            <div class="spinner"></div>
                            <p>{ "Loading your shops..." }</p>
                        </div>
                    },
                    ShopListState::Loaded(shops) => html! {
                        <>
                            <h3>{ "My Shops:" }</h3>
                            <ShopList shops={shops.clone()} on_select={on_select_shop.clone()} />
                        </>
                    },
                    ShopListState::Failed(reason) => html! {
                        <>
                            <h3>{ "My Shops:" }</h3>
                            <ShopList shops={Vec::<String>::new()} on_select={on_select_shop.clone()} />
                            <p class="notice">{ format!("Could not load shops: {reason}") }</p>
                        </>
                    },
                }}
            </main>
        </div>
    }
}

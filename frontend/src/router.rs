use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::guard::RequireAuth;
use crate::pages::{
    dashboard::Dashboard, login::Login, not_found::NotFound, register::Register, shop::Shop,
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/register")]
    Register,
    #[at("/login")]
    Login,
    #[at("/dashboard")]
    Dashboard,
    #[at("/shop/:shop_name")]
    Shop { shop_name: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <Redirect<Route> to={Route::Dashboard} /> },
        Route::Register => html! { <Register /> },
        Route::Login => html! { <Login /> },
        Route::Dashboard => html! {
            <RequireAuth>
                <Dashboard />
            </RequireAuth>
        },
        Route::Shop { shop_name } => html! {
            <RequireAuth>
                <Shop {shop_name} />
            </RequireAuth>
        },
        Route::NotFound => html! { <NotFound /> },
    }
}

mod components;
mod config;
mod pages;
mod router;
mod services;
mod session;

use yew::prelude::*;
use yew_router::BrowserRouter;

use crate::router::{switch, Route};
use crate::session::Session;

#[function_component(App)]
fn app() -> Html {
    let session = use_memo((), |_| Session::for_browser());

    html! {
        <ContextProvider<Session> context={(*session).clone()}>
            <BrowserRouter>
                <yew_router::Switch<Route> render={switch} />
            </BrowserRouter>
        </ContextProvider<Session>>
    }
}

fn main() {
    // Initialize tracing
    tracing_wasm::set_as_global_default();

    yew::Renderer::<App>::new().render();
}

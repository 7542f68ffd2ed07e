use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;
use crate::session::use_session;

#[derive(Properties, PartialEq)]
pub struct RequireAuthProps {
    pub children: Children,
}

/// Gate for protected routes: children render only when the session
/// authorizes. Authentication failures are silent redirects to login,
/// never visible errors.
#[function_component(RequireAuth)]
pub fn require_auth(props: &RequireAuthProps) -> Html {
    let session = use_session();

    match session.authorize() {
        Ok(_) => html! { <>{ for props.children.iter() }</> },
        Err(err) => {
            tracing::debug!(%err, "redirecting unauthenticated visitor to login");
            html! { <Redirect<Route> to={Route::Login} /> }
        }
    }
}

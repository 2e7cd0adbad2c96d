//! Route guard for the authenticated area.

use crate::app::Route;
use crate::core::store::AppStore;
use yew::prelude::*;
use yew_router::prelude::Redirect;
use yewdux::prelude::use_store;

#[derive(Properties, PartialEq)]
pub(crate) struct RequireAuthProps {
    pub children: Children,
}

/// Renders its children only with a live session; otherwise redirects to the
/// sign-in screen. Clearing the token from anywhere (sign-out, a 401) makes
/// every guarded screen fall through here on the next render.
#[function_component(RequireAuth)]
pub(crate) fn require_auth(props: &RequireAuthProps) -> Html {
    let (store, _) = use_store::<AppStore>();
    if store.session.authenticated() {
        html! { <>{ for props.children.iter() }</> }
    } else {
        html! { <Redirect<Route> to={Route::Login} /> }
    }
}

//! App bootstrap: store hydration, routing, and the authenticated shell.

use crate::app::api::ApiCtx;
use crate::components::guard::RequireAuth;
use crate::components::shell::AdminShell;
use crate::core::session::{self, SessionSlice};
use crate::core::store::AppStore;
use crate::features::editor::view::ResourceFormView;
use crate::features::listing::view::ResourceListView;
use crate::features::login::view::LoginView;
use crate::registry;
use crate::services::api::ApiClient;
use preferences::api_base_url;
pub(crate) use routes::Route;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

pub(crate) mod api;
pub(crate) mod preferences;
mod routes;

/// Drop the session everywhere at once: store, storage, and client. The
/// route guard then redirects on the next render. Safe to call repeatedly;
/// a second 401 arriving after the first finds nothing left to clear.
pub(crate) fn expire_session(client: &ApiClient) {
    Dispatch::<AppStore>::new().reduce_mut(|store| session::clear(&mut store.session));
    preferences::clear_token();
    client.set_token(None);
}

/// Store the session everywhere at once after a successful sign-in.
pub(crate) fn establish_session(client: &ApiClient, token: String) {
    preferences::persist_token(&token);
    client.set_token(Some(token.clone()));
    Dispatch::<AppStore>::new().reduce_mut(|store| session::establish(&mut store.session, token));
}

#[derive(Properties, PartialEq)]
struct GuardedProps {
    #[prop_or_default]
    active_slug: Option<AttrValue>,
    children: Children,
}

/// Route guard plus navigation shell around one authenticated screen.
#[function_component(Guarded)]
fn guarded(props: &GuardedProps) -> Html {
    let api_ctx = use_context::<ApiCtx>().expect("ApiCtx not provided");

    let on_logout = {
        let api_ctx = api_ctx.clone();
        Callback::from(move |()| {
            let client = api_ctx.client.clone();
            // Capture the credential before teardown: the spawned request is
            // only built on its first poll, after the client's token slot has
            // already been cleared. Server-side invalidation stays best
            // effort; the local session is gone either way.
            let token = client.token();
            expire_session(&api_ctx.client);
            if let Some(token) = token {
                spawn_local(async move {
                    let _ = client.logout(&token).await;
                });
            }
        })
    };

    html! {
        <RequireAuth>
            <AdminShell active_slug={props.active_slug.clone()} on_logout={on_logout}>
                { for props.children.iter() }
            </AdminShell>
        </RequireAuth>
    }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Login => html! { <LoginView /> },
        Route::Home | Route::NotFound => html! {
            <Redirect<Route> to={Route::List { resource: registry::DEFAULT_SLUG.to_string() }} />
        },
        Route::List { resource } => html! {
            <Guarded active_slug={resource.clone()}>
                <ResourceListView slug={resource} />
            </Guarded>
        },
        Route::New { resource } => html! {
            <Guarded active_slug={resource.clone()}>
                <ResourceFormView slug={resource} id={None::<AttrValue>} />
            </Guarded>
        },
        Route::Edit { resource, id } => html! {
            <Guarded active_slug={resource.clone()}>
                <ResourceFormView slug={resource} id={Some(AttrValue::from(id))} />
            </Guarded>
        },
    }
}

#[function_component(AdminApp)]
fn admin_app() -> Html {
    let api_ctx = use_memo(|_| ApiCtx::new(api_base_url()), ());

    // Keep the client's bearer header in step with the session slice.
    let token = use_selector(|store: &AppStore| store.session.token.clone());
    {
        let api_ctx = api_ctx.clone();
        use_effect_with_deps(
            move |token: &Option<String>| {
                api_ctx.client.set_token(token.clone());
                || ()
            },
            (*token).clone(),
        );
    }

    html! {
        <ContextProvider<ApiCtx> context={(*api_ctx).clone()}>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ContextProvider<ApiCtx>>
    }
}

/// Mount the app, hydrating the session from local storage first so the
/// route guard sees a returning visitor on the very first render.
pub fn run_app() {
    console_error_panic_hook::set_once();
    Dispatch::<AppStore>::new().reduce_mut(|store| {
        store.session = SessionSlice::from_stored(preferences::load_token());
    });
    yew::Renderer::<AdminApp>::new().render();
}

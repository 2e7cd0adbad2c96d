//! Sign-in form: exchanges credentials for a session token.

use crate::app::api::ApiCtx;
use crate::app::{Route, establish_session};
use crate::core::session::set_loading;
use crate::core::store::AppStore;
use crate::registry::DEFAULT_SLUG;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, SubmitEvent};
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::use_store;

/// Credential form that establishes the session and moves on to the default
/// resource list.
#[function_component(LoginView)]
pub fn login_view() -> Html {
    let (store, dispatch) = use_store::<AppStore>();
    let api_ctx = use_context::<ApiCtx>().expect("ApiCtx not provided");
    let navigator = use_navigator().expect("navigator not available");

    let username = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| None as Option<String>);

    // An established session has no business on the sign-in screen.
    if store.session.authenticated() {
        return html! {
            <Redirect<Route> to={Route::List { resource: DEFAULT_SLUG.to_string() }} />
        };
    }

    let bind = |state: &UseStateHandle<String>| {
        let state = state.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                state.set(input.value());
            }
        })
    };

    let onsubmit = {
        let username = username.clone();
        let password = password.clone();
        let error = error.clone();
        let dispatch = dispatch.clone();
        let api_ctx = api_ctx.clone();
        let navigator = navigator.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let username = (*username).clone();
            let password = (*password).clone();
            let error = error.clone();
            let dispatch = dispatch.clone();
            let client = api_ctx.client.clone();
            let navigator = navigator.clone();

            dispatch.reduce_mut(|store| set_loading(&mut store.session, true));
            error.set(None);
            spawn_local(async move {
                match client.login(&username, &password).await {
                    Ok(response) => {
                        establish_session(&client, response.token);
                        navigator.push(&Route::List {
                            resource: DEFAULT_SLUG.to_string(),
                        });
                    }
                    Err(err) => {
                        dispatch.reduce_mut(|store| set_loading(&mut store.session, false));
                        error.set(Some(err.user_message("Unable to sign in")));
                    }
                }
            });
        })
    };

    html! {
        <div class="login-screen">
            <form class="login-card" onsubmit={onsubmit}>
                <h1>{"Atrium Admin"}</h1>
                if let Some(message) = (*error).clone() {
                    <p class="form-error" role="alert">{message}</p>
                }
                <label>
                    {"Username"}
                    <input
                        type="text"
                        value={(*username).clone()}
                        oninput={bind(&username)}
                        required=true
                        autofocus=true
                    />
                </label>
                <label>
                    {"Password"}
                    <input
                        type="password"
                        value={(*password).clone()}
                        oninput={bind(&password)}
                        required=true
                    />
                </label>
                <button class="btn btn-primary" type="submit" disabled={store.session.loading}>
                    { if store.session.loading { "Signing in…" } else { "Sign in" } }
                </button>
            </form>
        </div>
    }
}

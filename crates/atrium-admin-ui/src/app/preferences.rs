//! Persistence and environment helpers for the app shell.

use gloo::console;
use gloo::storage::{LocalStorage, Storage};
use gloo::utils::window;
use web_sys::Url;

pub(crate) const TOKEN_KEY: &str = "atrium.admin.token";

/// Session token from the previous visit, if any. Blank values are treated
/// as absent so a half-written entry never unlocks the guard.
pub(crate) fn load_token() -> Option<String> {
    LocalStorage::get::<String>(TOKEN_KEY)
        .ok()
        .filter(|value| !value.trim().is_empty())
}

pub(crate) fn persist_token(token: &str) {
    if let Err(err) = LocalStorage::set(TOKEN_KEY, token) {
        console::error!("failed to persist session token", err.to_string());
    }
}

pub(crate) fn clear_token() {
    LocalStorage::delete(TOKEN_KEY);
}

/// Backend origin: a compile-time override when provided, otherwise the
/// origin the app was served from.
pub(crate) fn api_base_url() -> String {
    if let Some(backend) = option_env!("ATRIUM_BACKEND_URL") {
        return backend.trim_end_matches('/').to_string();
    }

    let href = window()
        .location()
        .href()
        .unwrap_or_else(|_| "http://localhost:8080".to_string());

    if let Ok(url) = Url::new(&href) {
        let protocol = url.protocol();
        let host = url.hostname();
        let port = url.port();

        let mut base = format!("{protocol}//{host}");
        if !port.is_empty() {
            base.push(':');
            base.push_str(&port);
        }
        return base;
    }

    "http://localhost:8080".to_string()
}

//! Session state shared across the UI.
//!
//! # Design
//! - Keep the session as simple data so callers can establish/clear it
//!   without side effects; storage writes live in the app layer.
//! - Clearing is idempotent: concurrent 401 reactions must not double-fire.

/// Authentication state for the admin session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionSlice {
    /// Active bearer token, absent when logged out.
    pub token: Option<String>,
    /// Login request in flight; used to disable the login form.
    pub loading: bool,
}

impl SessionSlice {
    /// Seed the slice from a token loaded out of durable storage.
    #[must_use]
    pub fn from_stored(token: Option<String>) -> Self {
        Self {
            token: token.filter(|value| !value.trim().is_empty()),
            loading: false,
        }
    }

    /// Whether a protected screen may render.
    #[must_use]
    pub const fn authenticated(&self) -> bool {
        self.token.is_some()
    }
}

/// Mark a login attempt as started or finished.
pub fn set_loading(state: &mut SessionSlice, loading: bool) {
    state.loading = loading;
}

/// Install a freshly issued token. At most one token is active at a time, so
/// any previous value is replaced.
pub fn establish(state: &mut SessionSlice, token: String) {
    state.token = Some(token);
    state.loading = false;
}

/// Drop the session. Used by explicit logout and by the 401 interceptor;
/// calling it on an already-cleared session is a no-op.
pub fn clear(state: &mut SessionSlice) {
    state.token = None;
    state.loading = false;
}

#[cfg(test)]
mod tests {
    use super::{SessionSlice, clear, establish};

    #[test]
    fn stored_blank_token_counts_as_logged_out() {
        assert!(!SessionSlice::from_stored(None).authenticated());
        assert!(!SessionSlice::from_stored(Some("   ".into())).authenticated());
        assert!(SessionSlice::from_stored(Some("tok".into())).authenticated());
    }

    #[test]
    fn establish_replaces_previous_token() {
        let mut state = SessionSlice::from_stored(Some("old".into()));
        establish(&mut state, "new".into());
        assert_eq!(state.token.as_deref(), Some("new"));
        assert!(!state.loading);
    }

    #[test]
    fn clear_is_idempotent() {
        let mut state = SessionSlice::from_stored(Some("tok".into()));
        clear(&mut state);
        let after_first = state.clone();
        clear(&mut state);
        assert_eq!(state, after_first);
        assert!(!state.authenticated());
    }
}

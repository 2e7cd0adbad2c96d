//! App-wide yewdux store.
//!
//! # Design
//! - The store carries only process-wide state: the session. List and form
//!   state is recreated per navigation and lives in the mounting component.

use crate::core::session::SessionSlice;
use yewdux::store::Store;

/// Global application store.
#[derive(Clone, Debug, PartialEq, Store, Default)]
pub struct AppStore {
    /// Authentication state read by every API call.
    pub session: SessionSlice,
}

//! Pure list-screen state and transformations, testable outside wasm.
//!
//! # Design
//! - Every fetch is stamped with a generation counter; a response only lands
//!   if its stamp still matches, so a slow page-1 reply can never overwrite a
//!   newer page-2 reply.
//! - The debounced search term is stored separately from the live input so
//!   typing never triggers a fetch by itself.
//! - A failed delete leaves the pending-delete selection in place; only the
//!   error banner changes.
//! - A confirmed delete locks further confirms until its response lands, so
//!   one row never draws two requests.

use crate::core::logic::{clamp_page, total_pages};
use atrium_api_models::Record;

/// State backing one resource list screen.
#[derive(Clone, Debug, PartialEq)]
pub struct ListState {
    /// Rows for the current page.
    pub rows: Vec<Record>,
    /// Live search input text.
    pub search: String,
    /// Search term the last fetch was issued with.
    pub debounced_search: String,
    /// Current 1-based page.
    pub page: u32,
    /// Total page count reported by (or derived from) the last fetch.
    pub total_pages: u32,
    /// Row id whose action menu is open, if any.
    pub open_menu_id: Option<String>,
    /// Record shown in the read-only detail modal, if any.
    pub detail: Option<Record>,
    /// Row id awaiting delete confirmation, if any.
    pub pending_delete_id: Option<String>,
    /// Whether a confirmed delete request is in flight.
    pub deleting: bool,
    /// User-facing error message, if any.
    pub error: Option<String>,
    /// Whether a list fetch is in flight.
    pub loading: bool,
    /// Generation stamp of the most recent fetch.
    pub fetch_seq: u64,
}

impl Default for ListState {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            search: String::new(),
            debounced_search: String::new(),
            page: 1,
            total_pages: 1,
            open_menu_id: None,
            detail: None,
            pending_delete_id: None,
            deleting: false,
            error: None,
            loading: false,
            fetch_seq: 0,
        }
    }
}

/// Record the live search input without touching fetch inputs.
pub fn set_search(state: &mut ListState, text: String) {
    state.search = text;
}

/// Commit a settled search term. Resets to page 1 only when the term actually
/// changed, so a no-op settle does not refetch the current page.
pub fn apply_debounced_search(state: &mut ListState, text: &str) -> bool {
    if state.debounced_search == text {
        return false;
    }
    state.debounced_search = text.to_string();
    state.page = 1;
    true
}

/// Move to a page, clamped to the known range. Returns whether the page
/// changed.
pub fn set_page(state: &mut ListState, page: u32) -> bool {
    let clamped = clamp_page(page, state.total_pages);
    if clamped == state.page {
        return false;
    }
    state.page = clamped;
    true
}

/// Start a fetch: bump the generation, mark loading, and return the stamp the
/// response must carry to land.
pub fn begin_fetch(state: &mut ListState) -> u64 {
    state.fetch_seq = state.fetch_seq.wrapping_add(1);
    state.loading = true;
    state.fetch_seq
}

/// Land a successful fetch, ignoring it when a newer fetch has started.
/// Returns `true` when the response shrank the page range under the current
/// page; the rows then belong to a page that no longer exists and the caller
/// must fetch the clamped page.
pub fn finish_fetch(
    state: &mut ListState,
    seq: u64,
    rows: Vec<Record>,
    server_pages: Option<u32>,
    total: Option<u64>,
    per_page: u32,
) -> bool {
    if seq != state.fetch_seq {
        return false;
    }
    state.loading = false;
    state.rows = rows;
    state.total_pages = total_pages(server_pages, total, per_page);
    state.open_menu_id = None;
    state.error = None;
    let clamped = clamp_page(state.page, state.total_pages);
    let moved = clamped != state.page;
    state.page = clamped;
    moved
}

/// Land a failed fetch, ignoring it when a newer fetch has started.
pub fn fail_fetch(state: &mut ListState, seq: u64, message: String) {
    if seq != state.fetch_seq {
        return;
    }
    state.loading = false;
    state.error = Some(message);
}

/// Toggle a row's action menu; opening one closes any other.
pub fn toggle_menu(state: &mut ListState, id: &str) {
    if state.open_menu_id.as_deref() == Some(id) {
        state.open_menu_id = None;
    } else {
        state.open_menu_id = Some(id.to_string());
    }
}

/// Close whichever action menu is open.
pub fn close_menu(state: &mut ListState) {
    state.open_menu_id = None;
}

/// Show the read-only detail modal for a record.
pub fn open_detail(state: &mut ListState, record: Record) {
    state.detail = Some(record);
    state.open_menu_id = None;
}

/// Dismiss the detail modal.
pub fn close_detail(state: &mut ListState) {
    state.detail = None;
}

/// Ask for delete confirmation on a row.
pub fn request_delete(state: &mut ListState, id: &str) {
    state.pending_delete_id = Some(id.to_string());
    state.open_menu_id = None;
}

/// Dismiss the delete confirmation without deleting.
pub fn cancel_delete(state: &mut ListState) {
    state.pending_delete_id = None;
    state.deleting = false;
}

/// Start the confirmed delete, handing back the id to send. Returns `None`
/// when nothing is pending or a delete is already in flight, so a repeated
/// confirm click cannot fire a second request for the same row.
pub fn begin_delete(state: &mut ListState) -> Option<String> {
    if state.deleting {
        return None;
    }
    let id = state.pending_delete_id.clone()?;
    state.deleting = true;
    Some(id)
}

/// Apply a confirmed, server-acknowledged delete by dropping the row locally.
/// No refetch; the row count on this page just shrinks by one.
pub fn confirm_delete_success(state: &mut ListState) {
    state.deleting = false;
    let Some(id) = state.pending_delete_id.take() else {
        return;
    };
    state.rows.retain(|row| row.id() != Some(id.as_str()));
    if state.detail.as_ref().and_then(Record::id) == Some(id.as_str()) {
        state.detail = None;
    }
}

/// Surface a failure without touching the rest of the state. A failed delete
/// keeps its confirmation pending so the user can retry or cancel explicitly.
pub fn show_error(state: &mut ListState, message: String) {
    state.deleting = false;
    state.error = Some(message);
}

/// Clear the error banner.
pub fn dismiss_error(state: &mut ListState) {
    state.error = None;
}

#[cfg(test)]
mod tests {
    use super::{
        ListState, apply_debounced_search, begin_delete, begin_fetch, cancel_delete, close_detail,
        confirm_delete_success, dismiss_error, fail_fetch, finish_fetch,
        open_detail, request_delete, set_page, set_search, show_error, toggle_menu,
    };
    use atrium_api_models::Record;

    fn row(id: &str) -> Record {
        let mut record = Record::default();
        record.set("_id", id);
        record.set("title", format!("title {id}"));
        record
    }

    #[test]
    fn debounce_commit_resets_page_only_on_change() {
        let mut state = ListState {
            page: 3,
            total_pages: 5,
            ..ListState::default()
        };
        set_search(&mut state, "press".to_string());
        assert_eq!(state.page, 3, "typing alone must not move the page");

        assert!(apply_debounced_search(&mut state, "press"));
        assert_eq!(state.page, 1);

        state.page = 4;
        assert!(!apply_debounced_search(&mut state, "press"));
        assert_eq!(state.page, 4, "settled identical term must not reset");
    }

    #[test]
    fn page_changes_are_clamped() {
        let mut state = ListState {
            total_pages: 3,
            ..ListState::default()
        };
        assert!(set_page(&mut state, 9));
        assert_eq!(state.page, 3);
        assert!(!set_page(&mut state, 3));
        assert!(set_page(&mut state, 0));
        assert_eq!(state.page, 1);
    }

    #[test]
    fn stale_responses_never_land() {
        let mut state = ListState::default();
        let first = begin_fetch(&mut state);
        let second = begin_fetch(&mut state);

        assert!(!finish_fetch(&mut state, first, vec![row("old")], None, Some(40), 10));
        assert!(state.rows.is_empty(), "stale success must be dropped");
        assert!(state.loading);

        fail_fetch(&mut state, first, "stale failure".to_string());
        assert_eq!(state.error, None);

        finish_fetch(&mut state, second, vec![row("new")], None, Some(40), 10);
        assert!(!state.loading);
        assert_eq!(state.rows.len(), 1);
        assert_eq!(state.total_pages, 4);
    }

    #[test]
    fn landing_a_fetch_clamps_the_current_page_and_asks_for_a_refetch() {
        let mut state = ListState {
            page: 7,
            total_pages: 7,
            ..ListState::default()
        };
        let seq = begin_fetch(&mut state);
        assert!(finish_fetch(&mut state, seq, Vec::new(), Some(2), None, 10));
        assert_eq!(state.total_pages, 2);
        assert_eq!(state.page, 2);

        // The follow-up fetch for the clamped page lands without moving again.
        let seq = begin_fetch(&mut state);
        assert!(!finish_fetch(&mut state, seq, vec![row("a")], Some(2), None, 10));
        assert_eq!(state.page, 2);
    }

    #[test]
    fn failed_fetch_keeps_existing_rows() {
        let mut state = ListState::default();
        let seq = begin_fetch(&mut state);
        finish_fetch(&mut state, seq, vec![row("a")], None, Some(1), 10);

        let seq = begin_fetch(&mut state);
        fail_fetch(&mut state, seq, "network down".to_string());
        assert_eq!(state.rows.len(), 1);
        assert_eq!(state.error.as_deref(), Some("network down"));
        dismiss_error(&mut state);
        assert_eq!(state.error, None);
    }

    #[test]
    fn only_one_row_menu_is_open() {
        let mut state = ListState::default();
        toggle_menu(&mut state, "a");
        assert_eq!(state.open_menu_id.as_deref(), Some("a"));
        toggle_menu(&mut state, "b");
        assert_eq!(state.open_menu_id.as_deref(), Some("b"));
        toggle_menu(&mut state, "b");
        assert_eq!(state.open_menu_id, None);
    }

    #[test]
    fn detail_modal_opens_and_closes() {
        let mut state = ListState::default();
        toggle_menu(&mut state, "a");
        open_detail(&mut state, row("a"));
        assert!(state.detail.is_some());
        assert_eq!(state.open_menu_id, None, "opening detail closes the menu");
        close_detail(&mut state);
        assert_eq!(state.detail, None);
    }

    #[test]
    fn confirmed_delete_removes_the_row_locally() {
        let mut state = ListState::default();
        state.rows = vec![row("a"), row("b")];
        request_delete(&mut state, "a");
        assert_eq!(begin_delete(&mut state).as_deref(), Some("a"));
        confirm_delete_success(&mut state);
        assert_eq!(state.pending_delete_id, None);
        assert!(!state.deleting);
        assert_eq!(state.rows.len(), 1);
        assert_eq!(state.rows[0].id(), Some("b"));
    }

    #[test]
    fn delete_fires_at_most_once_while_in_flight() {
        let mut state = ListState::default();
        state.rows = vec![row("a")];
        assert_eq!(begin_delete(&mut state), None, "nothing pending yet");

        request_delete(&mut state, "a");
        assert_eq!(begin_delete(&mut state).as_deref(), Some("a"));
        assert!(state.deleting);
        assert_eq!(begin_delete(&mut state), None, "repeat confirm while in flight");

        // A failure unlocks the confirmation for an explicit retry.
        show_error(&mut state, "could not delete".to_string());
        assert!(!state.deleting);
        assert_eq!(begin_delete(&mut state).as_deref(), Some("a"));
    }

    #[test]
    fn failed_delete_keeps_the_confirmation_pending() {
        let mut state = ListState::default();
        state.rows = vec![row("a")];
        request_delete(&mut state, "a");
        show_error(&mut state, "could not delete".to_string());
        assert_eq!(state.pending_delete_id.as_deref(), Some("a"));
        assert_eq!(state.rows.len(), 1);
        assert_eq!(state.error.as_deref(), Some("could not delete"));
        cancel_delete(&mut state);
        assert_eq!(state.pending_delete_id, None);
    }
}

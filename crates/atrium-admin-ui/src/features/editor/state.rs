//! Pure form-screen state and transformations, testable outside wasm.

use crate::registry::{FieldKind, ResourceConfig};
use atrium_api_models::Record;
use serde_json::Value;

/// State backing one resource form screen, in create or edit mode.
#[derive(Clone, Debug, PartialEq)]
pub struct FormState {
    /// Draft record edited by the form controls.
    pub draft: Record,
    /// Identifier of the record being edited; `None` in create mode.
    pub edit_id: Option<String>,
    /// Whether the edit-mode prefill fetch is in flight.
    pub loading: bool,
    /// Whether a save is in flight.
    pub submitting: bool,
    /// User-facing error message, if any.
    pub error: Option<String>,
}

impl FormState {
    /// Fresh create-mode state seeded with the resource's field defaults.
    #[must_use]
    pub fn new_create(config: &ResourceConfig) -> Self {
        Self {
            draft: config.defaults(),
            edit_id: None,
            loading: false,
            submitting: false,
            error: None,
        }
    }

    /// Edit-mode state awaiting the prefill fetch for `id`.
    #[must_use]
    pub fn new_edit(config: &ResourceConfig, id: &str) -> Self {
        Self {
            draft: config.defaults(),
            edit_id: Some(id.to_string()),
            loading: true,
            submitting: false,
            error: None,
        }
    }

    /// Whether the screen is editing an existing record.
    #[must_use]
    pub fn is_edit(&self) -> bool {
        self.edit_id.is_some()
    }
}

/// Land the edit-mode prefill: overlay every stored field onto the defaults,
/// so saving without touching anything round-trips the record unchanged.
pub fn seed(state: &mut FormState, config: &ResourceConfig, record: &Record) {
    let mut draft = config.defaults();
    for (name, value) in &record.0 {
        draft.set_value(name, value.clone());
    }
    state.draft = draft;
    state.loading = false;
    state.error = None;
}

/// Record a failed prefill fetch.
pub fn fail_load(state: &mut FormState, message: String) {
    state.loading = false;
    state.error = Some(message);
}

/// Apply one control change to the draft. Number fields store a JSON number
/// when the text parses, so order fields round-trip as the backend stores
/// them.
pub fn set_field(state: &mut FormState, config: &ResourceConfig, name: &str, text: &str) {
    let numeric = config
        .field(name)
        .is_some_and(|field| matches!(field.kind, FieldKind::Number));
    if numeric {
        if let Ok(number) = text.parse::<i64>() {
            state.draft.set_value(name, Value::from(number));
            return;
        }
    }
    state.draft.set(name, text);
}

/// Whether every required non-image field carries a non-blank value. Image
/// requirements are enforced by the file input itself (create mode only).
#[must_use]
pub fn required_fields_present(state: &FormState, config: &ResourceConfig) -> bool {
    config
        .fields
        .iter()
        .filter(|field| field.required && !matches!(field.kind, FieldKind::Image))
        .all(|field| {
            state
                .draft
                .display(field.name)
                .is_some_and(|value| !value.trim().is_empty())
        })
}

/// Start a save.
pub fn begin_submit(state: &mut FormState) {
    state.submitting = true;
    state.error = None;
}

/// Record a failed save, keeping the draft intact for correction.
pub fn fail_submit(state: &mut FormState, message: String) {
    state.submitting = false;
    state.error = Some(message);
}

#[cfg(test)]
mod tests {
    use super::{
        FormState, begin_submit, fail_load, fail_submit, required_fields_present, seed, set_field,
    };
    use crate::registry::find;
    use atrium_api_models::Record;
    use serde_json::Value;

    #[test]
    fn create_mode_starts_from_defaults() {
        let config = find("banners").unwrap();
        let state = FormState::new_create(config);
        assert!(!state.is_edit());
        assert_eq!(state.draft.display("status").as_deref(), Some("active"));
        assert_eq!(state.draft.0.get("displayOrder"), Some(&Value::from(1)));
    }

    #[test]
    fn seeding_overlays_every_stored_field() {
        let config = find("banners").unwrap();
        let mut state = FormState::new_edit(config, "b1");
        assert!(state.loading);

        let mut stored = Record::default();
        stored.set("_id", "b1");
        stored.set("bannerTitle", "Summer launch");
        stored.set("status", "inactive");
        stored.set_value("displayOrder", Value::from(7));
        seed(&mut state, config, &stored);

        assert!(!state.loading);
        assert_eq!(state.draft.id(), Some("b1"));
        assert_eq!(state.draft.display("bannerTitle").as_deref(), Some("Summer launch"));
        assert_eq!(state.draft.display("status").as_deref(), Some("inactive"));
        assert_eq!(state.draft.0.get("displayOrder"), Some(&Value::from(7)));
        // Fields absent from the stored record keep their defaults.
        assert!(state.draft.has("url"));
    }

    #[test]
    fn number_fields_store_numbers_when_the_text_parses() {
        let config = find("banners").unwrap();
        let mut state = FormState::new_create(config);
        set_field(&mut state, config, "displayOrder", "12");
        assert_eq!(state.draft.0.get("displayOrder"), Some(&Value::from(12)));
        set_field(&mut state, config, "displayOrder", "");
        assert_eq!(state.draft.0.get("displayOrder"), Some(&Value::from("")));
        set_field(&mut state, config, "bannerTitle", "42");
        assert_eq!(state.draft.0.get("bannerTitle"), Some(&Value::from("42")));
    }

    #[test]
    fn required_check_ignores_images_and_blank_text() {
        let config = find("banners").unwrap();
        let mut state = FormState::new_create(config);
        assert!(!required_fields_present(&state, config));
        set_field(&mut state, config, "bannerTitle", "   ");
        assert!(!required_fields_present(&state, config));
        set_field(&mut state, config, "bannerTitle", "Summer launch");
        assert!(required_fields_present(&state, config), "image must not block");
    }

    #[test]
    fn failures_keep_the_draft_for_correction() {
        let config = find("banners").unwrap();
        let mut state = FormState::new_create(config);
        set_field(&mut state, config, "bannerTitle", "Summer launch");

        begin_submit(&mut state);
        assert!(state.submitting);
        assert_eq!(state.error, None);

        fail_submit(&mut state, "bannerTitle already exists".to_string());
        assert!(!state.submitting);
        assert_eq!(state.error.as_deref(), Some("bannerTitle already exists"));
        assert_eq!(state.draft.display("bannerTitle").as_deref(), Some("Summer launch"));

        fail_load(&mut state, "not found".to_string());
        assert_eq!(state.error.as_deref(), Some("not found"));
    }
}

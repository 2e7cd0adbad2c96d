//! Generic resource form screen for create and edit.

use super::state::{
    FormState, begin_submit, fail_load, fail_submit, required_fields_present, seed, set_field,
};
use crate::app::api::ApiCtx;
use crate::app::{Route, expire_session};
use crate::core::error::ApiError;
use crate::core::transcode::is_data_url;
use crate::registry::{self, FieldKind, FieldSpec, ResourceConfig};
use crate::services::files::read_data_url;
use gloo::file::callbacks::FileReader;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement, SubmitEvent};
use yew::prelude::*;
use yew_router::prelude::*;

type StateCell = Rc<RefCell<FormState>>;

/// Props for [`ResourceFormView`].
#[derive(Properties, PartialEq)]
pub struct ResourceFormViewProps {
    /// Route slug identifying the resource being edited.
    pub slug: String,
    /// Record id in edit mode; `None` creates a new record.
    #[prop_or_default]
    pub id: Option<AttrValue>,
}

/// Create/edit form for one record, driven by the resource's field specs.
/// Unknown slugs redirect to the default resource.
#[function_component(ResourceFormView)]
pub fn resource_form_view(props: &ResourceFormViewProps) -> Html {
    // Hook-free dispatch: the screen component below always runs its hooks.
    registry::find(&props.slug).map_or_else(
        || html! {
            <Redirect<Route> to={Route::List { resource: registry::DEFAULT_SLUG.to_string() }} />
        },
        |config| html! { <FormScreen config={config} id={props.id.clone()} /> },
    )
}

#[derive(Properties, PartialEq)]
struct FormScreenProps {
    config: &'static ResourceConfig,
    #[prop_or_default]
    id: Option<AttrValue>,
}

#[allow(clippy::too_many_lines)]
#[function_component(FormScreen)]
fn form_screen(props: &FormScreenProps) -> Html {
    let config = props.config;
    let api_ctx = use_context::<ApiCtx>().expect("ApiCtx not provided");
    let navigator = use_navigator().expect("navigator not available");
    let state: StateCell = use_mut_ref(|| {
        props.id.as_ref().map_or_else(
            || FormState::new_create(config),
            |id| FormState::new_edit(config, id),
        )
    });
    let redraw = use_force_update();
    // Keeps the in-flight file read alive until its callback fires.
    let reader = use_mut_ref(|| None as Option<FileReader>);

    // Reset the draft and, in edit mode, prefill it from the server.
    {
        let state = state.clone();
        let redraw = redraw.clone();
        let client = api_ctx.client.clone();
        use_effect_with_deps(
            move |(_, id): &(&'static ResourceConfig, Option<AttrValue>)| {
                match id {
                    None => {
                        *state.borrow_mut() = FormState::new_create(config);
                        redraw.force_update();
                    }
                    Some(id) => {
                        *state.borrow_mut() = FormState::new_edit(config, id);
                        redraw.force_update();
                        let id = id.to_string();
                        spawn_local(async move {
                            match client.get_by_id(config.api_path, &id).await {
                                Ok(record) => seed(&mut state.borrow_mut(), config, &record),
                                Err(err) if err.is_unauthorized() => {
                                    expire_session(&client);
                                    return;
                                }
                                Err(err) => {
                                    let message = err.user_message(&format!(
                                        "Unable to load this {}",
                                        config.singular.to_lowercase()
                                    ));
                                    fail_load(&mut state.borrow_mut(), message);
                                }
                            }
                            redraw.force_update();
                        });
                    }
                }
                || ()
            },
            (config, props.id.clone()),
        );
    }

    let edit_field: Rc<dyn Fn(&str, String)> = {
        let state = state.clone();
        let redraw = redraw.clone();
        Rc::new(move |name: &str, text: String| {
            set_field(&mut state.borrow_mut(), config, name, &text);
            redraw.force_update();
        })
    };

    let on_file_selected: Rc<dyn Fn(String, web_sys::File)> = {
        let state = state.clone();
        let redraw = redraw.clone();
        let reader = reader.clone();
        Rc::new(move |name: String, file: web_sys::File| {
            let state = state.clone();
            let redraw = redraw.clone();
            let done = Callback::from(move |result: Result<String, ApiError>| {
                let mut form = state.borrow_mut();
                match result {
                    Ok(url) => form.draft.set(&name, url),
                    Err(err) => form.error = Some(err.user_message("Unable to read this file")),
                }
                drop(form);
                redraw.force_update();
            });
            *reader.borrow_mut() = Some(read_data_url(file, done));
        })
    };

    let onsubmit = {
        let state = state.clone();
        let redraw = redraw.clone();
        let client = api_ctx.client.clone();
        let navigator = navigator.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if state.borrow().submitting {
                return;
            }
            let draft = {
                let mut form = state.borrow_mut();
                // Backstop for the native `required` attributes; blank
                // whitespace passes those but not this check.
                if !required_fields_present(&form, config) {
                    fail_submit(&mut form, "Please fill in all required fields.".to_string());
                    drop(form);
                    redraw.force_update();
                    return;
                }
                begin_submit(&mut form);
                form.draft.clone()
            };
            redraw.force_update();

            let state = state.clone();
            let redraw = redraw.clone();
            let client = client.clone();
            let navigator = navigator.clone();
            let edit_id = state.borrow().edit_id.clone();
            spawn_local(async move {
                let result = match edit_id.as_deref() {
                    Some(id) => client.update(config.api_path, id, &draft).await,
                    None => client.create(config.api_path, &draft).await,
                };
                match result {
                    Ok(()) => {
                        navigator.push(&Route::List {
                            resource: config.slug.to_string(),
                        });
                    }
                    Err(err) if err.is_unauthorized() => {
                        expire_session(&client);
                    }
                    Err(err) => {
                        // Validation rejections surface the backend's own
                        // message unchanged.
                        let message = err.user_message(&format!(
                            "Unable to save this {}",
                            config.singular.to_lowercase()
                        ));
                        fail_submit(&mut state.borrow_mut(), message);
                        redraw.force_update();
                    }
                }
            });
        })
    };

    let on_cancel = {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            navigator.push(&Route::List {
                resource: config.slug.to_string(),
            });
        })
    };

    let snapshot = state.borrow().clone();
    let heading = if snapshot.is_edit() {
        format!("Edit {}", config.singular)
    } else {
        format!("New {}", config.singular)
    };

    if snapshot.loading {
        return html! {
            <div class="resource-form">
                <h1>{heading}</h1>
                <span class="loading loading-spinner" aria-label="Loading"></span>
            </div>
        };
    }

    html! {
        <div class="resource-form">
            <h1>{heading}</h1>
            if let Some(message) = snapshot.error.clone() {
                <p class="form-error" role="alert">{message}</p>
            }
            <form onsubmit={onsubmit}>
                <fieldset disabled={snapshot.submitting}>
                    { for config.fields.iter().map(|field| {
                        field_control(field, &snapshot, &edit_field, &on_file_selected)
                    }) }
                </fieldset>
                <div class="form-actions">
                    <button class="btn" type="button" onclick={on_cancel}>{"Cancel"}</button>
                    <button class="btn btn-primary" type="submit" disabled={snapshot.submitting}>
                        { if snapshot.submitting { "Saving…" } else { "Save" } }
                    </button>
                </div>
            </form>
        </div>
    }
}

fn field_control(
    field: &'static FieldSpec,
    form: &FormState,
    edit_field: &Rc<dyn Fn(&str, String)>,
    on_file_selected: &Rc<dyn Fn(String, web_sys::File)>,
) -> Html {
    let value = form.draft.display(field.name).unwrap_or_default();
    let name = field.name;

    let control = match field.kind {
        FieldKind::Text | FieldKind::Number | FieldKind::Date => {
            let input_type = match field.kind {
                FieldKind::Number => "number",
                FieldKind::Date => "date",
                _ => "text",
            };
            let oninput = {
                let edit_field = edit_field.clone();
                Callback::from(move |event: InputEvent| {
                    if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                        edit_field(name, input.value());
                    }
                })
            };
            html! {
                <input
                    type={input_type}
                    name={name}
                    value={value}
                    required={field.required}
                    oninput={oninput}
                />
            }
        }
        FieldKind::TextArea => {
            let oninput = {
                let edit_field = edit_field.clone();
                Callback::from(move |event: InputEvent| {
                    if let Some(input) = event.target_dyn_into::<HtmlTextAreaElement>() {
                        edit_field(name, input.value());
                    }
                })
            };
            html! {
                <textarea
                    name={name}
                    value={value}
                    required={field.required}
                    oninput={oninput}
                />
            }
        }
        FieldKind::Select(options) => {
            let onchange = {
                let edit_field = edit_field.clone();
                Callback::from(move |event: Event| {
                    if let Some(select) = event.target_dyn_into::<HtmlSelectElement>() {
                        edit_field(name, select.value());
                    }
                })
            };
            html! {
                <select name={name} required={field.required} onchange={onchange}>
                    { for options.iter().map(|option| html! {
                        <option value={*option} selected={value == *option}>{*option}</option>
                    }) }
                </select>
            }
        }
        FieldKind::Image => {
            let onchange = {
                let on_file_selected = on_file_selected.clone();
                Callback::from(move |event: Event| {
                    let Some(input) = event.target_dyn_into::<HtmlInputElement>() else {
                        return;
                    };
                    let Some(file) = input.files().and_then(|files| files.item(0)) else {
                        return;
                    };
                    on_file_selected(name.to_string(), file);
                })
            };
            html! {
                <>
                    <input
                        type="file"
                        accept="image/*"
                        name={name}
                        // An existing image satisfies the requirement when editing.
                        required={field.required && !form.is_edit()}
                        onchange={onchange}
                    />
                    if is_data_url(&value) {
                        <img src={value.clone()} alt={field.label} class="form-image-preview" />
                    }
                </>
            }
        }
    };

    html! {
        <label class="form-field">
            <span>
                {field.label}
                if field.required {
                    <span class="required-mark" aria-hidden="true">{"*"}</span>
                }
            </span>
            {control}
        </label>
    }
}

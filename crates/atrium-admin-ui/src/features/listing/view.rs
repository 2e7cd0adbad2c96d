//! Generic resource list screen.
//!
//! # Design
//! - All state lives in a shared cell mutated through the pure functions in
//!   [`super::state`]; async responses land on the latest state, and the
//!   generation stamp drops anything a newer fetch has outrun.
//! - Search input is debounced 300ms before it becomes a fetch; page changes
//!   and mounts fetch immediately.

use super::state::{
    ListState, apply_debounced_search, begin_delete, begin_fetch, cancel_delete, close_detail,
    confirm_delete_success, dismiss_error, fail_fetch, finish_fetch, open_detail, request_delete,
    set_page, set_search, show_error, toggle_menu,
};
use crate::app::api::ApiCtx;
use crate::app::{Route, expire_session};
use crate::components::action_menu::RowMenu;
use crate::components::modal::{ConfirmModal, ErrorModal, Modal};
use crate::components::pagination::Pagination;
use crate::core::transcode::is_data_url;
use crate::registry::{self, FieldKind, ResourceConfig};
use crate::services::api::ApiClient;
use atrium_api_models::{ListQuery, Record};
use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

const SEARCH_DEBOUNCE_MS: u32 = 300;

type StateCell = Rc<RefCell<ListState>>;

fn run_fetch(
    state: StateCell,
    redraw: UseForceUpdateHandle,
    client: Rc<ApiClient>,
    config: &'static ResourceConfig,
) {
    let (seq, query) = {
        let mut state = state.borrow_mut();
        let seq = begin_fetch(&mut state);
        let query = ListQuery::page(state.page, config.per_page, &state.debounced_search);
        (seq, query)
    };
    redraw.force_update();
    spawn_local(async move {
        match client.list(config.api_path, &query).await {
            Ok(envelope) => {
                let page_moved = finish_fetch(
                    &mut state.borrow_mut(),
                    seq,
                    envelope.data,
                    envelope.total_pages,
                    envelope.total,
                    config.per_page,
                );
                if page_moved {
                    // The result set shrank under the current page; the rows
                    // belong to a page that no longer exists.
                    run_fetch(state, redraw, client, config);
                    return;
                }
            }
            Err(err) if err.is_unauthorized() => {
                expire_session(&client);
                return;
            }
            Err(err) => {
                let message = err.user_message(&format!("Unable to load {}", config.title));
                fail_fetch(&mut state.borrow_mut(), seq, message);
            }
        }
        redraw.force_update();
    });
}

/// Props for [`ResourceListView`].
#[derive(Properties, PartialEq)]
pub struct ResourceListViewProps {
    /// Route slug identifying the resource to list.
    pub slug: String,
}

/// Paginated, searchable table over one resource collection, with per-row
/// view/edit/delete actions. Unknown slugs redirect to the default resource.
#[function_component(ResourceListView)]
pub fn resource_list_view(props: &ResourceListViewProps) -> Html {
    // Hook-free dispatch: the screen component below always runs its hooks.
    registry::find(&props.slug).map_or_else(
        || html! {
            <Redirect<Route> to={Route::List { resource: registry::DEFAULT_SLUG.to_string() }} />
        },
        |config| html! { <ListScreen config={config} /> },
    )
}

#[derive(Properties, PartialEq)]
struct ListScreenProps {
    config: &'static ResourceConfig,
}

#[allow(clippy::too_many_lines)]
#[function_component(ListScreen)]
fn list_screen(props: &ListScreenProps) -> Html {
    let config = props.config;
    let api_ctx = use_context::<ApiCtx>().expect("ApiCtx not provided");
    let navigator = use_navigator().expect("navigator not available");
    let state: StateCell = use_mut_ref(ListState::default);
    let redraw = use_force_update();
    let debounce = use_mut_ref(|| None as Option<Timeout>);

    // Fresh state and an initial fetch per resource.
    {
        let state = state.clone();
        let redraw = redraw.clone();
        let client = api_ctx.client.clone();
        use_effect_with_deps(
            move |_| {
                *state.borrow_mut() = ListState::default();
                run_fetch(state.clone(), redraw, client, config);
                // Tear-down: outdate the generation so in-flight responses
                // for the departed screen are discarded.
                move || {
                    let mut state = state.borrow_mut();
                    state.fetch_seq = state.fetch_seq.wrapping_add(1);
                }
            },
            config,
        );
    }

    let refetch = {
        let state = state.clone();
        let redraw = redraw.clone();
        let client = api_ctx.client.clone();
        Rc::new(move || run_fetch(state.clone(), redraw.clone(), client.clone(), config))
    };

    let on_search_input = {
        let state = state.clone();
        let redraw = redraw.clone();
        let debounce = debounce.clone();
        let refetch = refetch.clone();
        Callback::from(move |event: InputEvent| {
            let Some(input) = event.target_dyn_into::<HtmlInputElement>() else {
                return;
            };
            let text = input.value();
            set_search(&mut state.borrow_mut(), text.clone());
            redraw.force_update();

            let state = state.clone();
            let refetch = refetch.clone();
            *debounce.borrow_mut() = Some(Timeout::new(SEARCH_DEBOUNCE_MS, move || {
                if apply_debounced_search(&mut state.borrow_mut(), &text) {
                    refetch();
                }
            }));
        })
    };

    let on_page = {
        let state = state.clone();
        let refetch = refetch.clone();
        Callback::from(move |page: u32| {
            if set_page(&mut state.borrow_mut(), page) {
                refetch();
            }
        })
    };

    let on_confirm_delete = {
        let state = state.clone();
        let redraw = redraw.clone();
        let client = api_ctx.client.clone();
        Callback::from(move |()| {
            let Some(id) = begin_delete(&mut state.borrow_mut()) else {
                return;
            };
            redraw.force_update();
            let state = state.clone();
            let redraw = redraw.clone();
            let client = client.clone();
            spawn_local(async move {
                match client.delete(config.api_path, &id).await {
                    Ok(()) => confirm_delete_success(&mut state.borrow_mut()),
                    Err(err) if err.is_unauthorized() => {
                        expire_session(&client);
                        return;
                    }
                    Err(err) => {
                        let message =
                            err.user_message(&format!("Unable to delete {}", config.singular));
                        show_error(&mut state.borrow_mut(), message);
                    }
                }
                redraw.force_update();
            });
        })
    };

    // Simple mutations share one shape: borrow, transform, redraw.
    let mutate = |f: Rc<dyn Fn(&mut ListState)>| {
        let state = state.clone();
        let redraw = redraw.clone();
        Callback::from(move |()| {
            f(&mut state.borrow_mut());
            redraw.force_update();
        })
    };
    let on_cancel_delete = mutate(Rc::new(cancel_delete));
    let on_close_detail = mutate(Rc::new(close_detail));
    let on_dismiss_error = mutate(Rc::new(dismiss_error));

    let snapshot = state.borrow().clone();

    let rows = snapshot.rows.iter().map(|row| {
        let id = row.id().unwrap_or_default().to_string();
        let on_toggle = {
            let state = state.clone();
            let redraw = redraw.clone();
            let id = id.clone();
            Callback::from(move |()| {
                toggle_menu(&mut state.borrow_mut(), &id);
                redraw.force_update();
            })
        };
        let on_view = {
            let state = state.clone();
            let redraw = redraw.clone();
            let client = api_ctx.client.clone();
            let id = id.clone();
            Callback::from(move |()| {
                let state = state.clone();
                let redraw = redraw.clone();
                let client = client.clone();
                let id = id.clone();
                spawn_local(async move {
                    match client.get_by_id(config.api_path, &id).await {
                        Ok(record) => open_detail(&mut state.borrow_mut(), record),
                        Err(err) if err.is_unauthorized() => {
                            expire_session(&client);
                            return;
                        }
                        Err(err) => {
                            let message = err
                                .user_message(&format!("Unable to load {}", config.singular));
                            show_error(&mut state.borrow_mut(), message);
                        }
                    }
                    redraw.force_update();
                });
            })
        };
        let on_edit = {
            let navigator = navigator.clone();
            let slug = config.slug.to_string();
            let id = id.clone();
            Callback::from(move |()| {
                navigator.push(&Route::Edit {
                    resource: slug.clone(),
                    id: id.clone(),
                });
            })
        };
        let on_delete = {
            let state = state.clone();
            let redraw = redraw.clone();
            let id = id.clone();
            Callback::from(move |()| {
                request_delete(&mut state.borrow_mut(), &id);
                redraw.force_update();
            })
        };
        html! {
            <tr key={id.clone()}>
                { for config.columns.iter().map(|column| html! {
                    <td>{row.display(column).unwrap_or_default()}</td>
                }) }
                <td class="row-actions">
                    <RowMenu
                        open={snapshot.open_menu_id.as_deref() == Some(id.as_str())}
                        on_toggle={on_toggle}
                        on_view={on_view}
                        on_edit={on_edit}
                        on_delete={on_delete}
                    />
                </td>
            </tr>
        }
    });

    html! {
        <div class="resource-list">
            <header class="list-header">
                <h1>{config.title}</h1>
                <Link<Route>
                    to={Route::New { resource: config.slug.to_string() }}
                    classes={classes!("btn", "btn-primary")}>
                    {format!("New {}", config.singular)}
                </Link<Route>>
            </header>
            <div class="list-toolbar">
                <input
                    type="search"
                    placeholder={format!("Search {}…", config.title.to_lowercase())}
                    aria-label={format!("Search {}", config.title)}
                    value={snapshot.search.clone()}
                    oninput={on_search_input}
                />
            </div>
            <table class="table">
                <thead>
                    <tr>
                        { for config.columns.iter().map(|column| html! {
                            <th>{config.column_label(column)}</th>
                        }) }
                        <th>{"Actions"}</th>
                    </tr>
                </thead>
                <tbody>
                    if snapshot.loading && snapshot.rows.is_empty() {
                        <tr>
                            <td class="list-loading" colspan={(config.columns.len() + 1).to_string()}>
                                <span class="loading loading-spinner" aria-label="Loading"></span>
                            </td>
                        </tr>
                    } else if snapshot.rows.is_empty() {
                        <tr>
                            <td class="list-empty" colspan={(config.columns.len() + 1).to_string()}>
                                {"No records found"}
                            </td>
                        </tr>
                    } else {
                        { for rows }
                    }
                </tbody>
            </table>
            <Pagination
                current={snapshot.page}
                total={snapshot.total_pages}
                on_change={on_page}
            />
            <Modal
                open={snapshot.detail.is_some()}
                title={format!("{} details", config.singular)}
                on_close={on_close_detail.clone()}>
                { snapshot.detail.as_ref().map_or_else(|| html! {}, |record| detail_body(config, record)) }
                <div class="modal-actions">
                    <button
                        class="btn"
                        onclick={{
                            let on_close = on_close_detail.clone();
                            Callback::from(move |_: MouseEvent| on_close.emit(()))
                        }}>
                        {"Close"}
                    </button>
                </div>
            </Modal>
            <ConfirmModal
                open={snapshot.pending_delete_id.is_some()}
                title={format!("Delete {}", config.singular)}
                message={format!(
                    "This will permanently delete the selected {}. Continue?",
                    config.singular.to_lowercase()
                )}
                on_confirm={on_confirm_delete}
                on_cancel={on_cancel_delete}
                busy={snapshot.deleting}
            />
            <ErrorModal
                message={snapshot.error.clone().map(AttrValue::from)}
                on_dismiss={on_dismiss_error}
            />
        </div>
    }
}

/// Read-only field listing for the detail modal. Image fields render a
/// preview when the value is an inline data URL or a link otherwise.
fn detail_body(config: &ResourceConfig, record: &Record) -> Html {
    html! {
        <dl class="detail-fields">
            { for config.fields.iter().filter_map(|field| {
                let value = record.display(field.name)?;
                let rendered = if matches!(field.kind, FieldKind::Image) {
                    if is_data_url(&value) {
                        html! { <img src={value} alt={field.label} class="detail-image" /> }
                    } else if value.is_empty() {
                        html! { <span class="muted">{"—"}</span> }
                    } else {
                        html! { <a href={value.clone()} target="_blank" rel="noreferrer">{value}</a> }
                    }
                } else {
                    html! { <>{value}</> }
                };
                Some(html! {
                    <>
                        <dt>{field.label}</dt>
                        <dd>{rendered}</dd>
                    </>
                })
            }) }
        </dl>
    }
}

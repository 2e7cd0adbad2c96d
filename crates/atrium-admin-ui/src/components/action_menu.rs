//! Per-row action menu for resource lists.
//!
//! # Design
//! - The menu is stateless; the list screen owns which row is open so only
//!   one menu can be open at a time.

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct RowMenuProps {
    /// Whether this row's menu is currently open.
    #[prop_or_default]
    pub open: bool,
    pub on_toggle: Callback<()>,
    pub on_view: Callback<()>,
    pub on_edit: Callback<()>,
    pub on_delete: Callback<()>,
}

#[function_component(RowMenu)]
pub(crate) fn row_menu(props: &RowMenuProps) -> Html {
    let toggle = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |event: MouseEvent| {
            event.stop_propagation();
            on_toggle.emit(());
        })
    };
    let item = |callback: &Callback<()>| {
        let callback = callback.clone();
        Callback::from(move |_: MouseEvent| callback.emit(()))
    };

    html! {
        <div class="dropdown dropdown-end">
            <button
                type="button"
                class="btn btn-ghost btn-xs btn-square"
                aria-label="Row actions"
                aria-expanded={props.open.to_string()}
                onclick={toggle}>
                {"⋯"}
            </button>
            if props.open {
                <ul class="dropdown-content menu bg-base-100 rounded-box w-44 p-1 shadow">
                    <li><button type="button" onclick={item(&props.on_view)}>{"View"}</button></li>
                    <li><button type="button" onclick={item(&props.on_edit)}>{"Edit"}</button></li>
                    <li>
                        <button
                            type="button"
                            class="text-error hover:bg-error/10"
                            onclick={item(&props.on_delete)}>
                            {"Delete"}
                        </button>
                    </li>
                </ul>
            }
        </div>
    }
}

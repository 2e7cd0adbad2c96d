//! Modal dialogs shared by the list and form screens.

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ModalProps {
    #[prop_or_default]
    pub open: bool,
    #[prop_or_default]
    pub title: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub on_close: Callback<()>,
}

#[function_component(Modal)]
pub(crate) fn modal(props: &ModalProps) -> Html {
    let classes = classes!(
        "modal",
        props.open.then_some("modal-open"),
        props.class.clone()
    );

    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_| on_close.emit(()))
    };

    html! {
        <div class={classes} role="dialog" aria-modal="true">
            <div class="modal-box">
                <h3 class="modal-title">{props.title.clone()}</h3>
                { for props.children.iter() }
            </div>
            <button class="modal-backdrop" onclick={on_close} aria-label="Close dialog"></button>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct ConfirmModalProps {
    #[prop_or_default]
    pub open: bool,
    pub title: AttrValue,
    pub message: AttrValue,
    #[prop_or("Delete".into())]
    pub confirm_label: AttrValue,
    #[prop_or_default]
    pub busy: bool,
    pub on_confirm: Callback<()>,
    pub on_cancel: Callback<()>,
}

/// Two-button confirmation dialog used before destructive actions.
#[function_component(ConfirmModal)]
pub(crate) fn confirm_modal(props: &ConfirmModalProps) -> Html {
    let confirm = {
        let on_confirm = props.on_confirm.clone();
        Callback::from(move |_: MouseEvent| on_confirm.emit(()))
    };
    let cancel = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_: MouseEvent| on_cancel.emit(()))
    };

    html! {
        <Modal open={props.open} title={props.title.clone()} on_close={props.on_cancel.clone()}>
            <p>{props.message.clone()}</p>
            <div class="modal-actions">
                <button class="btn" onclick={cancel} disabled={props.busy}>{"Cancel"}</button>
                <button class="btn btn-error" onclick={confirm} disabled={props.busy}>
                    {props.confirm_label.clone()}
                </button>
            </div>
        </Modal>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct ErrorModalProps {
    /// Message to show; the dialog is closed when `None`.
    #[prop_or_default]
    pub message: Option<AttrValue>,
    pub on_dismiss: Callback<()>,
}

/// Single-button error dialog.
#[function_component(ErrorModal)]
pub(crate) fn error_modal(props: &ErrorModalProps) -> Html {
    let dismiss = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(()))
    };

    html! {
        <Modal
            open={props.message.is_some()}
            title={"Something went wrong"}
            class={classes!("modal-error")}
            on_close={props.on_dismiss.clone()}>
            <p>{props.message.clone().unwrap_or_default()}</p>
            <div class="modal-actions">
                <button class="btn" onclick={dismiss}>{"OK"}</button>
            </div>
        </Modal>
    }
}

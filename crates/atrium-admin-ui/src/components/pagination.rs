//! Numbered pager for resource lists.

use crate::core::logic::{at_first, at_last};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct PaginationProps {
    #[prop_or(1)]
    pub current: u32,
    #[prop_or(1)]
    pub total: u32,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub on_change: Callback<u32>,
}

/// First / previous / numbered / next / last pager. Boundary buttons disable
/// at the edges; the current page button stays clickable and is marked with
/// `aria-current`.
#[function_component(Pagination)]
pub(crate) fn pagination(props: &PaginationProps) -> Html {
    let total = props.total.max(1);
    let current = props.current.clamp(1, total);

    let go_to = |page: u32| {
        let on_change = props.on_change.clone();
        Callback::from(move |_: MouseEvent| on_change.emit(page))
    };

    html! {
        <div class={classes!("join", "pagination", props.class.clone())}>
            <button
                class="btn join-item"
                disabled={at_first(current)}
                onclick={go_to(1)}
                aria-label="First page">{"«"}</button>
            <button
                class="btn join-item"
                disabled={at_first(current)}
                onclick={go_to(current.saturating_sub(1))}
                aria-label="Previous page">{"‹"}</button>
            { for (1..=total).map(|page| {
                let classes = classes!(
                    "btn",
                    "join-item",
                    (page == current).then_some("btn-active")
                );
                html! {
                    <button
                        class={classes}
                        aria-current={(page == current).then_some("page")}
                        onclick={go_to(page)}>
                        {page}
                    </button>
                }
            }) }
            <button
                class="btn join-item"
                disabled={at_last(current, total)}
                onclick={go_to(current + 1)}
                aria-label="Next page">{"›"}</button>
            <button
                class="btn join-item"
                disabled={at_last(current, total)}
                onclick={go_to(total)}
                aria-label="Last page">{"»"}</button>
        </div>
    }
}

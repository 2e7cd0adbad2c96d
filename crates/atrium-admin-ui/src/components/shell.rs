//! Navigation shell around the authenticated screens.

use crate::app::Route;
use crate::registry;
use std::collections::HashSet;
use yew::prelude::*;
use yew_router::prelude::Link;

#[derive(Properties, PartialEq)]
pub(crate) struct ShellProps {
    pub children: Children,
    /// Slug of the resource currently on screen, for link highlighting.
    #[prop_or_default]
    pub active_slug: Option<AttrValue>,
    pub on_logout: Callback<()>,
}

/// Sidebar shell with collapsible resource groups and a sign-out control.
#[function_component(AdminShell)]
pub(crate) fn admin_shell(props: &ShellProps) -> Html {
    let collapsed = use_state(HashSet::<&'static str>::new);

    let toggle_group = |title: &'static str| {
        let collapsed = collapsed.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*collapsed).clone();
            if !next.remove(title) {
                next.insert(title);
            }
            collapsed.set(next);
        })
    };

    let logout = {
        let on_logout = props.on_logout.clone();
        Callback::from(move |_: MouseEvent| on_logout.emit(()))
    };

    html! {
        <div class="app-shell">
            <aside class="sidebar">
                <div class="brand">
                    <strong>{"Atrium Admin"}</strong>
                </div>
                <nav>
                    { for registry::nav_groups().iter().map(|group| {
                        let is_collapsed = collapsed.contains(group.title);
                        html! {
                            <section class="nav-group">
                                <button
                                    type="button"
                                    class="nav-group-toggle"
                                    aria-expanded={(!is_collapsed).to_string()}
                                    onclick={toggle_group(group.title)}>
                                    <span>{group.title}</span>
                                    <span class="chevron">{if is_collapsed { "▸" } else { "▾" }}</span>
                                </button>
                                if !is_collapsed {
                                    <ul>
                                        { for group.slugs.iter().filter_map(|slug| {
                                            registry::find(slug).map(|config| {
                                                let active = props.active_slug.as_deref() == Some(config.slug);
                                                let classes = classes!(
                                                    "nav-item",
                                                    active.then_some("active")
                                                );
                                                html! {
                                                    <li>
                                                        <Link<Route>
                                                            to={Route::List { resource: config.slug.to_string() }}
                                                            classes={classes}>
                                                            {config.title}
                                                        </Link<Route>>
                                                    </li>
                                                }
                                            })
                                        }) }
                                    </ul>
                                }
                            </section>
                        }
                    }) }
                </nav>
                <div class="sidebar-footer">
                    <span class="muted">{"Signed in"}</span>
                    <button class="btn btn-ghost" onclick={logout}>{"Sign out"}</button>
                </div>
            </aside>
            <main class="main">
                { for props.children.iter() }
            </main>
        </div>
    }
}

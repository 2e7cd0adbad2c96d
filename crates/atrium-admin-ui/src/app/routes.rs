//! Routing definitions for the admin UI.
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq, Eq, Debug)]
pub(crate) enum Route {
    #[at("/admin/login")]
    Login,
    #[at("/")]
    Home,
    #[at("/:resource")]
    List { resource: String },
    #[at("/:resource/new")]
    New { resource: String },
    #[at("/:resource/:id/edit")]
    Edit { resource: String, id: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

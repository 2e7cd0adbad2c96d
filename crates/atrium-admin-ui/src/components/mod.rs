pub(crate) mod action_menu;
pub(crate) mod guard;
pub(crate) mod modal;
pub(crate) mod pagination;
pub(crate) mod shell;

//! Screen-level features: sign-in, resource listing, and resource editing.

pub mod editor;
pub mod listing;
pub mod login;

#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
//! Atrium admin console: a Yew (CSR) single-page application for managing the
//! marketing site's content — banners, services, careers, portfolio projects
//! and the rest of the resource catalogue.
//!
//! Everything DOM-facing is gated behind `wasm32`; the session, pagination,
//! list/form state and resource registry layers are plain data with pure
//! transformations so they build and test natively.

pub mod core;
pub mod features;
pub mod registry;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod components;
#[cfg(target_arch = "wasm32")]
mod services;

#[cfg(target_arch = "wasm32")]
pub use app::run_app;

//! Sign-in screen.

#[cfg(target_arch = "wasm32")]
pub mod view;

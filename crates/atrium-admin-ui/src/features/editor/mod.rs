//! Generic resource form screen: state, pure transformations, and the view.

pub mod state;
#[cfg(target_arch = "wasm32")]
pub mod view;

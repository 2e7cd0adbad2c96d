//! DOM-free building blocks: error taxonomy, session state, pagination math
//! and the shared app store. Everything here builds and tests natively.

pub mod error;
pub mod logic;
pub mod session;
pub mod store;
pub mod transcode;

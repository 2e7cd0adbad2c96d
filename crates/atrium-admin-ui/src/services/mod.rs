//! Browser-side services: HTTP client and file reading.

pub(crate) mod api;
pub(crate) mod files;

//! File-to-data-URL encoding.
//!
//! # Design
//! - Image fields store a self-contained base64 data URL string, never a file
//!   handle, so a record always serializes as plain JSON.
//! - The pure encoder lives here; the browser `File` reader that feeds it is
//!   in the services layer.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

/// Fallback MIME type when the browser reports none.
pub const OCTET_STREAM: &str = "application/octet-stream";

/// Encode raw file bytes as a `data:` URL with the given MIME type.
#[must_use]
pub fn data_url(mime: &str, bytes: &[u8]) -> String {
    let mime = if mime.trim().is_empty() {
        OCTET_STREAM
    } else {
        mime
    };
    format!("data:{mime};base64,{}", STANDARD.encode(bytes))
}

/// Whether a stored field value already is a data URL (set by a previous
/// edit) as opposed to a plain string.
#[must_use]
pub fn is_data_url(value: &str) -> bool {
    value.starts_with("data:")
}

#[cfg(test)]
mod tests {
    use super::{data_url, is_data_url};

    #[test]
    fn encodes_bytes_with_mime() {
        assert_eq!(data_url("image/png", b"abc"), "data:image/png;base64,YWJj");
    }

    #[test]
    fn blank_mime_falls_back_to_octet_stream() {
        assert_eq!(
            data_url("  ", &[0xff]),
            "data:application/octet-stream;base64,/w=="
        );
    }

    #[test]
    fn detects_data_urls() {
        assert!(is_data_url("data:image/png;base64,YWJj"));
        assert!(!is_data_url("https://example.com/logo.png"));
    }
}

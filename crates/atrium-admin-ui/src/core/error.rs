//! Error taxonomy for the admin console.
//!
//! # Design
//! - Keep transport failures typed so 401 and 400 stay distinguishable.
//! - Controllers convert errors to user-facing text at the call site; nothing
//!   propagates uncaught.

use atrium_api_models::ErrorBody;
use thiserror::Error;

/// Failure modes surfaced by the API client and the file transcode step.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Non-2xx response from the API.
    #[error("HTTP {status}: {}", .message.as_deref().unwrap_or("request failed"))]
    Status {
        /// HTTP status code of the response.
        status: u16,
        /// Server-supplied message, when the body carried one.
        message: Option<String>,
    },
    /// The request never reached the server (offline, DNS, timeout).
    #[error("network error: {0}")]
    Network(String),
    /// A request or response body failed JSON (de)serialization.
    #[error("malformed payload: {0}")]
    Decode(String),
    /// File-to-base64 conversion failed before any network call.
    #[error("file could not be read: {0}")]
    Transcode(String),
}

impl ApiError {
    /// Build a status error, extracting the message from a decoded error body.
    #[must_use]
    pub fn from_status(status: u16, body: Option<&ErrorBody>) -> Self {
        Self::Status {
            status,
            message: body.and_then(ErrorBody::detail).map(str::to_string),
        }
    }

    /// Whether this failure is an authorization rejection (HTTP 401) that the
    /// session store must react to.
    #[must_use]
    pub const fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Status { status: 401, .. })
    }

    /// Whether this failure is a validation rejection (HTTP 400) whose server
    /// message must be shown verbatim.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Status { status: 400, .. })
    }

    /// The server-supplied message, when one exists.
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Status { message, .. } => message.as_deref(),
            Self::Network(_) | Self::Decode(_) | Self::Transcode(_) => None,
        }
    }

    /// Message for the error modal: the verbatim server message for
    /// validation failures, otherwise the screen-specific fallback, with the
    /// underlying detail appended when one is available.
    #[must_use]
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Status {
                message: Some(message),
                ..
            } => message.clone(),
            Self::Status { message: None, .. } => fallback.to_string(),
            Self::Network(detail) | Self::Decode(detail) | Self::Transcode(detail) => {
                format!("{fallback} ({detail})")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ApiError;
    use atrium_api_models::ErrorBody;

    #[test]
    fn unauthorized_is_special_cased() {
        let err = ApiError::from_status(401, None);
        assert!(err.is_unauthorized());
        assert!(!err.is_validation());
        assert!(!ApiError::Network("offline".into()).is_unauthorized());
    }

    #[test]
    fn validation_message_is_verbatim() {
        let body: ErrorBody =
            serde_json::from_str(r#"{"error": "bannerTitle is required"}"#).unwrap();
        let err = ApiError::from_status(400, Some(&body));
        assert!(err.is_validation());
        assert_eq!(
            err.user_message("Failed to create banner."),
            "bannerTitle is required"
        );
    }

    #[test]
    fn fallback_used_when_server_is_silent() {
        let err = ApiError::from_status(500, None);
        assert_eq!(err.user_message("Failed to fetch careers."), "Failed to fetch careers.");
        assert_eq!(err.server_message(), None);
    }

    #[test]
    fn network_failures_carry_detail_into_fallback() {
        let err = ApiError::Network("connection refused".into());
        assert_eq!(
            err.user_message("Failed to fetch banners."),
            "Failed to fetch banners. (connection refused)"
        );
    }

    #[test]
    fn decode_failures_carry_detail_into_fallback() {
        let err = ApiError::Decode("missing field `data`".into());
        assert_eq!(err.server_message(), None);
        assert_eq!(
            err.user_message("Failed to fetch banners."),
            "Failed to fetch banners. (missing field `data`)"
        );
    }

    #[test]
    fn display_includes_status() {
        let err = ApiError::from_status(503, None);
        assert_eq!(err.to_string(), "HTTP 503: request failed");
    }
}

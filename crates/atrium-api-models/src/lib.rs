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
//! Shared HTTP DTOs for the Atrium admin API.
//!
//! These types describe the wire contract of the content-management backend:
//! list/detail envelopes, login payloads, and the list query parameters. The
//! admin console holds no authoritative copy of any record, so everything here
//! is a plain serde view over what the server returns.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A content record as returned by the backend: a mapping of named fields to
/// scalar values, keyed by a server-assigned identifier.
///
/// Records are schemaless on the wire (each resource type has its own field
/// set), so the client carries them as an ordered JSON object and lets the
/// per-resource configuration decide which fields to read and edit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(pub Map<String, Value>);

impl Record {
    /// Server-assigned identifier, read from `_id` with an `id` fallback.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.0
            .get("_id")
            .or_else(|| self.0.get("id"))
            .and_then(Value::as_str)
    }

    /// Read a field as a display string. Numbers are formatted, strings are
    /// borrowed verbatim, anything else is absent.
    #[must_use]
    pub fn display(&self, field: &str) -> Option<String> {
        match self.0.get(field)? {
            Value::String(text) => Some(text.clone()),
            Value::Number(number) => Some(number.to_string()),
            Value::Bool(flag) => Some(flag.to_string()),
            _ => None,
        }
    }

    /// Set a field to a string value, replacing any previous value.
    pub fn set(&mut self, field: &str, value: impl Into<String>) {
        self.0.insert(field.to_string(), Value::String(value.into()));
    }

    /// Set a field to an arbitrary JSON value, replacing any previous value.
    pub fn set_value(&mut self, field: &str, value: Value) {
        self.0.insert(field.to_string(), value);
    }

    /// Whether the record carries the given field at all.
    #[must_use]
    pub fn has(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }
}

/// Envelope for list responses: `{ "data": [...], "total": n }` or
/// `{ "data": [...], "totalPages": n }` depending on the endpoint.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ListEnvelope {
    /// Records for the requested page.
    #[serde(default)]
    pub data: Vec<Record>,
    /// Total matching record count, when the endpoint reports one.
    #[serde(default)]
    pub total: Option<u64>,
    /// Pre-computed page count, when the endpoint reports one.
    #[serde(default, rename = "totalPages")]
    pub total_pages: Option<u32>,
}

/// Envelope for single-record responses: `{ "data": {...} }`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DetailEnvelope {
    /// The requested record.
    pub data: Record,
}

/// Error body shape shared by the backend's failure responses. Endpoints are
/// inconsistent about the field name (`message` on auth, `error` on
/// validation), so both are accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    /// Human-readable failure message.
    #[serde(default)]
    pub message: Option<String>,
    /// Validation failure message.
    #[serde(default)]
    pub error: Option<String>,
}

impl ErrorBody {
    /// The server-supplied message, preferring `message` over `error`.
    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        self.message
            .as_deref()
            .or(self.error.as_deref())
            .filter(|text| !text.trim().is_empty())
    }
}

/// Credentials for `POST /admin/login`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    /// Admin account name.
    pub username: String,
    /// Admin account password.
    pub password: String,
}

/// Successful login response carrying the bearer token.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    /// Opaque session token to send as `Authorization: Bearer <token>`.
    pub token: String,
}

/// Recognized list query parameters. Unset keys are omitted from the query
/// string entirely, never sent as empty placeholders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    /// One-based page number.
    pub page: Option<u32>,
    /// Page size.
    pub limit: Option<u32>,
    /// Free-text search filter.
    pub search: Option<String>,
}

impl ListQuery {
    /// Build a query for one page of a listing with an optional search filter.
    #[must_use]
    pub fn page(page: u32, limit: u32, search: &str) -> Self {
        let search = search.trim();
        Self {
            page: Some(page.max(1)),
            limit: Some(limit),
            search: if search.is_empty() {
                None
            } else {
                Some(search.to_string())
            },
        }
    }

    /// Render the query string including the leading `?`, or an empty string
    /// when no parameter is set.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        let mut pairs = Vec::new();
        if let Some(page) = self.page {
            pairs.push(format!("page={page}"));
        }
        if let Some(limit) = self.limit {
            pairs.push(format!("limit={limit}"));
        }
        if let Some(search) = &self.search {
            pairs.push(format!("search={}", urlencoding::encode(search)));
        }
        if pairs.is_empty() {
            String::new()
        } else {
            format!("?{}", pairs.join("&"))
        }
    }
}

/// Publication status shared by every content type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Visible on the public site.
    #[default]
    Active,
    /// Hidden from the public site.
    Inactive,
}

impl Status {
    /// Wire value for the status field.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{DetailEnvelope, ErrorBody, ListEnvelope, ListQuery, Record, Status};
    use serde_json::json;

    #[test]
    fn record_id_prefers_underscore_id() {
        let record: Record =
            serde_json::from_value(json!({"_id": "abc", "id": "ignored"})).unwrap();
        assert_eq!(record.id(), Some("abc"));
        let fallback: Record = serde_json::from_value(json!({"id": "xyz"})).unwrap();
        assert_eq!(fallback.id(), Some("xyz"));
        assert_eq!(Record::default().id(), None);
    }

    #[test]
    fn record_display_formats_scalars() {
        let record: Record = serde_json::from_value(json!({
            "bannerTitle": "Spring launch",
            "displayOrder": 3,
            "image": null
        }))
        .unwrap();
        assert_eq!(record.display("bannerTitle").as_deref(), Some("Spring launch"));
        assert_eq!(record.display("displayOrder").as_deref(), Some("3"));
        assert_eq!(record.display("image"), None);
        assert_eq!(record.display("missing"), None);
    }

    #[test]
    fn list_envelope_accepts_total_or_total_pages() {
        let with_total: ListEnvelope =
            serde_json::from_value(json!({"data": [], "total": 42})).unwrap();
        assert_eq!(with_total.total, Some(42));
        assert_eq!(with_total.total_pages, None);

        let with_pages: ListEnvelope =
            serde_json::from_value(json!({"data": [{"_id": "a"}], "totalPages": 7})).unwrap();
        assert_eq!(with_pages.total_pages, Some(7));
        assert_eq!(with_pages.data.len(), 1);
    }

    #[test]
    fn detail_envelope_unwraps_data() {
        let detail: DetailEnvelope =
            serde_json::from_value(json!({"data": {"_id": "a", "status": "active"}})).unwrap();
        assert_eq!(detail.data.id(), Some("a"));
        assert_eq!(detail.data.display("status").as_deref(), Some("active"));
    }

    #[test]
    fn error_body_prefers_message_and_skips_blanks() {
        let both: ErrorBody =
            serde_json::from_value(json!({"message": "bad title", "error": "other"})).unwrap();
        assert_eq!(both.detail(), Some("bad title"));
        let validation: ErrorBody =
            serde_json::from_value(json!({"error": "title is required"})).unwrap();
        assert_eq!(validation.detail(), Some("title is required"));
        let blank: ErrorBody = serde_json::from_value(json!({"message": "  "})).unwrap();
        assert_eq!(blank.detail(), None);
    }

    #[test]
    fn query_string_omits_unset_keys() {
        assert_eq!(ListQuery::default().to_query_string(), "");
        let query = ListQuery::page(2, 10, "press release");
        assert_eq!(query.to_query_string(), "?page=2&limit=10&search=press%20release");
        let no_search = ListQuery::page(0, 5, "   ");
        assert_eq!(no_search.to_query_string(), "?page=1&limit=5");
    }

    #[test]
    fn status_round_trips_lowercase() {
        assert_eq!(serde_json::to_value(Status::Active).unwrap(), json!("active"));
        let status: Status = serde_json::from_value(json!("inactive")).unwrap();
        assert_eq!(status, Status::Inactive);
        assert_eq!(status.as_str(), "inactive");
    }
}

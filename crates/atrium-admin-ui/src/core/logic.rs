//! Pagination math and request path building.
//!
//! # Design
//! - Keep everything pure so the pager invariants are testable natively.
//! - Page numbers are one-based throughout; zero never escapes this module.

use atrium_api_models::ListQuery;

/// Resolve the page count for a list screen: prefer the server-provided page
/// count, else derive it from the total record count, else a single page.
#[must_use]
pub fn total_pages(server_pages: Option<u32>, total: Option<u64>, per_page: u32) -> u32 {
    if let Some(pages) = server_pages {
        return pages.max(1);
    }
    match total {
        Some(total) if per_page > 0 => {
            let pages = total.div_ceil(u64::from(per_page));
            u32::try_from(pages).unwrap_or(u32::MAX).max(1)
        }
        _ => 1,
    }
}

/// Clamp a requested page into `[1, total_pages]`.
#[must_use]
pub fn clamp_page(page: u32, total_pages: u32) -> u32 {
    page.max(1).min(total_pages.max(1))
}

/// Whether the first/prev pager controls are disabled.
#[must_use]
pub const fn at_first(page: u32) -> bool {
    page <= 1
}

/// Whether the next/last pager controls are disabled.
#[must_use]
pub const fn at_last(page: u32, total_pages: u32) -> bool {
    page >= total_pages
}

/// `Authorization` header value for a bearer token.
#[must_use]
pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Build the request path for one page of a resource listing.
#[must_use]
pub fn list_path(api_path: &str, query: &ListQuery) -> String {
    format!("/admin/v1/{api_path}{}", query.to_query_string())
}

/// Build the request path for a single record.
#[must_use]
pub fn record_path(api_path: &str, id: &str) -> String {
    format!("/admin/v1/{api_path}/{id}")
}

#[cfg(test)]
mod tests {
    use super::{at_first, at_last, bearer, clamp_page, list_path, record_path, total_pages};
    use atrium_api_models::ListQuery;

    #[test]
    fn server_pages_win_over_total() {
        assert_eq!(total_pages(Some(7), Some(1000), 10), 7);
        assert_eq!(total_pages(Some(0), None, 10), 1);
    }

    #[test]
    fn derived_pages_round_up() {
        assert_eq!(total_pages(None, Some(41), 10), 5);
        assert_eq!(total_pages(None, Some(40), 10), 4);
        assert_eq!(total_pages(None, Some(0), 10), 1);
        assert_eq!(total_pages(None, None, 10), 1);
    }

    #[test]
    fn clamping_keeps_pages_in_range() {
        assert_eq!(clamp_page(0, 5), 1);
        assert_eq!(clamp_page(3, 5), 3);
        assert_eq!(clamp_page(9, 5), 5);
        assert_eq!(clamp_page(1, 0), 1);
    }

    #[test]
    fn boundary_controls_disable_correctly() {
        assert!(at_first(1));
        assert!(!at_first(2));
        assert!(at_last(5, 5));
        assert!(!at_last(4, 5));
        // A single page disables both ends.
        assert!(at_first(1) && at_last(1, 1));
    }

    #[test]
    fn bearer_header_carries_the_token_verbatim() {
        assert_eq!(bearer("abc.def"), "Bearer abc.def");
    }

    #[test]
    fn paths_follow_the_admin_namespace() {
        let query = ListQuery::page(2, 10, "press");
        assert_eq!(
            list_path("company/career", &query),
            "/admin/v1/company/career?page=2&limit=10&search=press"
        );
        assert_eq!(
            list_path("home/banner", &ListQuery::default()),
            "/admin/v1/home/banner"
        );
        assert_eq!(record_path("home/banner", "abc123"), "/admin/v1/home/banner/abc123");
    }
}

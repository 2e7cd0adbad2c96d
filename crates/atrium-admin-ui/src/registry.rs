//! Static catalogue of manageable content types.
//!
//! # Design
//! - One `ResourceConfig` drives both the generic list screen and the generic
//!   form screen for a content type; adding a resource is a data change.
//! - Field names are the wire names the backend expects (including historical
//!   oddities such as `parentPhotpholio`), so payloads round-trip verbatim.
//! - Image fields marked required are only enforced on create; editing keeps
//!   the stored image unless a new file is chosen.

use atrium_api_models::Record;
use serde_json::Value;

/// Input kind for a form field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    /// Single-line text input.
    Text,
    /// Multi-line text input.
    TextArea,
    /// Numeric input (stored as a JSON number when it parses).
    Number,
    /// ISO `YYYY-MM-DD` date input.
    Date,
    /// Fixed-choice select control.
    Select(&'static [&'static str]),
    /// File input transcoded to a base64 data URL on selection.
    Image,
}

/// Declaration of one editable record field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    /// Wire name of the field.
    pub name: &'static str,
    /// Human-readable form label.
    pub label: &'static str,
    /// Input kind.
    pub kind: FieldKind,
    /// Whether native required validation applies.
    pub required: bool,
    /// Default value for create mode (empty string means unset).
    pub default: &'static str,
}

impl FieldSpec {
    const fn text(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::Text,
            required: false,
            default: "",
        }
    }

    const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    const fn kind(mut self, kind: FieldKind) -> Self {
        self.kind = kind;
        self
    }

    #[allow(dead_code)]
    const fn default_value(mut self, default: &'static str) -> Self {
        self.default = default;
        self
    }

    /// Default value as the JSON value stored in a fresh draft.
    #[must_use]
    pub fn default_json(&self) -> Value {
        if matches!(self.kind, FieldKind::Number) {
            if let Ok(number) = self.default.parse::<i64>() {
                return Value::from(number);
            }
        }
        Value::String(self.default.to_string())
    }
}

/// Options for the publication status select shared by every resource.
pub const STATUS_OPTIONS: &[&str] = &["active", "inactive"];

const fn status_field() -> FieldSpec {
    FieldSpec {
        name: "status",
        label: "Status",
        kind: FieldKind::Select(STATUS_OPTIONS),
        required: false,
        default: "active",
    }
}

const fn order_field() -> FieldSpec {
    FieldSpec {
        name: "displayOrder",
        label: "Display Order",
        kind: FieldKind::Number,
        required: false,
        default: "1",
    }
}

const fn image_field(label: &'static str, required: bool) -> FieldSpec {
    FieldSpec {
        name: "image",
        label,
        kind: FieldKind::Image,
        required,
        default: "",
    }
}

/// Everything the generic list and form screens need to manage one content
/// type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResourceConfig {
    /// Route segment for the list screen (`/<slug>`).
    pub slug: &'static str,
    /// API path under `/admin/v1/`.
    pub api_path: &'static str,
    /// List screen heading.
    pub title: &'static str,
    /// Singular label used for buttons and fallback messages.
    pub singular: &'static str,
    /// Page size for the list fetch.
    pub per_page: u32,
    /// Field names rendered as table columns, in order.
    pub columns: &'static [&'static str],
    /// Editable fields, in form order.
    pub fields: &'static [FieldSpec],
}

impl ResourceConfig {
    /// Fresh draft record for create mode, seeded with per-field defaults.
    #[must_use]
    pub fn defaults(&self) -> Record {
        let mut record = Record::default();
        for field in self.fields {
            record.set_value(field.name, field.default_json());
        }
        record
    }

    /// Look up a field spec by wire name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&'static FieldSpec> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Column label for a field: the form label when declared, else the wire
    /// name.
    #[must_use]
    pub fn column_label<'a>(&self, name: &'a str) -> &'a str {
        self.field(name).map_or(name, |field| field.label)
    }
}

/// Sidebar group: a heading plus the resource slugs it links to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavGroup {
    /// Group heading in the sidebar.
    pub title: &'static str,
    /// Resource slugs listed under the heading.
    pub slugs: &'static [&'static str],
}

/// Resource the catch-all route redirects to.
pub const DEFAULT_SLUG: &str = "banners";

static RESOURCES: &[ResourceConfig] = &[
    ResourceConfig {
        slug: "banners",
        api_path: "home/banner",
        title: "Home Banners",
        singular: "Banner",
        per_page: 5,
        columns: &["displayOrder", "bannerTitle", "status"],
        fields: &[
            FieldSpec::text("bannerTitle", "Title").required(),
            FieldSpec::text("url", "URL"),
            FieldSpec::text("shortDescription", "Short Description").kind(FieldKind::TextArea),
            order_field(),
            status_field(),
            image_field("Image (base64 upload)", true),
        ],
    },
    ResourceConfig {
        slug: "company-values",
        api_path: "home/company-values",
        title: "Company Values",
        singular: "Company Value",
        per_page: 10,
        columns: &["displayOrder", "title", "status"],
        fields: &[
            FieldSpec::text("title", "Title").required(),
            FieldSpec::text("shortDescription", "Short Description").kind(FieldKind::TextArea),
            order_field(),
            status_field(),
            image_field("Image", false),
        ],
    },
    ResourceConfig {
        slug: "services",
        api_path: "home/service",
        title: "Services",
        singular: "Service",
        per_page: 10,
        columns: &["displayOrder", "serviceTitle", "status"],
        fields: &[
            FieldSpec::text("serviceTitle", "Title").required(),
            FieldSpec::text("url", "URL"),
            FieldSpec::text("shortDescription", "Short Description").kind(FieldKind::TextArea),
            FieldSpec::text("description", "Description").kind(FieldKind::TextArea),
            order_field(),
            status_field(),
            image_field("Image", false),
        ],
    },
    ResourceConfig {
        slug: "subscriptions",
        api_path: "home/subscription",
        title: "Subscriptions",
        singular: "Subscription",
        per_page: 10,
        columns: &["emailId", "status"],
        fields: &[
            FieldSpec::text("emailId", "Email").required(),
            status_field(),
        ],
    },
    ResourceConfig {
        slug: "careers",
        api_path: "company/career",
        title: "Career Opportunities",
        singular: "Job",
        per_page: 10,
        columns: &["jobTypes", "totalExp", "status"],
        fields: &[
            FieldSpec::text("jobTypes", "Job Type").required(),
            FieldSpec::text("totalExp", "Total Experience"),
            FieldSpec::text("location", "Location"),
            FieldSpec::text("date", "Date").kind(FieldKind::Date),
            FieldSpec::text("shortDescription", "Short Description").kind(FieldKind::TextArea),
            FieldSpec::text("description", "Description").kind(FieldKind::TextArea),
            status_field(),
            image_field("Image", false),
        ],
    },
    ResourceConfig {
        slug: "news-events",
        api_path: "company/news-events",
        title: "News & Events",
        singular: "News / Event",
        per_page: 10,
        columns: &["title", "date", "status"],
        fields: &[
            FieldSpec::text("title", "Title").required(),
            FieldSpec::text("name", "Name"),
            FieldSpec::text("location", "Location"),
            FieldSpec::text("date", "Date").kind(FieldKind::Date),
            FieldSpec::text("shortDescription", "Short Description").kind(FieldKind::TextArea),
            FieldSpec::text("description", "Description").kind(FieldKind::TextArea),
            status_field(),
            image_field("Image", false),
        ],
    },
    ResourceConfig {
        slug: "social-networks",
        api_path: "company/social-network",
        title: "Social Networks",
        singular: "Social Network",
        per_page: 10,
        columns: &["facebookLink", "twitterLink", "status"],
        fields: &[
            FieldSpec::text("facebookLink", "Facebook Link"),
            FieldSpec::text("googlePlusLink", "Google Plus Link"),
            FieldSpec::text("twitterLink", "Twitter Link"),
            FieldSpec::text("youtubeLink", "YouTube Link"),
            FieldSpec::text("linkedlnLink", "LinkedIn Link"),
            FieldSpec::text("instagramLink", "Instagram Link"),
            FieldSpec::text("shortDescription", "Short Description").kind(FieldKind::TextArea),
            status_field(),
        ],
    },
    ResourceConfig {
        slug: "client-speaks",
        api_path: "company/client-speak",
        title: "Client Testimonials",
        singular: "Testimonial",
        per_page: 10,
        columns: &["title", "name", "status"],
        fields: &[
            FieldSpec::text("title", "Title").required(),
            FieldSpec::text("name", "Name"),
            FieldSpec::text("shortDescription", "Short Description").kind(FieldKind::TextArea),
            FieldSpec::text("description", "Description").kind(FieldKind::TextArea),
            status_field(),
            image_field("Image", false),
        ],
    },
    ResourceConfig {
        slug: "projects",
        api_path: "portfolio/projects",
        title: "Portfolio Projects",
        singular: "Project",
        per_page: 10,
        columns: &["displayOrder", "title", "status"],
        fields: &[
            FieldSpec::text("selectCategory", "Category"),
            FieldSpec::text("name", "Name").required(),
            FieldSpec::text("title", "Title"),
            FieldSpec::text("youtubeLink", "YouTube Link"),
            FieldSpec::text("appStoreUrl", "App Store URL"),
            FieldSpec::text("googlePlayUrl", "Google Play URL"),
            FieldSpec::text("webUrl", "Web URL"),
            FieldSpec::text("shortDescription", "Short Description").kind(FieldKind::TextArea),
            order_field(),
            FieldSpec::text("description", "Description").kind(FieldKind::TextArea),
            status_field(),
            image_field("Image", false),
        ],
    },
    ResourceConfig {
        slug: "project-categories",
        api_path: "portfolio/project-category",
        title: "Project Categories",
        singular: "Project Category",
        per_page: 10,
        columns: &["name", "status"],
        fields: &[
            // Field name preserved as the backend expects it.
            FieldSpec::text("parentPhotpholio", "Parent Portfolio"),
            FieldSpec::text("name", "Name").required(),
            status_field(),
        ],
    },
    ResourceConfig {
        slug: "partners",
        api_path: "partner/partner",
        title: "Partners",
        singular: "Partner",
        per_page: 10,
        columns: &["displayOrder", "title", "status"],
        fields: &[
            FieldSpec::text("title", "Title").required(),
            FieldSpec::text("url", "URL"),
            FieldSpec::text("shortDescription", "Short Description").kind(FieldKind::TextArea),
            order_field(),
            status_field(),
            image_field("Image", false),
        ],
    },
    ResourceConfig {
        slug: "clients",
        api_path: "partner/client",
        title: "Clients",
        singular: "Client",
        per_page: 10,
        columns: &["displayOrder", "title", "status"],
        fields: &[
            FieldSpec::text("title", "Title").required(),
            FieldSpec::text("url", "URL"),
            FieldSpec::text("shortDescription", "Short Description").kind(FieldKind::TextArea),
            order_field(),
            status_field(),
            image_field("Image", false),
        ],
    },
    ResourceConfig {
        slug: "job-applications",
        api_path: "application/application",
        title: "Job Applications",
        singular: "Application",
        per_page: 10,
        columns: &["jobId", "jobType", "applicantName", "status"],
        fields: &[
            FieldSpec::text("jobId", "Job ID"),
            FieldSpec::text("jobType", "Job Type"),
            FieldSpec::text("applicantName", "Applicant Name").required(),
            FieldSpec::text("contactNumber", "Contact Number"),
            FieldSpec::text("emailId", "Email"),
            FieldSpec::text("date", "Date").kind(FieldKind::Date),
            FieldSpec::text("description", "Description").kind(FieldKind::TextArea),
            status_field(),
            image_field("Attachment", false),
        ],
    },
    ResourceConfig {
        slug: "pages",
        api_path: "page/page",
        title: "Pages",
        singular: "Page",
        per_page: 10,
        columns: &["displayOrder", "name", "status"],
        fields: &[
            FieldSpec::text("selectCategory", "Category"),
            FieldSpec::text("title", "Title").required(),
            FieldSpec::text("name", "Name"),
            FieldSpec::text("redirectUrl", "Redirect URL"),
            FieldSpec::text("keyUrl", "Key URL"),
            FieldSpec::text("shortDescription", "Short Description").kind(FieldKind::TextArea),
            order_field(),
            FieldSpec::text("description", "Description").kind(FieldKind::TextArea),
            status_field(),
            image_field("Image", false),
        ],
    },
    ResourceConfig {
        slug: "menus",
        api_path: "page/menu",
        title: "Menus",
        singular: "Menu",
        per_page: 10,
        columns: &["name", "status"],
        fields: &[
            FieldSpec::text("name", "Name").required(),
            status_field(),
        ],
    },
];

static NAV_GROUPS: &[NavGroup] = &[
    NavGroup {
        title: "Home",
        slugs: &["banners", "company-values", "services", "subscriptions"],
    },
    NavGroup {
        title: "Company",
        slugs: &["careers", "news-events", "social-networks", "client-speaks"],
    },
    NavGroup {
        title: "Portfolio",
        slugs: &["projects", "project-categories"],
    },
    NavGroup {
        title: "Partners",
        slugs: &["partners", "clients"],
    },
    NavGroup {
        title: "Applications",
        slugs: &["job-applications"],
    },
    NavGroup {
        title: "Pages",
        slugs: &["pages", "menus"],
    },
];

/// All manageable resources, in catalogue order.
#[must_use]
pub fn all() -> &'static [ResourceConfig] {
    RESOURCES
}

/// Look up a resource by its route slug.
#[must_use]
pub fn find(slug: &str) -> Option<&'static ResourceConfig> {
    RESOURCES.iter().find(|config| config.slug == slug)
}

/// Sidebar groups in display order.
#[must_use]
pub fn nav_groups() -> &'static [NavGroup] {
    NAV_GROUPS
}

#[cfg(test)]
mod tests {
    use super::{DEFAULT_SLUG, FieldKind, all, find, nav_groups};
    use std::collections::HashSet;

    #[test]
    fn slugs_and_api_paths_are_unique() {
        let mut slugs = HashSet::new();
        let mut paths = HashSet::new();
        for config in all() {
            assert!(slugs.insert(config.slug), "duplicate slug {}", config.slug);
            assert!(paths.insert(config.api_path), "duplicate path {}", config.api_path);
        }
    }

    #[test]
    fn default_slug_resolves() {
        assert!(find(DEFAULT_SLUG).is_some());
        assert!(find("no-such-resource").is_none());
    }

    #[test]
    fn every_nav_link_resolves_and_every_resource_is_linked() {
        let mut linked = HashSet::new();
        for group in nav_groups() {
            for slug in group.slugs {
                assert!(find(slug).is_some(), "nav links unknown slug {slug}");
                linked.insert(*slug);
            }
        }
        for config in all() {
            assert!(linked.contains(config.slug), "{} missing from nav", config.slug);
        }
    }

    #[test]
    fn page_sizes_stay_in_range() {
        for config in all() {
            assert!(
                (5..=10).contains(&config.per_page),
                "{} page size out of range",
                config.slug
            );
        }
    }

    #[test]
    fn columns_reference_declared_fields() {
        for config in all() {
            for column in config.columns {
                assert!(
                    config.field(column).is_some(),
                    "{} column {column} has no field spec",
                    config.slug
                );
            }
        }
    }

    #[test]
    fn every_resource_has_a_status_select() {
        for config in all() {
            let status = config.field("status").expect("status field");
            assert!(matches!(status.kind, FieldKind::Select(_)));
            assert_eq!(status.default, "active");
        }
    }

    #[test]
    fn defaults_cover_every_field() {
        for config in all() {
            let draft = config.defaults();
            for field in config.fields {
                assert!(draft.has(field.name), "{} missing default", field.name);
            }
        }
        let banner = find("banners").unwrap().defaults();
        assert_eq!(banner.0.get("displayOrder"), Some(&serde_json::Value::from(1)));
        assert_eq!(banner.display("status").as_deref(), Some("active"));
    }
}

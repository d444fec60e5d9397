//! Catalog of the panel's list resources and their pagination rules.

use panel_api::types::RecordId;
use panel_api::Sentinel;

/// How a list resource may be paged and which filter values mean "no filter".
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PageRules<'a> {
    /// Allowed page lengths, in display order.
    pub valid_page_sizes: &'a [u64],
    /// Page length used when the requested one is absent or not allowed.
    pub default_size: u64,
    pub sentinels: &'a [Sentinel],
}

/// A REST collection exposed by the backend.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResourceSpec {
    /// Name used on the command line and in log lines.
    pub name: &'static str,
    /// Human readable singular, used in notices ("Agent deleted").
    pub label: &'static str,
    /// Collection path, with leading and trailing slash.
    pub path: &'static str,
    pub rules: PageRules<'static>,
}

const GRID_SIZES: &[u64] = &[12, 24, 36, 48];
const TABLE_SIZES: &[u64] = &[10, 20, 50];

pub const MEDIA: ResourceSpec = ResourceSpec {
    name: "media",
    label: "Media",
    path: "/media/",
    rules: PageRules {
        valid_page_sizes: GRID_SIZES,
        default_size: 12,
        sentinels: &[("file_type", "all")],
    },
};

pub const ADMINS: ResourceSpec = ResourceSpec {
    name: "admins",
    label: "Admin",
    path: "/admins/",
    rules: PageRules {
        valid_page_sizes: &[10, 20, 50, 100],
        default_size: 10,
        sentinels: &[("role", "all"), ("is_active", "all")],
    },
};

pub const ROLES: ResourceSpec = ResourceSpec {
    name: "roles",
    label: "Role",
    path: "/roles/",
    rules: PageRules {
        valid_page_sizes: TABLE_SIZES,
        default_size: 20,
        sentinels: &[],
    },
};

pub const AGENCIES: ResourceSpec = ResourceSpec {
    name: "agencies",
    label: "Agency",
    path: "/agencies/",
    rules: PageRules {
        valid_page_sizes: TABLE_SIZES,
        default_size: 10,
        sentinels: &[("status", "all")],
    },
};

pub const AGENTS: ResourceSpec = ResourceSpec {
    name: "agents",
    label: "Agent",
    path: "/agents/",
    rules: PageRules {
        valid_page_sizes: TABLE_SIZES,
        default_size: 10,
        sentinels: &[("status", "all"), ("agency", "all")],
    },
};

pub const PROPERTIES: ResourceSpec = ResourceSpec {
    name: "properties",
    label: "Property",
    path: "/properties/",
    rules: PageRules {
        valid_page_sizes: GRID_SIZES,
        default_size: 12,
        sentinels: &[("status", "all"), ("property_type", "all")],
    },
};

pub const BLOGS: ResourceSpec = ResourceSpec {
    name: "blogs",
    label: "Blog",
    path: "/blogs/",
    rules: PageRules {
        valid_page_sizes: TABLE_SIZES,
        default_size: 10,
        sentinels: &[("status", "all"), ("category", "all")],
    },
};

pub const PORTFOLIOS: ResourceSpec = ResourceSpec {
    name: "portfolios",
    label: "Portfolio",
    path: "/portfolios/",
    rules: PageRules {
        valid_page_sizes: GRID_SIZES,
        default_size: 12,
        sentinels: &[("category", "all")],
    },
};

pub const TICKETS: ResourceSpec = ResourceSpec {
    name: "tickets",
    label: "Ticket",
    path: "/tickets/",
    rules: PageRules {
        valid_page_sizes: TABLE_SIZES,
        default_size: 10,
        sentinels: &[("status", "all"), ("priority", "all")],
    },
};

pub const ALL: &[ResourceSpec] = &[
    MEDIA, ADMINS, ROLES, AGENCIES, AGENTS, PROPERTIES, BLOGS, PORTFOLIOS, TICKETS,
];

impl ResourceSpec {
    /// Looks a resource up by its name, case-insensitively.
    pub fn by_name(name: &str) -> Option<&'static ResourceSpec> {
        let name = name.trim().to_lowercase();
        ALL.iter().find(|spec| spec.name == name)
    }

    /// Path of a single entry: `/agents/7/`.
    pub fn detail_path(&self, id: RecordId) -> String {
        format!("{}{}/", self.path, id)
    }
}

use serde::{Deserialize, Serialize};

use crate::models::Role;

/// Navigable page id. Slugs are the exact sidebar ids; parsing is
/// case-sensitive with no partial matching.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Page {
    Dashboard,
    Profiles,
    GapAnalysis,
    CreateIdps,
    Reports,
    MyTeam,
    Approvals,
    TrackProgress,
    MyIdp,
    Progress,
    Feedback,
}

impl Page {
    pub fn slug(&self) -> &'static str {
        match self {
            Page::Dashboard => "dashboard",
            Page::Profiles => "profiles",
            Page::GapAnalysis => "gap-analysis",
            Page::CreateIdps => "create-idps",
            Page::Reports => "reports",
            Page::MyTeam => "my-team",
            Page::Approvals => "approvals",
            Page::TrackProgress => "track-progress",
            Page::MyIdp => "my-idp",
            Page::Progress => "progress",
            Page::Feedback => "feedback",
        }
    }

    pub fn from_slug(value: &str) -> Option<Page> {
        match value {
            "dashboard" => Some(Page::Dashboard),
            "profiles" => Some(Page::Profiles),
            "gap-analysis" => Some(Page::GapAnalysis),
            "create-idps" => Some(Page::CreateIdps),
            "reports" => Some(Page::Reports),
            "my-team" => Some(Page::MyTeam),
            "approvals" => Some(Page::Approvals),
            "track-progress" => Some(Page::TrackProgress),
            "my-idp" => Some(Page::MyIdp),
            "progress" => Some(Page::Progress),
            "feedback" => Some(Page::Feedback),
            _ => None,
        }
    }
}

/// Concrete view a (role, page) pair resolves to. `NotFound` is a normal
/// outcome rendered as a placeholder, not an error.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum View {
    AdminDashboard,
    EmployeeProfiles,
    GapAnalysis,
    CreateIdps,
    Reports,
    ManagerDashboard,
    MyTeam,
    Approvals,
    TrackProgress,
    EmployeeDashboard,
    MyIdp,
    ProgressTracker,
    Feedback,
    NotFound,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    pub page: Page,
    pub label: &'static str,
}

/// Ordered navigation menu for a role; the order is the display order.
pub fn menu_for(role: Role) -> &'static [MenuItem] {
    match role {
        Role::Admin => &[
            MenuItem {
                page: Page::Dashboard,
                label: "Dashboard",
            },
            MenuItem {
                page: Page::Profiles,
                label: "Employee Profiles",
            },
            MenuItem {
                page: Page::GapAnalysis,
                label: "Gap Analysis",
            },
            MenuItem {
                page: Page::CreateIdps,
                label: "Create/Approve IDPs",
            },
            MenuItem {
                page: Page::Reports,
                label: "Reports",
            },
        ],
        Role::Manager => &[
            MenuItem {
                page: Page::Dashboard,
                label: "Dashboard",
            },
            MenuItem {
                page: Page::MyTeam,
                label: "My Team",
            },
            MenuItem {
                page: Page::Approvals,
                label: "Approve Recommendations",
            },
            MenuItem {
                page: Page::TrackProgress,
                label: "Track Mentee Progress",
            },
        ],
        Role::Employee => &[
            MenuItem {
                page: Page::Dashboard,
                label: "Dashboard",
            },
            MenuItem {
                page: Page::MyIdp,
                label: "My IDP",
            },
            MenuItem {
                page: Page::Progress,
                label: "Progress Tracker",
            },
            MenuItem {
                page: Page::Feedback,
                label: "Feedback/Mentorship",
            },
        ],
    }
}

/// Role-qualified routing: the same page id resolves differently per role,
/// and a page outside the role's menu is `NotFound`.
pub fn resolve(role: Role, page: Page) -> View {
    match (role, page) {
        (Role::Admin, Page::Dashboard) => View::AdminDashboard,
        (Role::Admin, Page::Profiles) => View::EmployeeProfiles,
        (Role::Admin, Page::GapAnalysis) => View::GapAnalysis,
        (Role::Admin, Page::CreateIdps) => View::CreateIdps,
        (Role::Admin, Page::Reports) => View::Reports,
        (Role::Manager, Page::Dashboard) => View::ManagerDashboard,
        (Role::Manager, Page::MyTeam) => View::MyTeam,
        (Role::Manager, Page::Approvals) => View::Approvals,
        (Role::Manager, Page::TrackProgress) => View::TrackProgress,
        (Role::Employee, Page::Dashboard) => View::EmployeeDashboard,
        (Role::Employee, Page::MyIdp) => View::MyIdp,
        (Role::Employee, Page::Progress) => View::ProgressTracker,
        (Role::Employee, Page::Feedback) => View::Feedback,
        _ => View::NotFound,
    }
}

/// Resolve from a raw slug, mapping unroutable input to `NotFound`.
pub fn resolve_slug(role: Role, slug: &str) -> View {
    match Page::from_slug(slug) {
        Some(page) => resolve(role, page),
        None => View::NotFound,
    }
}

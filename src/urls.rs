//! URL tables for the site.
//!
//! Two tables exist for the same application and disagree on the root path:
//! `pages` serves `/` with the admin login view, `site` with the home view.
//! A deployment picks exactly one through `routing.table`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::routing::RouteTable;
use crate::views::Views;

/// Which URL table to serve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TableKind {
    /// Admin-first table: `/`, `/admin_login/`, `/dashboard/`.
    #[default]
    Pages,
    /// Public table: `/`, `/about/`, `/contact/`, `/admin/login/`, `/admin/dashboard/`.
    Site,
}

impl TableKind {
    pub fn as_str(self) -> &'static str {
        match self {
            TableKind::Pages => "pages",
            TableKind::Site => "site",
        }
    }
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TableKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pages" => Ok(TableKind::Pages),
            "site" => Ok(TableKind::Site),
            other => Err(format!("unknown route table {:?} (expected pages or site)", other)),
        }
    }
}

/// Build the selected table.
pub fn build(kind: TableKind, views: &Views) -> RouteTable {
    match kind {
        TableKind::Pages => pages(views),
        TableKind::Site => site(views),
    }
}

pub fn pages(views: &Views) -> RouteTable {
    RouteTable::builder()
        .route("", views.admin_login.clone(), Some(""))
        .route("admin_login/", views.admin_login.clone(), Some("home"))
        .route("dashboard/", views.admin_dashboard.clone(), Some("admin_dashboard"))
        .build()
}

pub fn site(views: &Views) -> RouteTable {
    RouteTable::builder()
        .route("", views.home.clone(), Some("home"))
        .route("about/", views.about.clone(), Some("about"))
        .route("contact/", views.contact.clone(), Some("contact"))
        .route("admin/login/", views.admin_login.clone(), Some("admin_login"))
        .route("admin/dashboard/", views.admin_dashboard.clone(), Some("admin_dashboard"))
        .build()
}

//! Site URL router library.
//!
//! An immutable route table mapping literal URL paths to view handlers,
//! served over axum.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod routing;
pub mod urls;
pub mod views;

pub use config::schema::SiteConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use routing::{RouteTable, RoutingError};
pub use urls::TableKind;
pub use views::{View, Views};

//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Route Compilation (at startup):
//!     urls::{pages, site}(views)
//!     → RouteTableBuilder (declaration order kept)
//!     → exact path index + name index
//!     → Freeze as immutable RouteTable (shared via Arc)
//!
//! Incoming Request (path):
//!     → matcher.rs (percent-decode, strip leading slash)
//!     → router.rs (exact lookup)
//!     → Return: RouteMatch or RoutingError::NotFound
//!     → handler.rs (invoke the matched handler)
//! ```
//!
//! # Design Decisions
//! - Routes compiled at startup, immutable at runtime
//! - Literal patterns only, no parameters or regex
//! - Deterministic: first declared route wins for a given pattern
//! - Explicit NotFound rather than silent default

pub mod handler;
pub mod matcher;
pub mod router;

pub use handler::{handler_fn, Handler, SharedHandler};
pub use router::{ResolvedRoute, Route, RouteMatch, RouteTable, RouteTableBuilder, RoutingError};

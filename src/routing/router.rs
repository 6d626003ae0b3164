//! Route lookup and dispatch.
//!
//! # Responsibilities
//! - Store compiled routes in declaration order
//! - Look up the route for a request path
//! - Reverse a route name into its URL path
//! - Return matched route or explicit NotFound
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - O(1) exact path lookup via HashMap
//! - First declaration wins for a path, last declaration wins for a name
//! - Empty names are treated as unnamed

use std::collections::HashMap;
use std::fmt;

use thiserror::Error;

use crate::routing::handler::SharedHandler;
use crate::routing::matcher::relative_path;

/// Errors produced by route resolution.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoutingError {
    /// No route pattern equals the request path.
    #[error("no route matched path {path:?}")]
    NotFound { path: String },
}

/// A single (pattern, handler, name) association.
#[derive(Clone)]
pub struct Route {
    pattern: String,
    handler: SharedHandler,
    name: Option<String>,
}

impl Route {
    fn new(pattern: impl Into<String>, handler: SharedHandler, name: Option<&str>) -> Self {
        Self {
            pattern: pattern.into(),
            handler,
            name: name.filter(|n| !n.is_empty()).map(str::to_string),
        }
    }

    /// Framework-relative pattern, e.g. `about/`.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Absolute URL path served by this route, e.g. `/about/`.
    pub fn url_path(&self) -> String {
        format!("/{}", self.pattern())
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn handler(&self) -> &SharedHandler {
        &self.handler
    }
}

impl fmt::Debug for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route")
            .field("pattern", &self.pattern())
            .field("handler", &self.handler.label())
            .field("name", &self.name)
            .finish()
    }
}

/// Result of a successful lookup.
#[derive(Debug, Clone)]
pub struct RouteMatch<'a> {
    pub route: &'a Route,
}

impl RouteMatch<'_> {
    /// Information attached to the request before the handler runs.
    pub fn resolved(&self) -> ResolvedRoute {
        ResolvedRoute {
            pattern: self.route.pattern().to_string(),
            name: self.route.name().map(str::to_string),
            handler: self.route.handler().label().to_string(),
        }
    }
}

/// Request extension describing the route that served a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRoute {
    pub pattern: String,
    pub name: Option<String>,
    pub handler: String,
}

/// Accumulates routes in declaration order.
#[derive(Default)]
pub struct RouteTableBuilder {
    routes: Vec<Route>,
}

impl RouteTableBuilder {
    /// Append a route. `name` of `None` or `Some("")` leaves the route unnamed.
    pub fn route(mut self, pattern: &str, handler: SharedHandler, name: Option<&str>) -> Self {
        self.routes.push(Route::new(pattern, handler, name));
        self
    }

    /// Freeze the table and build its indexes.
    pub fn build(self) -> RouteTable {
        let mut by_path = HashMap::with_capacity(self.routes.len());
        let mut by_name = HashMap::new();

        for (idx, route) in self.routes.iter().enumerate() {
            by_path.entry(route.pattern().to_string()).or_insert(idx);
            if let Some(name) = route.name() {
                by_name.insert(name.to_string(), idx);
            }
        }

        RouteTable {
            routes: self.routes,
            by_path,
            by_name,
        }
    }
}

/// Ordered, immutable collection of routes consulted per request.
pub struct RouteTable {
    routes: Vec<Route>,
    by_path: HashMap<String, usize>,
    by_name: HashMap<String, usize>,
}

impl RouteTable {
    pub fn builder() -> RouteTableBuilder {
        RouteTableBuilder::default()
    }

    /// Find the route whose pattern exactly matches the (already decoded) request path.
    pub fn resolve(&self, path: &str) -> Result<RouteMatch<'_>, RoutingError> {
        self.by_path
            .get(relative_path(path))
            .map(|&idx| RouteMatch {
                route: &self.routes[idx],
            })
            .ok_or_else(|| RoutingError::NotFound {
                path: path.to_string(),
            })
    }

    /// URL path of the route registered under `name`.
    pub fn reverse(&self, name: &str) -> Option<String> {
        self.by_name.get(name).map(|&idx| self.routes[idx].url_path())
    }

    /// Names declared by more than one route, in first-seen order.
    pub fn duplicate_names(&self) -> Vec<&str> {
        let mut seen: HashMap<&str, usize> = HashMap::new();
        let mut order = Vec::new();
        for name in self.routes.iter().filter_map(Route::name) {
            let count = seen.entry(name).or_insert(0);
            *count += 1;
            if *count == 2 {
                order.push(name);
            }
        }
        order
    }

    pub fn routes(&self) -> impl Iterator<Item = &Route> {
        self.routes.iter()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl fmt::Debug for RouteTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.routes.iter()).finish()
    }
}

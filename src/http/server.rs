//! HTTP server setup and request dispatch.
//!
//! # Responsibilities
//! - Build the route table selected by config
//! - Create the Axum Router with every request sent to the dispatcher
//! - Wire up middleware (tracing, timeout, request ID)
//! - Serve until the shutdown signal fires

use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::{
    body::Body,
    extract::State,
    http::{Method, Request},
    response::Response,
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::SiteConfig;
use crate::http::request::{propagate_request_id_layer, set_request_id_layer, RequestIdExt};
use crate::http::response;
use crate::observability::metrics;
use crate::routing::matcher::{append_slash_candidate, decode_path};
use crate::routing::{RouteTable, RoutingError};
use crate::urls;
use crate::views::Views;

/// Application state injected into the dispatcher.
#[derive(Clone)]
pub struct AppState {
    pub table: Arc<RouteTable>,
    pub append_slash: bool,
}

/// HTTP server for the site.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server serving the configured table over `views`.
    pub fn new(config: &SiteConfig, views: &Views) -> Self {
        let table = Arc::new(urls::build(config.routing.table, views));

        tracing::info!(
            table = %config.routing.table,
            routes = table.len(),
            append_slash = config.routing.append_slash,
            "Route table built"
        );
        for name in table.duplicate_names() {
            tracing::warn!(name = %name, "Route name registered more than once, last registration wins");
        }

        let state = AppState {
            table,
            append_slash: config.routing.append_slash,
        };

        let router = Self::build_router(config, state);
        Self { router }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &SiteConfig, state: AppState) -> Router {
        Router::new()
            .fallback(dispatch)
            .with_state(state)
            .layer(
                ServiceBuilder::new()
                    .layer(set_request_id_layer())
                    .layer(TraceLayer::new_for_http().make_span_with(|req: &Request<Body>| {
                        tracing::info_span!(
                            "request",
                            method = %req.method(),
                            path = %req.uri().path(),
                            request_id = %req.request_id().unwrap_or("unknown"),
                        )
                    }))
                    .layer(propagate_request_id_layer())
                    .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs))),
            )
    }

    /// The fully layered router, for driving the server without a socket.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server until `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Resolve the request path against the table and invoke the matched handler.
async fn dispatch(State(state): State<AppState>, mut request: Request<Body>) -> Response {
    let start = Instant::now();
    let path = decode_path(request.uri().path()).into_owned();

    let matched = state
        .table
        .resolve(&path)
        .map(|m| (m.route.handler().clone(), m.resolved()));

    let (handler, resolved) = match matched {
        Ok(found) => found,
        Err(err) => return unmatched(&state, &request, &path, err, start),
    };

    tracing::debug!(
        pattern = %resolved.pattern,
        name = resolved.name.as_deref().unwrap_or(""),
        handler = %resolved.handler,
        "Route matched"
    );

    let metric_route = format!("/{}", resolved.pattern);
    request.extensions_mut().insert(resolved);

    let response = handler.call(request).await;
    metrics::record_request(&metric_route, response.status().as_u16(), start);
    response
}

/// Answer a request whose decoded `path` has no route: append-slash redirect or 404.
fn unmatched(
    state: &AppState,
    request: &Request<Body>,
    path: &str,
    err: RoutingError,
    start: Instant,
) -> Response {
    let method = request.method();
    let redirect_allowed = state.append_slash && (method == Method::GET || method == Method::HEAD);
    if redirect_allowed {
        if let Some(candidate) = append_slash_candidate(path) {
            if state.table.resolve(&candidate).is_ok() {
                // Redirect to the path as the client sent it, still encoded.
                let raw = request.uri().path();
                let location = match request.uri().query() {
                    Some(query) => format!("{}/?{}", raw, query),
                    None => format!("{}/", raw),
                };
                tracing::debug!(path = %path, location = %location, "Appending slash");
                metrics::record_request("none", 301, start);
                return response::moved_permanently(location);
            }
        }
    }

    tracing::warn!(path = %path, error = %err, "No route matched");
    metrics::record_request("none", 404, start);
    response::not_found()
}

//! Metrics collection and exposition.
//!
//! # Metrics
//! - `pages_requests_total` (counter): requests by route and status
//! - `pages_request_duration_seconds` (histogram): dispatch latency by route
//!
//! Unmatched requests are recorded under the route label `none`.

use std::net::SocketAddr;
use std::time::Instant;

use metrics::{counter, histogram};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

/// Install the Prometheus recorder and its HTTP scrape listener.
///
/// Must be called from within a tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics endpoint listening");
    Ok(())
}

/// Record one dispatched request.
pub fn record_request(route: &str, status: u16, start: Instant) {
    let route = route.to_string();
    counter!(
        "pages_requests_total",
        "route" => route.clone(),
        "status" => status.to_string()
    )
    .increment(1);
    histogram!("pages_request_duration_seconds", "route" => route)
        .record(start.elapsed().as_secs_f64());
}

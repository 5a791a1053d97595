//! Prometheus metrics for HTTP request tracking.
//!
//! Metrics are recorded through the `metrics` facade. Without an installed
//! recorder they are no-ops; `install_exporter` wires up a Prometheus scrape
//! listener on its own port so no path of the main router is taken.

use std::net::SocketAddr;
use std::time::Instant;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use metrics::{counter, describe_counter, describe_histogram, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;
use tracing::{debug, info};

use crate::error::Result;

// === Metric Name Constants ===

/// HTTP request latency metric name.
pub const METRIC_HTTP_REQUEST_LATENCY: &str = "http_request_latency_ms";
/// HTTP requests counter metric name.
pub const METRIC_HTTP_REQUESTS: &str = "http_requests_total";

/// Initialize all metric descriptions.
/// Call this once at startup to register metrics with descriptions.
pub fn init_metrics() {
    describe_histogram!(
        METRIC_HTTP_REQUEST_LATENCY,
        "HTTP request latency in milliseconds"
    );
    describe_counter!(METRIC_HTTP_REQUESTS, "Total number of HTTP requests");

    debug!("Metrics initialized");
}

/// Install the Prometheus recorder and its HTTP scrape listener.
pub fn install_exporter(addr: SocketAddr) -> Result<()> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    info!("Prometheus metrics listening on {}", addr);
    Ok(())
}

/// Bounded label for a request path.
pub fn route_class(path: &str) -> &'static str {
    match path {
        "/api/health" => "health",
        "/api/status" => "status",
        "/openapi.json" | "/docs" => "docs",
        p if p.starts_with("/docs/") => "docs",
        p if p.starts_with("/assets/") => "assets",
        _ => "frontend",
    }
}

/// Which optional route groups the router mounted.
///
/// Paths belonging to a group that is not mounted fall through to the
/// router's 404 and are labelled `unmatched`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MountedRoutes {
    /// `/assets/*` and the `index.html` fallback.
    pub frontend: bool,
    /// `/docs` and `/openapi.json`.
    pub docs: bool,
}

impl MountedRoutes {
    /// Route label for `path` given what is mounted.
    pub fn classify(self, path: &str) -> &'static str {
        match route_class(path) {
            "docs" if !self.docs => "unmatched",
            "assets" | "frontend" if !self.frontend => "unmatched",
            class => class,
        }
    }
}

/// Record HTTP request count and latency.
pub fn record_http_request(start: Instant, method: &str, route: &'static str, status: u16) {
    let latency_ms = start.elapsed().as_secs_f64() * 1000.0;
    let status = status.to_string();
    counter!(
        METRIC_HTTP_REQUESTS,
        "method" => method.to_string(),
        "route" => route,
        "status" => status.clone()
    )
    .increment(1);
    histogram!(
        METRIC_HTTP_REQUEST_LATENCY,
        "method" => method.to_string(),
        "route" => route,
        "status" => status
    )
    .record(latency_ms);
}

/// Middleware recording every request that reaches the router.
pub async fn track_requests(
    State(mounted): State<MountedRoutes>,
    req: Request,
    next: Next,
) -> Response {
    let start = Instant::now();
    let method = req.method().clone();
    let route = mounted.classify(req.uri().path());

    let response = next.run(req).await;

    record_http_request(start, method.as_str(), route, response.status().as_u16());
    response
}

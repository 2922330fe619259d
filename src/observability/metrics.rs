//! Metrics collection and exposition.
//!
//! # Metrics
//! - `rota_http_requests_total` (counter): requests by method, status
//! - `rota_http_request_duration_seconds` (histogram): latency distribution
//! - `rota_routes_created_total` (counter): successful route creations
//! - `rota_route_rejections_total` (counter): failed creations by reason
//! - `rota_alerts_per_route` (histogram): alert count of each new route
//! - `rota_route_store_size` (gauge): routes held in memory
//!
//! Recording is a no-op until `init_metrics` installs the exporter.

use std::net::SocketAddr;
use std::time::Instant;

use axum::{body::Body, http::Request, middleware::Next, response::Response};
use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

/// Install the Prometheus exporter, serving `/metrics` on `addr`.
///
/// Must be called from within a tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics exporter listening");
    Ok(())
}

pub fn record_request(method: &str, status: u16, start: Instant) {
    let status = status.to_string();
    counter!("rota_http_requests_total", "method" => method.to_string(), "status" => status)
        .increment(1);
    histogram!("rota_http_request_duration_seconds", "method" => method.to_string())
        .record(start.elapsed().as_secs_f64());
}

pub fn record_route_created(alerts: usize) {
    counter!("rota_routes_created_total").increment(1);
    histogram!("rota_alerts_per_route").record(alerts as f64);
}

pub fn record_route_rejected(reason: &'static str) {
    counter!("rota_route_rejections_total", "reason" => reason).increment(1);
}

pub fn record_store_size(size: usize) {
    gauge!("rota_route_store_size").set(size as f64);
}

/// Middleware recording request count and latency.
pub async fn track_requests(request: Request<Body>, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().to_string();
    let response = next.run(request).await;
    record_request(&method, response.status().as_u16(), start);
    response
}

//! Prometheus metrics for posts-service.
//!
//! Collectors are registered in the default registry on first use and
//! rendered by the `/metrics` handler.

use actix_web::HttpResponse;
use lazy_static::lazy_static;
use prometheus::{
    register_histogram, register_histogram_vec, register_int_counter_vec, Encoder, Histogram,
    HistogramVec, IntCounterVec, TextEncoder,
};

lazy_static! {
    /// RPC procedure calls segmented by procedure and outcome (ok/error).
    pub static ref PROCEDURE_CALLS_TOTAL: IntCounterVec = register_int_counter_vec!(
        "posts_procedure_calls_total",
        "Posts procedure calls segmented by procedure and outcome",
        &["procedure", "outcome"]
    )
    .expect("failed to register posts_procedure_calls_total");

    /// Latency of batched identity lookups.
    pub static ref IDENTITY_LOOKUP_DURATION_SECONDS: Histogram = register_histogram!(
        "posts_identity_lookup_duration_seconds",
        "Duration of batched user lookups against the identity service"
    )
    .expect("failed to register posts_identity_lookup_duration_seconds");

    /// HTTP request duration by method, path and status.
    pub static ref HTTP_REQUEST_DURATION_SECONDS: HistogramVec = register_histogram_vec!(
        "posts_http_request_duration_seconds",
        "HTTP request duration segmented by method, path and status",
        &["method", "path", "status"]
    )
    .expect("failed to register posts_http_request_duration_seconds");
}

pub fn record_procedure<T, E>(procedure: &str, result: &Result<T, E>) {
    let outcome = if result.is_ok() { "ok" } else { "error" };
    PROCEDURE_CALLS_TOTAL
        .with_label_values(&[procedure, outcome])
        .inc();
}

/// Actix handler that renders Prometheus metrics in text format.
pub async fn serve_metrics() -> HttpResponse {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();

    let mut buffer = Vec::new();
    if let Err(err) = encoder.encode(&metric_families, &mut buffer) {
        return HttpResponse::InternalServerError().body(err.to_string());
    }

    HttpResponse::Ok()
        .content_type(encoder.format_type())
        .body(buffer)
}

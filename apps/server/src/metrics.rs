//! Metrics collection for the store lookup server
//!
//! This module defines and manages Prometheus metrics for monitoring the server.

use lazy_static::lazy_static;
use prometheus::{
    register_histogram, register_histogram_vec, register_int_counter_vec, register_int_gauge,
    register_int_gauge_vec, Histogram, HistogramVec, IntCounterVec, IntGauge, IntGaugeVec,
};

lazy_static! {
    // HTTP Request Metrics

    /// Total HTTP requests by method, path, and status
    pub static ref HTTP_REQUESTS_TOTAL: IntCounterVec = register_int_counter_vec!(
        "medfinder_http_requests_total",
        "Total number of HTTP requests",
        &["method", "path", "status"]
    )
    .expect("Failed to register HTTP_REQUESTS_TOTAL");

    /// HTTP request duration in seconds
    pub static ref HTTP_REQUEST_DURATION_SECONDS: HistogramVec = register_histogram_vec!(
        "medfinder_http_request_duration_seconds",
        "HTTP request duration in seconds",
        &["method", "path"],
        vec![0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0]
    )
    .expect("Failed to register HTTP_REQUEST_DURATION_SECONDS");

    /// In-flight HTTP requests
    pub static ref HTTP_REQUESTS_IN_FLIGHT: IntGaugeVec = register_int_gauge_vec!(
        "medfinder_http_requests_in_flight",
        "Number of HTTP requests currently being processed",
        &["method", "path"]
    )
    .expect("Failed to register HTTP_REQUESTS_IN_FLIGHT");

    // Lookup Metrics

    /// Store lookups by outcome (success, missing_filter, connection_error, ...)
    pub static ref STORE_LOOKUPS_TOTAL: IntCounterVec = register_int_counter_vec!(
        "medfinder_store_lookups_total",
        "Total number of store lookups",
        &["outcome"]
    )
    .expect("Failed to register STORE_LOOKUPS_TOTAL");

    /// Rows returned per successful lookup
    pub static ref STORE_LOOKUP_ROWS: Histogram = register_histogram!(
        "medfinder_store_lookup_rows",
        "Number of store entries returned by a lookup",
        vec![0.0, 1.0, 5.0, 10.0, 25.0, 50.0]
    )
    .expect("Failed to register STORE_LOOKUP_ROWS");

    // Database Metrics

    /// Database query duration
    pub static ref DB_QUERY_DURATION_SECONDS: HistogramVec = register_histogram_vec!(
        "medfinder_db_query_duration_seconds",
        "Database query duration in seconds",
        &["query_type"],
        vec![0.0001, 0.0005, 0.001, 0.005, 0.01, 0.05, 0.1, 0.5, 1.0, 5.0, 10.0]
    )
    .expect("Failed to register DB_QUERY_DURATION_SECONDS");

    /// Database query errors
    pub static ref DB_QUERY_ERRORS_TOTAL: IntCounterVec = register_int_counter_vec!(
        "medfinder_db_query_errors_total",
        "Total number of database query errors",
        &["query_type", "error_type"]
    )
    .expect("Failed to register DB_QUERY_ERRORS_TOTAL");

    /// Active database connections
    pub static ref DB_CONNECTIONS_ACTIVE: IntGauge = register_int_gauge!(
        "medfinder_db_connections_active",
        "Number of active database connections"
    )
    .expect("Failed to register DB_CONNECTIONS_ACTIVE");

    /// Idle database connections
    pub static ref DB_CONNECTIONS_IDLE: IntGauge = register_int_gauge!(
        "medfinder_db_connections_idle",
        "Number of idle database connections"
    )
    .expect("Failed to register DB_CONNECTIONS_IDLE");
}

/// Collapse a request path onto its route template to keep label cardinality bounded.
///
/// Known routes map to themselves (trailing slash removed); anything else is
/// reported as `/other` so scanners cannot inflate the label set.
pub fn sanitize_path(path: &str) -> String {
    let trimmed = if path.len() > 1 {
        path.trim_end_matches('/')
    } else {
        path
    };

    match trimmed {
        "" | "/" => "/".to_string(),
        "/fetch_stores" | "/fetch_stores.php" => "/fetch_stores".to_string(),
        "/health" | "/health/ready" | "/metrics" | "/favicon.ico" => trimmed.to_string(),
        _ => "/other".to_string(),
    }
}

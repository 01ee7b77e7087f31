//! API layer - routes, handlers, and middleware

pub mod envelope;
pub mod handlers;
pub mod middleware;
pub mod routes;

use crate::state::AppState;
use axum::{extract::DefaultBodyLimit, routing::get, Router};

/// Create the main application router
pub fn create_router(state: AppState) -> Router {
    let max_body_size = state.config.server.max_request_body_size;
    let cors_origins = state.config.server.cors_origins.clone();

    Router::new()
        // Liveness / readiness
        .route("/health", get(handlers::health::health_check))
        .route("/health/ready", get(handlers::health::readiness))
        // Root endpoint
        .route("/", get(handlers::health::root))
        // Favicon handler (returns 204 to prevent 404 logs)
        .route("/favicon.ico", get(handlers::health::favicon))
        // Metrics endpoint
        .merge(routes::metrics::metrics_routes())
        // Store lookup
        .merge(routes::stores::store_routes())
        .fallback(handlers::health::not_found)
        .with_state(state)
        // Middleware (applied in reverse order)
        .layer(axum::middleware::from_fn(
            middleware::security_headers_middleware,
        ))
        .layer(axum::middleware::from_fn(middleware::request_id_middleware))
        .layer(axum::middleware::from_fn(middleware::metrics_middleware))
        .layer(middleware::compression())
        .layer(middleware::cors(&cors_origins))
        // The lookup is GET-only; bodies are never read, so keep the limit small
        .layer(DefaultBodyLimit::max(max_body_size))
}

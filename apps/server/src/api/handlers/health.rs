//! Liveness, readiness and informational endpoints

use crate::{state::AppState, Error, Result};
use axum::{
    extract::State,
    http::{StatusCode, Uri},
    response::{IntoResponse, Json},
};
use serde_json::json;

pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "medfinder"
    }))
}

/// Ready when the database answers a trivial query.
pub async fn readiness(State(state): State<AppState>) -> Result<impl IntoResponse> {
    state
        .lookup_service
        .check_ready()
        .await
        .map_err(|e| Error::Unavailable(e.to_string()))?;

    Ok(Json(json!({ "status": "ok" })))
}

pub async fn root() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({
            "server": "Medfinder store lookup",
            "version": env!("CARGO_PKG_VERSION"),
            "status": "running"
        })),
    )
}

pub async fn favicon() -> impl IntoResponse {
    StatusCode::NO_CONTENT
}

pub async fn not_found(uri: Uri) -> impl IntoResponse {
    Error::NotFound(uri.path().to_string())
}

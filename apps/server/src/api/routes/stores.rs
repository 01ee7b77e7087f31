//! Store lookup routes
//!
//! `/fetch_stores` is served with and without a trailing slash, and under
//! `/fetch_stores.php` so existing clients of the legacy URL keep working.

use crate::api::handlers::stores;
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn store_routes() -> Router<AppState> {
    Router::new()
        .route("/fetch_stores", get(stores::fetch_stores))
        .route("/fetch_stores/", get(stores::fetch_stores))
        .route("/fetch_stores.php", get(stores::fetch_stores))
}

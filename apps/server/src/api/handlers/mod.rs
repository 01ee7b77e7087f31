//! Request handlers for API endpoints
//!
//! Handlers extract request data, call the service layer and wrap results
//! in the response envelope. Errors render themselves via `IntoResponse`.

pub mod health;
pub mod metrics;
pub mod stores;

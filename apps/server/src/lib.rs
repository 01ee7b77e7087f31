//! Medfinder - store lookup server
//!
//! A read-only HTTP service answering "which medical stores stock this
//! medicine?", filterable by medicine name, medicine id and postal code.
//! Backed by PostgreSQL tables owned by an external system.

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod services;
pub mod state;

pub use config::Config;
pub use error::{Error, Result};
pub use state::AppState;

//! Connection pool construction

use crate::config::DatabaseConfig;
use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions};
use std::str::FromStr;
use std::time::Duration;

/// Build a lazily connecting pool.
///
/// No connection is opened here: an unreachable database surfaces as a
/// per-request connection error instead of preventing start-up.
pub fn create_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    let mut options = PgConnectOptions::from_str(&config.url)?;
    if config.statement_timeout_seconds > 0 {
        options = options.options([(
            "statement_timeout",
            format!("{}s", config.statement_timeout_seconds),
        )]);
    }

    let pool = PgPoolOptions::new()
        .min_connections(config.pool_min_size)
        .max_connections(config.pool_max_size)
        .acquire_timeout(Duration::from_secs(config.pool_timeout_seconds))
        .connect_lazy_with(options);

    Ok(pool)
}

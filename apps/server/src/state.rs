//! Shared application state handed to every handler

use crate::{
    config::Config,
    db::{create_pool, AvailabilityStore, PostgresAvailabilityStore},
    services::{MetricsService, StoreLookupService},
    Error, Result,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub lookup_service: Arc<StoreLookupService>,
    pub metrics_service: Arc<MetricsService>,
}

impl AppState {
    /// Build state backed by the Postgres database named in `config`.
    ///
    /// The pool connects lazily, so this succeeds even while the database is down.
    pub fn new(config: Config) -> Result<Self> {
        let pool = create_pool(&config.database).map_err(Error::Connection)?;

        tracing::info!(
            pool_max_size = config.database.pool_max_size,
            statement_timeout_seconds = config.database.statement_timeout_seconds,
            "Database pool configured"
        );

        Ok(Self::with_store(
            config,
            Arc::new(PostgresAvailabilityStore::new(pool)),
        ))
    }

    /// Build state around an arbitrary availability store.
    pub fn with_store(config: Config, store: Arc<dyn AvailabilityStore>) -> Self {
        Self {
            config: Arc::new(config),
            lookup_service: Arc::new(StoreLookupService::new(store.clone())),
            metrics_service: Arc::new(MetricsService::new(store)),
        }
    }
}

//! Store lookup service
//!
//! Validates the sanitized filters, runs the lookup against the
//! availability store and shapes rows into response listings.

use crate::{
    db::{AvailabilityStore, StoreFilter, MAX_ROWS},
    models::StoreListing,
    Result,
};
use std::sync::Arc;

pub struct StoreLookupService {
    store: Arc<dyn AvailabilityStore>,
}

impl StoreLookupService {
    pub fn new(store: Arc<dyn AvailabilityStore>) -> Self {
        Self { store }
    }

    /// Find stores stocking a medicine.
    ///
    /// At least one filter must be present. The result never exceeds
    /// [`MAX_ROWS`] entries and is empty (not an error) when nothing matches.
    pub async fn find_stores(&self, filter: StoreFilter) -> Result<Vec<StoreListing>> {
        let outcome = self.find_stores_inner(filter).await;

        let label = match &outcome {
            Ok(_) => "success",
            Err(e) => e.kind(),
        };
        crate::metrics::STORE_LOOKUPS_TOTAL
            .with_label_values(&[label])
            .inc();

        outcome
    }

    async fn find_stores_inner(&self, filter: StoreFilter) -> Result<Vec<StoreListing>> {
        let filter = filter.require_any()?;

        tracing::debug!(
            medicine_name = ?filter.medicine_name,
            medicine_id = ?filter.medicine_id,
            pincode = ?filter.pincode,
            "Looking up stores"
        );

        let mut rows = self.store.find_stores(&filter).await?;
        rows.truncate(MAX_ROWS);

        crate::metrics::STORE_LOOKUP_ROWS.observe(rows.len() as f64);
        tracing::info!(rows = rows.len(), "Store lookup completed");

        Ok(rows.into_iter().map(StoreListing::from).collect())
    }

    /// Readiness check: the store can serve a trivial query.
    pub async fn check_ready(&self) -> Result<()> {
        self.store.ping().await
    }
}

//! Storage seam for the availability tables

use crate::{db::lookup::StoreFilter, models::StoreMedicineRow, Result};
use async_trait::async_trait;

/// Read access to stores, medicines and the availability relation.
///
/// The Postgres implementation is [`crate::db::PostgresAvailabilityStore`];
/// other backends (in-memory fixtures, proxies) only need to honor the
/// lookup semantics:
/// - name filter: case-insensitive substring of the medicine name
/// - `medicine_id` and `pincode`: exact equality
/// - filters are ANDed; rows ordered by store id then medicine id
/// - at most [`crate::db::lookup::MAX_ROWS`] rows
#[async_trait]
pub trait AvailabilityStore: Send + Sync {
    /// Find (store, medicine) pairs connected through an availability row.
    ///
    /// # Errors
    /// * `Connection` - no connection could be obtained
    /// * `QueryPreparation` - the statement was rejected by the database
    /// * `QueryExecution` - the statement failed while running or decoding
    async fn find_stores(&self, filter: &StoreFilter) -> Result<Vec<StoreMedicineRow>>;

    /// Cheap round-trip used by the readiness probe.
    async fn ping(&self) -> Result<()>;

    /// `(size, idle)` of the underlying connection pool, when there is one.
    fn pool_stats(&self) -> Option<(u32, usize)> {
        None
    }
}

//! PostgreSQL-backed availability store

use crate::{
    db::lookup::{execute::fetch_store_rows, StoreFilter},
    db::traits::AvailabilityStore,
    models::StoreMedicineRow,
    Error, Result,
};
use async_trait::async_trait;
use sqlx::PgPool;
use std::time::Instant;

#[derive(Clone)]
pub struct PostgresAvailabilityStore {
    pool: PgPool,
}

impl PostgresAvailabilityStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AvailabilityStore for PostgresAvailabilityStore {
    async fn find_stores(&self, filter: &StoreFilter) -> Result<Vec<StoreMedicineRow>> {
        // The connection returns to the pool when `conn` drops, on every path.
        let mut conn = self.pool.acquire().await.map_err(Error::Connection)?;

        let start = Instant::now();
        let result = fetch_store_rows(&mut conn, filter).await;
        crate::metrics::DB_QUERY_DURATION_SECONDS
            .with_label_values(&["store_lookup"])
            .observe(start.elapsed().as_secs_f64());

        if let Err(e) = &result {
            crate::metrics::DB_QUERY_ERRORS_TOTAL
                .with_label_values(&["store_lookup", e.kind()])
                .inc();
        }

        result
    }

    async fn ping(&self) -> Result<()> {
        let mut conn = self.pool.acquire().await.map_err(Error::Connection)?;
        sqlx::query("SELECT 1")
            .execute(&mut *conn)
            .await
            .map_err(Error::QueryExecution)?;
        Ok(())
    }

    fn pool_stats(&self) -> Option<(u32, usize)> {
        Some((self.pool.size(), self.pool.num_idle()))
    }
}

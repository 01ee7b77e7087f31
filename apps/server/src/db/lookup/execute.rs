use super::query_builder::{BindValue, StoreQueryBuilder};
use super::StoreFilter;
use crate::{models::StoreMedicineRow, Error, Result};
use sqlx::{Executor, FromRow, PgConnection, Statement};

/// Prepare and run the lookup on one connection.
///
/// Preparation and execution failures are reported separately so callers can
/// tell a schema mismatch from a runtime fault.
pub(crate) async fn fetch_store_rows(
    conn: &mut PgConnection,
    filter: &StoreFilter,
) -> Result<Vec<StoreMedicineRow>> {
    let (sql, bind_values) = StoreQueryBuilder::new(filter).build_sql();

    let statement = (&mut *conn)
        .prepare(&sql)
        .await
        .map_err(Error::QueryPreparation)?;

    let mut query = statement.query();
    for value in bind_values {
        query = match value {
            BindValue::Text(v) => query.bind(v),
            BindValue::Int(v) => query.bind(v),
        };
    }

    let rows = query
        .fetch_all(&mut *conn)
        .await
        .map_err(Error::QueryExecution)?;

    rows.iter()
        .map(StoreMedicineRow::from_row)
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(Error::QueryExecution)
}

use super::fixtures::Catalog;
use async_trait::async_trait;
use medfinder::{
    db::{AvailabilityStore, StoreFilter, MAX_ROWS},
    models::StoreMedicineRow,
    Error, Result,
};
use std::sync::Mutex;

/// In-memory availability store with the same matching rules as the SQL lookup.
pub struct InMemoryStore {
    catalog: Catalog,
    seen: Mutex<Vec<StoreFilter>>,
}

impl InMemoryStore {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            seen: Mutex::new(Vec::new()),
        }
    }

    /// Filters received so far, in call order.
    pub fn seen_filters(&self) -> Vec<StoreFilter> {
        self.seen.lock().expect("filter log poisoned").clone()
    }
}

#[async_trait]
impl AvailabilityStore for InMemoryStore {
    async fn find_stores(&self, filter: &StoreFilter) -> Result<Vec<StoreMedicineRow>> {
        self.seen
            .lock()
            .expect("filter log poisoned")
            .push(filter.clone());

        let needle = filter.medicine_name.as_ref().map(|n| n.to_lowercase());

        let mut rows: Vec<(i64, i64, StoreMedicineRow)> = self
            .catalog
            .availability
            .iter()
            .filter_map(|pair| {
                let store = self.catalog.stores.iter().find(|s| s.id == pair.store_id)?;
                let medicine = self
                    .catalog
                    .medicines
                    .iter()
                    .find(|m| m.id == pair.medicine_id)?;
                Some((store, medicine))
            })
            .filter(|(store, medicine)| {
                needle
                    .as_ref()
                    .map_or(true, |n| {
                        medicine
                            .medicine_name
                            .as_deref()
                            .is_some_and(|name| name.to_lowercase().contains(n))
                    })
                    && filter.medicine_id.map_or(true, |id| medicine.id == id)
                    && filter
                        .pincode
                        .as_ref()
                        .map_or(true, |code| store.pincode.as_ref() == Some(code))
            })
            .map(|(store, medicine)| {
                (
                    store.id,
                    medicine.id,
                    StoreMedicineRow::from_parts(store, medicine),
                )
            })
            .collect();

        rows.sort_by_key(|(store_id, medicine_id, _)| (*store_id, *medicine_id));
        Ok(rows
            .into_iter()
            .take(MAX_ROWS)
            .map(|(_, _, row)| row)
            .collect())
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}

/// How [`FailingStore`] fails.
#[derive(Debug, Clone, Copy)]
pub enum Failure {
    Connection,
    Preparation,
    Execution,
}

/// Store whose every call fails the same way.
pub struct FailingStore {
    failure: Failure,
}

impl FailingStore {
    pub fn new(failure: Failure) -> Self {
        Self { failure }
    }

    fn error(&self) -> Error {
        match self.failure {
            Failure::Connection => Error::Connection(sqlx::Error::PoolTimedOut),
            Failure::Preparation => Error::QueryPreparation(sqlx::Error::Protocol(
                "relation \"medicine_availability\" does not exist".to_string(),
            )),
            Failure::Execution => Error::QueryExecution(sqlx::Error::Protocol(
                "canceling statement due to statement timeout".to_string(),
            )),
        }
    }
}

#[async_trait]
impl AvailabilityStore for FailingStore {
    async fn find_stores(&self, _filter: &StoreFilter) -> Result<Vec<StoreMedicineRow>> {
        Err(self.error())
    }

    async fn ping(&self) -> Result<()> {
        Err(self.error())
    }
}

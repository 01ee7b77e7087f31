//! Stores, medicines and the availability relation between them
//!
//! All three tables are owned by an external system; this service only reads them.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A row of `medical_stores`
///
/// Only `id` is guaranteed; the owning system does not declare the other
/// columns `NOT NULL`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicalStore {
    pub id: i64,
    pub store_name: Option<String>,
    pub address: Option<String>,
    pub contact: Option<String>,
    /// Postal code
    pub pincode: Option<String>,
}

/// A row of `medicines`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Medicine {
    pub id: i64,
    pub medicine_name: Option<String>,
    pub brand_name: Option<String>,
    pub strength: Option<String>,
    pub price: Option<Decimal>,
}

/// A row of `medicine_availability`: the store stocks the medicine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MedicineAvailability {
    pub store_id: i64,
    pub medicine_id: i64,
}

/// One joined (store, medicine) row as returned by the lookup query
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct StoreMedicineRow {
    pub id: i64,
    pub store_name: Option<String>,
    pub address: Option<String>,
    pub contact: Option<String>,
    pub pincode: Option<String>,
    pub medicine_name: Option<String>,
    pub brand_name: Option<String>,
    pub strength: Option<String>,
    pub price: Option<Decimal>,
}

impl StoreMedicineRow {
    pub fn from_parts(store: &MedicalStore, medicine: &Medicine) -> Self {
        Self {
            id: store.id,
            store_name: store.store_name.clone(),
            address: store.address.clone(),
            contact: store.contact.clone(),
            pincode: store.pincode.clone(),
            medicine_name: medicine.medicine_name.clone(),
            brand_name: medicine.brand_name.clone(),
            strength: medicine.strength.clone(),
            price: medicine.price,
        }
    }
}

/// Response element: a store together with the matching medicine it stocks.
/// NULL columns are serialized as JSON `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreListing {
    pub id: i64,
    pub store_name: Option<String>,
    pub address: Option<String>,
    pub contact: Option<String>,
    pub pincode: Option<String>,
    pub medicine: MedicineSummary,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicineSummary {
    pub name: Option<String>,
    pub brand: Option<String>,
    pub strength: Option<String>,
    /// Serialized as a decimal string to keep exact precision
    pub price: Option<Decimal>,
}

impl From<StoreMedicineRow> for StoreListing {
    fn from(row: StoreMedicineRow) -> Self {
        Self {
            id: row.id,
            store_name: row.store_name,
            address: row.address,
            contact: row.contact,
            pincode: row.pincode,
            medicine: MedicineSummary {
                name: row.medicine_name,
                brand: row.brand_name,
                strength: row.strength,
                price: row.price,
            },
        }
    }
}

//! Domain models for the store lookup service

pub mod store;

pub use store::{MedicalStore, Medicine, MedicineAvailability, MedicineSummary, StoreListing, StoreMedicineRow};

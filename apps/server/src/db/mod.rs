//! Database layer - connection pool and data access

pub mod lookup;
pub mod pool;
pub mod store;
pub mod traits;

pub use lookup::{StoreFilter, MAX_ROWS};
pub use pool::create_pool;
pub use store::PostgresAvailabilityStore;
pub use traits::AvailabilityStore;

//! Store lookup: filter sanitization, SQL construction and execution.

mod escape;
pub(crate) mod execute;
pub mod params;
pub mod query_builder;

pub use params::StoreFilter;
pub use query_builder::{BindValue, StoreQueryBuilder, MAX_ROWS};

//! Service layer - business logic between handlers and storage

pub mod lookup;
pub mod metrics;

pub use lookup::StoreLookupService;
pub use metrics::MetricsService;

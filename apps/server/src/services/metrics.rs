//! Metrics service for collecting application metrics

use crate::db::AvailabilityStore;
use std::sync::Arc;

/// Service for collecting application metrics
pub struct MetricsService {
    store: Arc<dyn AvailabilityStore>,
}

impl MetricsService {
    pub fn new(store: Arc<dyn AvailabilityStore>) -> Self {
        Self { store }
    }

    /// Update database connection pool metrics
    pub fn update_db_connection_metrics(&self) {
        let Some((pool_size, idle)) = self.store.pool_stats() else {
            return;
        };
        let idle = idle as u32;

        crate::metrics::DB_CONNECTIONS_ACTIVE.set(pool_size.saturating_sub(idle) as i64);
        crate::metrics::DB_CONNECTIONS_IDLE.set(idle as i64);
    }

    /// Metrics rendered by hand rather than through the registry
    pub fn collect_custom_metrics(&self, server_version: &str) -> String {
        let mut output = String::new();
        output.push_str("# HELP medfinder_server_info Store lookup server information\n");
        output.push_str("# TYPE medfinder_server_info gauge\n");
        output.push_str(&format!(
            "medfinder_server_info{{version=\"{}\"}} 1\n",
            server_version
        ));

        output
    }
}

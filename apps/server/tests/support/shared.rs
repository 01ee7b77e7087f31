use medfinder::Config;

/// Database URL for the Postgres-backed suite, if one is configured.
///
/// Read from `database.test_database_url`
/// (`MEDFINDER_DATABASE__TEST_DATABASE_URL`) or `MEDFINDER_TEST_DATABASE_URL`.
pub fn test_database_url() -> Option<String> {
    if let Ok(url) = std::env::var("MEDFINDER_TEST_DATABASE_URL") {
        if !url.trim().is_empty() {
            return Some(url);
        }
    }
    Config::load()
        .ok()
        .and_then(|config| config.database.test_database_url)
        .filter(|url| !url.trim().is_empty())
}

pub fn init_tracing() {
    use std::sync::OnceLock;
    use tracing_subscriber::prelude::*;
    static INIT: OnceLock<()> = OnceLock::new();
    INIT.get_or_init(|| {
        let _ = tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "medfinder=warn,sqlx=warn".into()),
            )
            .with(tracing_subscriber::fmt::layer().with_test_writer())
            .try_init();
    });
}

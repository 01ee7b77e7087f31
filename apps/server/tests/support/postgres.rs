use super::{fixtures::Catalog, shared, TestApp};
use anyhow::Context as _;
use futures::FutureExt as _;
use medfinder::{
    db::{create_pool, PostgresAvailabilityStore},
    Config,
};
use sqlx::{Connection as _, PgPool};
use std::sync::Arc;
use url::Url;
use uuid::Uuid;

/// The reference DDL shipped with the server.
pub const SCHEMA_SQL: &str = include_str!("../../sql/schema.sql");

/// INTEGER ids, VARCHAR text and nullable columns.
pub const LEGACY_SCHEMA_SQL: &str = include_str!("legacy_schema.sql");

/// A [`TestApp`] on top of a private Postgres schema seeded from a [`Catalog`].
pub struct PostgresTestApp {
    pub app: TestApp,
    pub pool: PgPool,
    schema: String,
    admin_database_url: String,
}

impl PostgresTestApp {
    async fn new(
        admin_database_url: String,
        schema_sql: &str,
        catalog: &Catalog,
    ) -> anyhow::Result<Self> {
        let schema = format!("test_{}", Uuid::new_v4().simple());
        let mut admin_conn = sqlx::PgConnection::connect(&admin_database_url)
            .await
            .context("connect admin db for schema create")?;
        sqlx::query(&format!(r#"CREATE SCHEMA "{}""#, schema))
            .execute(&mut admin_conn)
            .await
            .context("create test schema")?;

        let mut config = Config::default();
        config.database.url = with_search_path(&admin_database_url, &schema)?;
        config.database.pool_max_size = 2;
        config.database.pool_timeout_seconds = 30;

        let pool = create_pool(&config.database).context("create test pool")?;
        sqlx::raw_sql(schema_sql)
            .execute(&pool)
            .await
            .context("load schema DDL")?;
        seed(&pool, catalog).await?;

        let store = Arc::new(PostgresAvailabilityStore::new(pool.clone()));
        let app = TestApp::with_store_and_config(store, |c| *c = config);

        Ok(Self {
            app,
            pool,
            schema,
            admin_database_url,
        })
    }

    async fn cleanup(self) -> anyhow::Result<()> {
        self.pool.close().await;

        let mut admin_conn = sqlx::PgConnection::connect(&self.admin_database_url)
            .await
            .context("connect admin db for schema drop")?;
        sqlx::query(&format!(r#"DROP SCHEMA "{}" CASCADE"#, self.schema))
            .execute(&mut admin_conn)
            .await
            .context("drop test schema")?;

        Ok(())
    }
}

async fn seed(pool: &PgPool, catalog: &Catalog) -> anyhow::Result<()> {
    for store in &catalog.stores {
        sqlx::query(
            "INSERT INTO medical_stores (id, store_name, address, contact, pincode) \
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(store.id)
        .bind(&store.store_name)
        .bind(&store.address)
        .bind(&store.contact)
        .bind(&store.pincode)
        .execute(pool)
        .await
        .context("insert store")?;
    }

    for medicine in &catalog.medicines {
        sqlx::query(
            "INSERT INTO medicines (id, medicine_name, brand_name, strength, price) \
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(medicine.id)
        .bind(&medicine.medicine_name)
        .bind(&medicine.brand_name)
        .bind(&medicine.strength)
        .bind(medicine.price)
        .execute(pool)
        .await
        .context("insert medicine")?;
    }

    for pair in &catalog.availability {
        sqlx::query("INSERT INTO medicine_availability (store_id, medicine_id) VALUES ($1, $2)")
            .bind(pair.store_id)
            .bind(pair.medicine_id)
            .execute(pool)
            .await
            .context("insert availability")?;
    }

    Ok(())
}

/// Run `f` against a Postgres app built from `sql/schema.sql` and seeded with `catalog`.
pub async fn with_postgres_app<F>(catalog: Catalog, f: F) -> anyhow::Result<()>
where
    F: for<'a> FnOnce(
        &'a PostgresTestApp,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = anyhow::Result<()>> + 'a>,
    >,
{
    with_postgres_app_on_schema(SCHEMA_SQL, catalog, f).await
}

/// Run `f` against a seeded Postgres app whose tables are created by
/// `schema_sql`, dropping the schema afterwards.
///
/// Returns `Ok(())` without running `f` when no test database is configured.
pub async fn with_postgres_app_on_schema<F>(
    schema_sql: &str,
    catalog: Catalog,
    f: F,
) -> anyhow::Result<()>
where
    F: for<'a> FnOnce(
        &'a PostgresTestApp,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = anyhow::Result<()>> + 'a>,
    >,
{
    shared::init_tracing();
    let Some(url) = shared::test_database_url() else {
        eprintln!("skipping: no test database configured (MEDFINDER_TEST_DATABASE_URL)");
        return Ok(());
    };

    let app = PostgresTestApp::new(url, schema_sql, &catalog).await?;

    let result = std::panic::AssertUnwindSafe(f(&app)).catch_unwind().await;
    let cleanup_result = app.cleanup().await;

    if let Err(e) = cleanup_result {
        eprintln!("test schema cleanup failed: {e:?}");
    }

    match result {
        Ok(r) => r,
        Err(panic) => std::panic::resume_unwind(panic),
    }
}

fn with_search_path(database_url: &str, schema: &str) -> anyhow::Result<String> {
    let mut url = Url::parse(database_url).context("parse database URL")?;
    url.query_pairs_mut()
        .append_pair("options", &format!("-c search_path={}", schema));
    Ok(url.to_string())
}

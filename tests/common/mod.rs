// common/mod.rs - Database helpers for the DB-backed suites
//
// Every test works in its own schema, created fresh and dropped afterwards,
// so suites can run in parallel and repeatedly. Without DATABASE_URL the
// helpers report "no database" and the tests return early.

#![allow(dead_code)]

use service_site::fixtures::tables::ServicePagesTable;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::future::Future;
use std::time::Duration;

/// Pool for DATABASE_URL, or `None` when no database is configured
pub async fn create_test_pool() -> anyhow::Result<Option<PgPool>> {
    dotenv::dotenv().ok();
    let Ok(url) = std::env::var("DATABASE_URL") else {
        eprintln!("DATABASE_URL not set, skipping database test");
        return Ok(None);
    };

    let pool = PgPoolOptions::new()
        .max_connections(4)
        .acquire_timeout(Duration::from_secs(5))
        .connect(&url)
        .await?;
    Ok(Some(pool))
}

pub async fn drop_schema(pool: &PgPool, schema: &str) -> anyhow::Result<()> {
    sqlx::raw_sql(&format!("DROP SCHEMA IF EXISTS {schema} CASCADE"))
        .execute(pool)
        .await?;
    Ok(())
}

/// Empty service_pages table under `schema`, replacing any previous one
pub async fn create_schema(pool: &PgPool, schema: &str) -> anyhow::Result<()> {
    drop_schema(pool, schema).await?;
    for statement in ServicePagesTable::setup_sql_for_schema(schema) {
        sqlx::raw_sql(&statement).execute(pool).await?;
    }
    Ok(())
}

/// `test_<name>` with anything outside `[a-z0-9_]` folded to `_`,
/// short enough for a PostgreSQL identifier
pub fn schema_name_for(test_name: &str) -> String {
    let name: String = test_name
        .to_ascii_lowercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .take(50)
        .collect();
    format!("test_{name}")
}

/// Runs `body` against a fresh schema and drops it afterwards
pub async fn with_test_db<F, Fut>(test_name: &str, body: F) -> anyhow::Result<()>
where
    F: FnOnce(PgPool, String) -> Fut,
    Fut: Future<Output = anyhow::Result<()>>,
{
    let Some(pool) = create_test_pool().await? else {
        return Ok(());
    };
    let schema = schema_name_for(test_name);
    create_schema(&pool, &schema).await?;

    let outcome = body(pool.clone(), schema.clone()).await;

    // Drop even when the body failed
    drop_schema(&pool, &schema).await?;
    outcome
}

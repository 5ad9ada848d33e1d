// web_app/api/db.rs - Process-wide PostgreSQL pool
//
// The server binary installs its pool once at startup; server functions
// read it back without touching the request. Integration tests install
// their own pool with `set_test_pool`, which takes precedence.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::sync::{Mutex, OnceLock};

use super::config;

static POOL: OnceLock<PgPool> = OnceLock::new();
static OVERRIDE: Mutex<Option<PgPool>> = Mutex::new(None);

pub fn init_db(pool: PgPool) {
    match POOL.set(pool) {
        Ok(()) => tracing::info!("Database pool installed"),
        Err(_) => tracing::warn!("Database pool already installed; keeping the first one"),
    }
}

pub fn set_test_pool(pool: PgPool) {
    *OVERRIDE.lock().unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(pool);
}

/// The override pool if one is set, else the installed pool
pub fn get_db() -> Option<PgPool> {
    let overridden = OVERRIDE
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .clone();

    overridden.or_else(|| {
        let pool = POOL.get().cloned();
        if pool.is_none() {
            tracing::debug!("No database pool installed");
        }
        pool
    })
}

/// Pool for the configured DATABASE_URL
pub async fn create_pool() -> Result<PgPool, sqlx::Error> {
    create_pool_with(&config::database_url()).await
}

pub async fn create_pool_with(url: &str) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new().max_connections(10).connect(url).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_pool_rejects_malformed_url() {
        let err = create_pool_with("not a url").await;
        assert!(err.is_err());
    }

    #[tokio::test]
    #[ignore = "requires a running PostgreSQL at DATABASE_URL"]
    async fn test_create_pool() {
        dotenv::dotenv().ok();
        let pool = create_pool().await.expect("pool");

        let one: (i32,) = sqlx::query_as("SELECT 1").fetch_one(&pool).await.unwrap();
        assert_eq!(one.0, 1);
    }
}

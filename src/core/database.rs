use crate::core::config::DatabaseConfig;
use sqlx::{postgres::PgPoolOptions, PgPool};
use std::time::Duration;

/// Connection pools for the clip store.
///
/// Inserts go through `write`, reads through `read`. When no separate read URL
/// is configured both handles point at the same pool.
#[derive(Clone)]
pub struct DatabasePools {
    pub write: PgPool,
    pub read: PgPool,
}

pub async fn create_pool(config: &DatabaseConfig, url: &str) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
        .idle_timeout(Duration::from_secs(config.idle_timeout_secs))
        .max_lifetime(Duration::from_secs(config.max_lifetime_secs))
        .connect(url)
        .await
}

pub async fn create_pools(config: &DatabaseConfig) -> Result<DatabasePools, sqlx::Error> {
    let write = create_pool(config, &config.url).await?;
    let read = match config.read_url.as_deref() {
        Some(read_url) => create_pool(config, read_url).await?,
        None => write.clone(),
    };

    Ok(DatabasePools { write, read })
}

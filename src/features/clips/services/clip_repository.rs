use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::core::database::DatabasePools;
use crate::core::error::{AppError, Result};
use crate::features::clips::models::{Clip, NewClip};

/// Persistence for clips: insert with a store-generated id, read by id
#[async_trait]
pub trait ClipRepository: Send + Sync {
    async fn insert(&self, new_clip: NewClip) -> Result<Clip>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Clip>>;
}

/// PostgreSQL-backed clip repository
pub struct PgClipRepository {
    write_pool: PgPool,
    read_pool: PgPool,
}

impl PgClipRepository {
    pub fn new(pools: DatabasePools) -> Self {
        Self {
            write_pool: pools.write,
            read_pool: pools.read,
        }
    }
}

#[async_trait]
impl ClipRepository for PgClipRepository {
    async fn insert(&self, new_clip: NewClip) -> Result<Clip> {
        sqlx::query_as::<_, Clip>(
            r#"
            INSERT INTO audio_clips (title, storage_path)
            VALUES ($1, $2)
            RETURNING id, title, storage_path, created_at
            "#,
        )
        .bind(&new_clip.title)
        .bind(&new_clip.storage_path)
        .fetch_one(&self.write_pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert clip: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Clip>> {
        let clip = sqlx::query_as::<_, Clip>(
            r#"
            SELECT id, title, storage_path, created_at
            FROM audio_clips
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.read_pool)
        .await?;

        Ok(clip)
    }
}

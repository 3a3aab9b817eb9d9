use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for a shared audio clip
#[derive(Debug, Clone, FromRow)]
pub struct Clip {
    pub id: Uuid,
    pub title: Option<String>,
    /// Key of the recording in the public bucket
    pub storage_path: String,
    pub created_at: DateTime<Utc>,
}

/// Values supplied when inserting a clip; the id is assigned by the store
#[derive(Debug, Clone)]
pub struct NewClip {
    pub title: Option<String>,
    pub storage_path: String,
}

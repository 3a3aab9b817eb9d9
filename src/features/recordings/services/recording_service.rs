use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::recordings::dtos::{essence, extension_for_content_type, StoredRecordingDto};
use crate::modules::storage::ObjectStorage;
use crate::shared::constants::AUDIO_CONTENT_TYPES;

/// Service storing recorded audio in the public bucket
pub struct RecordingService {
    storage: Arc<dyn ObjectStorage>,
    max_upload_bytes: usize,
}

impl RecordingService {
    pub fn new(storage: Arc<dyn ObjectStorage>, max_upload_bytes: usize) -> Self {
        Self {
            storage,
            max_upload_bytes,
        }
    }

    pub fn max_upload_bytes(&self) -> usize {
        self.max_upload_bytes
    }

    /// Store a recording under a freshly generated key.
    ///
    /// The key is `<uuid-v4>.<ext>`; an existing object is never overwritten.
    pub async fn store(&self, data: Vec<u8>, content_type: &str) -> Result<StoredRecordingDto> {
        if data.is_empty() {
            return Err(AppError::BadRequest("Recording is empty".to_string()));
        }

        if data.len() > self.max_upload_bytes {
            return Err(AppError::BadRequest(format!(
                "Recording too large. Maximum size is {} bytes ({} MB)",
                self.max_upload_bytes,
                self.max_upload_bytes / 1024 / 1024
            )));
        }

        let extension = extension_for_content_type(content_type).ok_or_else(|| {
            let allowed: Vec<&str> = AUDIO_CONTENT_TYPES.iter().map(|(ct, _)| *ct).collect();
            AppError::BadRequest(format!(
                "File type '{}' is not allowed. Allowed types: {}",
                content_type,
                allowed.join(", ")
            ))
        })?;

        let storage_path = format!("{}.{}", Uuid::new_v4(), extension);
        let size = data.len();

        self.storage
            .put_new(&storage_path, data, &essence(content_type))
            .await?;

        info!(
            "Recording stored: storage_path={}, size={}",
            storage_path, size
        );

        Ok(StoredRecordingDto {
            url: self.storage.public_url(&storage_path),
            storage_path,
        })
    }
}

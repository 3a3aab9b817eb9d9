use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::clips::dtos::{CreateClipDto, CreateClipResponseDto};
use crate::features::clips::models::{Clip, NewClip};
use crate::features::clips::services::ClipRepository;
use crate::modules::storage::ObjectStorage;

/// Settings for the clip service
#[derive(Debug, Clone)]
pub struct ClipServiceSettings {
    /// Base URL of short links, without trailing slash
    pub public_base_url: String,
    /// Reject clips whose recording is not in the bucket
    pub verify_storage_path: bool,
}

/// A clip looked up by its short-link id, with the URLs needed to render it
#[derive(Debug, Clone)]
pub struct ResolvedClip {
    pub clip: Clip,
    pub page_url: String,
    pub audio_url: String,
}

/// Service for creating and resolving clips
pub struct ClipService {
    repository: Arc<dyn ClipRepository>,
    storage: Arc<dyn ObjectStorage>,
    settings: ClipServiceSettings,
}

impl ClipService {
    pub fn new(
        repository: Arc<dyn ClipRepository>,
        storage: Arc<dyn ObjectStorage>,
        settings: ClipServiceSettings,
    ) -> Self {
        Self {
            repository,
            storage,
            settings,
        }
    }

    /// Insert a clip for an uploaded recording and return its share link
    pub async fn create(&self, dto: CreateClipDto) -> Result<CreateClipResponseDto> {
        let storage_path = dto
            .storage_path
            .filter(|p| !p.trim().is_empty())
            .ok_or_else(|| AppError::Validation("Missing storage_path".to_string()))?;

        if self.settings.verify_storage_path && !self.storage.exists(&storage_path).await? {
            return Err(AppError::Validation(format!(
                "Recording '{}' does not exist",
                storage_path
            )));
        }

        // The title is stored exactly as supplied; word limits are a recorder-page concern
        let clip = self
            .repository
            .insert(NewClip {
                title: dto.title,
                storage_path,
            })
            .await?;

        info!(
            "Clip created: id={}, storage_path={}, titled={}",
            clip.id,
            clip.storage_path,
            clip.title.is_some()
        );

        Ok(CreateClipResponseDto {
            url: self.share_url(clip.id),
        })
    }

    /// Look up a clip by the id segment of its short link.
    ///
    /// Ids that are not UUIDs cannot exist and resolve to `NotFound`.
    pub async fn resolve(&self, raw_id: &str) -> Result<ResolvedClip> {
        let id = Uuid::parse_str(raw_id)
            .map_err(|_| AppError::NotFound(format!("Clip '{}' not found", raw_id)))?;

        let clip = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Clip '{}' not found", id)))?;

        Ok(ResolvedClip {
            page_url: self.share_url(clip.id),
            audio_url: self.storage.public_url(&clip.storage_path),
            clip,
        })
    }

    pub fn share_url(&self, id: Uuid) -> String {
        format!("{}/c/{}", self.settings.public_base_url, id)
    }
}

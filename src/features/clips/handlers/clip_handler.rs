use std::sync::Arc;

use axum::{extract::State, Json};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::clips::dtos::{CreateClipDto, CreateClipResponseDto};
use crate::features::clips::services::ClipService;
use crate::shared::types::ErrorResponse;
use crate::shared::validation::first_error_message;

/// Create a clip for an uploaded recording
///
/// Public endpoint. Any caller may create a clip pointing at any storage path;
/// the response carries the short link to share.
#[utoipa::path(
    post,
    path = "/api/create",
    request_body = CreateClipDto,
    responses(
        (status = 200, description = "Clip created", body = CreateClipResponseDto),
        (status = 400, description = "Missing storage_path or malformed body", body = ErrorResponse),
        (status = 500, description = "Insert failed", body = ErrorResponse)
    ),
    tag = "clips"
)]
pub async fn create_clip(
    State(service): State<Arc<ClipService>>,
    AppJson(dto): AppJson<CreateClipDto>,
) -> Result<Json<CreateClipResponseDto>> {
    dto.validate()
        .map_err(|e| AppError::Validation(first_error_message(&e)))?;

    let response = service.create(dto).await?;
    Ok(Json(response))
}

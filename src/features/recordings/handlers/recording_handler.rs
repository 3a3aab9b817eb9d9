use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;
use tracing::debug;

use crate::core::error::AppError;
use crate::features::recordings::dtos::{StoredRecordingDto, UploadRecordingDto};
use crate::features::recordings::services::RecordingService;
use crate::shared::types::ErrorResponse;

/// Upload a recording
///
/// Accepts multipart/form-data with a single `file` part carrying the audio
/// blob. The returned `storage_path` is what `/api/create` expects.
#[utoipa::path(
    post,
    path = "/api/recordings",
    tag = "recordings",
    request_body(
        content = UploadRecordingDto,
        content_type = "multipart/form-data",
        description = "Recorded audio blob",
    ),
    responses(
        (status = 201, description = "Recording stored", body = StoredRecordingDto),
        (status = 400, description = "Missing, empty, oversized or non-audio file", body = ErrorResponse),
        (status = 409, description = "Generated key already taken", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn upload_recording(
    State(service): State<Arc<RecordingService>>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<StoredRecordingDto>), AppError> {
    let mut file_data: Option<Vec<u8>> = None;
    let mut content_type: Option<String> = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        debug!("Failed to read multipart field: {}", e);
        AppError::BadRequest(format!("Failed to read multipart data: {}", e))
    })? {
        let field_name = field.name().unwrap_or("").to_string();

        if field_name != "file" {
            debug!("Ignoring unknown field: {}", field_name);
            continue;
        }

        let ct = field
            .content_type()
            .map(|s| s.to_string())
            .unwrap_or_else(|| "application/octet-stream".to_string());

        let data = field.bytes().await.map_err(|e| {
            debug!("Failed to read recording bytes: {}", e);
            AppError::BadRequest(format!("Failed to read recording data: {}", e))
        })?;

        file_data = Some(data.to_vec());
        content_type = Some(ct);
    }

    let file_data =
        file_data.ok_or_else(|| AppError::BadRequest("File is required".to_string()))?;
    let content_type =
        content_type.ok_or_else(|| AppError::BadRequest("Content type is required".to_string()))?;

    let stored = service.store(file_data, &content_type).await?;

    Ok((StatusCode::CREATED, Json(stored)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::{recordings_test_server, InMemoryObjectStorage};
    use axum_test::multipart::{MultipartForm, Part};
    use serde_json::Value;

    fn audio_form(bytes: Vec<u8>, mime: &str) -> MultipartForm {
        MultipartForm::new().add_part(
            "file",
            Part::bytes(bytes)
                .file_name("recording.webm")
                .mime_type(mime),
        )
    }

    #[tokio::test]
    async fn test_upload_stores_recording() {
        let storage = Arc::new(InMemoryObjectStorage::default());
        let server = recordings_test_server(storage.clone());

        let response = server
            .post("/api/recordings")
            .multipart(audio_form(b"webm-bytes".to_vec(), "audio/webm"))
            .await;

        response.assert_status(StatusCode::CREATED);
        let stored: StoredRecordingDto = response.json();
        assert!(stored.storage_path.ends_with(".webm"));
        assert_eq!(
            storage.object(&stored.storage_path),
            Some((b"webm-bytes".to_vec(), "audio/webm".to_string()))
        );
    }

    #[tokio::test]
    async fn test_upload_rejects_non_audio() {
        let storage = Arc::new(InMemoryObjectStorage::default());
        let server = recordings_test_server(storage.clone());

        let response = server
            .post("/api/recordings")
            .multipart(audio_form(b"<html>".to_vec(), "text/html"))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let error: Value = response.json();
        assert!(error["error"].as_str().unwrap().contains("not allowed"));
        assert_eq!(storage.len(), 0);
    }

    #[tokio::test]
    async fn test_upload_requires_file_part() {
        let server = recordings_test_server(Arc::new(InMemoryObjectStorage::default()));

        let form = MultipartForm::new().add_text("title", "hello");
        let response = server.post("/api/recordings").multipart(form).await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let error: Value = response.json();
        assert_eq!(error["error"], "File is required");
    }

    #[tokio::test]
    async fn test_upload_storage_failure_is_server_error() {
        let server = recordings_test_server(Arc::new(InMemoryObjectStorage::failing()));

        let response = server
            .post("/api/recordings")
            .multipart(audio_form(b"webm-bytes".to_vec(), "audio/webm"))
            .await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    }
}

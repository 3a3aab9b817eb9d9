use utoipa::{Modify, OpenApi};

use crate::features::clips::{dtos as clips_dtos, handlers as clips_handlers};
use crate::features::recordings::{dtos as recordings_dtos, handlers as recordings_handlers};
use crate::shared::types::ErrorResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        // Recordings (public)
        recordings_handlers::recording_handler::upload_recording,
        // Clips (public)
        clips_handlers::clip_handler::create_clip,
    ),
    components(
        schemas(
            // Shared
            ErrorResponse,
            // Recordings
            recordings_dtos::UploadRecordingDto,
            recordings_dtos::StoredRecordingDto,
            // Clips
            clips_dtos::CreateClipDto,
            clips_dtos::CreateClipResponseDto,
        )
    ),
    tags(
        (name = "recordings", description = "Recorded audio uploads (public)"),
        (name = "clips", description = "Shareable clip links (public)"),
    ),
    info(
        title = "AudioTweet API",
        version = "0.1.0",
        description = "API documentation for AudioTweet",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}

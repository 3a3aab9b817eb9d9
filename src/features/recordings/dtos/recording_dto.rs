use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::shared::constants::AUDIO_CONTENT_TYPES;

/// Upload recording request DTO for OpenAPI documentation
/// Note: This struct is for Swagger UI documentation only.
/// The actual handler uses axum's Multipart extractor directly.
#[derive(Debug, ToSchema)]
#[allow(dead_code)]
pub struct UploadRecordingDto {
    /// The recorded audio blob
    #[schema(format = Binary, content_media_type = "audio/webm")]
    pub file: String,
}

/// Response DTO for a stored recording
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StoredRecordingDto {
    /// Generated object key, to be passed to `/api/create`
    #[schema(example = "0b7f5a52-3c55-4c1f-9a55-0f5b7b3f2d11.webm")]
    pub storage_path: String,
    /// Public URL of the stored recording
    pub url: String,
}

/// Strip parameters such as `;codecs=opus` and lowercase the media type
pub fn essence(content_type: &str) -> String {
    content_type
        .split(';')
        .next()
        .unwrap_or("")
        .trim()
        .to_ascii_lowercase()
}

/// File extension for an accepted audio content type
pub fn extension_for_content_type(content_type: &str) -> Option<&'static str> {
    let essence = essence(content_type);
    AUDIO_CONTENT_TYPES
        .iter()
        .find(|(ct, _)| *ct == essence)
        .map(|(_, ext)| *ext)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_for_content_type() {
        assert_eq!(extension_for_content_type("audio/webm"), Some("webm"));
        assert_eq!(
            extension_for_content_type("audio/webm;codecs=opus"),
            Some("webm")
        );
        assert_eq!(extension_for_content_type("Audio/OGG"), Some("ogg"));
        assert_eq!(extension_for_content_type("audio/mpeg"), Some("mp3"));
        assert_eq!(extension_for_content_type("image/png"), None);
        assert_eq!(extension_for_content_type(""), None);
    }
}

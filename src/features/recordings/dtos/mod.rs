mod recording_dto;

pub use recording_dto::{essence, extension_for_content_type, StoredRecordingDto, UploadRecordingDto};

mod recording_service;

pub use recording_service::RecordingService;

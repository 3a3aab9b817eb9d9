/// Recording length ceiling in seconds
pub const DEFAULT_MAX_RECORDING_SECS: u32 = 120;

/// Maximum number of whitespace-separated words kept in a clip title
pub const DEFAULT_MAX_TITLE_WORDS: usize = 5;

/// Maximum number of characters kept in a clip title
pub const DEFAULT_MAX_TITLE_CHARS: usize = 60;

/// Title shown when a clip was saved without one
pub const DEFAULT_CLIP_TITLE: &str = "An audio recording";

// =============================================================================
// RECORDING UPLOADS
// =============================================================================

/// Content types accepted by the recording upload endpoint, with the file
/// extension used for the generated object key
pub const AUDIO_CONTENT_TYPES: &[(&str, &str)] = &[
    ("audio/webm", "webm"),
    ("audio/ogg", "ogg"),
    ("audio/mp4", "m4a"),
    ("audio/mpeg", "mp3"),
    ("audio/wav", "wav"),
];

/// Query parameter value selecting the player-only rendering of a clip page
pub const PLAYER_MODE_FLAG: &str = "true";

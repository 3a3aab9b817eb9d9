mod clip_repository;
mod clip_service;
mod share_preview;

pub use clip_repository::{ClipRepository, PgClipRepository};
pub use clip_service::{ClipService, ClipServiceSettings, ResolvedClip};
pub use share_preview::SharePreview;

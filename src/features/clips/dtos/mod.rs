mod clip_dto;

pub use clip_dto::{ClipPageQuery, CreateClipDto, CreateClipResponseDto};

pub mod clip_handler;
pub mod page_handler;

pub use clip_handler::*;
pub use page_handler::{show_clip, ClipPageState};

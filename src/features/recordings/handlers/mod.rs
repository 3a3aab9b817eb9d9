pub mod recorder_page_handler;
pub mod recording_handler;

pub use recorder_page_handler::{show_recorder, RecorderPageState};
pub use recording_handler::*;

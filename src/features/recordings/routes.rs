use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::core::config::RecorderConfig;
use crate::features::recordings::handlers::{self, RecorderPageState};
use crate::features::recordings::services::RecordingService;
use crate::shared::templates::PageRenderer;

/// Create routes for the recordings feature
pub fn routes(
    service: Arc<RecordingService>,
    pages: Arc<PageRenderer>,
    recorder: Arc<RecorderConfig>,
    site_name: String,
) -> Router {
    // Allow body size up to the upload limit + buffer for multipart overhead
    let body_limit = service.max_upload_bytes() + 1024 * 1024;

    let page_state = RecorderPageState {
        pages,
        recorder,
        site_name,
    };

    Router::new()
        .route(
            "/api/recordings",
            post(handlers::upload_recording).layer(DefaultBodyLimit::max(body_limit)),
        )
        .with_state(service)
        .merge(
            Router::new()
                .route("/", get(handlers::show_recorder))
                .with_state(page_state),
        )
}

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::core::config::ShareConfig;
use crate::features::clips::handlers::{self, ClipPageState};
use crate::features::clips::services::ClipService;
use crate::shared::templates::PageRenderer;

/// Create routes for the clips feature
///
/// Both routes are public: clips need no authorization to create or play.
pub fn routes(
    service: Arc<ClipService>,
    pages: Arc<PageRenderer>,
    share: Arc<ShareConfig>,
) -> Router {
    let page_state = ClipPageState {
        service: Arc::clone(&service),
        pages,
        share,
    };

    Router::new()
        .route("/api/create", post(handlers::create_clip))
        .with_state(service)
        .merge(
            Router::new()
                .route("/c/{id}", get(handlers::show_clip))
                .with_state(page_state),
        )
}

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::Response};
use minijinja::context;

use crate::core::config::RecorderConfig;
use crate::shared::templates::PageRenderer;

/// Shared state of the recorder page
#[derive(Clone)]
pub struct RecorderPageState {
    pub pages: Arc<PageRenderer>,
    pub recorder: Arc<RecorderConfig>,
    pub site_name: String,
}

/// Render the record-and-upload page
pub async fn show_recorder(State(state): State<RecorderPageState>) -> Response {
    state.pages.respond(
        StatusCode::OK,
        "recorder.html",
        context! {
            site_name => state.site_name,
            max_recording_secs => state.recorder.max_recording_secs,
            max_title_words => state.recorder.max_title_words,
            max_title_chars => state.recorder.max_title_chars,
            upload_endpoint => "/api/recordings",
            create_endpoint => "/api/create",
        },
    )
}

#[cfg(test)]
mod tests {
    use crate::core::config::RecorderConfig;
    use crate::shared::test_helpers::{recorder_test_server, recordings_test_server, InMemoryObjectStorage};
    use std::sync::Arc;

    #[tokio::test]
    async fn test_recorder_page_embeds_limits() {
        let server = recordings_test_server(Arc::new(InMemoryObjectStorage::default()));

        let response = server.get("/").await;
        response.assert_status_ok();
        let html = response.text();

        assert!(html.contains("const MAX_SECONDS = 120;"));
        assert!(html.contains("const MAX_TITLE_WORDS = 5;"));
        assert!(html.contains("const MAX_TITLE_CHARS = 60;"));
        assert!(html.contains(r#"maxlength="60""#));
        assert!(html.contains(r#"const UPLOAD_ENDPOINT = "/api/recordings";"#));
        assert!(html.contains(r#"const CREATE_ENDPOINT = "/api/create";"#));
        assert!(html.contains("Max recording length: 120 seconds."));
    }

    #[tokio::test]
    async fn test_recorder_script_stops_at_ceiling() {
        let server = recordings_test_server(Arc::new(InMemoryObjectStorage::default()));
        let html = server.get("/").await.text();

        assert!(html.contains("ceiling = setTimeout(stopRecording, MAX_SECONDS * 1000);"));
        assert!(html.contains("elapsed = Math.min(elapsed + 1, MAX_SECONDS);"));
        assert!(html.contains("if (elapsed >= MAX_SECONDS) stopRecording();"));
    }

    #[tokio::test]
    async fn test_recorder_script_checks_status_before_parsing() {
        let server = recordings_test_server(Arc::new(InMemoryObjectStorage::default()));
        let html = server.get("/").await.text();

        assert!(html.contains(r#"const stored = await readJson(upload, "Failed to upload recording");"#));
        assert!(html.contains(r#"const data = await readJson(res, "Failed to create link");"#));
        assert!(!html.contains("await upload.json()"));
        assert!(!html.contains("await res.json()"));
    }

    #[tokio::test]
    async fn test_recorder_page_uses_configured_ceiling() {
        let config = RecorderConfig {
            max_recording_secs: 30,
            ..RecorderConfig::default()
        };
        let server = recorder_test_server(Arc::new(InMemoryObjectStorage::default()), config);

        let html = server.get("/").await.text();
        assert!(html.contains("const MAX_SECONDS = 30;"));
        assert!(!html.contains("const MAX_SECONDS = 120;"));
    }
}

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Response,
};
use minijinja::context;

use crate::core::config::ShareConfig;
use crate::core::error::AppError;
use crate::features::clips::dtos::ClipPageQuery;
use crate::features::clips::services::{ClipService, SharePreview};
use crate::shared::templates::PageRenderer;

/// Shared state of the clip page
#[derive(Clone)]
pub struct ClipPageState {
    pub service: Arc<ClipService>,
    pub pages: Arc<PageRenderer>,
    pub share: Arc<ShareConfig>,
}

/// Render the page behind a short link.
///
/// `?player=true` renders only the audio element, used as the embed target
/// for social-platform players.
pub async fn show_clip(
    State(state): State<ClipPageState>,
    Path(id): Path<String>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Response {
    let query = ClipPageQuery::from_pairs(pairs);
    let site_name = &state.share.site_name;

    match state.service.resolve(&id).await {
        Ok(resolved) => {
            let preview = SharePreview::build(&resolved, &state.share);
            let template = if query.is_player_mode() {
                "player.html"
            } else {
                "clip.html"
            };
            state
                .pages
                .respond(StatusCode::OK, template, context! { site_name, preview })
        }
        Err(AppError::NotFound(_)) => {
            state
                .pages
                .respond(StatusCode::NOT_FOUND, "not_found.html", context! { site_name })
        }
        Err(e) => {
            tracing::error!("Failed to resolve clip '{}': {}", id, e);
            state.pages.respond(
                e.status_code(),
                "error.html",
                context! { site_name, message => "This audio clip could not be loaded." },
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::features::clips::models::NewClip;
    use crate::features::clips::services::ClipRepository;
    use crate::shared::test_helpers::{
        clips_test_server, decode_html_entities, InMemoryClipRepository, InMemoryObjectStorage,
    };
    use axum::http::StatusCode;
    use fake::uuid::UUIDv4;
    use fake::Fake;
    use serde_json::json;
    use std::sync::Arc;
    use uuid::Uuid;

    async fn seed(repository: &InMemoryClipRepository, title: Option<&str>) -> Uuid {
        repository
            .insert(NewClip {
                title: title.map(str::to_string),
                storage_path: "abc.webm".to_string(),
            })
            .await
            .unwrap()
            .id
    }

    #[tokio::test]
    async fn test_created_clip_renders_player_and_title() {
        let server = clips_test_server(
            Arc::new(InMemoryClipRepository::default()),
            Arc::new(InMemoryObjectStorage::default()),
        );

        let created = server
            .post("/api/create")
            .json(&json!({"title": "hello world", "storage_path": "abc.webm"}))
            .await;
        created.assert_status_ok();
        let url = created.json::<serde_json::Value>()["url"]
            .as_str()
            .unwrap()
            .to_string();
        let path = url.strip_prefix("https://host").unwrap();

        let response = server.get(path).await;
        response.assert_status_ok();
        let html = decode_html_entities(&response.text());

        assert!(html.contains("<title>hello world</title>"));
        assert!(html.contains("<h1>hello world</h1>"));
        assert!(html.contains(r#"<audio controls src="https://storage.host/recordings/abc.webm">"#));
        assert!(html.contains("Share on X"));
    }

    #[tokio::test]
    async fn test_social_preview_tags() {
        let repository = Arc::new(InMemoryClipRepository::default());
        let id = seed(&repository, Some("hello world")).await;
        let server = clips_test_server(repository, Arc::new(InMemoryObjectStorage::default()));

        let html = decode_html_entities(&server.get(&format!("/c/{}", id)).await.text());
        let page_url = format!("https://host/c/{}", id);

        assert!(html.contains(r#"<meta property="og:title" content="hello world">"#));
        assert!(html.contains(&format!(r#"<meta property="og:url" content="{}">"#, page_url)));
        assert!(html.contains(r#"<meta name="twitter:card" content="player">"#));
        assert!(html.contains(&format!(
            r#"<meta name="twitter:player" content="{}?player=true">"#,
            page_url
        )));
        assert!(html.contains(
            r#"<meta name="twitter:player:stream" content="https://storage.host/recordings/abc.webm">"#
        ));
        assert!(html.contains(r#"<meta name="twitter:player:width" content="500">"#));
        assert!(html.contains(
            r#"<meta name="description" content="Listen to this audio clip. Recorded on AudioTweet.">"#
        ));
    }

    #[tokio::test]
    async fn test_untitled_clip_uses_generic_title() {
        let repository = Arc::new(InMemoryClipRepository::default());
        let id = seed(&repository, None).await;
        let server = clips_test_server(repository, Arc::new(InMemoryObjectStorage::default()));

        let html = server.get(&format!("/c/{}", id)).await.text();
        assert!(html.contains("<h1>An audio recording</h1>"));
    }

    #[tokio::test]
    async fn test_whitespace_title_is_rendered_as_stored() {
        let server = clips_test_server(
            Arc::new(InMemoryClipRepository::default()),
            Arc::new(InMemoryObjectStorage::default()),
        );

        for (title, heading) in [("   ", "<h1>   </h1>"), ("", "<h1>An audio recording</h1>")] {
            let created = server
                .post("/api/create")
                .json(&json!({"title": title, "storage_path": "abc.webm"}))
                .await;
            created.assert_status_ok();
            let url = created.json::<serde_json::Value>()["url"]
                .as_str()
                .unwrap()
                .to_string();

            let html = server
                .get(url.strip_prefix("https://host").unwrap())
                .await
                .text();
            assert!(html.contains(heading), "missing {:?} in page", heading);
        }
    }

    #[tokio::test]
    async fn test_player_mode_renders_only_audio() {
        let repository = Arc::new(InMemoryClipRepository::default());
        let id = seed(&repository, Some("hello world")).await;
        let server = clips_test_server(repository, Arc::new(InMemoryObjectStorage::default()));

        let response = server
            .get(&format!("/c/{}", id))
            .add_query_param("player", "true")
            .await;
        response.assert_status_ok();
        let html = decode_html_entities(&response.text());

        assert!(html.contains(
            r#"<audio controls autoplay src="https://storage.host/recordings/abc.webm">"#
        ));
        assert!(!html.contains("<h1>"));
        assert!(!html.contains("Share on X"));
    }

    #[tokio::test]
    async fn test_other_player_values_render_full_page() {
        let repository = Arc::new(InMemoryClipRepository::default());
        let id = seed(&repository, Some("hello world")).await;
        let server = clips_test_server(repository, Arc::new(InMemoryObjectStorage::default()));

        let html = server
            .get(&format!("/c/{}", id))
            .add_query_param("player", "yes")
            .await
            .text();
        assert!(html.contains("<h1>hello world</h1>"));
    }

    #[tokio::test]
    async fn test_repeated_player_param_renders_full_page() {
        let repository = Arc::new(InMemoryClipRepository::default());
        let id = seed(&repository, Some("hello world")).await;
        let server = clips_test_server(repository, Arc::new(InMemoryObjectStorage::default()));

        let response = server
            .get(&format!("/c/{}?player=true&player=false", id))
            .await;
        response.assert_status_ok();
        let html = response.text();
        assert!(html.contains("<h1>hello world</h1>"));
        assert!(html.contains("Share on X"));
    }

    #[tokio::test]
    async fn test_repeated_player_param_on_unknown_id_is_not_found() {
        let server = clips_test_server(
            Arc::new(InMemoryClipRepository::default()),
            Arc::new(InMemoryObjectStorage::default()),
        );

        let random: Uuid = UUIDv4.fake();
        let response = server
            .get(&format!("/c/{}?player=true&player=true", random))
            .expect_failure()
            .await;
        response.assert_status(StatusCode::NOT_FOUND);
        assert!(response.text().contains("could not be found"));
    }

    #[tokio::test]
    async fn test_unknown_id_is_not_found() {
        let server = clips_test_server(
            Arc::new(InMemoryClipRepository::default()),
            Arc::new(InMemoryObjectStorage::default()),
        );

        let random: Uuid = UUIDv4.fake();
        let response = server
            .get(&format!("/c/{}", random))
            .expect_failure()
            .await;
        response.assert_status(StatusCode::NOT_FOUND);
        assert!(response.text().contains("could not be found"));

        server
            .get("/c/not-a-uuid")
            .expect_failure()
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_store_failure_renders_error_page() {
        let server = clips_test_server(
            Arc::new(InMemoryClipRepository::failing("connection reset")),
            Arc::new(InMemoryObjectStorage::default()),
        );

        let random: Uuid = UUIDv4.fake();
        let response = server
            .get(&format!("/c/{}", random))
            .expect_failure()
            .await;
        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        let html = response.text();
        assert!(html.contains("could not be loaded"));
        assert!(!html.contains("connection reset"));
    }
}

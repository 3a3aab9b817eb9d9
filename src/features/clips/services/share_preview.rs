use serde::Serialize;

use crate::core::config::ShareConfig;
use crate::features::clips::services::ResolvedClip;
use crate::shared::constants::PLAYER_MODE_FLAG;

const SHARE_INTENT_BASE: &str = "https://twitter.com/intent/tweet";

/// Values rendered into the clip page and its social-preview tags
#[derive(Debug, Clone, Serialize)]
pub struct SharePreview {
    pub site_name: String,
    pub title: String,
    pub description: String,
    pub page_url: String,
    /// Player-only page used as the `twitter:player` target
    pub player_url: String,
    pub audio_url: String,
    pub image_url: String,
    pub twitter_site: String,
    pub player_width: u32,
    pub player_height: u32,
    pub share_intent_url: String,
}

impl SharePreview {
    pub fn build(resolved: &ResolvedClip, share: &ShareConfig) -> Self {
        // Only a missing or empty title falls back; whitespace is kept as stored
        let title = resolved
            .clip
            .title
            .as_deref()
            .filter(|t| !t.is_empty())
            .unwrap_or(&share.default_title)
            .to_string();

        Self {
            site_name: share.site_name.clone(),
            title,
            description: share.description(),
            player_url: format!("{}?player={}", resolved.page_url, PLAYER_MODE_FLAG),
            share_intent_url: format!(
                "{}?url={}",
                SHARE_INTENT_BASE,
                urlencoding::encode(&resolved.page_url)
            ),
            page_url: resolved.page_url.clone(),
            audio_url: resolved.audio_url.clone(),
            image_url: share.preview_image_url.clone(),
            twitter_site: share.twitter_site.clone(),
            player_width: share.player_width,
            player_height: share.player_height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::clips::models::Clip;
    use crate::shared::test_helpers::test_share_config;
    use chrono::Utc;
    use uuid::Uuid;

    fn resolved(title: Option<&str>) -> ResolvedClip {
        let id = Uuid::new_v4();
        ResolvedClip {
            clip: Clip {
                id,
                title: title.map(str::to_string),
                storage_path: "abc.webm".to_string(),
                created_at: Utc::now(),
            },
            page_url: format!("https://host/c/{}", id),
            audio_url: "https://storage.host/recordings/abc.webm".to_string(),
        }
    }

    #[test]
    fn test_preview_uses_clip_title_and_urls() {
        let resolved = resolved(Some("hello world"));
        let preview = SharePreview::build(&resolved, &test_share_config());

        assert_eq!(preview.title, "hello world");
        assert_eq!(preview.page_url, resolved.page_url);
        assert_eq!(preview.player_url, format!("{}?player=true", resolved.page_url));
        assert_eq!(preview.audio_url, "https://storage.host/recordings/abc.webm");
        assert_eq!(preview.player_width, 500);
        assert_eq!(preview.player_height, 200);
        assert_eq!(
            preview.description,
            "Listen to this audio clip. Recorded on AudioTweet."
        );
    }

    #[test]
    fn test_preview_falls_back_to_generic_title() {
        let config = test_share_config();
        assert_eq!(SharePreview::build(&resolved(None), &config).title, "An audio recording");
        assert_eq!(
            SharePreview::build(&resolved(Some("")), &config).title,
            "An audio recording"
        );
        assert_eq!(SharePreview::build(&resolved(Some("  ")), &config).title, "  ");
    }

    #[test]
    fn test_share_intent_encodes_page_url() {
        let resolved = resolved(None);
        let preview = SharePreview::build(&resolved, &test_share_config());
        assert_eq!(
            preview.share_intent_url,
            format!(
                "https://twitter.com/intent/tweet?url=https%3A%2F%2Fhost%2Fc%2F{}",
                resolved.clip.id
            )
        );
    }
}

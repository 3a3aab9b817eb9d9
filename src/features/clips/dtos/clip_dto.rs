use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::shared::constants::PLAYER_MODE_FLAG;

/// Request DTO for creating a clip
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateClipDto {
    /// Optional title, truncated to the configured word and character limits
    #[schema(example = "hello world")]
    pub title: Option<String>,

    /// Key of the uploaded recording in the bucket
    #[serde(default)]
    #[schema(example = "0b7f5a52-3c55-4c1f-9a55-0f5b7b3f2d11.webm")]
    #[validate(
        required(message = "Missing storage_path"),
        custom(function = "crate::shared::validation::validate_not_blank", message = "Missing storage_path")
    )]
    pub storage_path: Option<String>,
}

/// Response DTO carrying the share link of a created clip
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateClipResponseDto {
    /// Fully-qualified short link, `<base-url>/c/<id>`
    #[schema(example = "https://audiotweet.example/c/5f0c6a4e-8a3b-4f8e-b6de-3cb1b0f0c9a1")]
    pub url: String,
}

/// Query parameters of the clip page
#[derive(Debug, Clone, Default)]
pub struct ClipPageQuery {
    /// `true` renders only the audio player (social-platform embeds)
    pub player: Option<String>,
}

impl ClipPageQuery {
    /// Build from raw query pairs. A repeated `player` key counts as absent.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut values = pairs
            .into_iter()
            .filter(|(key, _)| key == "player")
            .map(|(_, value)| value);

        let player = match (values.next(), values.next()) {
            (Some(value), None) => Some(value),
            _ => None,
        };

        Self { player }
    }

    pub fn is_player_mode(&self) -> bool {
        self.player.as_deref() == Some(PLAYER_MODE_FLAG)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_storage_path_fails_validation() {
        let dto: CreateClipDto = serde_json::from_str(r#"{"title":"hi"}"#).unwrap();
        assert!(dto.validate().is_err());

        let dto: CreateClipDto = serde_json::from_str(r#"{"storage_path":null}"#).unwrap();
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_blank_storage_path_fails_validation() {
        let dto: CreateClipDto = serde_json::from_str(r#"{"storage_path":""}"#).unwrap();
        assert!(dto.validate().is_err());

        let dto: CreateClipDto = serde_json::from_str(r#"{"storage_path":"   "}"#).unwrap();
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_valid_dto() {
        let dto: CreateClipDto =
            serde_json::from_str(r#"{"title":null,"storage_path":"abc.webm"}"#).unwrap();
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_player_mode_requires_exact_flag() {
        let query = |v: Option<&str>| ClipPageQuery {
            player: v.map(str::to_string),
        };
        assert!(query(Some("true")).is_player_mode());
        assert!(!query(Some("1")).is_player_mode());
        assert!(!query(Some("TRUE")).is_player_mode());
        assert!(!query(None).is_player_mode());
    }

    #[test]
    fn test_player_flag_from_query_pairs() {
        let pairs = |items: &[(&str, &str)]| {
            items
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect::<Vec<_>>()
        };

        assert!(ClipPageQuery::from_pairs(pairs(&[("player", "true")])).is_player_mode());
        assert!(
            ClipPageQuery::from_pairs(pairs(&[("utm_source", "x"), ("player", "true")]))
                .is_player_mode()
        );
        assert!(
            !ClipPageQuery::from_pairs(pairs(&[("player", "true"), ("player", "false")]))
                .is_player_mode()
        );
        assert!(
            !ClipPageQuery::from_pairs(pairs(&[("player", "true"), ("player", "true")]))
                .is_player_mode()
        );
        assert!(!ClipPageQuery::from_pairs(vec![]).is_player_mode());
    }
}

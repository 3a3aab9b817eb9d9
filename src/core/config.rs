use std::env;
use std::path::PathBuf;

use crate::shared::constants::{
    DEFAULT_CLIP_TITLE, DEFAULT_MAX_RECORDING_SECS, DEFAULT_MAX_TITLE_CHARS,
    DEFAULT_MAX_TITLE_WORDS,
};

#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub database: DatabaseConfig,
    pub swagger: SwaggerConfig,
    pub storage: StorageConfig,
    pub recorder: RecorderConfig,
    pub clips: ClipsConfig,
    pub share: ShareConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
    pub max_request_body_size: usize,
    /// Base URL used to build share links (no trailing slash)
    pub public_base_url: String,
    /// Optional directory with `*.jinja` files overriding the built-in page templates
    pub page_template_dir: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Service connection used for inserts
    pub url: String,
    /// Restricted connection used for reads (falls back to `url`)
    pub read_url: Option<String>,
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout_secs: u64,
    pub idle_timeout_secs: u64,
    pub max_lifetime_secs: u64,
}

#[derive(Debug, Clone)]
pub struct SwaggerConfig {
    pub username: Option<String>,
    pub password: Option<String>,
    pub title: String,
    pub version: String,
    pub description: String,
}

/// S3-compatible storage configuration for recordings
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// S3/MinIO endpoint URL
    pub endpoint: String,
    /// Endpoint used when building public object URLs (defaults to endpoint)
    pub public_endpoint: String,
    pub access_key: String,
    pub secret_key: String,
    /// Bucket holding the recordings
    pub bucket: String,
    pub region: String,
}

/// Limits applied by the recorder page and the upload endpoint
#[derive(Debug, Clone)]
pub struct RecorderConfig {
    pub max_recording_secs: u32,
    pub max_title_words: usize,
    pub max_title_chars: usize,
    pub max_upload_bytes: usize,
}

#[derive(Debug, Clone)]
pub struct ClipsConfig {
    /// Check that the referenced object exists before inserting a clip
    pub verify_storage_path: bool,
}

/// Settings for the social-preview metadata on clip pages
#[derive(Debug, Clone)]
pub struct ShareConfig {
    pub site_name: String,
    pub twitter_site: String,
    pub preview_image_url: String,
    pub default_title: String,
    pub player_width: u32,
    pub player_height: u32,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if exists, ignore if not found (optional for production)
        if let Err(e) = dotenvy::dotenv() {
            if !e.to_string().contains("not found") {
                eprintln!("Warning: Error loading .env file: {}", e);
            }
        }

        let app = AppConfig::from_env()?;
        let share = ShareConfig::from_env(&app.public_base_url)?;

        Ok(Config {
            database: DatabaseConfig::from_env()?,
            swagger: SwaggerConfig::from_env()?,
            storage: StorageConfig::from_env()?,
            recorder: RecorderConfig::from_env()?,
            clips: ClipsConfig::from_env()?,
            app,
            share,
        })
    }
}

impl AppConfig {
    const DEFAULT_MAX_REQUEST_BODY_SIZE: usize = 1024 * 1024; // 1MB

    pub fn from_env() -> Result<Self, String> {
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|e| format!("Invalid PORT: {}", e))?;

        // Parse CORS allowed origins from comma-separated string
        let cors_allowed_origins = env::var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let max_request_body_size = env::var("MAX_REQUEST_BODY_SIZE")
            .unwrap_or_else(|_| Self::DEFAULT_MAX_REQUEST_BODY_SIZE.to_string())
            .parse::<usize>()
            .map_err(|_| "MAX_REQUEST_BODY_SIZE must be a valid number".to_string())?;

        let public_base_url = normalize_base_url(
            &env::var("PUBLIC_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string()),
        );

        let page_template_dir = env::var("PAGE_TEMPLATE_DIR")
            .ok()
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);

        Ok(Self {
            host,
            port,
            cors_allowed_origins,
            max_request_body_size,
            public_base_url,
            page_template_dir,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl DatabaseConfig {
    // Default values for database connection pool (conservative defaults for small-medium apps)
    const DEFAULT_MAX_CONNECTIONS: u32 = 10;
    const DEFAULT_MIN_CONNECTIONS: u32 = 1;
    const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 5;
    const DEFAULT_IDLE_TIMEOUT_SECS: u64 = 600; // 10 minutes
    const DEFAULT_MAX_LIFETIME_SECS: u64 = 1800; // 30 minutes

    pub fn from_env() -> Result<Self, String> {
        let url = env::var("DATABASE_URL").map_err(|_| "DATABASE_URL must be set".to_string())?;
        let read_url = env::var("DATABASE_READ_URL").ok().filter(|s| !s.is_empty());

        let max_connections = env::var("DB_MAX_CONNECTIONS")
            .unwrap_or_else(|_| Self::DEFAULT_MAX_CONNECTIONS.to_string())
            .parse::<u32>()
            .map_err(|_| "DB_MAX_CONNECTIONS must be a valid number".to_string())?;

        let min_connections = env::var("DB_MIN_CONNECTIONS")
            .unwrap_or_else(|_| Self::DEFAULT_MIN_CONNECTIONS.to_string())
            .parse::<u32>()
            .map_err(|_| "DB_MIN_CONNECTIONS must be a valid number".to_string())?;

        let acquire_timeout_secs = env::var("DB_ACQUIRE_TIMEOUT_SECS")
            .unwrap_or_else(|_| Self::DEFAULT_ACQUIRE_TIMEOUT_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| "DB_ACQUIRE_TIMEOUT_SECS must be a valid number".to_string())?;

        let idle_timeout_secs = env::var("DB_IDLE_TIMEOUT_SECS")
            .unwrap_or_else(|_| Self::DEFAULT_IDLE_TIMEOUT_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| "DB_IDLE_TIMEOUT_SECS must be a valid number".to_string())?;

        let max_lifetime_secs = env::var("DB_MAX_LIFETIME_SECS")
            .unwrap_or_else(|_| Self::DEFAULT_MAX_LIFETIME_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| "DB_MAX_LIFETIME_SECS must be a valid number".to_string())?;

        Ok(Self {
            url,
            read_url,
            max_connections,
            min_connections,
            acquire_timeout_secs,
            idle_timeout_secs,
            max_lifetime_secs,
        })
    }
}

impl SwaggerConfig {
    pub fn from_env() -> Result<Self, String> {
        // Only use credentials if they are non-empty
        let username = env::var("SWAGGER_USERNAME").ok().filter(|s| !s.is_empty());
        let password = env::var("SWAGGER_PASSWORD").ok().filter(|s| !s.is_empty());
        let title = env::var("SWAGGER_TITLE").unwrap_or_else(|_| "AudioTweet API".to_string());
        let version = env::var("SWAGGER_VERSION").unwrap_or_else(|_| "0.1.0".to_string());
        let description = env::var("SWAGGER_DESCRIPTION")
            .unwrap_or_else(|_| "Anonymous audio clip sharing".to_string());

        Ok(Self {
            username,
            password,
            title,
            version,
            description,
        })
    }

    /// Returns credentials in "username:password" format if auth is enabled
    pub fn credentials(&self) -> Option<String> {
        match (&self.username, &self.password) {
            (Some(user), Some(pass)) => Some(format!("{}:{}", user, pass)),
            _ => None,
        }
    }
}

impl StorageConfig {
    pub fn from_env() -> Result<Self, String> {
        let endpoint = normalize_base_url(
            &env::var("STORAGE_ENDPOINT").unwrap_or_else(|_| "http://localhost:9000".to_string()),
        );

        // Public endpoint defaults to the main endpoint if not specified
        let public_endpoint = env::var("STORAGE_PUBLIC_ENDPOINT")
            .map(|s| normalize_base_url(&s))
            .unwrap_or_else(|_| endpoint.clone());

        let access_key =
            env::var("STORAGE_ACCESS_KEY").unwrap_or_else(|_| "minioadmin".to_string());

        let secret_key =
            env::var("STORAGE_SECRET_KEY").unwrap_or_else(|_| "minioadmin".to_string());

        let bucket = env::var("STORAGE_BUCKET").unwrap_or_else(|_| "recordings".to_string());

        let region = env::var("STORAGE_REGION").unwrap_or_else(|_| "us-east-1".to_string());

        Ok(Self {
            endpoint,
            public_endpoint,
            access_key,
            secret_key,
            bucket,
            region,
        })
    }
}

impl RecorderConfig {
    const DEFAULT_MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024; // 20MB

    pub fn from_env() -> Result<Self, String> {
        let max_recording_secs = env::var("MAX_RECORDING_SECS")
            .unwrap_or_else(|_| DEFAULT_MAX_RECORDING_SECS.to_string())
            .parse::<u32>()
            .map_err(|_| "MAX_RECORDING_SECS must be a valid number".to_string())?;
        if max_recording_secs == 0 {
            return Err("MAX_RECORDING_SECS must be greater than zero".to_string());
        }

        let max_title_words = env::var("MAX_TITLE_WORDS")
            .unwrap_or_else(|_| DEFAULT_MAX_TITLE_WORDS.to_string())
            .parse::<usize>()
            .map_err(|_| "MAX_TITLE_WORDS must be a valid number".to_string())?;

        let max_title_chars = env::var("MAX_TITLE_CHARS")
            .unwrap_or_else(|_| DEFAULT_MAX_TITLE_CHARS.to_string())
            .parse::<usize>()
            .map_err(|_| "MAX_TITLE_CHARS must be a valid number".to_string())?;

        let max_upload_bytes = env::var("MAX_UPLOAD_BYTES")
            .unwrap_or_else(|_| Self::DEFAULT_MAX_UPLOAD_BYTES.to_string())
            .parse::<usize>()
            .map_err(|_| "MAX_UPLOAD_BYTES must be a valid number".to_string())?;

        Ok(Self {
            max_recording_secs,
            max_title_words,
            max_title_chars,
            max_upload_bytes,
        })
    }
}

impl Default for RecorderConfig {
    fn default() -> Self {
        Self {
            max_recording_secs: DEFAULT_MAX_RECORDING_SECS,
            max_title_words: DEFAULT_MAX_TITLE_WORDS,
            max_title_chars: DEFAULT_MAX_TITLE_CHARS,
            max_upload_bytes: Self::DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

impl ClipsConfig {
    pub fn from_env() -> Result<Self, String> {
        let verify_storage_path = env::var("VERIFY_STORAGE_PATH")
            .unwrap_or_else(|_| "false".to_string())
            .parse::<bool>()
            .map_err(|_| "VERIFY_STORAGE_PATH must be true or false".to_string())?;

        Ok(Self {
            verify_storage_path,
        })
    }
}

impl ShareConfig {
    const DEFAULT_PLAYER_WIDTH: u32 = 500;
    const DEFAULT_PLAYER_HEIGHT: u32 = 200;

    pub fn from_env(public_base_url: &str) -> Result<Self, String> {
        let site_name = env::var("SITE_NAME").unwrap_or_else(|_| "AudioTweet".to_string());
        let twitter_site = env::var("TWITTER_SITE").unwrap_or_else(|_| "@YourAppHandle".to_string());
        let preview_image_url = env::var("SHARE_PREVIEW_IMAGE_URL")
            .unwrap_or_else(|_| format!("{}/default-preview-image.png", public_base_url));

        let player_width = env::var("PLAYER_WIDTH")
            .unwrap_or_else(|_| Self::DEFAULT_PLAYER_WIDTH.to_string())
            .parse::<u32>()
            .map_err(|_| "PLAYER_WIDTH must be a valid number".to_string())?;

        let player_height = env::var("PLAYER_HEIGHT")
            .unwrap_or_else(|_| Self::DEFAULT_PLAYER_HEIGHT.to_string())
            .parse::<u32>()
            .map_err(|_| "PLAYER_HEIGHT must be a valid number".to_string())?;

        Ok(Self {
            site_name,
            twitter_site,
            preview_image_url,
            default_title: DEFAULT_CLIP_TITLE.to_string(),
            player_width,
            player_height,
        })
    }

    pub fn description(&self) -> String {
        format!("Listen to this audio clip. Recorded on {}.", self.site_name)
    }
}

/// Trim whitespace and trailing slashes so paths can be appended with `/`
fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_base_url_strips_trailing_slashes() {
        assert_eq!(normalize_base_url("https://host/"), "https://host");
        assert_eq!(normalize_base_url(" https://host// "), "https://host");
        assert_eq!(normalize_base_url("https://host"), "https://host");
    }

    #[test]
    fn test_swagger_credentials_require_both_parts() {
        let mut swagger = SwaggerConfig {
            username: Some("admin".to_string()),
            password: None,
            title: String::new(),
            version: String::new(),
            description: String::new(),
        };
        assert_eq!(swagger.credentials(), None);

        swagger.password = Some("secret".to_string());
        assert_eq!(swagger.credentials(), Some("admin:secret".to_string()));
    }

    #[test]
    fn test_share_description_mentions_site() {
        let share = ShareConfig {
            site_name: "AudioTweet".to_string(),
            twitter_site: "@x".to_string(),
            preview_image_url: String::new(),
            default_title: DEFAULT_CLIP_TITLE.to_string(),
            player_width: 500,
            player_height: 200,
        };
        assert_eq!(
            share.description(),
            "Listen to this audio clip. Recorded on AudioTweet."
        );
    }
}

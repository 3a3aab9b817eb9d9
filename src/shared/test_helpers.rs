#[cfg(test)]
use std::collections::HashMap;
#[cfg(test)]
use std::sync::{Arc, Mutex};

#[cfg(test)]
use async_trait::async_trait;
#[cfg(test)]
use axum_test::TestServer;
#[cfg(test)]
use chrono::Utc;
#[cfg(test)]
use uuid::Uuid;

#[cfg(test)]
use crate::core::config::{RecorderConfig, ShareConfig};
#[cfg(test)]
use crate::core::error::AppError;
#[cfg(test)]
use crate::features::clips::models::{Clip, NewClip};
#[cfg(test)]
use crate::features::clips::services::{ClipRepository, ClipService, ClipServiceSettings};
#[cfg(test)]
use crate::features::recordings::services::RecordingService;
#[cfg(test)]
use crate::modules::storage::{public_object_url, ObjectStorage};
#[cfg(test)]
use crate::shared::constants::DEFAULT_CLIP_TITLE;
#[cfg(test)]
use crate::shared::templates::PageRenderer;

#[cfg(test)]
pub const TEST_BASE_URL: &str = "https://host";

#[cfg(test)]
const TEST_STORAGE_ENDPOINT: &str = "https://storage.host";

#[cfg(test)]
const TEST_BUCKET: &str = "recordings";

/// Clip store kept in memory. `failing` makes every call error like an
/// unreachable database.
#[cfg(test)]
#[derive(Default)]
pub struct InMemoryClipRepository {
    clips: Mutex<HashMap<Uuid, Clip>>,
    failure: Option<String>,
}

#[cfg(test)]
impl InMemoryClipRepository {
    pub fn failing(message: &str) -> Self {
        Self {
            clips: Mutex::new(HashMap::new()),
            failure: Some(message.to_string()),
        }
    }

    pub fn get(&self, id: Uuid) -> Option<Clip> {
        self.clips.lock().unwrap().get(&id).cloned()
    }

    pub fn len(&self) -> usize {
        self.clips.lock().unwrap().len()
    }

    fn check(&self) -> Result<(), AppError> {
        match &self.failure {
            Some(message) => Err(AppError::Database(sqlx::Error::Protocol(message.clone()))),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
#[async_trait]
impl ClipRepository for InMemoryClipRepository {
    async fn insert(&self, new_clip: NewClip) -> Result<Clip, AppError> {
        self.check()?;
        let clip = Clip {
            id: Uuid::new_v4(),
            title: new_clip.title,
            storage_path: new_clip.storage_path,
            created_at: Utc::now(),
        };
        self.clips.lock().unwrap().insert(clip.id, clip.clone());
        Ok(clip)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Clip>, AppError> {
        self.check()?;
        Ok(self.get(id))
    }
}

/// Bucket kept in memory, keyed by object key, holding (bytes, content type)
#[cfg(test)]
#[derive(Default)]
pub struct InMemoryObjectStorage {
    objects: Mutex<HashMap<String, (Vec<u8>, String)>>,
    fail: bool,
}

#[cfg(test)]
impl InMemoryObjectStorage {
    pub fn failing() -> Self {
        Self {
            objects: Mutex::new(HashMap::new()),
            fail: true,
        }
    }

    pub fn object(&self, key: &str) -> Option<(Vec<u8>, String)> {
        self.objects.lock().unwrap().get(key).cloned()
    }

    pub fn len(&self) -> usize {
        self.objects.lock().unwrap().len()
    }
}

#[cfg(test)]
#[async_trait]
impl ObjectStorage for InMemoryObjectStorage {
    async fn put_new(&self, key: &str, data: Vec<u8>, content_type: &str) -> Result<(), AppError> {
        if self.fail {
            return Err(AppError::Storage("bucket unreachable".to_string()));
        }
        let mut objects = self.objects.lock().unwrap();
        if objects.contains_key(key) {
            return Err(AppError::Conflict(format!("Object '{}' already exists", key)));
        }
        objects.insert(key.to_string(), (data, content_type.to_string()));
        Ok(())
    }

    async fn exists(&self, key: &str) -> Result<bool, AppError> {
        if self.fail {
            return Err(AppError::Storage("bucket unreachable".to_string()));
        }
        Ok(self.objects.lock().unwrap().contains_key(key))
    }

    fn public_url(&self, key: &str) -> String {
        public_object_url(TEST_STORAGE_ENDPOINT, TEST_BUCKET, key)
    }
}

#[cfg(test)]
pub fn test_share_config() -> ShareConfig {
    ShareConfig {
        site_name: "AudioTweet".to_string(),
        twitter_site: "@YourAppHandle".to_string(),
        preview_image_url: format!("{}/default-preview-image.png", TEST_BASE_URL),
        default_title: DEFAULT_CLIP_TITLE.to_string(),
        player_width: 500,
        player_height: 200,
    }
}

#[cfg(test)]
pub fn test_clip_service_settings() -> ClipServiceSettings {
    ClipServiceSettings {
        public_base_url: TEST_BASE_URL.to_string(),
        verify_storage_path: false,
    }
}

#[cfg(test)]
pub fn clip_service_with(
    repository: Arc<dyn ClipRepository>,
    storage: Arc<dyn ObjectStorage>,
) -> ClipService {
    ClipService::new(repository, storage, test_clip_service_settings())
}

#[cfg(test)]
fn test_pages() -> Arc<PageRenderer> {
    Arc::new(PageRenderer::new(None).expect("built-in templates load"))
}

/// Test server over the clips routes with built-in templates
#[cfg(test)]
pub fn clips_test_server(
    repository: Arc<InMemoryClipRepository>,
    storage: Arc<InMemoryObjectStorage>,
) -> TestServer {
    let service = Arc::new(clip_service_with(repository, storage));
    let router = crate::features::clips::routes(service, test_pages(), Arc::new(test_share_config()));
    TestServer::new(router).expect("test server starts")
}

/// Test server over the recordings routes with the given recorder settings
#[cfg(test)]
pub fn recorder_test_server(storage: Arc<InMemoryObjectStorage>, recorder: RecorderConfig) -> TestServer {
    let service = Arc::new(RecordingService::new(storage, recorder.max_upload_bytes));
    let router = crate::features::recordings::routes(
        service,
        test_pages(),
        Arc::new(recorder),
        test_share_config().site_name,
    );
    TestServer::new(router).expect("test server starts")
}

#[cfg(test)]
pub fn recordings_test_server(storage: Arc<InMemoryObjectStorage>) -> TestServer {
    recorder_test_server(storage, RecorderConfig::default())
}

/// Undo the HTML escaping minijinja applies to `.html` templates
#[cfg(test)]
pub fn decode_html_entities(html: &str) -> String {
    html.replace("&#x2f;", "/")
        .replace("&#x27;", "'")
        .replace("&quot;", "\"")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}

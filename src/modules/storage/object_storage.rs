use async_trait::async_trait;

use crate::core::error::AppError;

/// Public bucket holding uploaded recordings
#[async_trait]
pub trait ObjectStorage: Send + Sync {
    /// Upload an object under a key that must not exist yet.
    ///
    /// Fails with `AppError::Conflict` when the key is already taken; the
    /// existing object is left untouched.
    async fn put_new(&self, key: &str, data: Vec<u8>, content_type: &str) -> Result<(), AppError>;

    /// Check whether an object exists
    async fn exists(&self, key: &str) -> Result<bool, AppError>;

    /// Publicly readable URL of an object
    fn public_url(&self, key: &str) -> String;
}

/// Build `<endpoint>/<bucket>/<key>` with every key segment percent-encoded
pub fn public_object_url(public_endpoint: &str, bucket: &str, key: &str) -> String {
    let encoded_key = key
        .split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/");

    format!(
        "{}/{}/{}",
        public_endpoint.trim_end_matches('/'),
        bucket,
        encoded_key
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_object_url() {
        assert_eq!(
            public_object_url("http://localhost:9000", "recordings", "abc.webm"),
            "http://localhost:9000/recordings/abc.webm"
        );
    }

    #[test]
    fn test_public_object_url_encodes_segments() {
        assert_eq!(
            public_object_url("https://cdn.example/", "recordings", "my clips/a b\".webm"),
            "https://cdn.example/recordings/my%20clips/a%20b%22.webm"
        );
    }
}

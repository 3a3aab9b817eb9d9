//! Storage module for recordings
//!
//! Provides the `ObjectStorage` abstraction over the public recordings bucket
//! and its MinIO/S3-compatible implementation.

mod minio_client;
mod object_storage;

pub use minio_client::MinIOClient;
pub use object_storage::{public_object_url, ObjectStorage};

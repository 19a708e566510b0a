//! Storage abstraction trait
//!
//! This module defines the ThumbnailStorage trait that all thumbnail backends implement.

use crate::ThumbnailBackend;
use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;
use uuid::Uuid;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Upload failed: {0}")]
    UploadFailed(String),

    #[error("Delete failed: {0}")]
    DeleteFailed(String),

    #[error("Invalid content type: {0}")]
    InvalidContentType(String),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Thumbnail storage abstraction
///
/// Given fully-read image bytes and their MIME type, persist them somewhere and return the
/// URI the video record should point at. A URI returned by `store` must keep serving the
/// same bytes until it is passed to `delete`; later stores for the same video never touch it.
#[async_trait]
pub trait ThumbnailStorage: Send + Sync {
    /// Store a thumbnail for `video_id` and return its URI
    async fn store(&self, video_id: Uuid, content_type: &str, data: Bytes)
        -> StorageResult<String>;

    /// Delete a thumbnail by the URI `store` returned.
    ///
    /// URIs this backend did not produce, and objects that are already gone, are ignored.
    async fn delete(&self, uri: &str) -> StorageResult<()>;

    /// Get the storage backend type
    fn backend_type(&self) -> ThumbnailBackend;
}

use crate::keys::generate_thumbnail_key;
use crate::traits::{StorageError, StorageResult, ThumbnailStorage};
use crate::ThumbnailBackend;
use async_trait::async_trait;
use bytes::Bytes;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use uuid::Uuid;

/// Local filesystem thumbnail storage
#[derive(Clone, Debug)]
pub struct LocalStorage {
    base_path: PathBuf,
    base_url: String,
}

impl LocalStorage {
    /// Create a new LocalStorage instance
    ///
    /// # Arguments
    /// * `base_path` - Root directory for assets (e.g., "./assets")
    /// * `base_url` - Base URL the assets are served from (e.g., "http://localhost:8091/assets")
    pub async fn new(base_path: impl Into<PathBuf>, base_url: String) -> StorageResult<Self> {
        let base_path = base_path.into();

        fs::create_dir_all(&base_path).await.map_err(|e| {
            StorageError::ConfigError(format!(
                "Failed to create storage directory {}: {}",
                base_path.display(),
                e
            ))
        })?;

        Ok(LocalStorage {
            base_path,
            base_url,
        })
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Convert storage key to filesystem path, rejecting keys that could escape the base directory
    fn key_to_path(&self, storage_key: &str) -> StorageResult<PathBuf> {
        if storage_key.contains("..") || storage_key.starts_with('/') {
            return Err(StorageError::InvalidKey(
                "Storage key contains invalid characters".to_string(),
            ));
        }
        Ok(self.base_path.join(storage_key))
    }

    /// Generate public URL for file
    fn generate_url(&self, key: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), key)
    }

    /// Storage key behind a URL produced by `generate_url`, if it is one of ours
    fn url_to_key<'a>(&self, url: &'a str) -> Option<&'a str> {
        url.strip_prefix(self.base_url.trim_end_matches('/'))?
            .strip_prefix('/')
            .filter(|key| !key.is_empty())
    }

    async fn ensure_parent_dir(&self, path: &Path) -> StorageResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }
        Ok(())
    }

    /// Write `data` to a temp file private to this call, then rename it onto `path`.
    async fn write_atomically(&self, path: &Path, data: &[u8]) -> StorageResult<()> {
        let tmp_path = path.with_extension(format!("{}.part", Uuid::new_v4()));

        let result = async {
            let mut file = fs::File::create(&tmp_path).await.map_err(|e| {
                StorageError::UploadFailed(format!(
                    "Failed to create file {}: {}",
                    tmp_path.display(),
                    e
                ))
            })?;

            file.write_all(data).await.map_err(|e| {
                StorageError::UploadFailed(format!(
                    "Failed to write file {}: {}",
                    tmp_path.display(),
                    e
                ))
            })?;

            file.sync_all().await.map_err(|e| {
                StorageError::UploadFailed(format!(
                    "Failed to sync file {}: {}",
                    tmp_path.display(),
                    e
                ))
            })?;

            fs::rename(&tmp_path, path).await.map_err(|e| {
                StorageError::UploadFailed(format!(
                    "Failed to move file into {}: {}",
                    path.display(),
                    e
                ))
            })
        }
        .await;

        if result.is_err() {
            if let Err(e) = fs::remove_file(&tmp_path).await {
                if e.kind() != ErrorKind::NotFound {
                    tracing::warn!(
                        path = %tmp_path.display(),
                        error = %e,
                        "Failed to remove partial thumbnail file"
                    );
                }
            }
        }

        result
    }
}

#[async_trait]
impl ThumbnailStorage for LocalStorage {
    async fn store(
        &self,
        video_id: Uuid,
        content_type: &str,
        data: Bytes,
    ) -> StorageResult<String> {
        let key = generate_thumbnail_key(video_id, Uuid::new_v4(), content_type);
        let path = self.key_to_path(&key)?;

        self.ensure_parent_dir(&path).await?;

        let start = std::time::Instant::now();
        self.write_atomically(&path, &data).await?;

        let url = self.generate_url(&key);

        tracing::info!(
            path = %path.display(),
            key = %key,
            size_bytes = data.len(),
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Local thumbnail upload successful"
        );

        Ok(url)
    }

    async fn delete(&self, uri: &str) -> StorageResult<()> {
        let Some(key) = self.url_to_key(uri) else {
            tracing::debug!(uri_len = uri.len(), "Not a local asset URL, nothing to delete");
            return Ok(());
        };
        let path = self.key_to_path(key)?;
        let start = std::time::Instant::now();

        match fs::remove_file(&path).await {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(()),
            Err(e) => {
                return Err(StorageError::DeleteFailed(format!(
                    "Failed to delete file {}: {}",
                    path.display(),
                    e
                )))
            }
        }

        tracing::info!(
            path = %path.display(),
            key = %key,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Local thumbnail delete successful"
        );

        Ok(())
    }

    fn backend_type(&self) -> ThumbnailBackend {
        ThumbnailBackend::Local
    }
}

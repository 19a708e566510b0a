#[cfg(feature = "storage-data-uri")]
use crate::DataUriStorage;
#[cfg(feature = "storage-local")]
use crate::LocalStorage;
use crate::{StorageError, StorageResult, ThumbnailBackend, ThumbnailStorage};
use std::sync::Arc;
use tubely_core::Config;

/// Create a thumbnail storage backend based on configuration
pub async fn create_storage(config: &Config) -> StorageResult<Arc<dyn ThumbnailStorage>> {
    match config.thumbnail_backend {
        #[cfg(feature = "storage-data-uri")]
        ThumbnailBackend::DataUri => Ok(Arc::new(DataUriStorage::new())),

        #[cfg(not(feature = "storage-data-uri"))]
        ThumbnailBackend::DataUri => Err(StorageError::ConfigError(
            "Data URI storage backend not available (storage-data-uri feature not enabled)"
                .to_string(),
        )),

        #[cfg(feature = "storage-local")]
        ThumbnailBackend::Local => {
            if config.assets_root.trim().is_empty() {
                return Err(StorageError::ConfigError(
                    "ASSETS_ROOT not configured".to_string(),
                ));
            }
            let storage =
                LocalStorage::new(&config.assets_root, config.assets_base_url.clone()).await?;
            Ok(Arc::new(storage))
        }

        #[cfg(not(feature = "storage-local"))]
        ThumbnailBackend::Local => Err(StorageError::ConfigError(
            "Local storage backend not available (storage-local feature not enabled)".to_string(),
        )),
    }
}

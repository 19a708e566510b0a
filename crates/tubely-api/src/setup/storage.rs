//! Thumbnail storage setup and initialization

use anyhow::{Context, Result};
use std::sync::Arc;
use tubely_core::Config;
use tubely_storage::{create_storage, ThumbnailStorage};

pub async fn setup_storage(config: &Config) -> Result<Arc<dyn ThumbnailStorage>> {
    tracing::info!("Initializing thumbnail storage...");
    let storage = create_storage(config)
        .await
        .context("Failed to initialize thumbnail storage")?;
    tracing::info!(
        backend = %storage.backend_type(),
        "Thumbnail storage initialized successfully"
    );
    Ok(storage)
}

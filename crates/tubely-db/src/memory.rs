//! In-memory video store
//!
//! Used when `VIDEO_STORE=memory` (local development without Postgres) and as the
//! backing store for API tests. Records live for the lifetime of the process.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tubely_core::models::Video;
use tubely_core::AppError;
use uuid::Uuid;

use crate::store::VideoStore;

#[derive(Clone, Default)]
pub struct InMemoryVideoStore {
    videos: Arc<RwLock<HashMap<Uuid, Video>>>,
}

impl InMemoryVideoStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.videos.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.videos.read().await.is_empty()
    }
}

#[async_trait]
impl VideoStore for InMemoryVideoStore {
    async fn create(&self, video: Video) -> Result<Video, AppError> {
        let mut videos = self.videos.write().await;
        if videos.contains_key(&video.id) {
            return Err(AppError::BadRequest(format!(
                "Video {} already exists",
                video.id
            )));
        }
        videos.insert(video.id, video.clone());
        Ok(video)
    }

    async fn get(&self, id: Uuid) -> Result<Option<Video>, AppError> {
        Ok(self.videos.read().await.get(&id).cloned())
    }

    async fn update(&self, mut video: Video) -> Result<Video, AppError> {
        let mut videos = self.videos.write().await;
        let existing = videos
            .get(&video.id)
            .ok_or_else(|| AppError::NotFound(format!("Video {} not found", video.id)))?;

        video.created_at = existing.created_at;
        video.updated_at = Utc::now();
        videos.insert(video.id, video.clone());
        Ok(video)
    }
}

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use tubely_core::models::Video;
use tubely_core::AppError;
use tubely_db::{InMemoryVideoStore, VideoStore};
use uuid::Uuid;

/// In-memory store that counts calls and can be told to fail
pub struct FaultyVideoStore {
    inner: InMemoryVideoStore,
    gets: AtomicUsize,
    updates: AtomicUsize,
    fail_get: AtomicBool,
    fail_update: AtomicBool,
}

impl FaultyVideoStore {
    pub fn new(inner: InMemoryVideoStore) -> Self {
        Self {
            inner,
            gets: AtomicUsize::new(0),
            updates: AtomicUsize::new(0),
            fail_get: AtomicBool::new(false),
            fail_update: AtomicBool::new(false),
        }
    }

    pub fn inner(&self) -> &InMemoryVideoStore {
        &self.inner
    }

    pub fn gets(&self) -> usize {
        self.gets.load(Ordering::SeqCst)
    }

    pub fn updates(&self) -> usize {
        self.updates.load(Ordering::SeqCst)
    }

    pub fn fail_gets(&self) {
        self.fail_get.store(true, Ordering::SeqCst);
    }

    pub fn fail_updates(&self) {
        self.fail_update.store(true, Ordering::SeqCst);
    }

    /// Read a record without touching the counters
    pub async fn peek(&self, id: Uuid) -> Option<Video> {
        self.inner.get(id).await.expect("in-memory get never fails")
    }
}

#[async_trait]
impl VideoStore for FaultyVideoStore {
    async fn create(&self, video: Video) -> Result<Video, AppError> {
        self.inner.create(video).await
    }

    async fn get(&self, id: Uuid) -> Result<Option<Video>, AppError> {
        self.gets.fetch_add(1, Ordering::SeqCst);
        if self.fail_get.load(Ordering::SeqCst) {
            return Err(AppError::Internal("simulated lookup failure".to_string()));
        }
        self.inner.get(id).await
    }

    async fn update(&self, video: Video) -> Result<Video, AppError> {
        self.updates.fetch_add(1, Ordering::SeqCst);
        if self.fail_update.load(Ordering::SeqCst) {
            return Err(AppError::Internal("simulated write failure".to_string()));
        }
        self.inner.update(video).await
    }
}

//! Video store trait abstraction
//!
//! Handlers depend on this trait instead of a concrete repository so the same request
//! pipeline runs against Postgres in production and against in-memory fakes in tests.

use async_trait::async_trait;
use tubely_core::models::Video;
use tubely_core::AppError;
use uuid::Uuid;

/// Key-value store of video records keyed by video id
#[async_trait]
pub trait VideoStore: Send + Sync {
    /// Insert a new record
    async fn create(&self, video: Video) -> Result<Video, AppError>;

    /// Fetch a record by id; `Ok(None)` when it does not exist
    async fn get(&self, id: Uuid) -> Result<Option<Video>, AppError>;

    /// Write back the full record, returning what was stored.
    ///
    /// Every field except `id` and `created_at` is replaced; `updated_at` is refreshed
    /// by the store. Fails with `NotFound` if the record disappeared in the meantime.
    async fn update(&self, video: Video) -> Result<Video, AppError>;
}

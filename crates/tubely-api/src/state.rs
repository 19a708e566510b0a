//! Application state shared by all handlers.
//!
//! Everything here is read-only after startup; collaborators sit behind trait objects so
//! tests can swap in fakes.

use crate::auth::TokenValidator;
use std::sync::Arc;
use tubely_core::Config;
use tubely_db::VideoStore;
use tubely_storage::ThumbnailStorage;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub videos: Arc<dyn VideoStore>,
    pub thumbnails: Arc<dyn ThumbnailStorage>,
    pub tokens: Arc<dyn TokenValidator>,
}

impl AppState {
    pub fn new(
        config: Config,
        videos: Arc<dyn VideoStore>,
        thumbnails: Arc<dyn ThumbnailStorage>,
        tokens: Arc<dyn TokenValidator>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            videos,
            thumbnails,
            tokens,
        }
    }
}

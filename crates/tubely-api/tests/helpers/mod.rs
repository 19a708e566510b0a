pub mod auth;
pub mod fakes;
pub mod multipart;

use axum_test::TestServer;
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;
use tubely_api::setup::routes::setup_routes;
use tubely_api::AppState;
use tubely_core::models::Video;
use tubely_core::{Config, ThumbnailBackend, VideoStoreBackend};
use tubely_db::{InMemoryVideoStore, VideoStore};
use tubely_storage::{DataUriStorage, LocalStorage, ThumbnailStorage};
use uuid::Uuid;

use self::auth::CountingTokenValidator;
use self::fakes::FaultyVideoStore;

pub const TEST_JWT_SECRET: &str = "test-secret-that-is-at-least-32-characters";
pub const TEST_JWT_ISSUER: &str = "tubely-access";

/// Returns the API path under the configured prefix.
pub fn api_path(path: &str) -> String {
    format!("{}{}", tubely_api::constants::API_PREFIX, path)
}

pub fn thumbnail_path(video_id: impl std::fmt::Display) -> String {
    api_path(&format!("/videos/{}/thumbnail", video_id))
}

pub fn test_config() -> Config {
    Config {
        server_port: 0,
        environment: "test".to_string(),
        cors_origins: vec!["*".to_string()],
        jwt_secret: TEST_JWT_SECRET.to_string(),
        jwt_issuer: TEST_JWT_ISSUER.to_string(),
        video_store: VideoStoreBackend::Memory,
        database_url: None,
        db_max_connections: 1,
        db_timeout_seconds: 5,
        multipart_max_memory_bytes: 10 * 1024 * 1024,
        max_upload_size_bytes: 20 * 1024 * 1024,
        thumbnail_backend: ThumbnailBackend::DataUri,
        assets_root: "./assets".to_string(),
        assets_base_url: "http://localhost:8091/assets".to_string(),
    }
}

/// Test application state
pub struct TestApp {
    pub server: TestServer,
    pub store: Arc<FaultyVideoStore>,
    pub tokens: Arc<CountingTokenValidator>,
    pub _temp_dir: Option<TempDir>,
}

impl TestApp {
    /// Get the HTTP test client
    pub fn client(&self) -> &TestServer {
        &self.server
    }

    /// Bearer token for `user_id`, valid for an hour
    pub fn token_for(&self, user_id: Uuid) -> String {
        self.tokens.make_token(user_id)
    }

    /// Root of the served assets when the local backend is in use
    pub fn assets_dir(&self) -> &Path {
        self._temp_dir
            .as_ref()
            .expect("Local thumbnail backend not configured")
            .path()
    }

    /// Insert a draft video owned by `owner` directly into the store
    pub async fn seed_video(&self, owner: Uuid) -> Video {
        let video = Video::new_draft(owner, "Boots".to_string(), "A test video".to_string());
        self.store
            .inner()
            .create(video)
            .await
            .expect("Failed to seed video")
    }
}

/// Setup a test application backed by in-memory collaborators
pub async fn setup_test_app() -> TestApp {
    setup_test_app_with(|_| {}).await
}

/// Setup a test application after adjusting the default test configuration
pub async fn setup_test_app_with(configure: impl FnOnce(&mut Config)) -> TestApp {
    let mut config = test_config();
    configure(&mut config);

    let (thumbnails, temp_dir): (Arc<dyn ThumbnailStorage>, Option<TempDir>) =
        match config.thumbnail_backend {
            ThumbnailBackend::DataUri => (Arc::new(DataUriStorage::new()), None),
            ThumbnailBackend::Local => {
                let dir = TempDir::new().expect("Failed to create temp dir");
                config.assets_root = dir.path().display().to_string();
                let storage = LocalStorage::new(dir.path(), config.assets_base_url.clone())
                    .await
                    .expect("Failed to create local storage");
                (Arc::new(storage), Some(dir))
            }
        };

    let store = Arc::new(FaultyVideoStore::new(InMemoryVideoStore::new()));
    let tokens = Arc::new(CountingTokenValidator::new(TEST_JWT_SECRET, TEST_JWT_ISSUER));

    let state = Arc::new(AppState::new(
        config.clone(),
        store.clone(),
        thumbnails,
        tokens.clone(),
    ));
    let router = setup_routes(&config, state).expect("Failed to build router");
    let server = TestServer::new(router).expect("Failed to create test server");

    TestApp {
        server,
        store,
        tokens,
        _temp_dir: temp_dir,
    }
}

//! Configuration module
//!
//! Configuration is read once from the environment (optionally seeded from a `.env` file)
//! and validated before anything else starts. The resulting `Config` is shared read-only.

use std::env;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use crate::storage_types::ThumbnailBackend;

// Common constants
const SERVER_PORT: u16 = 8091;
const MAX_CONNECTIONS: u32 = 20;
const CONNECTION_TIMEOUT_SECS: u64 = 30;
const MULTIPART_MAX_MEMORY_MB: usize = 10;
const MAX_UPLOAD_SIZE_MB: usize = 20;
const JWT_ISSUER: &str = "tubely-access";
const MIN_JWT_SECRET_LEN: usize = 32;

/// Which video store implementation backs the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VideoStoreBackend {
    Postgres,
    Memory,
}

impl FromStr for VideoStoreBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(VideoStoreBackend::Postgres),
            "memory" | "in-memory" => Ok(VideoStoreBackend::Memory),
            _ => Err(anyhow::anyhow!("Invalid video store backend: {}", s)),
        }
    }
}

impl Display for VideoStoreBackend {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            VideoStoreBackend::Postgres => write!(f, "postgres"),
            VideoStoreBackend::Memory => write!(f, "memory"),
        }
    }
}

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub server_port: u16,
    pub environment: String,
    pub cors_origins: Vec<String>,
    // Authentication
    pub jwt_secret: String,
    pub jwt_issuer: String,
    // Video store
    pub video_store: VideoStoreBackend,
    pub database_url: Option<String>,
    pub db_max_connections: u32,
    pub db_timeout_seconds: u64,
    // Uploads
    /// In-memory budget for auxiliary (non-file) multipart fields.
    pub multipart_max_memory_bytes: usize,
    /// Transport-level limit for a whole request body.
    pub max_upload_size_bytes: usize,
    // Thumbnail storage
    pub thumbnail_backend: ThumbnailBackend,
    pub assets_root: String,
    pub assets_base_url: String,
}

impl Config {
    /// Check if the application is running in production mode
    pub fn is_production(&self) -> bool {
        let env = self.environment.to_lowercase();
        env == "production" || env == "prod"
    }

    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();

        let environment = env::var("ENVIRONMENT")
            .or_else(|_| env::var("APP_ENV"))
            .unwrap_or_else(|_| "development".to_string());

        let server_port: u16 = env::var("PORT")
            .unwrap_or_else(|_| SERVER_PORT.to_string())
            .parse()
            .map_err(|_| anyhow::anyhow!("PORT must be a valid number"))?;

        let cors_origins = env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let video_store = env::var("VIDEO_STORE")
            .unwrap_or_else(|_| "postgres".to_string())
            .parse()?;

        let thumbnail_backend = env::var("THUMBNAIL_STORAGE")
            .unwrap_or_else(|_| "data_uri".to_string())
            .parse()?;

        let multipart_max_memory_mb = env::var("MULTIPART_MAX_MEMORY_MB")
            .unwrap_or_else(|_| MULTIPART_MAX_MEMORY_MB.to_string())
            .parse::<usize>()
            .unwrap_or(MULTIPART_MAX_MEMORY_MB);

        let max_upload_size_mb = env::var("MAX_UPLOAD_SIZE_MB")
            .unwrap_or_else(|_| MAX_UPLOAD_SIZE_MB.to_string())
            .parse::<usize>()
            .unwrap_or(MAX_UPLOAD_SIZE_MB);

        let config = Config {
            server_port,
            environment,
            cors_origins,
            jwt_secret: env::var("JWT_SECRET")
                .map_err(|_| anyhow::anyhow!("JWT_SECRET must be set for authentication"))?,
            jwt_issuer: env::var("JWT_ISSUER").unwrap_or_else(|_| JWT_ISSUER.to_string()),
            video_store,
            database_url: env::var("DATABASE_URL").ok().filter(|s| !s.is_empty()),
            db_max_connections: env::var("DB_MAX_CONNECTIONS")
                .unwrap_or_else(|_| MAX_CONNECTIONS.to_string())
                .parse()
                .unwrap_or(MAX_CONNECTIONS),
            db_timeout_seconds: env::var("DB_TIMEOUT_SECONDS")
                .unwrap_or_else(|_| CONNECTION_TIMEOUT_SECS.to_string())
                .parse()
                .unwrap_or(CONNECTION_TIMEOUT_SECS),
            multipart_max_memory_bytes: mb_to_bytes(
                "MULTIPART_MAX_MEMORY_MB",
                multipart_max_memory_mb,
            )?,
            max_upload_size_bytes: mb_to_bytes("MAX_UPLOAD_SIZE_MB", max_upload_size_mb)?,
            thumbnail_backend,
            assets_root: env::var("ASSETS_ROOT").unwrap_or_else(|_| "./assets".to_string()),
            assets_base_url: env::var("ASSETS_BASE_URL")
                .unwrap_or_else(|_| format!("http://localhost:{}/assets", server_port)),
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.jwt_secret.len() < MIN_JWT_SECRET_LEN {
            return Err(anyhow::anyhow!(
                "JWT_SECRET must be at least {} characters long",
                MIN_JWT_SECRET_LEN
            ));
        }

        if self.is_production() && self.cors_origins.iter().any(|o| o == "*") {
            return Err(anyhow::anyhow!(
                "CORS_ORIGINS cannot be '*' in production. Please specify explicit origins."
            ));
        }

        if self.video_store == VideoStoreBackend::Postgres {
            match self.database_url.as_deref() {
                None => {
                    return Err(anyhow::anyhow!(
                        "DATABASE_URL must be set when VIDEO_STORE=postgres"
                    ))
                }
                Some(url) if !(url.starts_with("postgres://") || url.starts_with("postgresql://")) => {
                    return Err(anyhow::anyhow!(
                        "DATABASE_URL must be a valid PostgreSQL connection string"
                    ))
                }
                Some(_) => {}
            }
        }

        if self.multipart_max_memory_bytes == 0 {
            return Err(anyhow::anyhow!("MULTIPART_MAX_MEMORY_MB must be greater than 0"));
        }

        if self.max_upload_size_bytes == 0 {
            return Err(anyhow::anyhow!("MAX_UPLOAD_SIZE_MB must be greater than 0"));
        }

        if self.thumbnail_backend == ThumbnailBackend::Local && self.assets_root.trim().is_empty() {
            return Err(anyhow::anyhow!(
                "ASSETS_ROOT must be set when using local thumbnail storage"
            ));
        }

        Ok(())
    }
}

/// Convert a megabyte setting to bytes, failing instead of wrapping on overflow
fn mb_to_bytes(name: &str, mb: usize) -> Result<usize, anyhow::Error> {
    mb.checked_mul(1024 * 1024)
        .ok_or_else(|| anyhow::anyhow!("{} is too large: {} MB does not fit in memory", name, mb))
}

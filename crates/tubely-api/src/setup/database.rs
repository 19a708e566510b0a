//! Database setup and initialization

use anyhow::{Context, Result};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tubely_core::{Config, VideoStoreBackend};
use tubely_db::{InMemoryVideoStore, VideoRepository, VideoStore};

/// Build the video store selected by `VIDEO_STORE`
pub async fn setup_video_store(config: &Config) -> Result<Arc<dyn VideoStore>> {
    match config.video_store {
        VideoStoreBackend::Postgres => {
            let pool = setup_database(config).await?;
            Ok(Arc::new(VideoRepository::new(pool)))
        }
        VideoStoreBackend::Memory => {
            tracing::warn!("Using in-memory video store; records are lost on restart");
            Ok(Arc::new(InMemoryVideoStore::new()))
        }
    }
}

/// Setup database connection pool and run migrations
pub async fn setup_database(config: &Config) -> Result<PgPool> {
    let database_url = config
        .database_url
        .as_deref()
        .context("DATABASE_URL must be set when VIDEO_STORE=postgres")?;

    tracing::info!("Connecting to database...");
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_timeout_seconds))
        .idle_timeout(Duration::from_secs(600))
        .max_lifetime(Duration::from_secs(1800))
        .connect(database_url)
        .await
        .context("Failed to connect to database")?;

    tracing::info!(
        max_connections = config.db_max_connections,
        "Database connected successfully"
    );

    // Run pending migrations on startup (path: workspace migrations/ from crate root)
    let migrations_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../migrations");
    let migrator = sqlx::migrate::Migrator::new(migrations_dir)
        .await
        .context("Failed to load migrations")?;
    migrator
        .run(&pool)
        .await
        .context("Failed to run database migrations")?;
    tracing::info!("Database migrations applied");

    Ok(pool)
}

//! Application setup and initialization
//!
//! This module contains all application initialization logic extracted from main.rs
//! for better organization and testability.

pub mod database;
pub mod routes;
pub mod server;
pub mod storage;

use crate::auth::JwtService;
use crate::state::AppState;
use anyhow::{Context, Result};
use std::sync::Arc;
use tubely_core::Config;

/// Initialize the entire application
pub async fn initialize_app(config: Config) -> Result<(Arc<AppState>, axum::Router)> {
    crate::telemetry::init_telemetry();

    // Validate configuration first - fail fast on misconfiguration
    config
        .validate()
        .context("Configuration validation failed")?;

    tracing::info!(
        environment = %config.environment,
        video_store = %config.video_store,
        thumbnail_backend = %config.thumbnail_backend,
        "Configuration loaded and validated successfully"
    );

    let videos = database::setup_video_store(&config).await?;
    let thumbnails = storage::setup_storage(&config).await?;
    let tokens = Arc::new(JwtService::new(&config.jwt_secret, config.jwt_issuer.clone()));

    let state = Arc::new(AppState::new(config, videos, thumbnails, tokens));
    let router = routes::setup_routes(&state.config, state.clone())?;

    Ok((state, router))
}

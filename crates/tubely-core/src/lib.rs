//! Tubely Core Library
//!
//! This crate provides the domain model, error types and configuration shared by the
//! store, storage and API crates.

pub mod config;
pub mod error;
pub mod models;
pub mod storage_types;

// Re-export commonly used types
pub use config::{Config, VideoStoreBackend};
pub use error::{AppError, ErrorMetadata, LogLevel};
pub use storage_types::ThumbnailBackend;

//! Database repositories for data access layer
//!
//! Postgres-backed repositories. Each repository owns a pool handle and provides
//! CRUD operations for one table.

pub mod video;

pub use video::VideoRepository;

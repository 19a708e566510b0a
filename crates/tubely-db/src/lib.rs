//! Tubely Database Layer
//!
//! This crate provides the video store abstraction and its implementations.
//!
// Module declarations
pub mod db;
pub mod memory;
pub mod store;

// Re-exports
pub use db::VideoRepository;
pub use memory::InMemoryVideoStore;
pub use store::VideoStore;

//! Tubely Storage Library
//!
//! Thumbnail storage abstraction and its backends. The upload handler hands over validated
//! image bytes and receives the URI to record on the video; it never knows which backend
//! produced it.
//!
//! # Key format
//!
//! Backends that persist files use `thumbnails/{video_id}/{upload_id}.{ext}` with a fresh
//! `upload_id` per call. A stored object is never overwritten, so the file behind a recorded
//! URL only disappears through an explicit `delete`.

#[cfg(feature = "storage-data-uri")]
pub mod data_uri;
pub mod factory;
pub(crate) mod keys;
#[cfg(feature = "storage-local")]
pub mod local;
pub mod traits;

// Re-export commonly used types
#[cfg(feature = "storage-data-uri")]
pub use data_uri::DataUriStorage;
pub use factory::create_storage;
#[cfg(feature = "storage-local")]
pub use local::LocalStorage;
pub use traits::{StorageError, StorageResult, ThumbnailStorage};
pub use tubely_core::ThumbnailBackend;

//! API constants

/// API base path prefix
pub const API_PREFIX: &str = "/api";

/// Multipart field carrying the thumbnail image
pub const THUMBNAIL_FIELD: &str = "thumbnail";

/// Mount point for locally stored assets
pub const ASSETS_PATH: &str = "/assets";

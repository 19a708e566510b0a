//! Shared key generation for file-backed storage.
//!
//! Key format: `thumbnails/{video_id}/{upload_id}.{ext}`.

use uuid::Uuid;

const THUMBNAIL_PREFIX: &str = "thumbnails";

/// File extension for a thumbnail MIME type. Parameters (`; charset=...`) are ignored.
pub fn extension_for_content_type(content_type: &str) -> &'static str {
    let mime = content_type
        .split(';')
        .next()
        .map(|s| s.trim())
        .unwrap_or(content_type)
        .to_lowercase();

    match mime.as_str() {
        "image/png" => "png",
        "image/jpeg" | "image/jpg" => "jpg",
        "image/gif" => "gif",
        "image/webp" => "webp",
        "image/avif" => "avif",
        "image/svg+xml" => "svg",
        "image/bmp" => "bmp",
        _ => "bin",
    }
}

/// Generate the storage key for one thumbnail upload.
pub fn generate_thumbnail_key(video_id: Uuid, upload_id: Uuid, content_type: &str) -> String {
    format!(
        "{}/{}/{}.{}",
        THUMBNAIL_PREFIX,
        video_id,
        upload_id,
        extension_for_content_type(content_type)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_ignores_parameters_and_case() {
        assert_eq!(extension_for_content_type("image/PNG"), "png");
        assert_eq!(extension_for_content_type("image/jpeg; q=0.9"), "jpg");
        assert_eq!(extension_for_content_type("application/x-thing"), "bin");
    }

    #[test]
    fn test_key_is_scoped_by_video_and_upload() {
        let video_id = Uuid::new_v4();
        let upload_id = Uuid::new_v4();
        assert_eq!(
            generate_thumbnail_key(video_id, upload_id, "image/webp"),
            format!("thumbnails/{}/{}.webp", video_id, upload_id)
        );
        assert_ne!(
            generate_thumbnail_key(video_id, Uuid::new_v4(), "image/webp"),
            generate_thumbnail_key(video_id, Uuid::new_v4(), "image/webp")
        );
    }
}

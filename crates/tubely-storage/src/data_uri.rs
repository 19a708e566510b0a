use crate::traits::{StorageError, StorageResult, ThumbnailStorage};
use crate::ThumbnailBackend;
use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use bytes::Bytes;
use uuid::Uuid;

/// Inlines thumbnails into the record as `data:<mime>;base64,<payload>` URIs.
///
/// Nothing is written anywhere; the URI itself carries the image.
#[derive(Clone, Debug, Default)]
pub struct DataUriStorage;

impl DataUriStorage {
    pub fn new() -> Self {
        Self
    }

    /// Build a data URI from a MIME type and raw bytes.
    ///
    /// `,` ends the media type section of a data URI, so it is written as `%2C` (and `%`
    /// itself as `%25`). Every other character of the media type is kept verbatim.
    pub fn encode(content_type: &str, data: &[u8]) -> String {
        let media_type = content_type.replace('%', "%25").replace(',', "%2C");
        format!("data:{};base64,{}", media_type, STANDARD.encode(data))
    }
}

#[async_trait]
impl ThumbnailStorage for DataUriStorage {
    async fn store(
        &self,
        video_id: Uuid,
        content_type: &str,
        data: Bytes,
    ) -> StorageResult<String> {
        let content_type = content_type.trim();
        if content_type.is_empty() {
            return Err(StorageError::InvalidContentType(content_type.to_string()));
        }

        let uri = Self::encode(content_type, &data);
        tracing::debug!(
            video_id = %video_id,
            content_type = %content_type,
            size_bytes = data.len(),
            uri_len = uri.len(),
            "Encoded thumbnail as data URI"
        );
        Ok(uri)
    }

    async fn delete(&self, _uri: &str) -> StorageResult<()> {
        // The record owns the only copy.
        Ok(())
    }

    fn backend_type(&self) -> ThumbnailBackend {
        ThumbnailBackend::DataUri
    }
}

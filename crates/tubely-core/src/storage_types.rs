use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

/// Where uploaded thumbnails end up.
///
/// Defined in core because configuration selects it and the storage crate implements it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThumbnailBackend {
    /// Inline the image into the record as a `data:` URI.
    DataUri,
    /// Write the image under a local assets directory and store its public URL.
    Local,
}

impl FromStr for ThumbnailBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "data_uri" | "data-uri" | "datauri" => Ok(ThumbnailBackend::DataUri),
            "local" => Ok(ThumbnailBackend::Local),
            _ => Err(anyhow::anyhow!("Invalid thumbnail storage backend: {}", s)),
        }
    }
}

impl Display for ThumbnailBackend {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            ThumbnailBackend::DataUri => write!(f, "data_uri"),
            ThumbnailBackend::Local => write!(f, "local"),
        }
    }
}

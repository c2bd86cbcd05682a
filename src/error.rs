use std::path::PathBuf;
use thiserror::Error;

/// Failures the generators report by kind.
///
/// Everything else travels as a plain `anyhow::Error` with context attached.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("{what} not found at {}", .path.display())]
    MissingInput { what: &'static str, path: PathBuf },

    #[error("Failed to load {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("No source PNGs found for favicon generation in {}", .dir.display())]
    NoFaviconSources { dir: PathBuf },

    #[error("invalid target dimensions {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },
}

impl AssetError {
    /// Returns a `MissingInput` error unless `path` exists.
    pub fn require(what: &'static str, path: PathBuf) -> Result<PathBuf, AssetError> {
        if path.exists() {
            Ok(path)
        } else {
            Err(AssetError::MissingInput { what, path })
        }
    }
}

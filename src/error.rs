//! Error type for engine construction and map loading.
//!
//! Per-frame operations are total and never produce these; only constructors
//! and loaders return them.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ViewportError {
    #[error("base scale must be positive and finite, got {0}")]
    InvalidBaseScale(f32),
    #[error("zoom level range [{min}, {max}] must contain 0")]
    InvalidLevelRange { min: i32, max: i32 },
    #[error("zoom levels [{min}, {max}] reach a scale that is zero or not finite")]
    LevelScaleOutOfRange { min: i32, max: i32 },
    #[error("viewport must be positive on both axes, got {width}x{height}")]
    InvalidViewport { width: f32, height: f32 },
    #[error("map must be positive on both axes, got {width}x{height}")]
    InvalidMapSize { width: f32, height: f32 },
    #[error("failed to load image {}: {source}", path.display())]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, ViewportError>;

//! Map source: base-resolution raster plus object placements.
//!
//! Tile layers are assumed to be pre-rendered into a single PNG at base
//! scale. Object placements come from a JSON export next to it.

use crate::error::{Result, ViewportError};
use glam::Vec2;
use image::RgbaImage;
use serde::Deserialize;
use std::path::Path;

/// A named object from the map's object layer, in base-scale pixels
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct PlacementRecord {
    pub name: String,
    pub x: f32,
    pub y: f32,
    /// Only meaningful for static obstacles
    #[serde(default)]
    pub width: f32,
    #[serde(default)]
    pub height: f32,
}

/// Raw placements file format
#[derive(Deserialize)]
struct PlacementFile {
    tile_width: u32,
    tile_height: u32,
    #[serde(default)]
    objects: Vec<PlacementRecord>,
}

pub struct MapData {
    pub image: RgbaImage,
    pub tile_width: u32,
    pub tile_height: u32,
    pub placements: Vec<PlacementRecord>,
}

impl MapData {
    /// Build from an in-memory raster (tests, procedurally rendered maps)
    pub fn from_parts(
        image: RgbaImage,
        tile_width: u32,
        tile_height: u32,
        placements: Vec<PlacementRecord>,
    ) -> Self {
        Self {
            image,
            tile_width,
            tile_height,
            placements,
        }
    }

    /// Load the map PNG and its placements JSON
    pub fn load(image_path: &Path, placements_path: &Path) -> Result<Self> {
        let image = image::open(image_path)
            .map_err(|source| ViewportError::Image {
                path: image_path.to_path_buf(),
                source,
            })?
            .into_rgba8();

        let json_str = std::fs::read_to_string(placements_path).map_err(|source| ViewportError::Io {
            path: placements_path.to_path_buf(),
            source,
        })?;
        let file: PlacementFile = serde_json::from_str(&json_str).map_err(|source| ViewportError::Json {
            path: placements_path.to_path_buf(),
            source,
        })?;

        let map = Self::from_parts(image, file.tile_width, file.tile_height, file.objects);
        let (tiles_wide, tiles_high) = map.tile_dimensions();
        tracing::info!(
            path = %image_path.display(),
            width = map.image.width(),
            height = map.image.height(),
            tiles_wide,
            tiles_high,
            objects = map.placements.len(),
            "loaded map"
        );
        Ok(map)
    }

    /// Map size in base-scale pixels
    pub fn pixel_size(&self) -> Vec2 {
        Vec2::new(self.image.width() as f32, self.image.height() as f32)
    }

    /// Number of whole tiles along each axis
    pub fn tile_dimensions(&self) -> (u32, u32) {
        (
            self.image.width() / self.tile_width.max(1),
            self.image.height() / self.tile_height.max(1),
        )
    }
}

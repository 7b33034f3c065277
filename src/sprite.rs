//! Scaled sprite images.
//!
//! A sprite's base image never changes; what's drawn is that image resized
//! for the current zoom level. Two caching strategies sit behind the same
//! interface: rescale on demand and keep the last result, or build every
//! level up front.

use crate::scale::{round_px, scale_value};
use crate::zoom::ZoomLevel;
use image::imageops::{self, FilterType};
use image::RgbaImage;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RescaleStrategy {
    /// Rescale when the level changes; reuse while it doesn't
    #[default]
    LazyRescale,
    /// One image per level, built at construction
    PrecomputedTable,
}

enum Cache {
    Lazy { level: i32, image: RgbaImage },
    Table { min_level: i32, images: Vec<RgbaImage> },
}

pub struct ScaledSprite {
    base: RgbaImage,
    cache: Cache,
}

fn rescale(base: &RgbaImage, zoom: &ZoomLevel, level: i32) -> RgbaImage {
    let scale = zoom.scale_at(level);
    let width = round_px(scale_value(base.width() as f32, zoom.base_scale(), scale)).max(1);
    let height = round_px(scale_value(base.height() as f32, zoom.base_scale(), scale)).max(1);
    imageops::resize(base, width as u32, height as u32, FilterType::Nearest)
}

impl ScaledSprite {
    pub fn new(base: RgbaImage, strategy: RescaleStrategy, zoom: &ZoomLevel) -> Self {
        let cache = match strategy {
            RescaleStrategy::LazyRescale => Cache::Lazy {
                level: zoom.level(),
                image: rescale(&base, zoom, zoom.level()),
            },
            RescaleStrategy::PrecomputedTable => Cache::Table {
                min_level: zoom.min_level(),
                images: (zoom.min_level()..=zoom.max_level())
                    .map(|level| rescale(&base, zoom, level))
                    .collect(),
            },
        };
        Self { base, cache }
    }

    pub fn strategy(&self) -> RescaleStrategy {
        match self.cache {
            Cache::Lazy { .. } => RescaleStrategy::LazyRescale,
            Cache::Table { .. } => RescaleStrategy::PrecomputedTable,
        }
    }

    pub fn base_image(&self) -> &RgbaImage {
        &self.base
    }

    /// The sprite image at the zoom's current level
    pub fn image(&mut self, zoom: &ZoomLevel) -> &RgbaImage {
        let current = zoom.level();
        match &mut self.cache {
            Cache::Lazy { level, image } => {
                if *level != current {
                    *image = rescale(&self.base, zoom, current);
                    *level = current;
                }
                &*image
            }
            Cache::Table { min_level, images } => {
                let index = (current - *min_level).clamp(0, images.len() as i32 - 1);
                &images[index as usize]
            }
        }
    }
}

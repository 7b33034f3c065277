//! Engine configuration.
//!
//! Every field has a default from [`crate::constants`], so a config file only
//! needs the values it wants to override.

use crate::constants::*;
use crate::error::{Result, ViewportError};
use crate::sprite::RescaleStrategy;
use glam::Vec2;
use serde::Deserialize;
use std::path::Path;

/// Base-scale sprite sizes per spawnable kind
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct SpriteSizes {
    pub player: Vec2,
    pub player_hit: Vec2,
    pub mob: Vec2,
    pub mob_hit: Vec2,
    pub item: Vec2,
}

impl Default for SpriteSizes {
    fn default() -> Self {
        Self {
            player: Vec2::from(PLAYER_SPRITE_SIZE),
            player_hit: Vec2::from(PLAYER_HIT_SIZE),
            mob: Vec2::from(MOB_SPRITE_SIZE),
            mob_hit: Vec2::from(MOB_HIT_SIZE),
            item: Vec2::from(ITEM_SPRITE_SIZE),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub base_scale: f32,
    pub min_level: i32,
    pub max_level: i32,
    pub viewport: Vec2,
    /// Screen pixels per frame while a pan key is held
    pub pan_speed: f32,
    pub sprite_strategy: RescaleStrategy,
    pub sprites: SpriteSizes,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            base_scale: ZOOM_BASE_SCALE,
            min_level: ZOOM_MIN_LEVEL,
            max_level: ZOOM_MAX_LEVEL,
            viewport: Vec2::new(CAMERA_DEFAULT_VIEWPORT_WIDTH, CAMERA_DEFAULT_VIEWPORT_HEIGHT),
            pan_speed: CAMERA_PAN_SPEED,
            sprite_strategy: RescaleStrategy::default(),
            sprites: SpriteSizes::default(),
        }
    }
}

impl EngineConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let json_str = std::fs::read_to_string(path).map_err(|source| ViewportError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&json_str).map_err(|source| ViewportError::Json {
            path: path.to_path_buf(),
            source,
        })
    }
}

//! Viewport engine - owns zoom, camera, map raster and entities, and provides a
//! clean API to the application shell.
//!
//! The engine handles:
//! - Applying frame input (zoom events, pan keys)
//! - Deriving screen geometry for entities
//! - Producing the per-frame map raster
//!
//! The application shell only handles:
//! - Sampling input and forwarding it to the engine
//! - Drawing what the engine returns

mod draw;

pub use draw::DrawItem;

use crate::camera::Camera;
use crate::components::{Block, Obstacle, Player, Sprite};
use crate::config::EngineConfig;
use crate::error::Result;
use crate::geometry::Rect;
use crate::input::{self, FrameInput};
use crate::map::MapData;
use crate::raster::{MapRasterCache, RasterFrame};
use crate::scale::round_px;
use crate::spawning::{self, SpawnSummary};
use crate::sprite::ScaledSprite;
use crate::view::{self, EntityView};
use crate::zoom::ZoomLevel;

use glam::Vec2;
use hecs::{Entity, World};
use image::{imageops, RgbaImage};
use std::collections::HashMap;

pub struct ViewportEngine {
    pub config: EngineConfig,
    zoom: ZoomLevel,
    camera: Camera,
    raster: MapRasterCache,
    world: World,
    /// Scaled sprite images keyed by spawn name
    sprites: HashMap<&'static str, ScaledSprite>,
    tile_size: (u32, u32),
    spawned: SpawnSummary,
}

impl ViewportEngine {
    /// Build the engine for a loaded map and spawn its placements.
    pub fn new(config: EngineConfig, map: MapData) -> Result<Self> {
        let zoom = ZoomLevel::new(config.base_scale, config.min_level, config.max_level)?;
        let camera = Camera::new(map.pixel_size(), config.viewport, &zoom)?;
        let mut world = World::new();
        let spawned = spawning::spawn_placements(&mut world, &map.placements, &config.sprites);
        Ok(Self {
            config,
            zoom,
            camera,
            raster: MapRasterCache::new(map.image),
            world,
            sprites: HashMap::new(),
            tile_size: (map.tile_width, map.tile_height),
            spawned,
        })
    }

    pub fn zoom(&self) -> &ZoomLevel {
        &self.zoom
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Tile size of the source map in base pixels
    pub fn map_tile_size(&self) -> (u32, u32) {
        self.tile_size
    }

    /// Input phase: apply this frame's zoom events and pan keys.
    pub fn handle_input(&mut self, frame: &FrameInput) -> usize {
        input::apply_frame_input(&mut self.zoom, &mut self.camera, frame, self.config.pan_speed)
    }

    pub fn resize(&mut self, viewport: Vec2) -> Result<()> {
        self.camera.set_viewport(viewport)?;
        self.config.viewport = viewport;
        Ok(())
    }

    pub fn scale(&self) -> f32 {
        self.zoom.scale()
    }

    /// Scale-correct a gameplay magnitude authored at base scale
    pub fn linear_adjust(&self, value: f32, inverse: bool) -> f32 {
        self.zoom.linear_adjust(value, inverse)
    }

    pub fn player(&self) -> Option<Entity> {
        self.world.query::<&Player>().iter().map(|(entity, _)| entity).next()
    }

    /// Visual and hit rects of a sprite or block entity at the current zoom
    pub fn view(&self, entity: Entity) -> Option<EntityView> {
        if let Ok(sprite) = self.world.get::<&Sprite>(entity) {
            return Some(view::entity_view(&*sprite, &self.zoom));
        }
        if let Ok(block) = self.world.get::<&Block>(entity) {
            return Some(view::entity_view(&*block, &self.zoom));
        }
        None
    }

    pub fn visual_rect(&self, entity: Entity) -> Option<Rect> {
        self.view(entity).map(|v| v.visual)
    }

    pub fn hit_rect(&self, entity: Entity) -> Option<Rect> {
        self.view(entity).map(|v| v.hit)
    }

    /// Translate scaled world geometry to screen space
    pub fn apply_rect(&self, rect: Rect) -> Rect {
        self.camera.apply_rect(rect)
    }

    /// Obstacles overlapped by `entity`'s hit rect
    pub fn collisions(&self, entity: Entity) -> Vec<Entity> {
        let Some(mover) = self.view(entity) else {
            return Vec::new();
        };
        self.world
            .query::<(&Block, &Obstacle)>()
            .iter()
            .filter(|(other, _)| *other != entity)
            .filter(|(_, (block, _))| view::collide_hit_rect(&mover, &view::entity_view(*block, &self.zoom)))
            .map(|(other, _)| other)
            .collect()
    }

    /// The map raster to blit this frame
    pub fn visible_sub_image(&mut self) -> RasterFrame<'_> {
        self.raster.visible_sub_image(
            self.camera.net_factor(),
            self.camera.offset(),
            self.camera.viewport(),
        )
    }

    /// Register the base image for sprites spawned under `name`
    pub fn register_sprite(&mut self, name: &'static str, image: RgbaImage) {
        let sprite = ScaledSprite::new(image, self.config.sprite_strategy, &self.zoom);
        self.sprites.insert(name, sprite);
    }

    /// Sprite image for `name` at the current zoom level
    pub fn sprite_image(&mut self, name: &str) -> Option<&RgbaImage> {
        let zoom = &self.zoom;
        self.sprites.get_mut(name).map(|sprite| sprite.image(zoom))
    }

    /// Stamp an image permanently into the base map, centered on a base-scale world point
    pub fn stamp_decal(&mut self, decal: &RgbaImage, world_center: Vec2) {
        let x = round_px(world_center.x) as i64 - decal.width() as i64 / 2;
        let y = round_px(world_center.y) as i64 - decal.height() as i64 / 2;
        imageops::overlay(self.raster.base_image_mut(), decal, x, y);
    }

    /// Counts from spawning the map's placements, including skipped unknown names
    pub fn spawn_summary(&self) -> SpawnSummary {
        self.spawned
    }
}

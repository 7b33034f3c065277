//! Per-frame draw list.

use super::ViewportEngine;
use crate::components::{Block, Sprite, SpriteName};
use crate::geometry::Rect;
use crate::scale::round_px;
use crate::view;
use hecs::Entity;

/// One entity to draw this frame, in screen space
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawItem {
    pub entity: Entity,
    /// Registered sprite image to blit; `None` for blocks (debug outline only)
    pub sprite: Option<&'static str>,
    pub screen: Rect,
    pub hit: Rect,
}

impl ViewportEngine {
    /// Screen rects for every entity that overlaps the viewport.
    ///
    /// Blocks come first so sprites draw over walls.
    pub fn draw_list(&self) -> Vec<DrawItem> {
        puffin::profile_function!();
        let viewport = self.camera.viewport();
        let screen = Rect::new(0, 0, round_px(viewport.x), round_px(viewport.y));
        let mut items = Vec::new();

        {
            puffin::profile_scope!("blocks");
            for (entity, block) in self.world.query::<&Block>().iter() {
                let view = view::entity_view(block, &self.zoom);
                items.push(DrawItem {
                    entity,
                    sprite: None,
                    screen: self.camera.apply(&view),
                    hit: self.camera.apply_rect(view.hit),
                });
            }
        }

        {
            puffin::profile_scope!("sprites");
            for (entity, (sprite, name)) in self.world.query::<(&Sprite, Option<&SpriteName>)>().iter() {
                let view = view::entity_view(sprite, &self.zoom);
                items.push(DrawItem {
                    entity,
                    sprite: name.map(|n| n.0),
                    screen: self.camera.apply(&view),
                    hit: self.camera.apply_rect(view.hit),
                });
            }
        }

        items.retain(|item| item.screen.intersects(&screen));
        items
    }
}

#[cfg(test)]
mod tests {
    use crate::config::EngineConfig;
    use crate::engine::ViewportEngine;
    use crate::input::{FrameInput, PanInput};
    use crate::map::{MapData, PlacementRecord};
    use glam::Vec2;
    use image::RgbaImage;

    fn placement(name: &str, x: f32, y: f32) -> PlacementRecord {
        PlacementRecord {
            name: name.to_string(),
            x,
            y,
            width: 64.0,
            height: 64.0,
        }
    }

    fn engine() -> ViewportEngine {
        let config = EngineConfig {
            viewport: Vec2::new(640.0, 480.0),
            ..EngineConfig::default()
        };
        let map = MapData::from_parts(
            RgbaImage::new(4096, 4096),
            64,
            64,
            vec![
                placement("wall", 0.0, 0.0),
                placement("player", 100.0, 100.0),
                placement("zombie", 3000.0, 3000.0),
            ],
        );
        ViewportEngine::new(config, map).unwrap()
    }

    #[test]
    fn test_blocks_before_sprites_and_offscreen_culled() {
        let engine = engine();
        let items = engine.draw_list();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].sprite, None);
        assert_eq!(items[1].sprite, Some("player"));
    }

    #[test]
    fn test_draw_list_is_in_screen_space() {
        let mut engine = engine();
        let before = engine.draw_list()[0].screen;
        engine.handle_input(&FrameInput {
            zoom_events: Vec::new(),
            pan: PanInput {
                right: true,
                ..PanInput::default()
            },
        });
        let after = engine.draw_list()[0].screen;
        assert_eq!(after.x, before.x - 2);
        assert_eq!(after.y, before.y);
    }
}

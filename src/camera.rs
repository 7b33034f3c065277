//! Screen-space camera over a bounded map.
//!
//! The camera holds one offset in scaled screen pixels. Scaled world geometry
//! plus the offset gives what is drawn. Pan and zoom both end in [`Camera::clamp`],
//! so the offset is valid after every public mutation.

use crate::error::{Result, ViewportError};
use crate::geometry::Rect;
use crate::input::PanInput;
use crate::scale::round_px;
use crate::view::EntityView;
use crate::zoom::{ZoomChange, ZoomLevel};
use glam::{IVec2, Vec2};

#[derive(Debug, Clone)]
pub struct Camera {
    /// Translation applied to scaled geometry (always <= 0 on both axes after clamping)
    offset: Vec2,
    /// Map size in base-scale pixels
    map_size: Vec2,
    viewport: Vec2,
    /// Scale the offset is currently expressed in
    scale: f32,
    base_scale: f32,
}

fn check_size(size: Vec2) -> bool {
    size.x.is_finite() && size.y.is_finite() && size.x > 0.0 && size.y > 0.0
}

/// Valid offset range on one axis is `[-(scaled - viewport), 0]`, or exactly 0
/// when the map fits.
fn clamp_axis(offset: f32, scaled: f32, viewport: f32) -> f32 {
    if scaled >= viewport {
        offset.clamp(-(scaled - viewport), 0.0)
    } else {
        0.0
    }
}

impl Camera {
    pub fn new(map_size: Vec2, viewport: Vec2, zoom: &ZoomLevel) -> Result<Self> {
        if !check_size(map_size) {
            return Err(ViewportError::InvalidMapSize {
                width: map_size.x,
                height: map_size.y,
            });
        }
        if !check_size(viewport) {
            return Err(ViewportError::InvalidViewport {
                width: viewport.x,
                height: viewport.y,
            });
        }
        let mut camera = Self {
            offset: Vec2::ZERO,
            map_size,
            viewport,
            scale: zoom.scale(),
            base_scale: zoom.base_scale(),
        };
        camera.clamp();
        Ok(camera)
    }

    /// Current translation in scaled screen pixels
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    pub fn map_size(&self) -> Vec2 {
        self.map_size
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Scale relative to base (1.0 at zoom level 0)
    pub fn net_factor(&self) -> f32 {
        self.scale / self.base_scale
    }

    pub fn map_size_scaled(&self) -> Vec2 {
        self.map_size * self.net_factor()
    }

    /// Offset rounded to whole pixels
    pub fn pixel_offset(&self) -> IVec2 {
        IVec2::new(round_px(self.offset.x), round_px(self.offset.y))
    }

    /// Window resize. Zoom and offset are kept, then re-clamped.
    pub fn set_viewport(&mut self, viewport: Vec2) -> Result<()> {
        if !check_size(viewport) {
            return Err(ViewportError::InvalidViewport {
                width: viewport.x,
                height: viewport.y,
            });
        }
        self.viewport = viewport;
        self.clamp();
        Ok(())
    }

    /// Screen position of an entity's visual rect
    pub fn apply(&self, view: &EntityView) -> Rect {
        self.apply_rect(view.visual)
    }

    pub fn apply_rect(&self, rect: Rect) -> Rect {
        rect.translate(self.pixel_offset())
    }

    pub fn pan(&mut self, dx: f32, dy: f32) {
        self.offset += Vec2::new(dx, dy);
        self.clamp();
    }

    /// Pan from held direction keys. Each key moves the view toward that side of the map.
    pub fn pan_keys(&mut self, keys: &PanInput, speed: f32) {
        let mut delta = Vec2::ZERO;
        if keys.up {
            delta.y += speed;
        }
        if keys.down {
            delta.y -= speed;
        }
        if keys.left {
            delta.x += speed;
        }
        if keys.right {
            delta.x -= speed;
        }
        self.pan(delta.x, delta.y);
    }

    pub fn clamp(&mut self) {
        let scaled = self.map_size_scaled();
        self.offset.x = clamp_axis(self.offset.x, scaled.x, self.viewport.x);
        self.offset.y = clamp_axis(self.offset.y, scaled.y, self.viewport.y);
    }

    /// Multiply the scale by `factor`, keeping the world point under `anchor` fixed on screen.
    ///
    /// `new_offset = offset * factor - anchor * (factor - 1)`. A world point at
    /// screen `p` sits at scaled position `p - offset`; after scaling it is at
    /// `(p - offset) * factor`, which lands back on `p` for `p == anchor`.
    pub fn zoom_anchor(&mut self, anchor: Vec2, factor: f32) {
        if !factor.is_finite() || factor <= 0.0 || factor == 1.0 {
            return;
        }
        self.offset = self.offset * factor - anchor * (factor - 1.0);
        self.scale *= factor;
        self.clamp();
    }

    /// Follow a zoom transition, anchored at `anchor`.
    ///
    /// Returns `false` without touching anything when the camera is already at
    /// `change.new_scale`, so a change delivered twice is only applied once.
    pub fn rezoom(&mut self, anchor: Vec2, change: ZoomChange) -> bool {
        if self.scale == change.new_scale {
            return false;
        }
        self.zoom_anchor(anchor, change.new_scale / self.scale);
        self.scale = change.new_scale;
        true
    }

    /// Convert a screen point to base-scale world coordinates
    pub fn screen_to_world(&self, screen: Vec2) -> Vec2 {
        (screen - self.offset) / self.net_factor()
    }

    /// Convert a base-scale world point to screen coordinates
    pub fn world_to_screen(&self, world: Vec2) -> Vec2 {
        world * self.net_factor() + self.offset
    }

    /// Part of the map currently on screen, in base-scale world pixels
    pub fn visible_world_rect(&self) -> (Vec2, Vec2) {
        let min = self.screen_to_world(Vec2::ZERO).max(Vec2::ZERO);
        let max = self.screen_to_world(self.viewport).min(self.map_size);
        (min, max)
    }

    /// Screen positions of the tile grid lines inside the viewport (debug overlay).
    ///
    /// Returns `(columns, rows)`: x coordinates of vertical lines and y
    /// coordinates of horizontal lines.
    pub fn grid_lines(&self, tile_px: i32) -> (Vec<i32>, Vec<i32>) {
        if tile_px <= 0 {
            return (Vec::new(), Vec::new());
        }
        let offset = self.pixel_offset();
        let scaled = self.map_size_scaled();
        let extent = IVec2::new(
            round_px(scaled.x).min(round_px(self.viewport.x) - offset.x),
            round_px(scaled.y).min(round_px(self.viewport.y) - offset.y),
        );
        let lines = |start: i32, end: i32, shift: i32| -> Vec<i32> {
            (start..end)
                .step_by(tile_px as usize)
                .map(|p| p + shift)
                .collect()
        };
        // Start from the line at or just before the top-left screen edge
        let first_x = (-offset.x).div_euclid(tile_px) * tile_px;
        let first_y = (-offset.y).div_euclid(tile_px) * tile_px;
        (
            lines(first_x, extent.x, offset.x),
            lines(first_y, extent.y, offset.y),
        )
    }
}

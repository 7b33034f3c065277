//! Derived screen geometry for scalable entities.
//!
//! Nothing here is stored: a visual rect and a hit rect are recomputed from
//! the entity's base geometry and the current zoom each time they're needed.

use crate::components::{Anchor, Scalable};
use crate::geometry::Rect;
use crate::scale::{round_px, scale_position, scale_size};
use crate::zoom::ZoomLevel;
use glam::{IVec2, Vec2};

/// Visual and collision rectangles at one zoom level, in scaled world pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntityView {
    pub visual: Rect,
    pub hit: Rect,
}

fn project(position: Vec2, size: Vec2, anchor: Anchor, zoom: &ZoomLevel) -> Rect {
    let base = zoom.base_scale();
    let scale = zoom.scale();
    let position = scale_position(position, base, scale);
    let size = scale_size(size, base, scale);
    match anchor {
        Anchor::Center => {
            let center = IVec2::new(round_px(position.x), round_px(position.y));
            Rect::from_center(center, round_px(size.x), round_px(size.y))
        }
        Anchor::TopLeft => Rect::from_edges(position, position + size),
    }
}

pub fn visual_rect<S: Scalable + ?Sized>(shape: &S, zoom: &ZoomLevel) -> Rect {
    project(shape.base_position(), shape.base_size(), shape.anchor(), zoom)
}

/// Collision rect; same as the visual rect unless the shape has its own hit size
pub fn hit_rect<S: Scalable + ?Sized>(shape: &S, zoom: &ZoomLevel) -> Rect {
    match shape.hit_size() {
        Some(size) => project(shape.base_position(), size, shape.anchor(), zoom),
        None => visual_rect(shape, zoom),
    }
}

pub fn entity_view<S: Scalable + ?Sized>(shape: &S, zoom: &ZoomLevel) -> EntityView {
    EntityView {
        visual: visual_rect(shape, zoom),
        hit: hit_rect(shape, zoom),
    }
}

/// True if `mover`'s hit rect overlaps `other`'s visual rect
pub fn collide_hit_rect(mover: &EntityView, other: &EntityView) -> bool {
    mover.hit.intersects(&other.visual)
}

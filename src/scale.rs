//! Conversions between two scale factors.
//!
//! World geometry is authored at the base scale; these helpers move scalars,
//! positions and sizes to any other scale. Integer pixel coordinates are
//! always produced with [`round_px`] so neighbouring tiles land on the same
//! pixel edge.

use glam::Vec2;

/// Rescale a scalar from `from_scale` to `to_scale`.
pub fn scale_value(value: f32, from_scale: f32, to_scale: f32) -> f32 {
    value * to_scale / from_scale
}

pub fn scale_size(size: Vec2, from_scale: f32, to_scale: f32) -> Vec2 {
    Vec2::new(
        scale_value(size.x, from_scale, to_scale),
        scale_value(size.y, from_scale, to_scale),
    )
}

pub fn scale_position(pos: Vec2, from_scale: f32, to_scale: f32) -> Vec2 {
    Vec2::new(
        scale_value(pos.x, from_scale, to_scale),
        scale_value(pos.y, from_scale, to_scale),
    )
}

/// Round half up to an integer pixel coordinate.
pub fn round_px(value: f32) -> i32 {
    (value + 0.5).floor() as i32
}

/// Rescale a gameplay magnitude (speed, spread, radius) authored at base scale.
///
/// `inverse = false` tracks the rendered scale: the value doubles for every
/// zoom-in step. `inverse = true` runs the other way and halves instead.
pub fn linear_adjust(value: f32, base_scale: f32, scale: f32, inverse: bool) -> f32 {
    if scale == base_scale {
        return value;
    }
    let factor = if inverse {
        scale / base_scale
    } else {
        base_scale / scale
    };
    value / factor
}

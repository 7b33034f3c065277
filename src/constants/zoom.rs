//! Zoom level constants.

/// Tile edge in pixels at zoom level 0. All world geometry is authored at this scale.
pub const ZOOM_BASE_SCALE: f32 = 64.0;
/// Lowest zoom level (64 * 2^-2 = 16 px tiles)
pub const ZOOM_MIN_LEVEL: i32 = -2;
/// Highest zoom level (64 * 2^2 = 256 px tiles)
pub const ZOOM_MAX_LEVEL: i32 = 2;

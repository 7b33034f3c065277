//! Base-scale sprite dimensions.
//!
//! Sizes are in base-scale pixels, i.e. what the sprite measures at zoom level 0.

/// Player sprite image size
pub const PLAYER_SPRITE_SIZE: (f32, f32) = (49.0, 43.0);
/// Player collision footprint (tighter than the sprite so rotation doesn't snag walls)
pub const PLAYER_HIT_SIZE: (f32, f32) = (35.0, 35.0);
/// Mob sprite image size
pub const MOB_SPRITE_SIZE: (f32, f32) = (35.0, 43.0);
/// Mob collision footprint
pub const MOB_HIT_SIZE: (f32, f32) = (30.0, 30.0);
/// Pickup item sprite size
pub const ITEM_SPRITE_SIZE: (f32, f32) = (32.0, 32.0);

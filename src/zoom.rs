//! Discrete zoom state.
//!
//! The scale is `base_scale * 2^level` for an integer level clamped to a
//! configured range. Transitions report what changed so dependents (camera,
//! sprite caches) can rescale by ratio.

use crate::error::{Result, ViewportError};
use crate::scale;

/// A completed zoom transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomChange {
    pub prev_level: i32,
    pub new_level: i32,
    pub prev_scale: f32,
    pub new_scale: f32,
}

impl ZoomChange {
    /// Ratio of the new scale to the previous one (2.0 for a zoom-in step)
    pub fn factor(&self) -> f32 {
        self.new_scale / self.prev_scale
    }
}

#[derive(Debug, Clone)]
pub struct ZoomLevel {
    base_scale: f32,
    level: i32,
    min_level: i32,
    max_level: i32,
}

impl ZoomLevel {
    /// Create a zoom state at level 0.
    ///
    /// The base scale must be positive and finite, the level range must
    /// include 0, and the scales at both ends of the range must stay positive
    /// and finite.
    pub fn new(base_scale: f32, min_level: i32, max_level: i32) -> Result<Self> {
        if !base_scale.is_finite() || base_scale <= 0.0 {
            return Err(ViewportError::InvalidBaseScale(base_scale));
        }
        if min_level > 0 || max_level < 0 {
            return Err(ViewportError::InvalidLevelRange {
                min: min_level,
                max: max_level,
            });
        }
        let smallest = base_scale * 2f32.powi(min_level);
        let largest = base_scale * 2f32.powi(max_level);
        if smallest <= 0.0 || !largest.is_finite() {
            return Err(ViewportError::LevelScaleOutOfRange {
                min: min_level,
                max: max_level,
            });
        }
        Ok(Self {
            base_scale,
            level: 0,
            min_level,
            max_level,
        })
    }

    pub fn level(&self) -> i32 {
        self.level
    }

    pub fn min_level(&self) -> i32 {
        self.min_level
    }

    pub fn max_level(&self) -> i32 {
        self.max_level
    }

    pub fn base_scale(&self) -> f32 {
        self.base_scale
    }

    /// Current scale (tile edge in screen pixels)
    pub fn scale(&self) -> f32 {
        self.scale_at(self.level)
    }

    /// Scale for an arbitrary level, clamped into the configured range
    pub fn scale_at(&self, level: i32) -> f32 {
        let level = level.clamp(self.min_level, self.max_level);
        self.base_scale * 2f32.powi(level)
    }

    /// Current scale relative to the base scale (1.0 at level 0)
    pub fn net_factor(&self) -> f32 {
        self.scale() / self.base_scale
    }

    /// Current tile edge rounded to whole pixels
    pub fn tile_size(&self) -> i32 {
        scale::round_px(self.scale())
    }

    /// Rescale a gameplay magnitude authored at base scale to the current scale.
    pub fn linear_adjust(&self, value: f32, inverse: bool) -> f32 {
        scale::linear_adjust(value, self.base_scale, self.scale(), inverse)
    }

    /// Step one level in. Returns `None` when already at the maximum.
    pub fn zoom_in(&mut self) -> Option<ZoomChange> {
        self.set_level((self.level + 1).min(self.max_level))
    }

    /// Step one level out. Returns `None` when already at the minimum.
    pub fn zoom_out(&mut self) -> Option<ZoomChange> {
        self.set_level((self.level - 1).max(self.min_level))
    }

    /// Return to level 0. Returns `None` when already there.
    pub fn reset(&mut self) -> Option<ZoomChange> {
        self.set_level(0)
    }

    fn set_level(&mut self, level: i32) -> Option<ZoomChange> {
        if level == self.level {
            return None;
        }
        let change = ZoomChange {
            prev_level: self.level,
            new_level: level,
            prev_scale: self.scale(),
            new_scale: self.scale_at(level),
        };
        self.level = level;
        tracing::debug!(
            prev_scale = change.prev_scale,
            new_scale = change.new_scale,
            level,
            "zoom level changed"
        );
        Some(change)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario_zoom() -> ZoomLevel {
        ZoomLevel::new(64.0, -4, 2).unwrap()
    }

    #[test]
    fn test_scale_strictly_increasing() {
        let zoom = scenario_zoom();
        assert_eq!(zoom.scale_at(0), 64.0);
        assert_eq!(zoom.scale_at(-4), 4.0);
        assert_eq!(zoom.scale_at(2), 256.0);
        for level in -4..2 {
            assert!(zoom.scale_at(level) < zoom.scale_at(level + 1));
            assert!(zoom.scale_at(level) > 0.0);
        }
    }

    #[test]
    fn test_zoom_in_scenario() {
        let mut zoom = scenario_zoom();
        let change = zoom.zoom_in().unwrap();
        assert_eq!(zoom.level(), 1);
        assert_eq!(zoom.scale(), 128.0);
        assert_eq!(change.prev_scale, 64.0);
        assert_eq!(change.new_scale, 128.0);
        assert_eq!(change.factor(), 2.0);
    }

    #[test]
    fn test_zoom_in_then_out_restores() {
        let mut zoom = scenario_zoom();
        for start in -4..=2 {
            while zoom.level() > start {
                zoom.zoom_out();
            }
            while zoom.level() < start {
                zoom.zoom_in();
            }
            let (level, scale) = (zoom.level(), zoom.scale());
            if level < zoom.max_level() {
                zoom.zoom_in();
                zoom.zoom_out();
                assert_eq!((zoom.level(), zoom.scale()), (level, scale));
            }
        }
    }

    #[test]
    fn test_boundaries_are_noops() {
        let mut zoom = scenario_zoom();
        assert!(zoom.zoom_in().is_some());
        assert!(zoom.zoom_in().is_some());
        assert!(zoom.zoom_in().is_none());
        assert_eq!(zoom.level(), 2);
        assert_eq!(zoom.scale(), 256.0);

        for _ in 0..6 {
            zoom.zoom_out();
        }
        assert!(zoom.zoom_out().is_none());
        assert_eq!(zoom.level(), -4);
    }

    #[test]
    fn test_reset_returns_to_base() {
        let mut zoom = scenario_zoom();
        assert!(zoom.reset().is_none());
        zoom.zoom_out();
        zoom.zoom_out();
        let change = zoom.reset().unwrap();
        assert_eq!(change.factor(), 4.0);
        assert_eq!(zoom.scale(), zoom.base_scale());
    }

    #[test]
    fn test_invalid_construction() {
        assert!(ZoomLevel::new(0.0, -1, 1).is_err());
        assert!(ZoomLevel::new(f32::NAN, -1, 1).is_err());
        assert!(ZoomLevel::new(64.0, 1, 3).is_err());
        assert!(ZoomLevel::new(64.0, -3, -1).is_err());
    }

    #[test]
    fn test_extreme_level_range_rejected() {
        // 2^-200 underflows to zero and 2^200 overflows in f32
        assert!(matches!(
            ZoomLevel::new(64.0, -200, 200),
            Err(ViewportError::LevelScaleOutOfRange { min: -200, max: 200 })
        ));
        assert!(ZoomLevel::new(64.0, -200, 0).is_err());
        assert!(ZoomLevel::new(64.0, 0, 200).is_err());

        let zoom = ZoomLevel::new(64.0, -20, 20).unwrap();
        assert!(zoom.scale_at(-20) > 0.0);
        assert!(zoom.scale_at(20).is_finite());
    }

    #[test]
    fn test_linear_adjust_follows_level() {
        let mut zoom = ZoomLevel::new(64.0, -2, 2).unwrap();
        zoom.zoom_out();
        zoom.zoom_out();
        assert_eq!(zoom.linear_adjust(400.0, false), 100.0);
        assert_eq!(zoom.tile_size(), 16);
    }
}

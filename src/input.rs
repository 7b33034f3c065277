//! Input handling for zoom and pan.
//!
//! Events are applied in arrival order during the input phase of a frame,
//! before anything reads the derived geometry.

use crate::camera::Camera;
use crate::zoom::ZoomLevel;
use glam::Vec2;
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZoomKind {
    In,
    Out,
    Reset,
}

/// A discrete zoom trigger (mouse wheel / button) with the cursor position at the time
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ZoomEvent {
    pub kind: ZoomKind,
    /// Screen-space point that stays fixed across the zoom
    pub anchor: Vec2,
}

/// Direction keys held this frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PanInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl PanInput {
    pub fn any(&self) -> bool {
        self.up || self.down || self.left || self.right
    }
}

/// Everything sampled for one frame
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FrameInput {
    pub zoom_events: Vec<ZoomEvent>,
    pub pan: PanInput,
}

/// Apply one frame of input. Returns how many zoom events actually rescaled the camera.
pub fn apply_frame_input(
    zoom: &mut ZoomLevel,
    camera: &mut Camera,
    input: &FrameInput,
    pan_speed: f32,
) -> usize {
    let mut rezooms = 0;
    for event in &input.zoom_events {
        let change = match event.kind {
            ZoomKind::In => zoom.zoom_in(),
            ZoomKind::Out => zoom.zoom_out(),
            ZoomKind::Reset => zoom.reset(),
        };
        // Boundary no-ops produce no change and skip the camera entirely
        if let Some(change) = change {
            if camera.rezoom(event.anchor, change) {
                rezooms += 1;
            }
        }
    }
    if input.pan.any() {
        camera.pan_keys(&input.pan, pan_speed);
    }
    rezooms
}

/// Centered anchor, for zoom triggers that have no cursor (keyboard shortcuts)
pub fn viewport_center(camera: &Camera) -> Vec2 {
    camera.viewport() * 0.5
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (ZoomLevel, Camera) {
        let zoom = ZoomLevel::new(64.0, -2, 2).unwrap();
        let camera = Camera::new(Vec2::splat(2048.0), Vec2::new(800.0, 600.0), &zoom).unwrap();
        (zoom, camera)
    }

    fn event(kind: ZoomKind, x: f32, y: f32) -> ZoomEvent {
        ZoomEvent {
            kind,
            anchor: Vec2::new(x, y),
        }
    }

    #[test]
    fn test_events_in_arrival_order() {
        let (mut zoom, mut camera) = setup();
        let input = FrameInput {
            zoom_events: vec![event(ZoomKind::In, 400.0, 300.0), event(ZoomKind::Out, 400.0, 300.0)],
            pan: PanInput::default(),
        };
        assert_eq!(apply_frame_input(&mut zoom, &mut camera, &input, 2.0), 2);
        assert_eq!(zoom.level(), 0);
        assert_eq!(camera.offset(), Vec2::ZERO);
        assert_eq!(camera.scale(), zoom.scale());
    }

    #[test]
    fn test_boundary_events_skip_rezoom() {
        let (mut zoom, mut camera) = setup();
        let input = FrameInput {
            zoom_events: vec![event(ZoomKind::In, 100.0, 100.0); 5],
            pan: PanInput::default(),
        };
        assert_eq!(apply_frame_input(&mut zoom, &mut camera, &input, 2.0), 2);
        assert_eq!(zoom.level(), 2);
        assert_eq!(camera.scale(), 256.0);
        // Anchor (100, 100) zoomed 4x from the origin
        assert_eq!(camera.offset(), Vec2::new(-300.0, -300.0));
    }

    #[test]
    fn test_pan_after_zoom() {
        let (mut zoom, mut camera) = setup();
        let input = FrameInput {
            zoom_events: vec![event(ZoomKind::In, 400.0, 300.0)],
            pan: PanInput {
                right: true,
                down: true,
                ..PanInput::default()
            },
        };
        apply_frame_input(&mut zoom, &mut camera, &input, 2.0);
        assert_eq!(camera.offset(), Vec2::new(-402.0, -302.0));
    }

    #[test]
    fn test_frame_input_from_json() {
        let json = r#"{"zoom_events": [{"kind": "reset", "anchor": [10.0, 20.0]}], "pan": {"left": true}}"#;
        let input: FrameInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.zoom_events[0].kind, ZoomKind::Reset);
        assert_eq!(input.zoom_events[0].anchor, Vec2::new(10.0, 20.0));
        assert!(input.pan.left && !input.pan.right);
    }
}

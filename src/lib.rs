//! Viewport transform engine for a zoomable, pannable tile map.
//!
//! World geometry is authored once at a base scale. A discrete [`ZoomLevel`]
//! picks the current scale, a [`Camera`] pans a bounded map and keeps zoom
//! anchored at the cursor, and everything drawn each frame (entity rects,
//! the visible map raster) is derived from those two on demand.

pub mod camera;
pub mod components;
pub mod config;
pub mod constants;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod input;
pub mod map;
pub mod raster;
pub mod scale;
pub mod spawning;
pub mod sprite;
pub mod view;
pub mod zoom;

pub use camera::Camera;
pub use components::{Anchor, Scalable};
pub use config::EngineConfig;
pub use engine::{DrawItem, ViewportEngine};
pub use error::{Result, ViewportError};
pub use geometry::Rect;
pub use input::{FrameInput, PanInput, ZoomEvent, ZoomKind};
pub use map::{MapData, PlacementRecord};
pub use raster::{MapRasterCache, RasterFrame, RasterPlan};
pub use sprite::{RescaleStrategy, ScaledSprite};
pub use view::EntityView;
pub use zoom::{ZoomChange, ZoomLevel};

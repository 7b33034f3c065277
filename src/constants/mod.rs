//! Engine constants organized by domain.
//!
//! Centralizing magic numbers makes tuning easier and documents intent.
//! These are the defaults behind [`crate::config::EngineConfig`].

mod camera;
mod sprites;
mod zoom;

pub use camera::*;
pub use sprites::*;
pub use zoom::*;

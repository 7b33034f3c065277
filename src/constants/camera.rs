//! Camera-related constants.

/// Pan distance per frame while a direction key is held (screen pixels)
pub const CAMERA_PAN_SPEED: f32 = 2.0;
/// Default viewport width when no config overrides it
pub const CAMERA_DEFAULT_VIEWPORT_WIDTH: f32 = 1024.0;
/// Default viewport height when no config overrides it
pub const CAMERA_DEFAULT_VIEWPORT_HEIGHT: f32 = 768.0;

use crate::foundation::error::{ThumbnailError, ThumbnailResult};

/// Output canvas size in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// Create a canvas. Both dimensions must be non-zero.
    pub fn new(width: u32, height: u32) -> ThumbnailResult<Self> {
        if width == 0 || height == 0 {
            return Err(ThumbnailError::validation(
                "canvas width and height must be > 0",
            ));
        }
        Ok(Self { width, height })
    }

    /// Height over width.
    pub fn aspect(self) -> f64 {
        f64::from(self.height) / f64::from(self.width)
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
        }
    }
}

/// Scene-space location (x, y, z) in scene units.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Position3 {
    /// Horizontal, positive to the right.
    pub x: f64,
    /// Vertical, positive up.
    pub y: f64,
    /// Depth, towards the camera.
    pub z: f64,
}

impl Position3 {
    /// Build from components.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

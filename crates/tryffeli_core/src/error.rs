//! Errors raised while building scene objects.
//!
//! Rendering itself cannot fail; invalid geometry and film sizes are
//! rejected up front instead of producing a degenerate image.

use thiserror::Error;

/// Validation failures for scene, light and camera construction.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SceneError {
    #[error("sphere radius must be positive and finite, got {0}")]
    InvalidRadius(f64),

    #[error("film resolution must be non-zero, got {width}x{height}")]
    InvalidResolution { width: u32, height: u32 },

    #[error("field of view must be in (0, 90) degrees, got {0}")]
    InvalidFieldOfView(f64),

    #[error("light intensity must be non-negative and finite, got {0}")]
    InvalidIntensity(f64),
}

//! Tryffeli Core - renderer-agnostic value types.
//!
//! This crate provides:
//!
//! - **Color**: additive RGB values accumulated during shading
//! - **Material**: the surface material tag carried by primitives
//! - **RenderSurface**: the framebuffer a camera exposes during rendering
//! - **SceneError**: validation failures when building scene objects

pub mod color;
pub mod error;
pub mod film;
pub mod material;

// Re-export commonly used types
pub use color::Color;
pub use error::SceneError;
pub use film::RenderSurface;
pub use material::{Material, MaterialType};

//! Math kernel for the Tryffeli ray tracer.
//!
//! Vectors and matrices are glam's double precision types. The extension
//! traits in [`vector`] and [`matrix`] add the operations the renderer relies
//! on with the exact semantics it expects (zero-safe normalization, rotation
//! of directions by the upper 3x3 block, Y-Z-X rotation composition).

// Re-export glam for convenience
pub use glam::*;

mod interval;
mod matrix;
mod ray;
mod vector;

pub use interval::Interval;
pub use matrix::Matrix4Ext;
pub use ray::Ray;
pub use vector::Vector3Ext;

/// 3-component (XYZ) vector.
pub type Vector3 = glam::DVec3;

/// 4x4 column-major matrix.
pub type Matrix4 = glam::DMat4;

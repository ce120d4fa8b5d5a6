use crate::Vector3;

/// A directed line in 3D space.
///
/// `direction` is expected to be unit length; distances reported along the
/// ray are only meaningful when it is, but nothing enforces it.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub position: Vector3,
    pub direction: Vector3,
}

impl Ray {
    /// Create a new ray.
    pub fn new(position: Vector3, direction: Vector3) -> Self {
        Self {
            position,
            direction,
        }
    }

    /// Get the point along the ray at signed distance t.
    ///
    /// Returns: position + direction * t
    #[inline]
    pub fn at(&self, t: f64) -> Vector3 {
        self.position + self.direction * t
    }
}

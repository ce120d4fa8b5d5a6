//! Sphere primitive for ray tracing.

use crate::intersection::{GeometricPrimitive, RayIntersectionInfo};
use std::f64::consts::PI;
use tryffeli_core::{Material, SceneError};
use tryffeli_math::{Ray, Vector3, Vector3Ext};

/// A sphere primitive.
#[derive(Debug, Clone, PartialEq)]
pub struct Sphere {
    position: Vector3,
    radius: f64,
    material: Material,
}

impl Sphere {
    /// Create a new sphere. The radius must be positive and finite.
    pub fn new(position: Vector3, radius: f64, material: Material) -> Result<Self, SceneError> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(SceneError::InvalidRadius(radius));
        }

        Ok(Self {
            position,
            radius,
            material,
        })
    }

    pub fn position(&self) -> Vector3 {
        self.position
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Signed distance along `ray` to the sphere's surface.
    ///
    /// Positive: the ray starts outside and enters through the near side.
    /// Negative: the ray starts inside; the magnitude is the distance to the
    /// exit point. `None` when the ray line misses, grazes, or the sphere is
    /// entirely behind the ray origin.
    pub fn intersection_distance(&self, ray: &Ray) -> Option<f64> {
        let v = self.position - ray.position;
        let b = -v.dot(ray.direction);
        let det = b * b - v.dot(v) + self.radius * self.radius;

        if det <= 0.0 {
            return None;
        }

        let sqrt_det = det.sqrt();
        let i1 = b - sqrt_det;
        let i2 = b + sqrt_det;

        if i2 <= 0.0 {
            return None;
        }

        if i1 < 0.0 {
            Some(-i2)
        } else {
            Some(i1)
        }
    }

    /// Get the UV coordinates for a point on the unit sphere.
    fn sphere_uv(p: Vector3) -> (f64, f64) {
        // theta: angle down from +Y
        // phi: angle around Y axis from +X
        let theta = (-p.y).clamp(-1.0, 1.0).acos();
        let phi = (-p.z).atan2(p.x) + PI;

        (phi / (2.0 * PI), theta / PI)
    }
}

impl GeometricPrimitive for Sphere {
    fn intersection_with(&self, ray: &Ray) -> Option<RayIntersectionInfo<'_>> {
        let distance = self.intersection_distance(ray)?;

        let point = ray.at(distance);
        let normal = (point - self.position).normalized();
        let (u, v) = Self::sphere_uv(normal);

        Some(RayIntersectionInfo {
            ray: *ray,
            primitive: self,
            distance,
            point,
            normal,
            u,
            v,
        })
    }

    fn material(&self) -> &Material {
        &self.material
    }
}

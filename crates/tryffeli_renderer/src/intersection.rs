//! GeometricPrimitive trait and RayIntersectionInfo for ray-surface queries.

use std::fmt;

use tryffeli_core::Material;
use tryffeli_math::{Ray, Vector3};

/// Metadata about an intersection between a ray and a primitive.
///
/// Only ever constructed for an actual hit; a miss is `None`.
#[derive(Clone, Copy)]
pub struct RayIntersectionInfo<'a> {
    /// The ray that produced this intersection
    pub ray: Ray,
    /// The primitive that was hit
    pub primitive: &'a dyn GeometricPrimitive,
    /// Signed distance along the ray. Positive when the ray started outside
    /// the primitive (front face), negative when it started inside.
    pub distance: f64,
    /// World-space location of the intersection
    pub point: Vector3,
    /// Outward surface normal at `point`
    pub normal: Vector3,
    /// Texture UV coordinates (not consumed by shading)
    pub u: f64,
    pub v: f64,
}

impl<'a> RayIntersectionInfo<'a> {
    /// Whether the ray hit the primitive from outside.
    pub fn is_front_face(&self) -> bool {
        self.distance > 0.0
    }

    /// Whether both intersections are on the same primitive instance.
    pub fn same_primitive(&self, other: &RayIntersectionInfo<'_>) -> bool {
        std::ptr::addr_eq(self.primitive, other.primitive)
    }

    /// Material of the primitive that was hit.
    pub fn material(&self) -> &'a Material {
        self.primitive.material()
    }
}

impl fmt::Debug for RayIntersectionInfo<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RayIntersectionInfo")
            .field("ray", &self.ray)
            .field("primitive", &self.primitive)
            .field("distance", &self.distance)
            .field("point", &self.point)
            .field("normal", &self.normal)
            .finish_non_exhaustive()
    }
}

/// A geometric primitive (e.g. sphere) capable of being rendered.
pub trait GeometricPrimitive: fmt::Debug + Send + Sync {
    /// Intersect a ray with this primitive alone.
    ///
    /// Returns the primitive's own nearest intersection along the ray, or
    /// `None` on a miss. Choosing the nearest primitive in a scene is the
    /// caller's job.
    fn intersection_with(&self, ray: &Ray) -> Option<RayIntersectionInfo<'_>>;

    /// The material this primitive is made of.
    fn material(&self) -> &Material;
}

/// Pick the intersection with the smallest signed distance.
///
/// The comparison is on the raw signed value, so a back-face hit (negative)
/// wins over any front-face hit. Ties keep the earliest intersection.
pub fn nearest<'a, I>(intersections: I) -> Option<RayIntersectionInfo<'a>>
where
    I: IntoIterator<Item = RayIntersectionInfo<'a>>,
{
    intersections.into_iter().fold(None, |nearest, candidate| match nearest {
        Some(current) if current.distance <= candidate.distance => Some(current),
        _ => Some(candidate),
    })
}

//! Light sources and shadow testing.

use std::fmt;

use crate::intersection::{nearest, RayIntersectionInfo};
use crate::Scene;
use tryffeli_core::SceneError;
use tryffeli_math::{Ray, Vector3, Vector3Ext};

/// Trait for lights that illuminate a scene.
///
/// A light does not own or hold on to the scene it lights; the scene is
/// supplied on every query.
pub trait Light: fmt::Debug + Send + Sync {
    /// World-space position of the light.
    fn position(&self) -> Vector3;

    /// Scalar intensity.
    fn intensity(&self) -> f64;

    /// Returns true if this light can see the given intersection point,
    /// i.e. nothing in `scene` occludes it.
    fn can_see(&self, scene: &Scene, intersection: &RayIntersectionInfo<'_>) -> bool;
}

/// An omnidirectional point light.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    position: Vector3,
    intensity: f64,
}

impl PointLight {
    /// Create a new point light. Intensity must be non-negative and finite.
    pub fn new(position: Vector3, intensity: f64) -> Result<Self, SceneError> {
        if !(intensity.is_finite() && intensity >= 0.0) {
            return Err(SceneError::InvalidIntensity(intensity));
        }

        Ok(Self {
            position,
            intensity,
        })
    }

    /// Ray from the light toward a surface point.
    pub fn shadow_ray(&self, target: Vector3) -> Ray {
        Ray::new(self.position, (target - self.position).normalized())
    }
}

impl Light for PointLight {
    fn position(&self) -> Vector3 {
        self.position
    }

    fn intensity(&self) -> f64 {
        self.intensity
    }

    fn can_see(&self, scene: &Scene, intersection: &RayIntersectionInfo<'_>) -> bool {
        let shadow_ray = self.shadow_ray(intersection.point);

        // Signed comparison: a primitive enclosing the light reports a
        // negative distance and always occludes.
        match nearest(scene.cast(&shadow_ray)) {
            Some(blocker) => blocker.same_primitive(intersection),
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Sphere;
    use tryffeli_core::Material;

    fn sphere(position: Vector3, radius: f64) -> Sphere {
        Sphere::new(position, radius, Material::lambertian()).unwrap()
    }

    /// Hit on the first primitive of `scene` along +Z from the origin.
    fn hit_on_first(scene: &Scene) -> RayIntersectionInfo<'_> {
        scene.primitives()[0]
            .intersection_with(&Ray::new(Vector3::ZERO, Vector3::Z))
            .unwrap()
    }

    #[test]
    fn test_rejects_bad_intensity() {
        assert!(PointLight::new(Vector3::ZERO, 0.0).is_ok());
        assert_eq!(
            PointLight::new(Vector3::ZERO, -1.0),
            Err(SceneError::InvalidIntensity(-1.0))
        );
        assert!(PointLight::new(Vector3::ZERO, f64::NAN).is_err());
    }

    #[test]
    fn test_shadow_ray_points_at_target() {
        let light = PointLight::new(Vector3::new(0.0, 10.0, 0.0), 1.0).unwrap();
        let ray = light.shadow_ray(Vector3::ZERO);

        assert_eq!(ray.position, Vector3::new(0.0, 10.0, 0.0));
        assert!((ray.direction - Vector3::NEG_Y).length() < 1e-12);
    }

    #[test]
    fn test_unoccluded_light_sees_point() {
        let scene = Scene::new().with_primitive(sphere(Vector3::new(0.0, 0.0, 200.0), 30.0));
        let light = PointLight::new(Vector3::ZERO, 1.0).unwrap();

        assert!(light.can_see(&scene, &hit_on_first(&scene)));
    }

    #[test]
    fn test_occluder_blocks_light() {
        let a = sphere(Vector3::new(0.0, 0.0, 200.0), 30.0);
        let b = sphere(Vector3::new(0.0, 0.0, 100.0), 10.0);
        let light = PointLight::new(Vector3::new(0.0, 0.0, -50.0), 1.0).unwrap();

        let blocked = Scene::new().with_primitive(a.clone()).with_primitive(b);
        assert!(!light.can_see(&blocked, &hit_on_first(&blocked)));

        let clear = Scene::new().with_primitive(a);
        assert!(light.can_see(&clear, &hit_on_first(&clear)));
    }

    #[test]
    fn test_far_side_is_self_shadowed() {
        let scene = Scene::new().with_primitive(sphere(Vector3::new(0.0, 0.0, 200.0), 30.0));
        let light = PointLight::new(Vector3::new(0.0, 0.0, 400.0), 1.0).unwrap();

        // The near side faces away from this light; the sphere's far side is
        // the shadow ray's nearest hit, still the same primitive.
        assert!(light.can_see(&scene, &hit_on_first(&scene)));

        let other = Scene::new()
            .with_primitive(sphere(Vector3::new(0.0, 0.0, 200.0), 30.0))
            .with_primitive(sphere(Vector3::new(0.0, 0.0, 300.0), 10.0));
        assert!(!light.can_see(&other, &hit_on_first(&other)));
    }

    #[test]
    fn test_enclosing_primitive_occludes() {
        let target = sphere(Vector3::new(0.0, 0.0, 200.0), 30.0);
        let shell = sphere(Vector3::new(0.0, 0.0, -50.0), 5.0);
        let light = PointLight::new(Vector3::new(0.0, 0.0, -50.0), 1.0).unwrap();

        let scene = Scene::new().with_primitive(target).with_primitive(shell);
        assert!(!light.can_see(&scene, &hit_on_first(&scene)));
    }

    #[test]
    fn test_no_intersection_means_visible() {
        let scene = Scene::new().with_primitive(sphere(Vector3::new(0.0, 0.0, 200.0), 30.0));
        let hit = hit_on_first(&scene);
        let empty = Scene::new();
        let light = PointLight::new(Vector3::ZERO, 1.0).unwrap();

        assert!(light.can_see(&empty, &hit));
    }
}

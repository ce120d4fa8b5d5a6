//! Scene container: the primitives and lights a camera renders.

use crate::intersection::{nearest, GeometricPrimitive, RayIntersectionInfo};
use crate::light::Light;
use tryffeli_math::Ray;

/// A collection of renderable primitives and the lights illuminating them.
///
/// Built once before rendering and only read while rendering. The scene
/// does not hold a camera: the camera owns the film it renders into and is
/// passed next to the scene to [`crate::shoot`].
#[derive(Debug, Default)]
pub struct Scene {
    primitives: Vec<Box<dyn GeometricPrimitive>>,
    lights: Vec<Box<dyn Light>>,
}

impl Scene {
    /// Create a new empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a primitive. Iteration order is insertion order.
    pub fn add_primitive(&mut self, primitive: impl GeometricPrimitive + 'static) {
        log::trace!("Adding primitive {:?}", primitive);
        self.primitives.push(Box::new(primitive));
    }

    /// Add a light. Iteration order is insertion order.
    pub fn add_light(&mut self, light: impl Light + 'static) {
        log::trace!("Adding light {:?}", light);
        self.lights.push(Box::new(light));
    }

    /// Builder-style [`Scene::add_primitive`].
    pub fn with_primitive(mut self, primitive: impl GeometricPrimitive + 'static) -> Self {
        self.add_primitive(primitive);
        self
    }

    /// Builder-style [`Scene::add_light`].
    pub fn with_light(mut self, light: impl Light + 'static) -> Self {
        self.add_light(light);
        self
    }

    pub fn primitives(&self) -> &[Box<dyn GeometricPrimitive>] {
        &self.primitives
    }

    pub fn lights(&self) -> &[Box<dyn Light>] {
        &self.lights
    }

    /// Cast a ray into the scene, returning every ray-primitive intersection
    /// in primitive order.
    pub fn cast(&self, ray: &Ray) -> Vec<RayIntersectionInfo<'_>> {
        self.primitives
            .iter()
            .filter_map(|primitive| primitive.intersection_with(ray))
            .collect()
    }

    /// The intersection with the smallest signed distance, if any.
    /// Ties go to the primitive added first.
    pub fn nearest(&self, ray: &Ray) -> Option<RayIntersectionInfo<'_>> {
        nearest(
            self.primitives
                .iter()
                .filter_map(|primitive| primitive.intersection_with(ray)),
        )
    }
}

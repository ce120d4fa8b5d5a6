//! Cameras for ray generation.
//!
//! Both strategies map a film pixel to a view-space direction through the
//! same pinhole projection. They differ only in the sub-pixel offset:
//! [`SimpleCamera`] always shoots through the pixel center, while
//! [`AntialiasingCamera`] jitters each ray by a seeded random polar offset.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::PI;
use tryffeli_core::{Color, RenderSurface, SceneError};
use tryffeli_math::{Ray, Vector3, Vector3Ext};

/// Default field of view in degrees.
pub const DEFAULT_FOV: f64 = 15.0;

/// Where a camera sits and which way it faces.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct View {
    position: Vector3,
    direction: Vector3,
    fov: f64,
}

impl View {
    /// Create a new view. The field of view must lie in (0, 90) degrees.
    pub fn new(position: Vector3, direction: Vector3, fov: f64) -> Result<Self, SceneError> {
        let view = Self {
            position,
            direction,
            fov,
        };
        view.validate()?;
        Ok(view)
    }

    pub fn position(&self) -> Vector3 {
        self.position
    }

    /// Only the sign of `direction.z` is used: scenes look along +Z or -Z.
    pub fn direction(&self) -> Vector3 {
        self.direction
    }

    /// Field of view in degrees, in (0, 90).
    pub fn fov(&self) -> f64 {
        self.fov
    }

    fn validate(&self) -> Result<(), SceneError> {
        if !(self.fov > 0.0 && self.fov < 90.0) {
            return Err(SceneError::InvalidFieldOfView(self.fov));
        }
        Ok(())
    }

    /// Forward axis sign. A zero Z component falls back to +Z.
    fn forward_z(&self) -> f64 {
        if self.direction.z < 0.0 {
            -1.0
        } else {
            1.0
        }
    }

    /// Unit direction through pixel (x, y) of `film`, offset from the pixel
    /// center by (jitter_x, jitter_y) pixels.
    pub fn direction_through(
        &self,
        film: &RenderSurface,
        x: u32,
        y: u32,
        jitter_x: f64,
        jitter_y: f64,
    ) -> Vector3 {
        let a = (self.fov * PI / 180.0).tan();
        let width = film.width() as f64;
        let height = film.height() as f64;

        let ndc_x =
            (2.0 * ((x as f64 + 0.5 + jitter_x) / width) - 1.0) * a * film.aspect_ratio();
        let ndc_y = (1.0 - 2.0 * ((y as f64 + 0.5 + jitter_y) / height)) * a;

        // TODO: rotate by the full camera orientation once look-at is supported
        Vector3::new(ndc_x, ndc_y, self.forward_z()).normalized()
    }
}

impl Default for View {
    fn default() -> Self {
        Self {
            position: Vector3::ZERO,
            direction: Vector3::Z,
            fov: DEFAULT_FOV,
        }
    }
}

/// A camera: a ray generation strategy plus the film it exposes.
pub trait Camera: Send + Sync {
    /// Position and orientation of the camera.
    fn view(&self) -> &View;

    /// Creates a ray shot from the camera's position through film pixel (x, y).
    fn ray_for_pixel(&self, x: u32, y: u32) -> Ray;

    /// The film this camera renders into.
    fn film(&self) -> &RenderSurface;

    fn film_mut(&mut self) -> &mut RenderSurface;
}

/// A basic camera: one deterministic ray through each pixel center.
#[derive(Debug, Clone)]
pub struct SimpleCamera {
    view: View,
    film: RenderSurface,
}

impl SimpleCamera {
    pub fn new(view: View, film: RenderSurface) -> Result<Self, SceneError> {
        view.validate()?;
        Ok(Self { view, film })
    }
}

impl Camera for SimpleCamera {
    fn view(&self) -> &View {
        &self.view
    }

    fn ray_for_pixel(&self, x: u32, y: u32) -> Ray {
        let direction = self.view.direction_through(&self.film, x, y, 0.0, 0.0);
        Ray::new(self.view.position, direction)
    }

    fn film(&self) -> &RenderSurface {
        &self.film
    }

    fn film_mut(&mut self) -> &mut RenderSurface {
        &mut self.film
    }
}

/// A camera that renders an antialiased image.
///
/// Every pixel gets exactly one ray, perturbed by a random sub-pixel
/// offset. The offset is drawn from a generator seeded by the camera seed
/// and the pixel index, so the result does not depend on the order (or
/// thread) in which pixels are rendered.
#[derive(Debug, Clone)]
pub struct AntialiasingCamera {
    view: View,
    film: RenderSurface,
    seed: u64,
}

impl AntialiasingCamera {
    pub fn new(view: View, film: RenderSurface, seed: u64) -> Result<Self, SceneError> {
        view.validate()?;
        Ok(Self { view, film, seed })
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Sub-pixel offset for pixel (x, y).
    pub fn pixel_jitter(&self, x: u32, y: u32) -> (f64, f64) {
        let index = y as u64 * self.film.width() as u64 + x as u64;
        let mut rng = StdRng::seed_from_u64(pixel_seed(self.seed, index));
        polar_jitter(rng.gen::<f64>(), rng.gen::<f64>())
    }
}

impl Camera for AntialiasingCamera {
    fn view(&self) -> &View {
        &self.view
    }

    fn ray_for_pixel(&self, x: u32, y: u32) -> Ray {
        let (jitter_x, jitter_y) = self.pixel_jitter(x, y);
        let direction = self.view.direction_through(&self.film, x, y, jitter_x, jitter_y);
        Ray::new(self.view.position, direction)
    }

    fn film(&self) -> &RenderSurface {
        &self.film
    }

    fn film_mut(&mut self) -> &mut RenderSurface {
        &mut self.film
    }
}

/// Mix the camera seed with a pixel index into a per-pixel seed.
fn pixel_seed(seed: u64, index: u64) -> u64 {
    seed.wrapping_mul(0x9E37_79B9_7F4A_7C15).rotate_left(31) ^ index
}

/// Map two uniform samples in [0, 1) to a polar sub-pixel offset.
///
/// Radius is `0.49 * sqrt(-ln(1 - r1))`, angle is `2 * pi * r2`.
pub fn polar_jitter(r1: f64, r2: f64) -> (f64, f64) {
    let radius = 0.49 * (-(1.0 - r1).ln()).sqrt();
    let angle = 2.0 * PI * r2;
    (radius * angle.cos(), radius * angle.sin())
}

/// Camera configuration, turned into a concrete strategy by [`CameraSettings::build`].
#[derive(Debug, Clone)]
pub struct CameraSettings {
    pub position: Vector3,
    pub direction: Vector3,
    /// Field of view in degrees.
    pub fov: f64,
    pub width: u32,
    pub height: u32,
    pub background: Color,
    /// `Some(seed)` selects the antialiasing camera.
    pub antialiasing: Option<u64>,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            position: Vector3::ZERO,
            direction: Vector3::Z,
            fov: DEFAULT_FOV,
            width: 640,
            height: 480,
            background: Color::BLACK,
            antialiasing: None,
        }
    }
}

impl CameraSettings {
    /// Create settings with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set film resolution.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set camera position and forward direction.
    pub fn with_position(mut self, position: Vector3, direction: Vector3) -> Self {
        self.position = position;
        self.direction = direction;
        self
    }

    /// Set field of view in degrees.
    pub fn with_fov(mut self, fov: f64) -> Self {
        self.fov = fov;
        self
    }

    /// Set background color.
    pub fn with_background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    /// Enable jittered antialiasing with an explicit seed.
    pub fn with_antialiasing(mut self, seed: u64) -> Self {
        self.antialiasing = Some(seed);
        self
    }

    /// Validate the settings and create the camera.
    pub fn build(self) -> Result<Box<dyn Camera>, SceneError> {
        let view = View::new(self.position, self.direction, self.fov)?;
        let film = RenderSurface::new(self.width, self.height, self.background)?;

        Ok(match self.antialiasing {
            Some(seed) => Box::new(AntialiasingCamera::new(view, film, seed)?),
            None => Box::new(SimpleCamera::new(view, film)?),
        })
    }
}

//! Core direct-lighting renderer.
//!
//! For every pixel the camera generates a ray, the nearest primitive hit is
//! found, and each visible light contributes a diffuse term with linear
//! distance falloff. Contributions are clamped to [0, 1] after every light.

use std::time::Instant;

use crate::bucket::{generate_buckets, render_bucket};
use crate::{Camera, RayIntersectionInfo, Scene};
use rayon::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use tryffeli_core::{Color, RenderSurface};
use tryffeli_math::{Interval, Vector3Ext};

/// Render configuration.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Distance at which a light's contribution falls to zero
    pub falloff_distance: f64,
    /// Edge length in pixels of the tiles handed to worker threads
    pub bucket_size: u32,
    /// Render buckets in parallel with rayon instead of raster order on one thread
    pub parallel: bool,
}

/// Default linear falloff range.
pub const DEFAULT_FALLOFF_DISTANCE: f64 = 400.0;

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            falloff_distance: DEFAULT_FALLOFF_DISTANCE,
            bucket_size: crate::bucket::DEFAULT_BUCKET_SIZE,
            parallel: true,
        }
    }
}

/// Total light reaching the viewer from an intersection, in [0, 1].
pub fn shade(scene: &Scene, hit: &RayIntersectionInfo<'_>, config: &RenderConfig) -> f64 {
    let mut total_incident_light = 0.0;

    for light in scene.lights() {
        if !light.can_see(scene, hit) {
            continue;
        }

        let light_position = light.position();
        let light_direction = (light_position - hit.point).normalized();
        let light_distance = hit.point.distance(light_position);

        let falloff = Interval::UNIT.clamp(1.0 - light_distance / config.falloff_distance);
        let reflectance = hit.material().reflectance(hit.normal.dot(light_direction), falloff);
        let incident_light = light.intensity() * reflectance;

        total_incident_light = Interval::UNIT.clamp(total_incident_light + incident_light);
    }

    total_incident_light
}

/// Render a single pixel.
///
/// Returns the film's background color when the pixel's ray hits nothing.
pub fn render_pixel(
    camera: &dyn Camera,
    scene: &Scene,
    x: u32,
    y: u32,
    config: &RenderConfig,
) -> Color {
    let ray = camera.ray_for_pixel(x, y);

    match scene.nearest(&ray) {
        Some(hit) => Color::gray(shade(scene, &hit, config)),
        None => camera.film().background(),
    }
}

/// Render every pixel on the calling thread, in raster order.
pub fn render_sequential(
    camera: &dyn Camera,
    scene: &Scene,
    config: &RenderConfig,
) -> RenderSurface {
    let mut film = camera.film().clone();
    let height = film.height();

    for y in 0..height {
        for x in 0..film.width() {
            film.put_pixel(x, y, render_pixel(camera, scene, x, y, config));
        }

        if y % 10 == 0 {
            log::debug!("Exposing film: {}%", y as u64 * 100 / height as u64);
        }
    }

    film
}

/// Render the image as buckets distributed over the rayon thread pool.
///
/// Pixels are independent, so the result is identical to
/// [`render_sequential`].
pub fn render_parallel(
    camera: &dyn Camera,
    scene: &Scene,
    config: &RenderConfig,
) -> RenderSurface {
    let mut film = camera.film().clone();
    let buckets = generate_buckets(film.width(), film.height(), config.bucket_size);
    let total = buckets.len();
    let finished = AtomicUsize::new(0);

    let results: Vec<_> = buckets
        .par_iter()
        .map(|bucket| {
            let result = render_bucket(bucket, camera, scene, config);
            let done = finished.fetch_add(1, Ordering::Relaxed) + 1;
            log::debug!("Bucket {} done ({}/{})", bucket.index, done, total);
            result
        })
        .collect();

    for result in results {
        result.write_to(&mut film);
    }

    film
}

/// Render the scene from the camera's point of view into a new surface.
pub fn render(camera: &dyn Camera, scene: &Scene, config: &RenderConfig) -> RenderSurface {
    let film = camera.film();
    log::info!(
        "Rendering {}x{} ({} primitives, {} lights, {})",
        film.width(),
        film.height(),
        scene.primitives().len(),
        scene.lights().len(),
        if config.parallel { "parallel" } else { "sequential" }
    );

    let start = Instant::now();
    let image = if config.parallel {
        render_parallel(camera, scene, config)
    } else {
        render_sequential(camera, scene, config)
    };
    log::info!("Rendered in {:?}", start.elapsed());

    image
}

/// Exposes the camera's film to the scene, replacing every pixel.
pub fn shoot(camera: &mut dyn Camera, scene: &Scene, config: &RenderConfig) {
    let image = render(&*camera, scene, config);
    *camera.film_mut() = image;
}

//! Tryffeli Renderer - CPU direct-lighting ray tracer.
//!
//! Casts one ray per pixel, finds the nearest surface, and sums the diffuse
//! contribution of every unoccluded point light into a grayscale film.
//! Buckets of pixels render in parallel with rayon.

mod bucket;
mod camera;
mod intersection;
mod light;
mod renderer;
mod scene;
mod sphere;

pub use bucket::{generate_buckets, render_bucket, Bucket, BucketResult, DEFAULT_BUCKET_SIZE};
pub use camera::{
    polar_jitter, AntialiasingCamera, Camera, CameraSettings, SimpleCamera, View, DEFAULT_FOV,
};
pub use intersection::{nearest, GeometricPrimitive, RayIntersectionInfo};
pub use light::{Light, PointLight};
pub use renderer::{
    render, render_parallel, render_pixel, render_sequential, shade, shoot, RenderConfig,
    DEFAULT_FALLOFF_DISTANCE,
};
pub use scene::Scene;
pub use sphere::Sphere;

pub use tryffeli_core::{Color, Material, MaterialType, RenderSurface, SceneError};
/// Re-export the math kernel from tryffeli_math
pub use tryffeli_math::{Matrix4, Matrix4Ext, Ray, Vector3, Vector3Ext};

//! Bucket-based tile rendering.
//!
//! Divides the image into tiles (buckets) that can be rendered
//! independently and in parallel using rayon. No pixel belongs to more than
//! one bucket, so results can be written back without synchronization.

use crate::renderer::render_pixel;
use crate::{Camera, RenderConfig, Scene};
use tryffeli_core::{Color, RenderSurface};

/// A rectangular region of the image to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bucket {
    /// X coordinate of bucket's top-left corner
    pub x: u32,
    /// Y coordinate of bucket's top-left corner
    pub y: u32,
    pub width: u32,
    pub height: u32,
    /// Position of this bucket in raster order
    pub index: usize,
}

impl Bucket {
    /// Create a new bucket.
    pub fn new(x: u32, y: u32, width: u32, height: u32, index: usize) -> Self {
        Self {
            x,
            y,
            width,
            height,
            index,
        }
    }

    /// Get the total number of pixels in this bucket.
    pub fn pixel_count(&self) -> u32 {
        self.width * self.height
    }
}

/// Default bucket size in pixels.
pub const DEFAULT_BUCKET_SIZE: u32 = 32;

/// Split a `width` x `height` image into buckets, in raster order.
///
/// Edge buckets are cropped to the image. A `bucket_size` of zero is
/// treated as one.
pub fn generate_buckets(width: u32, height: u32, bucket_size: u32) -> Vec<Bucket> {
    let bucket_size = bucket_size.max(1);
    let mut buckets = Vec::new();

    let mut y = 0;
    while y < height {
        let mut x = 0;
        while x < width {
            let bw = bucket_size.min(width - x);
            let bh = bucket_size.min(height - y);
            buckets.push(Bucket::new(x, y, bw, bh, buckets.len()));
            x += bucket_size;
        }
        y += bucket_size;
    }

    buckets
}

/// Render a single bucket.
pub fn render_bucket(
    bucket: &Bucket,
    camera: &dyn Camera,
    scene: &Scene,
    config: &RenderConfig,
) -> BucketResult {
    let mut pixels = Vec::with_capacity(bucket.pixel_count() as usize);

    for local_y in 0..bucket.height {
        for local_x in 0..bucket.width {
            let color = render_pixel(camera, scene, bucket.x + local_x, bucket.y + local_y, config);
            pixels.push(color);
        }
    }

    BucketResult::new(*bucket, pixels)
}

/// Result of rendering a bucket.
#[derive(Debug, Clone)]
pub struct BucketResult {
    /// The bucket that was rendered
    pub bucket: Bucket,
    /// Pixel colors in row-major order
    pub pixels: Vec<Color>,
}

impl BucketResult {
    /// Create a new bucket result.
    pub fn new(bucket: Bucket, pixels: Vec<Color>) -> Self {
        Self { bucket, pixels }
    }

    /// Copy the bucket's pixels into their place on `film`.
    pub fn write_to(&self, film: &mut RenderSurface) {
        let width = self.bucket.width as usize;
        for (i, color) in self.pixels.iter().enumerate() {
            let x = self.bucket.x + (i % width) as u32;
            let y = self.bucket.y + (i / width) as u32;
            film.put_pixel(x, y, *color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_buckets_exact_fit() {
        let buckets = generate_buckets(128, 128, 64);
        assert_eq!(buckets.len(), 4); // 2x2 grid

        let total_pixels: u32 = buckets.iter().map(|b| b.pixel_count()).sum();
        assert_eq!(total_pixels, 128 * 128);
    }

    #[test]
    fn test_generate_buckets_partial_fit() {
        let buckets = generate_buckets(100, 70, 32);
        assert_eq!(buckets.len(), 4 * 3);

        let total_pixels: u32 = buckets.iter().map(|b| b.pixel_count()).sum();
        assert_eq!(total_pixels, 100 * 70);

        let last = buckets.last().unwrap();
        assert_eq!((last.x, last.y, last.width, last.height), (96, 64, 4, 6));
    }

    #[test]
    fn test_buckets_are_raster_ordered_and_disjoint() {
        let buckets = generate_buckets(50, 50, 16);
        let mut seen = vec![0u8; 50 * 50];

        for (i, b) in buckets.iter().enumerate() {
            assert_eq!(b.index, i);
            for y in b.y..b.y + b.height {
                for x in b.x..b.x + b.width {
                    seen[(y * 50 + x) as usize] += 1;
                }
            }
        }

        assert!(seen.iter().all(|&n| n == 1));
        assert_eq!((buckets[1].x, buckets[1].y), (16, 0));
    }

    #[test]
    fn test_zero_bucket_size() {
        assert_eq!(generate_buckets(3, 2, 0).len(), 6);
    }

    #[test]
    fn test_write_to() {
        let mut film = RenderSurface::new(4, 4, Color::BLACK).unwrap();
        let bucket = Bucket::new(2, 1, 2, 2, 0);
        let pixels = vec![Color::gray(0.1), Color::gray(0.2), Color::gray(0.3), Color::gray(0.4)];

        BucketResult::new(bucket, pixels).write_to(&mut film);

        assert_eq!(film.pixel_at(2, 1), Color::gray(0.1));
        assert_eq!(film.pixel_at(3, 1), Color::gray(0.2));
        assert_eq!(film.pixel_at(2, 2), Color::gray(0.3));
        assert_eq!(film.pixel_at(3, 2), Color::gray(0.4));
        assert_eq!(film.pixel_at(1, 1), Color::BLACK);
    }
}

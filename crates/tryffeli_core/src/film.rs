//! Render surface (film) for storing render output.

use crate::{Color, SceneError};

/// A 2D buffer of accumulated colors, addressed by pixel coordinate.
///
/// Every cell starts out as the background color. Pixels are stored in
/// row-major order with (0, 0) at the top-left corner.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderSurface {
    width: u32,
    height: u32,
    background: Color,
    pixels: Vec<Color>,
}

impl RenderSurface {
    /// Create a new surface filled with `background`.
    pub fn new(width: u32, height: u32, background: Color) -> Result<Self, SceneError> {
        if width == 0 || height == 0 {
            return Err(SceneError::InvalidResolution { width, height });
        }

        log::trace!("Allocating {}x{} render surface", width, height);

        Ok(Self {
            width,
            height,
            background,
            pixels: vec![background; width as usize * height as usize],
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Width divided by height.
    pub fn aspect_ratio(&self) -> f64 {
        self.width as f64 / self.height as f64
    }

    /// The color every pixel was initialized with.
    pub fn background(&self) -> Color {
        self.background
    }

    /// Get the pixel at (x, y).
    ///
    /// # Panics
    ///
    /// Panics if (x, y) lies outside the surface.
    pub fn pixel_at(&self, x: u32, y: u32) -> Color {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at (x, y).
    ///
    /// # Panics
    ///
    /// Panics if (x, y) lies outside the surface.
    pub fn put_pixel(&mut self, x: u32, y: u32, color: Color) {
        let index = self.index(x, y);
        self.pixels[index] = color;
    }

    /// All pixels in row-major order.
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Reset every pixel to the background color.
    pub fn clear(&mut self) {
        self.pixels.fill(self.background);
    }

    /// Convert to clamped 8-bit RGB bytes (for display or saving).
    pub fn to_rgb8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 3);
        for color in &self.pixels {
            bytes.extend_from_slice(&color.to_rgb8());
        }
        bytes
    }

    fn index(&self, x: u32, y: u32) -> usize {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) out of bounds for {}x{} surface",
            self.width,
            self.height
        );
        x as usize + y as usize * self.width as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_fills_background() {
        let bg = Color::new(0.1, 0.2, 0.3);
        let film = RenderSurface::new(4, 3, bg).unwrap();

        assert_eq!(film.pixels().len(), 12);
        assert!(film.pixels().iter().all(|c| *c == bg));
        assert_eq!(film.background(), bg);
    }

    #[test]
    fn test_rejects_empty_resolution() {
        assert_eq!(
            RenderSurface::new(0, 10, Color::BLACK),
            Err(SceneError::InvalidResolution { width: 0, height: 10 })
        );
        assert!(RenderSurface::new(10, 0, Color::BLACK).is_err());
    }

    #[test]
    fn test_put_and_get_pixel() {
        let mut film = RenderSurface::new(5, 4, Color::BLACK).unwrap();
        film.put_pixel(3, 2, Color::WHITE);

        assert_eq!(film.pixel_at(3, 2), Color::WHITE);
        assert_eq!(film.pixel_at(2, 3), Color::BLACK);
        assert_eq!(film.pixels()[3 + 2 * 5], Color::WHITE);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_put_pixel_past_row_end_panics() {
        let mut film = RenderSurface::new(4, 4, Color::BLACK).unwrap();
        film.put_pixel(4, 0, Color::WHITE);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_pixel_at_out_of_range_panics() {
        let film = RenderSurface::new(4, 4, Color::BLACK).unwrap();
        film.pixel_at(0, 4);
    }

    #[test]
    fn test_clear() {
        let mut film = RenderSurface::new(2, 2, Color::gray(0.5)).unwrap();
        film.put_pixel(0, 0, Color::WHITE);
        film.clear();
        assert_eq!(film.pixel_at(0, 0), Color::gray(0.5));
    }

    #[test]
    fn test_to_rgb8_clamps() {
        let mut film = RenderSurface::new(2, 1, Color::BLACK).unwrap();
        film.put_pixel(1, 0, Color::new(1.5, 0.0, 1.0));

        assert_eq!(film.to_rgb8(), vec![0, 0, 0, 255, 0, 255]);
        assert!((film.aspect_ratio() - 2.0).abs() < 1e-12);
    }
}

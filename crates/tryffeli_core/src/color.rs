//! Additive RGB color.

use std::ops::{Add, AddAssign, Mul};

use tryffeli_math::Interval;

/// A 3-channel (RGB) color.
///
/// Channels are nominally in [0, 1] but may exceed 1 while contributions
/// are being summed. They are clamped only when materialized for output.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
}

impl Color {
    pub const BLACK: Color = Color::gray(0.0);
    pub const WHITE: Color = Color::gray(1.0);

    /// Create a new color.
    pub const fn new(red: f64, green: f64, blue: f64) -> Self {
        Self { red, green, blue }
    }

    /// A color with the same value in every channel.
    pub const fn gray(value: f64) -> Self {
        Self::new(value, value, value)
    }

    /// Copy of this color with every channel clamped into [0, 1].
    pub fn clamped(&self) -> Self {
        Self::new(
            Interval::UNIT.clamp(self.red),
            Interval::UNIT.clamp(self.green),
            Interval::UNIT.clamp(self.blue),
        )
    }

    /// Clamp and quantize to 8-bit RGB.
    pub fn to_rgb8(&self) -> [u8; 3] {
        let c = self.clamped();
        [
            (c.red * 255.0).round() as u8,
            (c.green * 255.0).round() as u8,
            (c.blue * 255.0).round() as u8,
        ]
    }
}

impl Add for Color {
    type Output = Color;

    fn add(self, rhs: Color) -> Color {
        Color::new(self.red + rhs.red, self.green + rhs.green, self.blue + rhs.blue)
    }
}

impl AddAssign for Color {
    fn add_assign(&mut self, rhs: Color) {
        self.red += rhs.red;
        self.green += rhs.green;
        self.blue += rhs.blue;
    }
}

impl Mul<f64> for Color {
    type Output = Color;

    fn mul(self, scale: f64) -> Color {
        Color::new(self.red * scale, self.green * scale, self.blue * scale)
    }
}

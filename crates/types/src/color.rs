//! Color type used for text and background fills.
//!
//! The target panel is grayscale, so most colors are gray levels, but the
//! RGBA representation is kept so RGBA output stays possible.

use serde::{Deserialize, Serialize};

/// RGBA color with alpha channel
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Color {
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);

    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
            a: a as f64 / 255.0,
        }
    }

    /// Opaque gray from an 8-bit level (`0x66` gives `#666666`)
    pub fn gray8(level: u8) -> Self {
        Self::from_rgba8(level, level, level, 255)
    }

    pub fn to_rgba8(&self) -> (u8, u8, u8, u8) {
        (
            (self.r * 255.0) as u8,
            (self.g * 255.0) as u8,
            (self.b * 255.0) as u8,
            (self.a * 255.0) as u8,
        )
    }

    /// Luma (ITU-R BT.601) in the 0.0..=1.0 range
    pub fn luma(&self) -> f64 {
        0.299 * self.r + 0.587 * self.g + 0.114 * self.b
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gray8_round_trips_level() {
        let gray = Color::gray8(0x66);
        assert_eq!(gray.to_rgba8(), (0x66, 0x66, 0x66, 0xff));
        assert!((gray.luma() - 0x66 as f64 / 255.0).abs() < 1e-9);
    }

    #[test]
    fn test_black_and_white_luma() {
        assert_eq!(Color::BLACK.luma(), 0.0);
        assert!((Color::WHITE.luma() - 1.0).abs() < 1e-9);
        assert_eq!(Color::default(), Color::BLACK);
    }
}

//! Pixel geometry: anchor points, measured box sizes and named anchor maps

use serde::Serialize;
use std::collections::BTreeMap;
use std::ops::Add;

/// A drawing origin in canvas pixels.
///
/// Coordinates stay fractional through layout (column gaps may split a
/// pixel); the rasterizer decides how to snap them.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Same point moved by `(dx, dy)`
    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

/// Measured pixel size of a string rendered in one style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct BoxSize {
    pub width: i32,
    pub height: i32,
}

impl BoxSize {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Scale the width only, truncating toward zero
    pub fn scale_width(self, factor: f64) -> Self {
        Self::new((self.width as f64 * factor) as i32, self.height)
    }

    /// Component-wise maximum of two boxes
    pub fn max(self, other: BoxSize) -> Self {
        Self::new(self.width.max(other.width), self.height.max(other.height))
    }

    pub fn w(&self) -> f64 {
        self.width as f64
    }

    pub fn h(&self) -> f64 {
        self.height as f64
    }
}

/// Anchors keyed by their semantic name (`power_right`, `temp_unit-right`, ...)
pub type AnchorMap = BTreeMap<&'static str, Point>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_width_truncates() {
        let size = BoxSize::new(25, 40);
        assert_eq!(size.scale_width(1.2), BoxSize::new(30, 40));
        assert_eq!(BoxSize::new(19, 40).scale_width(0.8), BoxSize::new(15, 40));
    }

    #[test]
    fn test_point_add_and_offset() {
        let origin = Point::new(30.0, 20.0);
        assert_eq!(origin + Point::new(1012.0, 0.0), Point::new(1042.0, 20.0));
        assert_eq!(origin.offset(0.0, -20.0), Point::new(30.0, 0.0));
    }

    #[test]
    fn test_box_max_is_component_wise() {
        let a = BoxSize::new(10, 50);
        let b = BoxSize::new(30, 20);
        assert_eq!(a.max(b), BoxSize::new(30, 50));
    }
}

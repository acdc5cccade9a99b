//! 2D geometry primitives shared across the editor.
//!
//! Canvas coordinates follow the raster convention: origin at the top-left,
//! x growing right, y growing down. All object positions are top-left
//! anchored.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A point in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Creates a new point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns this point translated by (dx, dy).
    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Returns the component-wise difference `self - other`.
    ///
    /// Used to map viewport coordinates into canvas-local coordinates by
    /// subtracting the container's top-left offset.
    pub fn offset_from(&self, other: Point) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_from_subtracts_origin() {
        let pointer = Point::new(237.0, 412.0);
        let origin = Point::new(10.0, 20.0);
        assert_eq!(pointer.offset_from(origin), Point::new(227.0, 392.0));
    }

    #[test]
    fn translated_moves_both_axes() {
        let p = Point::new(1.0, 2.0).translated(3.0, -1.0);
        assert_eq!(p, Point::new(4.0, 1.0));
    }
}

//! Placement engine: where and how a new or moved object lands.
//!
//! Drop coordinates are translated from viewport space into canvas space by
//! subtracting the container origin; no snapping is applied at creation
//! time. Snapping applies on every subsequent move, rounding each axis to
//! the nearest grid multiple.

use roomkit_core::Point;

/// Grid spacing furniture positions snap to, in canvas units.
pub const GRID_UNIT: f64 = 50.0;

/// Scale applied to newly placed furniture.
pub const FURNITURE_SCALE: f64 = 0.5;

/// Rotation step applied by the rotate gesture, in degrees.
pub const ROTATION_STEP: f64 = 15.0;

/// Where button-click placement (no drag position) lands furniture.
pub const DEFAULT_DROP_POINT: Point = Point::new(200.0, 200.0);

/// Default transform for newly placed furniture.
///
/// Structural objects receive explicit fixed transforms at room
/// construction and do not flow through this path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DropTransform {
    pub scale_x: f64,
    pub scale_y: f64,
    pub rotation: f64,
}

impl Default for DropTransform {
    fn default() -> Self {
        Self {
            scale_x: FURNITURE_SCALE,
            scale_y: FURNITURE_SCALE,
            rotation: 0.0,
        }
    }
}

/// Translates a pointer position in viewport coordinates into canvas-local
/// coordinates by subtracting the container's top-left offset.
pub fn drop_position(pointer: Point, container_origin: Point) -> Point {
    pointer.offset_from(container_origin)
}

/// Rounds a value to the nearest multiple of `unit`, half away from zero.
///
/// Idempotent: snapping an already snapped value returns it unchanged.
pub fn snap_value(value: f64, unit: f64) -> f64 {
    (value / unit).round() * unit
}

/// Snaps both axes of a point to the grid.
pub fn snap_to_grid(p: Point, unit: f64) -> Point {
    Point::new(snap_value(p.x, unit), snap_value(p.y, unit))
}

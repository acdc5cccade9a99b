//! Scene object model for the room canvas.
//!
//! A scene is an ordered sequence of [`SceneObject`]s. Structural objects
//! (the floor and the walls) are created once when the room is built and are
//! only ever mutated in place; furniture objects come and go as the user
//! places and removes them. Paint order is the store's draw order, so the
//! model itself carries no z field.

use roomkit_core::{Color, Point};

/// Role of a structural object within the room.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StructuralRole {
    /// The room floor, covering the whole canvas.
    Floor,
    /// A wall strip along one edge of the room.
    Wall,
}

/// What kind of entity a scene object is.
///
/// Structural objects are never deletable and never rotatable by the end
/// user; furniture objects are fully mutable.
#[derive(Debug, Clone, PartialEq)]
pub enum ObjectKind {
    /// Fixed room geometry with a fill color.
    Structural { role: StructuralRole, fill: Color },
    /// A user-placed item backed by an image asset.
    Furniture { src: String },
}

/// An entity placed on the canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneObject {
    pub id: u64,
    pub name: String,
    pub kind: ObjectKind,
    /// Top-left anchor in canvas coordinates.
    pub position: Point,
    /// Natural (unscaled) width: image pixel width for furniture,
    /// rectangle extent for structural objects.
    pub width: f64,
    /// Natural (unscaled) height.
    pub height: f64,
    pub scale_x: f64,
    pub scale_y: f64,
    /// Degrees, normalized to [0, 360).
    pub rotation: f64,
    /// Capability flag: whether the object participates in selection
    /// gestures. Always false for structural objects.
    pub selectable: bool,
    /// Transient selection state.
    pub selected: bool,
}

/// Normalizes an angle in degrees into [0, 360).
pub fn normalize_degrees(deg: f64) -> f64 {
    let norm = deg.rem_euclid(360.0);
    // rem_euclid can yield 360.0 for tiny negative inputs
    if norm >= 360.0 { 0.0 } else { norm }
}

impl SceneObject {
    /// Creates a structural object. Fixed transform, not selectable.
    pub fn structural(
        id: u64,
        name: impl Into<String>,
        role: StructuralRole,
        fill: Color,
        position: Point,
        width: f64,
        height: f64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            kind: ObjectKind::Structural { role, fill },
            position,
            width,
            height,
            scale_x: 1.0,
            scale_y: 1.0,
            rotation: 0.0,
            selectable: false,
            selected: false,
        }
    }

    /// Creates a furniture object.
    pub fn furniture(
        id: u64,
        name: impl Into<String>,
        src: impl Into<String>,
        position: Point,
        width: f64,
        height: f64,
        scale_x: f64,
        scale_y: f64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            kind: ObjectKind::Furniture { src: src.into() },
            position,
            width,
            height,
            scale_x,
            scale_y,
            rotation: 0.0,
            selectable: true,
            selected: false,
        }
    }

    pub fn is_structural(&self) -> bool {
        matches!(self.kind, ObjectKind::Structural { .. })
    }

    pub fn is_furniture(&self) -> bool {
        matches!(self.kind, ObjectKind::Furniture { .. })
    }

    /// Structural role, if this is a structural object.
    pub fn role(&self) -> Option<StructuralRole> {
        match self.kind {
            ObjectKind::Structural { role, .. } => Some(role),
            ObjectKind::Furniture { .. } => None,
        }
    }

    /// Fill color, if this is a structural object.
    pub fn fill(&self) -> Option<Color> {
        match self.kind {
            ObjectKind::Structural { fill, .. } => Some(fill),
            ObjectKind::Furniture { .. } => None,
        }
    }

    /// Asset path, if this is a furniture object.
    pub fn src(&self) -> Option<&str> {
        match &self.kind {
            ObjectKind::Furniture { src } => Some(src),
            ObjectKind::Structural { .. } => None,
        }
    }

    /// Width after scaling.
    pub fn scaled_width(&self) -> f64 {
        self.width * self.scale_x
    }

    /// Height after scaling.
    pub fn scaled_height(&self) -> f64 {
        self.height * self.scale_y
    }

    /// Sets the rotation, normalizing into [0, 360).
    pub fn set_rotation(&mut self, deg: f64) {
        self.rotation = normalize_degrees(deg);
    }

    /// Adds to the rotation, normalizing into [0, 360).
    pub fn rotate_by(&mut self, deg: f64) {
        self.set_rotation(self.rotation + deg);
    }

    /// Axis-aligned bounding box `(min_x, min_y, max_x, max_y)` of the
    /// scaled, rotated object. Rotation is about the top-left anchor.
    pub fn bounds(&self) -> (f64, f64, f64, f64) {
        let w = self.scaled_width();
        let h = self.scaled_height();
        let theta = self.rotation.to_radians();
        let (sin, cos) = theta.sin_cos();

        let mut min_x = f64::INFINITY;
        let mut min_y = f64::INFINITY;
        let mut max_x = f64::NEG_INFINITY;
        let mut max_y = f64::NEG_INFINITY;

        for (cx, cy) in [(0.0, 0.0), (w, 0.0), (0.0, h), (w, h)] {
            let x = self.position.x + cx * cos - cy * sin;
            let y = self.position.y + cx * sin + cy * cos;
            min_x = min_x.min(x);
            min_y = min_y.min(y);
            max_x = max_x.max(x);
            max_y = max_y.max(y);
        }

        (min_x, min_y, max_x, max_y)
    }

    /// Precise hit test: maps the point into the object's local frame and
    /// checks it against the scaled extents.
    pub fn contains_point(&self, point: &Point) -> bool {
        let dx = point.x - self.position.x;
        let dy = point.y - self.position.y;
        let theta = self.rotation.to_radians();
        let (sin, cos) = theta.sin_cos();

        // Inverse rotation about the anchor
        let local_x = dx * cos + dy * sin;
        let local_y = -dx * sin + dy * cos;

        local_x >= 0.0
            && local_x <= self.scaled_width()
            && local_y >= 0.0
            && local_y <= self.scaled_height()
    }
}

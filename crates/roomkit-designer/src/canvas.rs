//! Canvas state: the live scene and its invariants.
//!
//! The canvas owns the ordered object store and the selection state, and is
//! the single place the editing invariants are enforced:
//!
//! - structural objects (floor, walls) are created once at room
//!   construction and can only be mutated in place, never removed;
//! - insertion appends to the top of the paint order;
//! - every mutating call bumps a revision counter so an external renderer
//!   can repaint any consistent state without tearing.

use crate::model::{ObjectKind, SceneObject, StructuralRole};
use crate::object_store::ObjectStore;
use crate::placement::DropTransform;
use crate::selection_manager::SelectionManager;
use roomkit_core::{Color, Point, SceneError};

/// Default room width in canvas units.
pub const ROOM_WIDTH: f64 = 1000.0;
/// Default room height in canvas units.
pub const ROOM_HEIGHT: f64 = 600.0;
/// Thickness of the wall strips around the room edge.
pub const WALL_THICKNESS: f64 = 20.0;
/// Initial floor fill.
pub const FLOOR_FILL: Color = Color::new(0xf2, 0xf2, 0xf2);
/// Initial wall fill.
pub const WALL_FILL: Color = Color::new(0xcc, 0xcc, 0xcc);

/// Canvas state managing the scene and selection.
#[derive(Debug, Clone)]
pub struct Canvas {
    pub object_store: ObjectStore,
    pub selection_manager: SelectionManager,
    width: f64,
    height: f64,
    revision: u64,
}

impl Canvas {
    /// Creates a canvas with the default room.
    pub fn new() -> Self {
        Self::with_room(ROOM_WIDTH, ROOM_HEIGHT)
    }

    /// Creates a canvas with a floor and four wall strips of the given
    /// dimensions. The structural set is fixed from here on.
    pub fn with_room(width: f64, height: f64) -> Self {
        let mut canvas = Self::bare(width, height);
        let t = WALL_THICKNESS.min(width / 2.0).min(height / 2.0);

        canvas.add_structural("floor", StructuralRole::Floor, FLOOR_FILL, Point::new(0.0, 0.0), width, height);
        canvas.add_structural("wall", StructuralRole::Wall, WALL_FILL, Point::new(0.0, 0.0), width, t);
        canvas.add_structural("wall", StructuralRole::Wall, WALL_FILL, Point::new(0.0, height - t), width, t);
        canvas.add_structural("wall", StructuralRole::Wall, WALL_FILL, Point::new(0.0, t), t, height - 2.0 * t);
        canvas.add_structural("wall", StructuralRole::Wall, WALL_FILL, Point::new(width - t, t), t, height - 2.0 * t);
        canvas
    }

    /// Creates a canvas with no objects at all. Used when rebuilding a
    /// scene from a snapshot, where the structural set comes from the file.
    pub fn bare(width: f64, height: f64) -> Self {
        Self {
            object_store: ObjectStore::new(),
            selection_manager: SelectionManager::new(),
            width,
            height,
            revision: 0,
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Monotonic counter bumped on every mutation; renderers compare it to
    /// decide whether a repaint is due.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn touch(&mut self) {
        self.revision += 1;
    }

    fn add_structural(
        &mut self,
        name: &str,
        role: StructuralRole,
        fill: Color,
        position: Point,
        width: f64,
        height: f64,
    ) -> u64 {
        let id = self.object_store.generate_id();
        self.object_store.insert(
            id,
            SceneObject::structural(id, name, role, fill, position, width, height),
        );
        self.touch();
        id
    }

    /// Returns the number of objects on the canvas, structural included.
    pub fn object_count(&self) -> usize {
        self.object_store.len()
    }

    /// Returns the number of furniture objects.
    pub fn furniture_count(&self) -> usize {
        self.object_store.iter().filter(|o| o.is_furniture()).count()
    }

    /// Iterates objects in paint order (bottom first).
    pub fn objects(&self) -> impl Iterator<Item = &SceneObject> {
        self.object_store.iter()
    }

    /// Gets a reference to an object by id.
    pub fn object(&self, id: u64) -> Option<&SceneObject> {
        self.object_store.get(id)
    }

    /// Appends an object to the top of the paint order, assigning it a
    /// fresh id. Returns the id.
    pub fn add_object(&mut self, mut obj: SceneObject) -> u64 {
        let id = self.object_store.generate_id();
        obj.id = id;
        self.object_store.insert(id, obj);
        self.touch();
        id
    }

    /// Creates and adds a furniture object with the placement defaults.
    pub fn add_furniture(
        &mut self,
        src: impl Into<String>,
        name: impl Into<String>,
        position: Point,
        width: f64,
        height: f64,
    ) -> u64 {
        let t = DropTransform::default();
        let mut obj = SceneObject::furniture(
            0,
            name,
            src,
            position,
            width,
            height,
            t.scale_x,
            t.scale_y,
        );
        obj.set_rotation(t.rotation);
        self.add_object(obj)
    }

    /// Removes an object if present and not structural.
    ///
    /// Removing a structural object is a no-op returning false (matching
    /// defensive gesture behavior), as is an unknown id. The selection is
    /// dropped if it pointed at the removed object.
    pub fn remove_object(&mut self, id: u64) -> bool {
        match self.object_store.get(id) {
            None => false,
            Some(obj) if obj.is_structural() => {
                tracing::debug!(id, "ignoring removal of structural object");
                false
            }
            Some(_) => {
                self.object_store.remove(id);
                self.selection_manager.forget(id);
                self.touch();
                true
            }
        }
    }

    /// Strict removal for direct API use: unknown ids and structural
    /// targets are reported as errors instead of silent no-ops.
    pub fn try_remove_object(&mut self, id: u64) -> Result<SceneObject, SceneError> {
        if self.object_store.get(id).is_some_and(|o| o.is_structural()) {
            return Err(SceneError::Structural { id });
        }
        match self.object_store.remove(id) {
            Some(removed) => {
                self.selection_manager.forget(id);
                self.touch();
                Ok(removed)
            }
            None => Err(SceneError::NotFound { id }),
        }
    }

    /// Applies field updates to an object. Returns false if the id is
    /// unknown.
    pub fn update_object(&mut self, id: u64, update: impl FnOnce(&mut SceneObject)) -> bool {
        match self.object_store.get_mut(id) {
            Some(obj) => {
                update(obj);
                self.touch();
                true
            }
            None => false,
        }
    }

    /// Returns an immutable deep copy of the scene in paint order, for
    /// serialization.
    pub fn snapshot(&self) -> Vec<SceneObject> {
        self.objects().cloned().collect()
    }

    /// Atomically swaps in a whole new scene (used by snapshot load).
    pub fn replace(&mut self, other: Canvas) {
        let revision = self.revision + 1;
        *self = other;
        self.revision = revision;
    }

    /// Removes all furniture, keeping the structural set.
    pub fn clear_furniture(&mut self) {
        let ids: Vec<u64> = self
            .objects()
            .filter(|o| o.is_furniture())
            .map(|o| o.id)
            .collect();
        for id in ids {
            self.object_store.remove(id);
            self.selection_manager.forget(id);
        }
        self.touch();
    }

    // --- hit testing ---

    /// Topmost object at the point, structural geometry included.
    pub fn object_at(&self, point: &Point) -> Option<u64> {
        self.object_store
            .draw_order_iter()
            .rev()
            .filter_map(|id| self.object_store.get(id))
            .find(|obj| obj.contains_point(point))
            .map(|obj| obj.id)
    }

    /// Topmost selectable object at the point. Structural objects are
    /// never returned, so delete/rotate gestures cannot see them.
    pub fn selectable_at(&self, point: &Point) -> Option<u64> {
        self.object_store
            .draw_order_iter()
            .rev()
            .filter_map(|id| self.object_store.get(id))
            .find(|obj| obj.selectable && obj.contains_point(point))
            .map(|obj| obj.id)
    }

    // --- selection ---

    /// Selects the topmost selectable object at the point, or clears the
    /// selection on empty space.
    pub fn select_at(&mut self, point: &Point) -> Option<u64> {
        let selected = self
            .selection_manager
            .select_at(&mut self.object_store, point);
        self.touch();
        selected
    }

    /// Selects an object by id (refused for structural objects).
    pub fn select_id(&mut self, id: u64) -> bool {
        let selected = self.selection_manager.select_id(&mut self.object_store, id);
        if selected {
            self.touch();
        }
        selected
    }

    pub fn deselect_all(&mut self) {
        self.selection_manager.deselect_all(&mut self.object_store);
        self.touch();
    }

    pub fn selected_id(&self) -> Option<u64> {
        self.selection_manager.selected_id()
    }

    /// The selected object, if any.
    pub fn selected_object(&self) -> Option<&SceneObject> {
        self.selection_manager.selected_object(&self.object_store)
    }

    // --- structural accessors ---

    /// The floor object, if the scene has one.
    pub fn floor(&self) -> Option<&SceneObject> {
        self.objects()
            .find(|o| o.role() == Some(StructuralRole::Floor))
    }

    /// Iterates the wall objects.
    pub fn walls(&self) -> impl Iterator<Item = &SceneObject> {
        self.objects()
            .filter(|o| o.role() == Some(StructuralRole::Wall))
    }

    /// Recolors the floor. Geometry is untouched.
    pub fn set_floor_fill(&mut self, color: Color) {
        self.set_role_fill(StructuralRole::Floor, color);
    }

    /// Recolors every wall. Geometry is untouched.
    pub fn set_wall_fill(&mut self, color: Color) {
        self.set_role_fill(StructuralRole::Wall, color);
    }

    fn set_role_fill(&mut self, target: StructuralRole, color: Color) {
        for obj in self.object_store.iter_mut() {
            if let ObjectKind::Structural { role, fill } = &mut obj.kind {
                if *role == target {
                    *fill = color;
                }
            }
        }
        self.touch();
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}

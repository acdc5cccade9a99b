//! Manages object selection state and selection operations.
//!
//! # Selection Model
//!
//! - A single object is the current selection (stored in `selected_id`);
//!   its `selected` flag mirrors that state for renderers.
//! - Point-based selection walks the draw order topmost-first and only
//!   considers objects whose `selectable` capability flag is set, so
//!   structural objects (floor, walls) are never returned by hit-testing.
//!
//! The manager coordinates with [`ObjectStore`] to modify selection flags.

use crate::model::SceneObject;
use crate::object_store::ObjectStore;
use roomkit_core::Point;

/// Tracks which object is selected.
#[derive(Debug, Clone, Default)]
pub struct SelectionManager {
    selected_id: Option<u64>,
}

impl SelectionManager {
    /// Creates a new `SelectionManager` with no selection.
    pub fn new() -> Self {
        Self { selected_id: None }
    }

    /// Returns the id of the selected object, if any.
    pub fn selected_id(&self) -> Option<u64> {
        self.selected_id
    }

    /// Deselects all objects and clears the selection.
    pub fn deselect_all(&mut self, store: &mut ObjectStore) {
        for obj in store.iter_mut() {
            obj.selected = false;
        }
        self.selected_id = None;
    }

    /// Selects an object by id. Objects with `selectable == false` are
    /// refused, so structural geometry can never become the selection.
    ///
    /// Returns whether the object is now selected.
    pub fn select_id(&mut self, store: &mut ObjectStore, id: u64) -> bool {
        let selectable = store.get(id).map(|o| o.selectable).unwrap_or(false);
        if !selectable {
            return false;
        }
        self.deselect_all(store);
        if let Some(obj) = store.get_mut(id) {
            obj.selected = true;
            self.selected_id = Some(id);
            true
        } else {
            false
        }
    }

    /// Selects the topmost selectable object at the given point.
    ///
    /// Clicking empty space (or only structural geometry) clears the
    /// selection, matching direct-manipulation expectations.
    pub fn select_at(&mut self, store: &mut ObjectStore, point: &Point) -> Option<u64> {
        let hit = store
            .draw_order_iter()
            .rev()
            .filter_map(|id| store.get(id))
            .find(|obj| obj.selectable && obj.contains_point(point))
            .map(|obj| obj.id);

        match hit {
            Some(id) => {
                self.select_id(store, id);
            }
            None => self.deselect_all(store),
        }
        self.selected_id
    }

    /// Returns the number of currently selected objects.
    pub fn selected_count(&self, store: &ObjectStore) -> usize {
        store.iter().filter(|o| o.selected).count()
    }

    /// The selected object, if the selection still resolves.
    pub fn selected_object<'a>(&self, store: &'a ObjectStore) -> Option<&'a SceneObject> {
        self.selected_id.and_then(|id| store.get(id))
    }

    /// Drops the selection if it points at `id` (used after removal).
    pub fn forget(&mut self, id: u64) {
        if self.selected_id == Some(id) {
            self.selected_id = None;
        }
    }
}

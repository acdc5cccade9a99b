//! Move+snap and rotate gestures for editor state.

use super::EditorState;
use crate::placement::{self, GRID_UNIT, ROTATION_STEP};
use roomkit_core::Point;

impl EditorState {
    /// Move-in-progress gesture: pins the selected furniture to the grid
    /// at the given canvas position.
    ///
    /// Snapping is applied on every move event, not only on release, so
    /// the object tracks the grid while dragging at the cost of jumping
    /// under the pointer.
    pub fn drag_selected_to(&mut self, position: Point) {
        let Some(id) = self.canvas.selected_id() else {
            return;
        };
        let snapped = placement::snap_to_grid(position, GRID_UNIT);
        let moved = self.canvas.update_object(id, |obj| {
            if obj.is_furniture() {
                obj.position = snapped;
            }
        });
        if moved {
            self.mark_modified();
        }
    }

    /// Rotate gesture: adds one rotation step to the current selection,
    /// wrapping modulo 360. No selection (or a structural selection,
    /// which cannot happen through hit-testing) is a silent no-op.
    pub fn rotate_selected(&mut self) {
        self.rotate_selected_by(ROTATION_STEP);
    }

    /// Explicit rotate command with a signed step in degrees.
    pub fn rotate_selected_by(&mut self, degrees: f64) {
        let Some(id) = self.canvas.selected_id() else {
            return;
        };
        let mut rotated = false;
        self.canvas.update_object(id, |obj| {
            if obj.is_furniture() {
                obj.rotate_by(degrees);
                rotated = true;
            }
        });
        if rotated {
            self.mark_modified();
        }
    }
}

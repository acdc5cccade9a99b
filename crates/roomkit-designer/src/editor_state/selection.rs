//! Object selection gestures for editor state.

use super::EditorState;
use roomkit_core::Point;

impl EditorState {
    /// Selects the topmost selectable object under the pointer, or clears
    /// the selection on empty space. Structural geometry is never hit.
    pub fn select_at(&mut self, point: Point) -> Option<u64> {
        let selected = self.canvas.select_at(&point);
        self.notify_selection();
        self.request_redraw();
        selected
    }

    /// Selects an object by id; refused for structural objects.
    pub fn select_id(&mut self, id: u64) -> bool {
        let selected = self.canvas.select_id(id);
        if selected {
            self.notify_selection();
            self.request_redraw();
        }
        selected
    }

    /// Clears the selection.
    pub fn deselect_all(&mut self) {
        self.canvas.deselect_all();
        self.notify_selection();
        self.request_redraw();
    }

    /// Id of the current selection, if any.
    pub fn selected_id(&self) -> Option<u64> {
        self.canvas.selected_id()
    }
}

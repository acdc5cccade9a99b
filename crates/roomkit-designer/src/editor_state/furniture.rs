//! Furniture gestures (drag-create, button placement, delete) for editor
//! state.

use super::EditorState;
use crate::placement::{self, DEFAULT_DROP_POINT};
use roomkit_core::{Point, Result};

impl EditorState {
    /// Records the asset path of a palette dragstart. The payload survives
    /// until the matching drop (or an explicit cancel), mirroring a
    /// drag-and-drop data transfer.
    pub fn begin_palette_drag(&mut self, src: impl Into<String>) {
        self.drag_payload = Some(src.into());
    }

    /// Forgets a drag that ended outside the canvas.
    pub fn cancel_palette_drag(&mut self) {
        self.drag_payload = None;
    }

    /// Completes a palette drag: reads the recorded payload, translates
    /// the pointer into canvas coordinates, and places the furniture
    /// there. Without a recorded payload this is a silent no-op.
    ///
    /// No snapping is applied at creation time; snap applies on the first
    /// subsequent move.
    pub fn drop_on_canvas(
        &mut self,
        pointer: Point,
        container_origin: Point,
    ) -> Result<Option<u64>> {
        let Some(src) = self.drag_payload.take() else {
            return Ok(None);
        };
        let position = placement::drop_position(pointer, container_origin);
        self.add_furniture_at(&src, position).map(Some)
    }

    /// Places furniture at the fixed default drop point (the sidebar
    /// button-click path).
    pub fn add_furniture(&mut self, src: &str) -> Result<u64> {
        self.add_furniture_at(src, DEFAULT_DROP_POINT)
    }

    /// Places furniture at an explicit canvas position with the placement
    /// defaults, decodes its asset for the natural size, and selects it.
    pub fn add_furniture_at(&mut self, src: &str, position: Point) -> Result<u64> {
        let (width, height) = self.assets.ensure_loaded(src)?;
        let name = asset_stem(src);
        let id = self.canvas.add_furniture(
            src,
            name,
            position,
            f64::from(width),
            f64::from(height),
        );
        self.canvas.select_id(id);
        tracing::info!(id, src, %position, "placed furniture");
        self.mark_modified();
        self.notify_selection();
        Ok(id)
    }

    /// Double-click delete: resolves the topmost object under the pointer
    /// and removes it unless it is structural (the floor and walls always
    /// survive). Returns whether a removal occurred.
    pub fn delete_at(&mut self, point: Point) -> bool {
        let Some(id) = self.canvas.object_at(&point) else {
            return false;
        };
        let removed = self.canvas.remove_object(id);
        if removed {
            tracing::info!(id, "deleted furniture");
            self.mark_modified();
            self.notify_selection();
        }
        removed
    }

    /// Explicit-command delete of the current selection.
    pub fn delete_selected(&mut self) -> bool {
        let Some(id) = self.canvas.selected_id() else {
            return false;
        };
        let removed = self.canvas.remove_object(id);
        if removed {
            self.mark_modified();
            self.notify_selection();
        }
        removed
    }
}

/// Display name for an asset path: file stem, falling back to the path.
fn asset_stem(src: &str) -> String {
    std::path::Path::new(src)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(src)
        .to_string()
}

//! Editor state manager for shell integration.
//! Owns the canvas state and translates shell callbacks into scene
//! mutations.
//!
//! This module is split into submodules for better organization:
//! - `selection`: object selection gestures
//! - `furniture`: drag-create, button placement, delete gestures
//! - `transforms`: move+snap and rotate gestures
//! - `properties`: surface recolor gestures
//! - `file_io`: snapshot save/load and raster export

mod file_io;
mod furniture;
mod properties;
mod selection;
mod transforms;

use crate::assets::{AssetEntry, AssetLibrary};
use crate::canvas::Canvas;
use crate::renderer;
use image::RgbImage;
use roomkit_core::{UiCallback, UiDataCallback};

/// Editor state for shell integration.
///
/// All gesture handling and store mutation run on one logical thread;
/// handlers silently no-op when their preconditions (a selection, a drag
/// payload, a hit target) are absent.
#[derive(Clone)]
pub struct EditorState {
    pub canvas: Canvas,
    pub assets: AssetLibrary,
    pub palette: Vec<AssetEntry>,
    pub current_file_path: Option<std::path::PathBuf>,
    pub is_modified: bool,
    pub room_name: String,
    /// Asset path recorded by a palette dragstart, consumed by the drop.
    pub(crate) drag_payload: Option<String>,
    on_redraw: UiCallback,
    on_selection_changed: UiDataCallback<Option<u64>>,
}

impl EditorState {
    /// Creates a new editor state with the default room.
    pub fn new() -> Self {
        Self {
            canvas: Canvas::new(),
            assets: AssetLibrary::new(),
            palette: Vec::new(),
            current_file_path: None,
            is_modified: false,
            room_name: "Untitled".to_string(),
            drag_payload: None,
            on_redraw: UiCallback::default(),
            on_selection_changed: UiDataCallback::default(),
        }
    }

    /// Replaces the sidebar palette supplied by the shell.
    pub fn set_palette(&mut self, entries: Vec<AssetEntry>) {
        self.palette = entries;
    }

    pub fn palette(&self) -> &[AssetEntry] {
        &self.palette
    }

    /// Registers the repaint hook. Invoked after every mutation, so the
    /// shell can repaint any consistent intermediate state.
    pub fn set_on_redraw(&self, callback: impl Fn() + 'static) {
        *self.on_redraw.borrow_mut() = Some(Box::new(callback));
    }

    /// Registers the selection-changed hook.
    pub fn set_on_selection_changed(&self, callback: impl Fn(Option<u64>) + 'static) {
        *self.on_selection_changed.borrow_mut() = Some(Box::new(callback));
    }

    pub(crate) fn request_redraw(&self) {
        if let Some(callback) = self.on_redraw.borrow().as_ref() {
            callback();
        }
    }

    pub(crate) fn notify_selection(&self) {
        if let Some(callback) = self.on_selection_changed.borrow().as_ref() {
            callback(self.canvas.selected_id());
        }
    }

    /// Marks the scene dirty and requests a repaint.
    pub(crate) fn mark_modified(&mut self) {
        self.is_modified = true;
        self.request_redraw();
    }

    /// Renders the scene for display at the given viewport size.
    pub fn render(&self, width: u32, height: u32) -> RgbImage {
        renderer::render_canvas(&self.canvas, &self.assets, width, height)
    }
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new()
    }
}

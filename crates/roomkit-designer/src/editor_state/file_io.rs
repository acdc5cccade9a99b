//! Snapshot save/load and raster export for editor state.

use super::EditorState;
use crate::canvas::Canvas;
use crate::renderer::{self, PNG_EXPORT_FILENAME};
use crate::serialization::RoomFile;
use roomkit_core::{ExportError, ParseError};
use std::path::{Path, PathBuf};

impl EditorState {
    /// Serializes the live scene to snapshot text.
    pub fn export_snapshot(&self) -> Result<String, ParseError> {
        RoomFile::from_canvas(&self.canvas, &self.room_name).to_json()
    }

    /// Parses snapshot text and replaces the live scene with the result.
    ///
    /// The replace is all-or-nothing: a parse failure returns the error
    /// and leaves the existing scene untouched.
    pub fn load_snapshot(&mut self, text: &str) -> Result<(), ParseError> {
        let file = RoomFile::from_json(text)?;
        let canvas = file.to_canvas()?;
        self.room_name = file.metadata.name.clone();
        self.canvas.replace(canvas);
        self.mark_modified();
        self.notify_selection();
        Ok(())
    }

    /// Save the scene to a snapshot file.
    pub fn save_to_file(&mut self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let file = RoomFile::from_canvas(&self.canvas, &self.room_name);
        file.save_to_file(&path)?;

        self.current_file_path = Some(path.as_ref().to_path_buf());
        self.is_modified = false;
        tracing::info!(path = %path.as_ref().display(), "saved room snapshot");
        Ok(())
    }

    /// Load a scene from a snapshot file, replacing the live scene on
    /// success only.
    pub fn load_from_file(&mut self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let file = RoomFile::load_from_file(&path)?;
        let canvas = file.to_canvas()?;

        self.room_name = file.metadata.name.clone();
        self.canvas.replace(canvas);
        self.current_file_path = Some(path.as_ref().to_path_buf());
        self.is_modified = false;
        self.request_redraw();
        self.notify_selection();
        tracing::info!(path = %path.as_ref().display(), "loaded room snapshot");
        Ok(())
    }

    /// Flattens the scene into PNG bytes at full quality.
    pub fn export_png(&self) -> Result<Vec<u8>, ExportError> {
        renderer::export_raster(&self.canvas, &self.assets)
    }

    /// Writes the PNG export under its fixed filename into a directory,
    /// returning the full path.
    pub fn save_png_to_dir(&self, dir: impl AsRef<Path>) -> Result<PathBuf, ExportError> {
        let bytes = self.export_png()?;
        let path = dir.as_ref().join(PNG_EXPORT_FILENAME);
        std::fs::write(&path, bytes)?;
        Ok(path)
    }

    /// Resets to a fresh default room, keeping the palette and assets.
    pub fn new_room(&mut self) {
        self.canvas.replace(Canvas::new());
        self.room_name = "Untitled".to_string();
        self.current_file_path = None;
        self.is_modified = false;
        self.request_redraw();
        self.notify_selection();
    }
}

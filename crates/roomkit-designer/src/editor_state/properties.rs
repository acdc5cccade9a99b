//! Surface recolor gestures for editor state.

use super::EditorState;
use roomkit_core::{Color, ParseError};

impl EditorState {
    /// Recolors the floor. Geometry is untouched.
    pub fn set_floor_color(&mut self, color: Color) {
        self.canvas.set_floor_fill(color);
        self.mark_modified();
    }

    /// Recolors every wall. Geometry is untouched.
    pub fn set_wall_color(&mut self, color: Color) {
        self.canvas.set_wall_fill(color);
        self.mark_modified();
    }

    /// Floor color-input change with a raw hex payload from the shell.
    pub fn recolor_floor(&mut self, value: &str) -> Result<(), ParseError> {
        let color = Color::from_hex(value)?;
        self.set_floor_color(color);
        Ok(())
    }

    /// Wall color-input change with a raw hex payload from the shell.
    pub fn recolor_walls(&mut self, value: &str) -> Result<(), ParseError> {
        let color = Color::from_hex(value)?;
        self.set_wall_color(color);
        Ok(())
    }
}

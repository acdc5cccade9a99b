//! # RoomKit Designer
//!
//! This crate provides the scene-editing and persistence core for the
//! RoomKit room-layout editor. It combines an ordered scene store, a
//! placement engine, gesture-level editing state, and snapshot/raster
//! persistence into one embeddable editing environment.
//!
//! ## Core Components
//!
//! ### Scene Model
//! - **Objects**: structural room geometry (floor, walls) and user-placed
//!   furniture backed by image assets
//! - **Canvas**: the live scene with enforced invariants (structural
//!   objects survive every delete, insertion appends to the top of the
//!   paint order)
//! - **Selection**: single-object selection that never resolves to
//!   structural geometry
//!
//! ### Editing
//! - **Placement**: drop-coordinate translation, default transforms, and
//!   50-unit grid snapping (idempotent, applied on every move event)
//! - **Gestures**: drag-create, move+snap, 15-degree rotate steps,
//!   double-click delete, surface recolor
//!
//! ### Persistence
//! - **Snapshots**: versioned JSON files that round-trip the scene
//!   losslessly and ignore unknown fields on import
//! - **Raster export**: full-quality PNG flattening of the paint order
//!
//! ## Architecture
//!
//! The editor operates in layers:
//!
//! ```text
//! EditorState (Gesture handlers, shell hooks)
//!   ├── Canvas (Scene store + selection + invariants)
//!   ├── Placement (Drop coordinates, grid snapping)
//!   └── AssetLibrary (Decoded furniture images)
//!
//! Serialization (Snapshot files)
//! Renderer (Display render + PNG export)
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use roomkit_designer::EditorState;
//! use roomkit_core::Point;
//!
//! let mut editor = EditorState::new();
//!
//! // Drag a palette asset onto the canvas
//! editor.begin_palette_drag("assets/sofa.png");
//! editor.drop_on_canvas(Point::new(237.0, 412.0), Point::new(0.0, 0.0))?;
//!
//! // Move it: positions snap to the 50-unit grid
//! editor.drag_selected_to(Point::new(237.0, 412.0));
//!
//! // Persist
//! let json = editor.export_snapshot()?;
//! ```

pub mod assets;
pub mod canvas;
pub mod editor_state;
pub mod model;
pub mod object_store;
pub mod placement;
pub mod renderer;
pub mod selection_manager;
pub mod serialization;

// Re-export all public types from submodules
pub use assets::{AssetEntry, AssetLibrary};
pub use canvas::{Canvas, FLOOR_FILL, ROOM_HEIGHT, ROOM_WIDTH, WALL_FILL, WALL_THICKNESS};
pub use editor_state::EditorState;
pub use model::{normalize_degrees, ObjectKind, SceneObject, StructuralRole};
pub use object_store::ObjectStore;
pub use placement::{
    drop_position, snap_to_grid, snap_value, DropTransform, DEFAULT_DROP_POINT, FURNITURE_SCALE,
    GRID_UNIT, ROTATION_STEP,
};
pub use renderer::{export_raster, render_canvas, PNG_EXPORT_FILENAME};
pub use selection_manager::SelectionManager;
pub use serialization::{export_snapshot, import_snapshot, ObjectData, RoomFile};

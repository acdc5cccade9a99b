//! # RoomKit
//!
//! A Rust-based 2D room-layout editor core: drop furniture onto a room
//! canvas, position/rotate/delete it under grid and structural invariants,
//! recolor room surfaces, and persist/restore the scene as a JSON snapshot
//! or a flattened PNG.
//!
//! ## Architecture
//!
//! RoomKit is organized as a workspace with multiple crates:
//!
//! 1. **roomkit-core** - Core types: errors, geometry, colors, callbacks
//! 2. **roomkit-designer** - Scene store, placement, gestures, persistence
//! 3. **roomkit** - Facade and headless snapshot-to-PNG binary
//!
//! ## Features
//!
//! - **Scene model**: structural floor/walls plus freely arranged furniture
//! - **Grid snapping**: 50-unit grid applied on every move event
//! - **Gestures**: drag-create, move+snap, 15-degree rotate, double-click
//!   delete, surface recolor
//! - **Persistence**: versioned JSON snapshots with lossless round-trip,
//!   full-quality PNG flattening
//! - **Embeddable**: single-threaded, shell-agnostic editing state with
//!   repaint/selection hooks

pub use roomkit_designer as designer;

pub use roomkit_core::{
    AssetError, Color, Error, ExportError, ParseError, Point, Result, SceneError, UiCallback,
    UiDataCallback,
};

pub use roomkit_designer::{
    export_raster, export_snapshot, import_snapshot, AssetEntry, AssetLibrary, Canvas,
    EditorState, ObjectData, ObjectKind, ObjectStore, RoomFile, SceneObject, SelectionManager,
    StructuralRole, DEFAULT_DROP_POINT, FURNITURE_SCALE, GRID_UNIT, PNG_EXPORT_FILENAME,
    ROOM_HEIGHT, ROOM_WIDTH, ROTATION_STEP,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    tracing_subscriber::registry()
        .with(fmt::layer().compact())
        .with(env_filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}

//! # RoomKit Core
//!
//! Core types, errors, and utilities for RoomKit.
//! Provides the fundamental abstractions shared by the editor layers:
//! typed errors, 2D geometry primitives, color values, and callback aliases.

pub mod color;
pub mod error;
pub mod geometry;
pub mod types;

pub use color::Color;
pub use error::{AssetError, Error, ExportError, ParseError, Result, SceneError};
pub use geometry::Point;

// Re-export callback aliases for convenience
pub use types::{UiCallback, UiDataCallback};

//! Error handling for RoomKit
//!
//! Provides error types for all layers of the editor:
//! - Scene errors (object lookup/mutation)
//! - Parse errors (snapshot deserialization)
//! - Export errors (raster compositing and encoding)
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Scene error type
///
/// Represents errors from direct scene-store API use. Gesture handlers
/// treat the same conditions as silent no-ops; only the direct API
/// surfaces them as errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SceneError {
    /// Operation referenced an object id that is not in the scene
    #[error("No object with id {id} in the scene")]
    NotFound {
        /// The object id that was not found.
        id: u64,
    },

    /// Attempted to delete or rotate a structural object
    #[error("Object {id} is structural and cannot be modified this way")]
    Structural {
        /// The structural object's id.
        id: u64,
    },
}

/// Snapshot parse error type
///
/// Represents failures while reading a snapshot back into a scene.
/// A parse failure must leave the live scene untouched.
#[derive(Error, Debug)]
pub enum ParseError {
    /// Snapshot text is not valid JSON
    #[error("Malformed snapshot: {0}")]
    Json(#[from] serde_json::Error),

    /// Object descriptor carries a type the editor does not know
    #[error("Unknown object type: {0}")]
    UnknownObjectType(String),

    /// Object descriptor is missing a field its type requires
    #[error("Object descriptor missing required field: {0}")]
    MissingField(&'static str),

    /// Snapshot file format version is not supported
    #[error("Unsupported snapshot version: {0}")]
    UnsupportedVersion(String),

    /// Color value could not be parsed
    #[error("Invalid color value: {0}")]
    InvalidColor(String),
}

/// Asset error type
///
/// Represents failures while reading or decoding a furniture image asset.
#[derive(Error, Debug)]
pub enum AssetError {
    /// The asset file could not be read
    #[error("Failed to read asset {src}: {source}")]
    Io {
        /// The asset path that failed to read.
        src: String,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The asset bytes could not be decoded into an image
    #[error("Failed to decode asset {src}: {reason}")]
    Decode {
        /// The asset path that failed to decode.
        src: String,
        /// A message describing the decode failure.
        reason: String,
    },
}

/// Raster export error type
///
/// Represents failures while flattening the scene to image bytes.
/// Callers surface these as user-visible warnings, not crashes.
#[derive(Error, Debug)]
pub enum ExportError {
    /// A referenced furniture asset could not be read or decoded
    #[error("Asset not available for export: {src}")]
    AssetUnavailable {
        /// The asset path that could not be composited.
        src: String,
    },

    /// The compositing surface could not be allocated
    #[error("Could not allocate a {width}x{height} render surface")]
    Surface {
        /// Requested surface width in pixels.
        width: u32,
        /// Requested surface height in pixels.
        height: u32,
    },

    /// Image encoding failed
    #[error("Failed to encode raster output: {0}")]
    Encode(String),

    /// File IO failed while writing the export
    #[error("Export IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Unified error type for RoomKit operations
#[derive(Error, Debug)]
pub enum Error {
    /// Scene store error
    #[error(transparent)]
    Scene(#[from] SceneError),

    /// Snapshot parse error
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Asset read/decode error
    #[error(transparent)]
    Asset(#[from] AssetError),

    /// Raster export error
    #[error(transparent)]
    Export(#[from] ExportError),

    /// General IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias using the unified [`Error`] type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scene_error_display() {
        let err = SceneError::NotFound { id: 42 };
        assert_eq!(err.to_string(), "No object with id 42 in the scene");
    }

    #[test]
    fn parse_error_wraps_serde() {
        let bad = serde_json::from_str::<serde_json::Value>("{not json");
        let err = ParseError::from(bad.unwrap_err());
        assert!(err.to_string().starts_with("Malformed snapshot:"));
    }

    #[test]
    fn unified_error_from_io() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = Error::from(io);
        assert!(matches!(err, Error::Io(_)));
    }
}

//! Serialization and deserialization for room snapshot files.
//!
//! Implements save/load functionality for room snapshots using JSON with
//! complete scene state preservation. The wire form keeps the field names
//! of the classic canvas-JSON shape (`left`, `top`, `angle`, `scaleX`,
//! `scaleY`, `src`, `fill`, `selectable`) so snapshots stay portable, and
//! ignores unknown extra fields on import for forward compatibility.
//!
//! Import never touches a live scene: it builds a complete new [`Canvas`]
//! and only then may the caller swap it in, so a parse failure leaves the
//! existing scene untouched.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use roomkit_core::{Color, ParseError, Point};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::canvas::{Canvas, FLOOR_FILL, WALL_FILL};
use crate::model::{SceneObject, StructuralRole};

/// Snapshot file format version
const FILE_FORMAT_VERSION: &str = "1.0";

/// Complete room snapshot structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomFile {
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default)]
    pub metadata: RoomMetadata,
    pub room: RoomDimensions,
    pub objects: Vec<ObjectData>,
}

/// Snapshot metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomMetadata {
    pub name: String,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub description: String,
}

impl Default for RoomMetadata {
    fn default() -> Self {
        let now = Utc::now();
        Self {
            name: "Untitled".to_string(),
            created: now,
            modified: now,
            author: String::new(),
            description: String::new(),
        }
    }
}

/// Room canvas dimensions
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RoomDimensions {
    pub width: f64,
    pub height: f64,
}

/// Serialized object descriptor.
///
/// `type` is `"rect"` for structural geometry and `"image"` for furniture.
/// Unknown extra fields are ignored; missing optional fields take their
/// defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObjectData {
    #[serde(rename = "type")]
    pub object_type: String,
    #[serde(default)]
    pub name: String,
    pub left: f64,
    pub top: f64,
    #[serde(default)]
    pub angle: f64,
    #[serde(rename = "scaleX", default = "default_scale")]
    pub scale_x: f64,
    #[serde(rename = "scaleY", default = "default_scale")]
    pub scale_y: f64,
    #[serde(default)]
    pub width: f64,
    #[serde(default)]
    pub height: f64,
    #[serde(default)]
    pub fill: Option<String>,
    #[serde(default)]
    pub src: Option<String>,
    #[serde(default = "default_selectable")]
    pub selectable: bool,
}

fn default_version() -> String {
    FILE_FORMAT_VERSION.to_string()
}
fn default_scale() -> f64 {
    1.0
}
fn default_selectable() -> bool {
    true
}

impl RoomFile {
    /// Creates an empty snapshot with default values.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            version: FILE_FORMAT_VERSION.to_string(),
            metadata: RoomMetadata {
                name: name.into(),
                ..RoomMetadata::default()
            },
            room: RoomDimensions {
                width: crate::canvas::ROOM_WIDTH,
                height: crate::canvas::ROOM_HEIGHT,
            },
            objects: Vec::new(),
        }
    }

    /// Captures the canvas into a snapshot, objects in paint order.
    pub fn from_canvas(canvas: &Canvas, name: impl Into<String>) -> Self {
        let mut file = Self::new(name);
        file.room = RoomDimensions {
            width: canvas.width(),
            height: canvas.height(),
        };
        file.objects = canvas
            .objects()
            .map(ObjectData::from_scene_object)
            .collect();
        file
    }

    /// Serializes to pretty-printed JSON text.
    pub fn to_json(&self) -> Result<String, ParseError> {
        serde_json::to_string_pretty(self).map_err(ParseError::Json)
    }

    /// Parses snapshot text. The version gate accepts any `1.x` snapshot;
    /// later majors are rejected rather than half-read.
    pub fn from_json(text: &str) -> Result<Self, ParseError> {
        let file: RoomFile = serde_json::from_str(text)?;
        if !file.version.starts_with("1.") && file.version != "1" {
            return Err(ParseError::UnsupportedVersion(file.version));
        }
        Ok(file)
    }

    /// Builds a complete new canvas from the snapshot. Ids are assigned
    /// afresh in paint order; selection state starts cleared.
    pub fn to_canvas(&self) -> Result<Canvas, ParseError> {
        let mut canvas = Canvas::bare(self.room.width, self.room.height);
        for data in &self.objects {
            let obj = data.to_scene_object()?;
            canvas.add_object(obj);
        }
        Ok(canvas)
    }

    /// Save snapshot to a file.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = self.to_json().context("Failed to serialize snapshot")?;
        std::fs::write(path.as_ref(), json).context("Failed to write snapshot file")?;
        Ok(())
    }

    /// Load a snapshot from a file.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content =
            std::fs::read_to_string(path.as_ref()).context("Failed to read snapshot file")?;
        let file = Self::from_json(&content).context("Failed to parse snapshot file")?;
        Ok(file)
    }
}

impl ObjectData {
    /// Converts a scene object to its wire form.
    pub fn from_scene_object(obj: &SceneObject) -> Self {
        Self {
            object_type: if obj.is_structural() { "rect" } else { "image" }.to_string(),
            name: obj.name.clone(),
            left: obj.position.x,
            top: obj.position.y,
            angle: obj.rotation,
            scale_x: obj.scale_x,
            scale_y: obj.scale_y,
            width: obj.width,
            height: obj.height,
            fill: obj.fill().map(|c| c.to_hex()),
            src: obj.src().map(str::to_string),
            selectable: obj.selectable,
        }
    }

    /// Converts the wire form back into a scene object. The id is a
    /// placeholder; the canvas assigns the real one on insertion.
    pub fn to_scene_object(&self) -> Result<SceneObject, ParseError> {
        let position = Point::new(self.left, self.top);

        let mut obj = match self.object_type.as_str() {
            "rect" => {
                let role = if self.name.contains("wall") {
                    StructuralRole::Wall
                } else {
                    StructuralRole::Floor
                };
                let fill = match &self.fill {
                    Some(hex) => Color::from_hex(hex)?,
                    None => match role {
                        StructuralRole::Floor => FLOOR_FILL,
                        StructuralRole::Wall => WALL_FILL,
                    },
                };
                let mut obj = SceneObject::structural(
                    0,
                    self.name.clone(),
                    role,
                    fill,
                    position,
                    self.width,
                    self.height,
                );
                obj.scale_x = self.scale_x;
                obj.scale_y = self.scale_y;
                obj
            }
            "image" => {
                let src = self
                    .src
                    .as_deref()
                    .ok_or(ParseError::MissingField("src"))?;
                let mut obj = SceneObject::furniture(
                    0,
                    self.name.clone(),
                    src,
                    position,
                    self.width,
                    self.height,
                    self.scale_x,
                    self.scale_y,
                );
                obj.selectable = self.selectable;
                obj
            }
            other => return Err(ParseError::UnknownObjectType(other.to_string())),
        };

        obj.set_rotation(self.angle);
        Ok(obj)
    }
}

/// Serializes every object's fields into round-trippable snapshot text.
pub fn export_snapshot(canvas: &Canvas) -> Result<String, ParseError> {
    RoomFile::from_canvas(canvas, "Room").to_json()
}

/// Parses snapshot text into a complete new scene.
///
/// The live scene is untouched until the caller swaps the result in via
/// [`Canvas::replace`], so malformed input can never leave a partial
/// replace behind.
pub fn import_snapshot(text: &str) -> Result<Canvas, ParseError> {
    RoomFile::from_json(text)?.to_canvas()
}

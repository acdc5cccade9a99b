//! Furniture asset registry.
//!
//! Decodes furniture images with the `image` crate into premultiplied
//! tiny-skia pixmaps and caches them by asset path, so hit-testing and
//! rendering can look a pixmap up without touching the filesystem again.
//! The embedding shell's sidebar supplies the palette as (label, path)
//! pairs; the editor only ever consumes the path strings.

use roomkit_core::AssetError;
use std::collections::HashMap;
use tiny_skia::{IntSize, Pixmap};

/// One sidebar palette entry as supplied by the embedding shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetEntry {
    /// Display label shown next to the thumbnail.
    pub label: String,
    /// Asset path handed back to the editor on drag/drop.
    pub path: String,
}

impl AssetEntry {
    pub fn new(label: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            path: path.into(),
        }
    }
}

/// Cache of decoded furniture images, keyed by asset path.
#[derive(Clone, Default)]
pub struct AssetLibrary {
    images: HashMap<String, Pixmap>,
}

impl AssetLibrary {
    pub fn new() -> Self {
        Self {
            images: HashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn contains(&self, src: &str) -> bool {
        self.images.contains_key(src)
    }

    /// The decoded pixmap for an asset, if it has been loaded.
    pub fn get(&self, src: &str) -> Option<&Pixmap> {
        self.images.get(src)
    }

    /// Natural pixel dimensions of a loaded asset.
    pub fn dimensions(&self, src: &str) -> Option<(u32, u32)> {
        self.images.get(src).map(|p| (p.width(), p.height()))
    }

    /// Registers an already-decoded pixmap under an asset path. Used by
    /// shells that decode elsewhere and by tests that build synthetic
    /// assets.
    pub fn insert_pixmap(&mut self, src: impl Into<String>, pixmap: Pixmap) {
        self.images.insert(src.into(), pixmap);
    }

    /// Loads an asset from disk unless it is already cached, returning its
    /// natural dimensions.
    pub fn ensure_loaded(&mut self, src: &str) -> Result<(u32, u32), AssetError> {
        if let Some(dims) = self.dimensions(src) {
            return Ok(dims);
        }
        let pixmap = decode_image(src)?;
        let dims = (pixmap.width(), pixmap.height());
        tracing::debug!(src, width = dims.0, height = dims.1, "decoded asset");
        self.images.insert(src.to_string(), pixmap);
        Ok(dims)
    }
}

/// Decodes an image file into a premultiplied RGBA pixmap.
fn decode_image(src: &str) -> Result<Pixmap, AssetError> {
    let img = image::open(src).map_err(|err| match err {
        image::ImageError::IoError(source) => AssetError::Io {
            src: src.to_string(),
            source,
        },
        other => AssetError::Decode {
            src: src.to_string(),
            reason: other.to_string(),
        },
    })?;

    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    let size = IntSize::from_wh(width, height).ok_or_else(|| AssetError::Decode {
        src: src.to_string(),
        reason: "zero-sized image".to_string(),
    })?;

    // tiny-skia wants premultiplied alpha
    let mut data = rgba.into_raw();
    for px in data.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a < 255 {
            px[0] = ((px[0] as u16 * a) / 255) as u8;
            px[1] = ((px[1] as u16 * a) / 255) as u8;
            px[2] = ((px[2] as u16 * a) / 255) as u8;
        }
    }

    Pixmap::from_vec(data, size).ok_or_else(|| AssetError::Decode {
        src: src.to_string(),
        reason: "pixel buffer did not match image dimensions".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid_pixmap(w: u32, h: u32) -> Pixmap {
        let mut pixmap = Pixmap::new(w, h).unwrap();
        pixmap.fill(tiny_skia::Color::from_rgba8(120, 80, 40, 255));
        pixmap
    }

    #[test]
    fn registered_pixmaps_are_served_from_cache() {
        let mut assets = AssetLibrary::new();
        assets.insert_pixmap("assets/sofa.png", solid_pixmap(64, 32));

        assert!(assets.contains("assets/sofa.png"));
        assert_eq!(assets.dimensions("assets/sofa.png"), Some((64, 32)));
        // ensure_loaded must not hit the filesystem for cached entries
        assert_eq!(
            assets.ensure_loaded("assets/sofa.png").unwrap(),
            (64, 32)
        );
    }

    #[test]
    fn missing_file_reports_io_error() {
        let mut assets = AssetLibrary::new();
        let err = assets.ensure_loaded("no/such/asset.png").unwrap_err();
        assert!(matches!(err, AssetError::Io { .. }));
    }
}

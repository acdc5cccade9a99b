//! Canvas renderer for the room scene.
//!
//! Renders the scene to an image buffer using tiny-skia for high-quality
//! 2D compositing. Two paths share the same per-object drawing code:
//!
//! - [`render_canvas`] is the display path: it tolerates not-yet-loaded
//!   assets (placeholder fill) and draws selection indicators.
//! - [`export_raster`] is the persistence path: it flattens the scene at
//!   full quality into PNG bytes and refuses to export when a referenced
//!   asset cannot be composited.

use crate::assets::AssetLibrary;
use crate::canvas::Canvas;
use crate::model::{ObjectKind, SceneObject};
use image::{ImageFormat, Rgb, RgbImage};
use roomkit_core::ExportError;
use std::io::Cursor;
use tiny_skia::{
    Color, FillRule, FilterQuality, Paint, PathBuilder, Pixmap, PixmapPaint, Rect, Stroke,
    Transform,
};

const HANDLE_SIZE: f32 = 8.0;

/// Fixed filename for the download-style PNG export.
pub const PNG_EXPORT_FILENAME: &str = "room-layout.png";

fn background_color() -> Color {
    Color::from_rgba8(224, 224, 224, 255)
}
fn placeholder_color() -> Color {
    Color::from_rgba8(189, 195, 199, 255)
}
fn selection_color() -> Color {
    Color::from_rgba8(255, 235, 59, 255)
}

fn to_skia_color(c: roomkit_core::Color) -> Color {
    Color::from_rgba8(c.r, c.g, c.b, 255)
}

/// World transform of an object: scale, then rotate about the top-left
/// anchor, then translate to its position.
fn object_transform(obj: &SceneObject) -> Transform {
    Transform::from_scale(obj.scale_x as f32, obj.scale_y as f32)
        .post_concat(Transform::from_rotate(obj.rotation as f32))
        .post_concat(Transform::from_translate(
            obj.position.x as f32,
            obj.position.y as f32,
        ))
}

/// Draws one object. In strict mode a furniture object without a decoded
/// asset is an export failure; otherwise it gets a placeholder fill.
fn draw_object(
    pixmap: &mut Pixmap,
    obj: &SceneObject,
    assets: &AssetLibrary,
    strict: bool,
) -> Result<(), ExportError> {
    let transform = object_transform(obj);

    match &obj.kind {
        ObjectKind::Structural { fill, .. } => {
            let mut paint = Paint::default();
            paint.set_color(to_skia_color(*fill));
            paint.anti_alias = false; // sharp edges for axis-aligned room geometry

            if let Some(rect) = Rect::from_xywh(0.0, 0.0, obj.width as f32, obj.height as f32) {
                let path = PathBuilder::from_rect(rect);
                pixmap.fill_path(&path, &paint, FillRule::Winding, transform, None);
            }
        }
        ObjectKind::Furniture { src } => match assets.get(src) {
            Some(asset) => {
                let paint = PixmapPaint {
                    quality: FilterQuality::Bilinear,
                    ..PixmapPaint::default()
                };
                pixmap.draw_pixmap(0, 0, asset.as_ref(), &paint, transform, None);
            }
            None if strict => {
                return Err(ExportError::AssetUnavailable { src: src.clone() });
            }
            None => {
                let mut paint = Paint::default();
                paint.set_color(placeholder_color());
                paint.anti_alias = true;
                if let Some(rect) =
                    Rect::from_xywh(0.0, 0.0, obj.width as f32, obj.height as f32)
                {
                    let path = PathBuilder::from_rect(rect);
                    pixmap.fill_path(&path, &paint, FillRule::Winding, transform, None);
                }
            }
        },
    }

    Ok(())
}

/// Draws the selection bounding box and corner handles for an object.
fn draw_selection_indicator(pixmap: &mut Pixmap, obj: &SceneObject) {
    let (x1, y1, x2, y2) = obj.bounds();
    let Some(rect) = Rect::from_ltrb(x1 as f32, y1 as f32, x2 as f32, y2 as f32) else {
        return;
    };

    let mut paint = Paint::default();
    paint.set_color(selection_color());
    paint.anti_alias = true;

    let path = PathBuilder::from_rect(rect);
    let stroke = Stroke {
        width: 2.0,
        ..Default::default()
    };
    pixmap.stroke_path(&path, &paint, &stroke, Transform::identity(), None);

    let corners = [(x1, y1), (x2, y1), (x1, y2), (x2, y2)];
    for (hx, hy) in corners {
        let half = (HANDLE_SIZE / 2.0) as f64;
        if let Some(handle) = Rect::from_xywh(
            (hx - half) as f32,
            (hy - half) as f32,
            HANDLE_SIZE,
            HANDLE_SIZE,
        ) {
            let handle_path = PathBuilder::from_rect(handle);
            pixmap.fill_path(
                &handle_path,
                &paint,
                FillRule::Winding,
                Transform::identity(),
                None,
            );
        }
    }
}

fn draw_scene(
    pixmap: &mut Pixmap,
    canvas: &Canvas,
    assets: &AssetLibrary,
    strict: bool,
) -> Result<(), ExportError> {
    for obj in canvas.objects() {
        draw_object(pixmap, obj, assets, strict)?;
    }
    Ok(())
}

fn pixmap_to_image(pixmap: &Pixmap) -> RgbImage {
    let width = pixmap.width();
    let data = pixmap.data();
    RgbImage::from_fn(width, pixmap.height(), |x, y| {
        let idx = ((y * width + x) * 4) as usize;
        // Everything drawn is opaque over an opaque background
        Rgb([data[idx], data[idx + 1], data[idx + 2]])
    })
}

/// Renders the scene to an image buffer for display in a shell UI.
///
/// Never fails: furniture whose asset has not been decoded yet is drawn as
/// a placeholder, and selected objects get an outline with corner handles.
pub fn render_canvas(canvas: &Canvas, assets: &AssetLibrary, width: u32, height: u32) -> RgbImage {
    let Some(mut pixmap) = Pixmap::new(width, height) else {
        return RgbImage::new(width, height);
    };
    pixmap.fill(background_color());

    // Placeholder mode cannot fail
    let _ = draw_scene(&mut pixmap, canvas, assets, false);

    for obj in canvas.objects() {
        if obj.selected {
            draw_selection_indicator(&mut pixmap, obj);
        }
    }

    pixmap_to_image(&pixmap)
}

/// Flattens the current visual state into lossless PNG bytes at room size.
///
/// Fails with [`ExportError::AssetUnavailable`] if any referenced furniture
/// asset is not available for compositing; callers surface that as a
/// user-visible warning rather than a crash.
pub fn export_raster(canvas: &Canvas, assets: &AssetLibrary) -> Result<Vec<u8>, ExportError> {
    let width = canvas.width().ceil() as u32;
    let height = canvas.height().ceil() as u32;
    let mut pixmap = Pixmap::new(width, height).ok_or(ExportError::Surface { width, height })?;
    pixmap.fill(background_color());

    draw_scene(&mut pixmap, canvas, assets, true)?;

    let image = pixmap_to_image(&pixmap);
    let mut bytes = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .map_err(|err| ExportError::Encode(err.to_string()))?;

    tracing::debug!(width, height, bytes = bytes.len(), "exported raster snapshot");
    Ok(bytes)
}

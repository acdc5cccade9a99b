use anyhow::{bail, Context, Result};
use roomkit::{init_logging, EditorState, PNG_EXPORT_FILENAME};

fn main() -> Result<()> {
    // Initialize logging
    init_logging()?;

    let mut args = std::env::args().skip(1);
    let Some(snapshot_path) = args.next() else {
        bail!("usage: roomkit <snapshot.json> [output.png]");
    };
    let output_path = args
        .next()
        .unwrap_or_else(|| PNG_EXPORT_FILENAME.to_string());

    let mut editor = EditorState::new();
    editor
        .load_from_file(&snapshot_path)
        .with_context(|| format!("Failed to load snapshot {snapshot_path}"))?;

    // Decode every asset the scene references before flattening
    let sources: Vec<String> = editor
        .canvas
        .objects()
        .filter_map(|obj| obj.src().map(str::to_string))
        .collect();
    for src in sources {
        editor
            .assets
            .ensure_loaded(&src)
            .with_context(|| format!("Failed to load furniture asset {src}"))?;
    }

    let bytes = editor
        .export_png()
        .context("Failed to flatten the scene to PNG")?;
    std::fs::write(&output_path, bytes)
        .with_context(|| format!("Failed to write {output_path}"))?;

    tracing::info!(
        snapshot = %snapshot_path,
        output = %output_path,
        objects = editor.canvas.object_count(),
        "exported room raster"
    );

    Ok(())
}

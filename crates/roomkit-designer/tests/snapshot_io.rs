//! Snapshot serialization round-trip and file IO tests

use roomkit_core::{Color, Point};
use roomkit_designer::{export_snapshot, import_snapshot, Canvas, EditorState};

const EPSILON: f64 = 1e-9;

fn populated_canvas() -> Canvas {
    let mut canvas = Canvas::new();
    canvas.set_wall_fill(Color::new(0x33, 0x66, 0x99));
    canvas.set_floor_fill(Color::new(0xfa, 0xfa, 0xfa));

    let sofa = canvas.add_furniture("assets/sofa.png", "sofa", Point::new(250.0, 400.0), 128.0, 64.0);
    canvas.update_object(sofa, |o| o.set_rotation(45.0));

    // Arbitrary rotation from an older snapshot must survive exactly
    let lamp = canvas.add_furniture("assets/lamp.png", "lamp", Point::new(37.5, 12.25), 32.0, 96.0);
    canvas.update_object(lamp, |o| o.set_rotation(344.7));
    canvas
}

#[test]
fn test_round_trip_preserves_every_field() {
    let canvas = populated_canvas();
    let json = export_snapshot(&canvas).expect("export failed");
    let restored = import_snapshot(&json).expect("import failed");

    assert_eq!(restored.object_count(), canvas.object_count());
    assert_eq!(restored.furniture_count(), canvas.furniture_count());
    assert_eq!(restored.width(), canvas.width());
    assert_eq!(restored.height(), canvas.height());

    for (original, loaded) in canvas.objects().zip(restored.objects()) {
        assert_eq!(original.name, loaded.name);
        assert_eq!(original.is_structural(), loaded.is_structural());
        assert!((original.position.x - loaded.position.x).abs() < EPSILON);
        assert!((original.position.y - loaded.position.y).abs() < EPSILON);
        assert!((original.rotation - loaded.rotation).abs() < EPSILON);
        assert!((original.scale_x - loaded.scale_x).abs() < EPSILON);
        assert!((original.scale_y - loaded.scale_y).abs() < EPSILON);
        assert_eq!(original.fill(), loaded.fill());
        assert_eq!(original.src(), loaded.src());
        assert_eq!(original.selectable, loaded.selectable);
    }
}

#[test]
fn test_empty_room_imports_with_zero_furniture() {
    let canvas = Canvas::new();
    let json = export_snapshot(&canvas).unwrap();
    let restored = import_snapshot(&json).unwrap();
    assert_eq!(restored.furniture_count(), 0);
    assert_eq!(restored.object_count(), 5);
    assert!(restored.floor().is_some());
}

#[test]
fn test_failed_load_leaves_the_scene_untouched() {
    let mut editor = EditorState::new();
    editor
        .assets
        .insert_pixmap("assets/chair.png", tiny_skia::Pixmap::new(16, 16).unwrap());
    editor.add_furniture("assets/chair.png").unwrap();
    let before = editor.canvas.snapshot();

    assert!(editor.load_snapshot("{definitely not json").is_err());
    assert_eq!(editor.canvas.snapshot(), before);

    // Parseable JSON with an invalid object descriptor also rolls off
    let half_valid = r##"{
        "room": {"width": 100.0, "height": 100.0},
        "objects": [
            {"type": "image", "src": "a.png", "left": 0.0, "top": 0.0},
            {"type": "hologram", "left": 1.0, "top": 1.0}
        ]
    }"##;
    assert!(editor.load_snapshot(half_valid).is_err());
    assert_eq!(editor.canvas.snapshot(), before);
}

#[test]
fn test_load_replaces_the_previous_scene_wholesale() {
    let mut editor = EditorState::new();
    editor
        .assets
        .insert_pixmap("assets/chair.png", tiny_skia::Pixmap::new(16, 16).unwrap());
    editor.add_furniture("assets/chair.png").unwrap();
    assert_eq!(editor.canvas.furniture_count(), 1);

    let empty = export_snapshot(&Canvas::new()).unwrap();
    editor.load_snapshot(&empty).unwrap();
    assert_eq!(editor.canvas.furniture_count(), 0);
    // Selection does not survive a whole-scene replace
    assert_eq!(editor.selected_id(), None);
}

#[test]
fn test_save_and_load_through_a_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("living-room.json");

    let mut editor = EditorState::new();
    editor.room_name = "Living Room".to_string();
    editor
        .assets
        .insert_pixmap("assets/sofa.png", tiny_skia::Pixmap::new(64, 32).unwrap());
    editor
        .add_furniture_at("assets/sofa.png", Point::new(300.0, 250.0))
        .unwrap();

    editor.save_to_file(&path).expect("save failed");
    assert!(!editor.is_modified);
    assert_eq!(editor.current_file_path.as_deref(), Some(path.as_path()));

    let mut other = EditorState::new();
    other.load_from_file(&path).expect("load failed");
    assert_eq!(other.room_name, "Living Room");
    assert_eq!(other.canvas.furniture_count(), 1);
    let sofa = other.canvas.objects().find(|o| o.is_furniture()).unwrap();
    assert_eq!(sofa.position, Point::new(300.0, 250.0));
    assert_eq!(sofa.src(), Some("assets/sofa.png"));
}

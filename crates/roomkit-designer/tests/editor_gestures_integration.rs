//! Editor state gesture integration tests

use roomkit_core::Point;
use roomkit_designer::{EditorState, FURNITURE_SCALE};
use std::cell::Cell;
use std::rc::Rc;

fn solid_pixmap(w: u32, h: u32) -> tiny_skia::Pixmap {
    let mut pixmap = tiny_skia::Pixmap::new(w, h).unwrap();
    pixmap.fill(tiny_skia::Color::from_rgba8(150, 90, 40, 255));
    pixmap
}

fn editor_with_chair() -> EditorState {
    let mut editor = EditorState::new();
    editor
        .assets
        .insert_pixmap("assets/chair.png", solid_pixmap(64, 64));
    editor
}

#[test]
fn test_drop_then_first_move_snaps_to_grid() {
    let mut editor = editor_with_chair();

    editor.begin_palette_drag("assets/chair.png");
    let id = editor
        .drop_on_canvas(Point::new(237.0, 412.0), Point::new(0.0, 0.0))
        .expect("drop failed")
        .expect("payload was recorded");

    // No snapping at creation time
    let obj = editor.canvas.object(id).unwrap();
    assert_eq!(obj.position, Point::new(237.0, 412.0));
    assert_eq!(obj.scale_x, FURNITURE_SCALE);
    assert_eq!(obj.scale_y, FURNITURE_SCALE);
    assert_eq!(obj.rotation, 0.0);
    assert!(obj.selectable);

    // First move-in-progress event pins it to the 50-unit grid
    editor.drag_selected_to(Point::new(237.0, 412.0));
    let obj = editor.canvas.object(id).unwrap();
    assert_eq!(obj.position, Point::new(250.0, 400.0));

    // Snapping again does not drift
    editor.drag_selected_to(Point::new(250.0, 400.0));
    assert_eq!(editor.canvas.object(id).unwrap().position, Point::new(250.0, 400.0));
}

#[test]
fn test_drop_without_payload_is_a_silent_noop() {
    let mut editor = editor_with_chair();
    let result = editor
        .drop_on_canvas(Point::new(100.0, 100.0), Point::new(0.0, 0.0))
        .expect("no-op drop must not error");
    assert_eq!(result, None);
    assert_eq!(editor.canvas.furniture_count(), 0);
}

#[test]
fn test_drop_translates_by_container_origin() {
    let mut editor = editor_with_chair();
    editor.begin_palette_drag("assets/chair.png");
    let id = editor
        .drop_on_canvas(Point::new(237.0, 412.0), Point::new(30.0, 12.0))
        .unwrap()
        .unwrap();
    assert_eq!(
        editor.canvas.object(id).unwrap().position,
        Point::new(207.0, 400.0)
    );
}

#[test]
fn test_button_placement_uses_default_drop_point() {
    let mut editor = editor_with_chair();
    let id = editor.add_furniture("assets/chair.png").unwrap();
    let obj = editor.canvas.object(id).unwrap();
    assert_eq!(obj.position, Point::new(200.0, 200.0));
    assert_eq!(obj.name, "chair");
    // Natural size comes from the decoded asset
    assert_eq!(obj.width, 64.0);
    assert_eq!(obj.height, 64.0);
}

#[test]
fn test_rotation_wraps_after_twenty_four_steps() {
    let mut editor = editor_with_chair();
    let id = editor.add_furniture("assets/chair.png").unwrap();

    for _ in 0..3 {
        editor.rotate_selected();
    }
    assert_eq!(editor.canvas.object(id).unwrap().rotation, 45.0);

    for _ in 3..24 {
        editor.rotate_selected();
    }
    assert_eq!(editor.canvas.object(id).unwrap().rotation, 0.0);
}

#[test]
fn test_rotate_without_selection_is_a_noop() {
    let mut editor = editor_with_chair();
    let id = editor.add_furniture("assets/chair.png").unwrap();
    editor.deselect_all();

    editor.rotate_selected();
    assert_eq!(editor.canvas.object(id).unwrap().rotation, 0.0);
}

#[test]
fn test_negative_rotation_normalizes() {
    let mut editor = editor_with_chair();
    let id = editor.add_furniture("assets/chair.png").unwrap();
    editor.rotate_selected_by(-15.0);
    assert_eq!(editor.canvas.object(id).unwrap().rotation, 345.0);
}

#[test]
fn test_double_click_deletes_furniture_but_never_the_room() {
    let mut editor = editor_with_chair();
    let id = editor
        .add_furniture_at("assets/chair.png", Point::new(500.0, 300.0))
        .unwrap();
    assert_eq!(editor.canvas.furniture_count(), 1);

    // Double-click on the furniture removes it
    assert!(editor.delete_at(Point::new(510.0, 310.0)));
    assert_eq!(editor.canvas.furniture_count(), 0);
    assert!(editor.canvas.object(id).is_none());
    assert_eq!(editor.selected_id(), None);

    // Double-clicking the empty room hits the floor, which survives
    let structural_before: Vec<u64> = editor
        .canvas
        .objects()
        .filter(|o| o.is_structural())
        .map(|o| o.id)
        .collect();
    for _ in 0..5 {
        assert!(!editor.delete_at(Point::new(500.0, 300.0)));
    }
    let structural_after: Vec<u64> = editor
        .canvas
        .objects()
        .filter(|o| o.is_structural())
        .map(|o| o.id)
        .collect();
    assert_eq!(structural_before, structural_after);
}

#[test]
fn test_delete_selected_command() {
    let mut editor = editor_with_chair();
    editor.add_furniture("assets/chair.png").unwrap();
    assert!(editor.delete_selected());
    assert_eq!(editor.canvas.furniture_count(), 0);
    // Nothing selected anymore
    assert!(!editor.delete_selected());
}

#[test]
fn test_recolor_inputs_update_fill_without_moving_geometry() {
    let mut editor = EditorState::new();
    let wall_positions: Vec<_> = editor.canvas.walls().map(|w| w.position).collect();

    editor.recolor_walls("#336699").unwrap();
    editor.recolor_floor("#fafafa").unwrap();

    assert!(editor
        .canvas
        .walls()
        .all(|w| w.fill().unwrap().to_hex() == "#336699"));
    assert_eq!(editor.canvas.floor().unwrap().fill().unwrap().to_hex(), "#fafafa");
    let after: Vec<_> = editor.canvas.walls().map(|w| w.position).collect();
    assert_eq!(wall_positions, after);

    // Bad payloads are reported, not applied
    assert!(editor.recolor_floor("not-a-color").is_err());
    assert_eq!(editor.canvas.floor().unwrap().fill().unwrap().to_hex(), "#fafafa");
}

#[test]
fn test_selection_gestures_ignore_structural_geometry() {
    let mut editor = editor_with_chair();
    // Clicking the bare floor selects nothing
    assert_eq!(editor.select_at(Point::new(500.0, 300.0)), None);

    let id = editor
        .add_furniture_at("assets/chair.png", Point::new(480.0, 280.0))
        .unwrap();
    assert_eq!(editor.select_at(Point::new(500.0, 300.0)), Some(id));

    // Selecting a wall by id is refused
    let wall_id = editor.canvas.walls().next().unwrap().id;
    assert!(!editor.select_id(wall_id));
}

#[test]
fn test_mutations_request_redraws() {
    let mut editor = editor_with_chair();
    let repaints = Rc::new(Cell::new(0usize));
    let observed = Rc::clone(&repaints);
    editor.set_on_redraw(move || observed.set(observed.get() + 1));

    editor.add_furniture("assets/chair.png").unwrap();
    let after_add = repaints.get();
    assert!(after_add > 0);

    editor.rotate_selected();
    assert!(repaints.get() > after_add);

    assert!(editor.is_modified);
}

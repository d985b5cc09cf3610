use approx::assert_relative_eq;
use egui::pos2;
use mako_paint::{ActiveTool, EditorContext, EditorEvent, EditorState, PaintConfig, ToolPreview};
use parking_lot::Mutex;
use std::sync::Arc;

fn record_events(editor: &EditorContext) -> Arc<Mutex<Vec<EditorEvent>>> {
    let events = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&events);
    editor.subscribe(Box::new(move |event: &EditorEvent| sink.lock().push(*event)));
    events
}

#[test]
fn test_pen_drag_produces_stroke() {
    let mut editor = EditorContext::default();
    editor.select_pen(2.0, 120.0);
    editor.on_pointer_down(pos2(10.0, 10.0));
    editor.on_pointer_move(pos2(20.0, 10.0));
    editor.on_pointer_up();

    assert_eq!(editor.drawables().len(), 1);
    let stroke = editor.drawables()[0].as_stroke().unwrap();
    assert_eq!(stroke.points(), &[pos2(10.0, 10.0), pos2(20.0, 10.0)]);
    assert_eq!(stroke.thickness(), 2.0);
    assert_eq!(stroke.hue(), 120.0);
}

#[test]
fn test_sticker_click_places_scaled_sticker() {
    let config = PaintConfig::default();
    let mut editor = EditorContext::new(&config);
    editor.select_sticker("🔥", 3.0, 45.0);
    editor.on_pointer_down(pos2(5.0, 5.0));
    editor.on_pointer_up();

    assert_eq!(editor.drawables().len(), 1);
    let sticker = editor.drawables()[0].as_sticker().unwrap();
    assert_eq!(sticker.position(), pos2(5.0, 5.0));
    assert_eq!(sticker.glyph(), "🔥");
    assert_eq!(sticker.rotation(), 45.0);
    assert_relative_eq!(sticker.size(), 3.0 * config.sticker_size_multiplier);
}

#[test]
fn test_sticker_drag_repositions() {
    let mut editor = EditorContext::default();
    editor.select_sticker("⭐", 2.0, 0.0);
    editor.on_pointer_down(pos2(5.0, 5.0));
    editor.on_pointer_move(pos2(30.0, 40.0));
    editor.on_pointer_move(pos2(31.0, 41.0));
    editor.on_pointer_up();

    let sticker = editor.drawables()[0].as_sticker().unwrap();
    assert_eq!(sticker.position(), pos2(31.0, 41.0));
}

#[test]
fn test_zero_movement_click_is_one_point_stroke() {
    let mut editor = EditorContext::default();
    editor.on_pointer_down(pos2(7.0, 8.0));
    editor.on_pointer_up();

    let stroke = editor.drawables()[0].as_stroke().unwrap();
    assert_eq!(stroke.points(), &[pos2(7.0, 8.0)]);
    assert!(stroke.is_degenerate());
}

#[test]
fn test_moves_after_release_do_not_touch_drawing() {
    let mut editor = EditorContext::default();
    editor.on_pointer_down(pos2(1.0, 1.0));
    editor.on_pointer_up();
    let snapshot = editor.drawables().to_vec();

    editor.on_pointer_move(pos2(50.0, 50.0));
    assert_eq!(editor.drawables(), snapshot.as_slice());
    assert_eq!(editor.pointer().position, pos2(50.0, 50.0));
}

#[test]
fn test_state_machine_transitions() {
    let mut editor = EditorContext::default();
    assert_eq!(editor.state(), EditorState::Idle);

    editor.on_pointer_down(pos2(1.0, 1.0));
    let id = editor.drawables()[0].id();
    assert_eq!(editor.state(), EditorState::Drawing { active: id });
    assert!(editor.pointer().active);

    editor.on_pointer_up();
    assert_eq!(editor.state(), EditorState::Idle);
    assert!(!editor.pointer().active);

    // A stray pointer-up is ignored
    editor.on_pointer_up();
    assert_eq!(editor.state(), EditorState::Idle);
}

#[test]
fn test_idle_move_before_any_drawing_creates_preview() {
    let mut editor = EditorContext::default();
    let events = record_events(&editor);
    editor.select_pen(4.0, 240.0);
    editor.on_pointer_move(pos2(12.0, 13.0));

    assert!(editor.drawables().is_empty());
    assert_eq!(
        editor.preview(),
        Some(&ToolPreview::Thickness { position: pos2(12.0, 13.0), thickness: 4.0, hue: 240.0 })
    );
    assert!(editor.preview_visible());
    assert_eq!(events.lock().last(), Some(&EditorEvent::ToolMoved));
}

#[test]
fn test_preview_hidden_while_drawing() {
    let mut editor = EditorContext::default();
    editor.on_pointer_move(pos2(1.0, 1.0));
    assert!(editor.preview_visible());

    editor.on_pointer_down(pos2(1.0, 1.0));
    assert!(!editor.preview_visible());
    editor.on_pointer_move(pos2(5.0, 5.0));
    assert!(!editor.preview_visible());

    editor.on_pointer_up();
    assert!(editor.preview_visible());
    assert_eq!(editor.preview().unwrap().position(), pos2(5.0, 5.0));
}

#[test]
fn test_parameter_change_updates_preview() {
    let mut editor = EditorContext::default();
    editor.on_pointer_move(pos2(3.0, 3.0));
    let events = record_events(&editor);

    editor.set_thickness(10.0);
    assert_eq!(
        editor.preview(),
        Some(&ToolPreview::Thickness { position: pos2(3.0, 3.0), thickness: 10.0, hue: 0.0 })
    );

    editor.select_sticker("🌈", 2.0, 90.0);
    let expected_size = 2.0 * editor.sticker_size_multiplier();
    assert_eq!(
        editor.preview(),
        Some(&ToolPreview::Glyph {
            position: pos2(3.0, 3.0),
            glyph: "🌈".to_owned(),
            size: expected_size,
            rotation: 90.0,
        })
    );

    assert_eq!(*events.lock(), vec![EditorEvent::ToolMoved, EditorEvent::ToolMoved]);
}

#[test]
fn test_declined_sticker_keeps_tool_and_stays_silent() {
    let mut editor = EditorContext::default();
    editor.select_pen(5.0, 200.0);
    let events = record_events(&editor);

    editor.select_sticker("", 3.0, 45.0);

    assert_eq!(editor.tool().active(), ActiveTool::Pen { thickness: 5.0, hue: 200.0 });
    assert!(events.lock().is_empty());
}

#[test]
fn test_hue_survives_sticker_mode() {
    let mut editor = EditorContext::default();
    editor.select_pen(3.0, 300.0);
    editor.select_sticker("⭐", 2.0, 15.0);
    editor.set_thickness(8.0);
    let (thickness, hue) = (editor.tool().thickness(), editor.tool().hue());
    editor.select_pen(thickness, hue);

    editor.on_pointer_down(pos2(0.0, 0.0));
    editor.on_pointer_up();
    let stroke = editor.drawables()[0].as_stroke().unwrap();
    assert_eq!(stroke.thickness(), 8.0);
    assert_eq!(stroke.hue(), 300.0);
}

#[test]
fn test_tool_change_mid_drag_applies_to_next_drawable() {
    let mut editor = EditorContext::default();
    editor.select_pen(2.0, 0.0);
    editor.on_pointer_down(pos2(0.0, 0.0));
    editor.set_thickness(9.0);
    editor.on_pointer_move(pos2(1.0, 1.0));
    editor.on_pointer_up();

    editor.on_pointer_down(pos2(5.0, 5.0));
    editor.on_pointer_up();

    let first = editor.drawables()[0].as_stroke().unwrap();
    let second = editor.drawables()[1].as_stroke().unwrap();
    assert_eq!(first.thickness(), 2.0);
    assert_eq!(second.thickness(), 9.0);
}

#[test]
fn test_leave_hides_preview() {
    let mut editor = EditorContext::default();
    editor.on_pointer_move(pos2(3.0, 3.0));
    let events = record_events(&editor);

    editor.on_pointer_leave();
    assert!(editor.preview().is_none());
    assert!(!editor.preview_visible());

    // Parameter changes while away do not bring it back
    editor.set_hue(60.0);
    assert!(editor.preview().is_none());

    assert_eq!(*events.lock(), vec![EditorEvent::ToolMoved, EditorEvent::ToolMoved]);
}

#[test]
fn test_drag_notifies_drawing_changed() {
    let mut editor = EditorContext::default();
    let events = record_events(&editor);

    editor.on_pointer_down(pos2(0.0, 0.0));
    editor.on_pointer_move(pos2(1.0, 0.0));
    editor.on_pointer_up();

    assert_eq!(
        *events.lock(),
        vec![
            EditorEvent::DrawingChanged,
            EditorEvent::DrawingChanged,
            EditorEvent::ToolMoved,
        ]
    );
}

#[test]
fn test_invalid_sticker_multiplier_falls_back_to_default() {
    for json in [
        r#"{ "sticker_size_multiplier": 0 }"#,
        r#"{ "sticker_size_multiplier": -2.5 }"#,
    ] {
        let config: PaintConfig = serde_json::from_str(json).unwrap();
        let mut editor = EditorContext::new(&config);
        assert_eq!(
            editor.sticker_size_multiplier(),
            PaintConfig::default().sticker_size_multiplier
        );

        editor.select_sticker("🔥", 3.0, 45.0);
        editor.on_pointer_move(pos2(5.0, 5.0));
        assert!(matches!(editor.preview(), Some(ToolPreview::Glyph { size, .. }) if *size > 0.0));

        editor.on_pointer_down(pos2(5.0, 5.0));
        editor.on_pointer_up();
        let sticker = editor.drawables()[0].as_sticker().unwrap();
        assert_relative_eq!(sticker.size(), 30.0);
    }
}

#[test]
fn test_second_down_ends_previous_drag() {
    let mut editor = EditorContext::default();
    editor.on_pointer_down(pos2(1.0, 1.0));
    editor.on_pointer_down(pos2(10.0, 10.0));
    editor.on_pointer_move(pos2(20.0, 20.0));
    editor.on_pointer_up();

    assert_eq!(editor.drawables().len(), 2);
    let first = editor.drawables()[0].as_stroke().unwrap();
    let second = editor.drawables()[1].as_stroke().unwrap();
    assert_eq!(first.points(), &[pos2(1.0, 1.0)]);
    assert_eq!(second.points(), &[pos2(10.0, 10.0), pos2(20.0, 20.0)]);
}

#[test]
fn test_redo_during_drag_resumes_dragging() {
    let mut editor = EditorContext::default();
    editor.on_pointer_down(pos2(1.0, 1.0));
    editor.undo();

    // Nothing to drag while the stroke sits on the redo stack
    editor.on_pointer_move(pos2(2.0, 2.0));
    assert!(editor.drawables().is_empty());

    editor.redo();
    editor.on_pointer_move(pos2(3.0, 3.0));
    editor.on_pointer_up();

    let stroke = editor.drawables()[0].as_stroke().unwrap();
    assert_eq!(stroke.points(), &[pos2(1.0, 1.0), pos2(3.0, 3.0)]);
    assert!(!editor.can_redo());
}

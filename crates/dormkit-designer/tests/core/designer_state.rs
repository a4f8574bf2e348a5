use dormkit_core::RealDimensions;
use dormkit_designer::{
    DesignerCommand, DesignerState, FurnitureItem, FurnitureKind, InteractionState, LayoutPreset,
    MeasureState, Mode, Outcome, Point, PresetId, Rect, Room, RoomFeature, Rotation,
    ShellHitTest,
};

fn small_room_state() -> DesignerState {
    let preset = LayoutPreset::custom(
        "test room",
        Room::new(
            Rect::new(0.0, 0.0, 400.0, 300.0),
            Rect::new(330.0, 298.0, 70.0, 2.0),
            vec![Rect::new(20.0, 0.0, 80.0, 2.0)],
        ),
        vec![
            FurnitureItem::with_default_size(FurnitureKind::Bed, 0.0, 80.0, Rotation::Deg0),
            FurnitureItem::with_default_size(FurnitureKind::Desk, 200.0, 100.0, Rotation::Deg0),
        ],
        RealDimensions::new(40.0, 30.0),
    )
    .unwrap();

    let mut state = DesignerState::new();
    state.load_layout(preset);
    state
}

#[test]
fn test_new_state_is_empty() {
    let state = DesignerState::new();
    assert!(state.furniture().is_empty());
    assert!(!state.can_undo());
    assert!(!state.can_redo());
    assert_eq!(state.mode(), Mode::Layout);
    assert!(state.current_preset().is_none());
    assert!(state.scale().is_none());
}

#[test]
fn test_load_preset_resets_history() {
    let mut state = DesignerState::new();
    let _ = state.on_load_preset(PresetId::Double);
    assert_eq!(state.furniture().len(), 6);

    let _ = state.on_press(Point::new(520.0, 110.0));
    let _ = state.on_drag(Point::new(520.0, 200.0));
    assert!(state.on_release(Point::new(520.0, 200.0)).is_commit());
    assert!(state.can_undo());

    let _ = state.on_load_preset(PresetId::Triple);
    assert!(!state.can_undo());
    assert!(!state.can_redo());
    assert_eq!(state.furniture().len(), 8);
    assert_eq!(state.current_preset().map(LayoutPreset::name), Some("triple"));
    assert_eq!(
        state.dimension_labels(),
        Some(("24' 10\"".to_string(), "12' 9\"".to_string()))
    );
}

#[test]
fn test_measure_mode_routes_presses_to_ruler() {
    let mut state = small_room_state();
    let _ = state.on_toggle_measurement();
    assert_eq!(state.mode(), Mode::Measure);

    // a press on the desk measures instead of grabbing it
    let _ = state.on_press(Point::new(210.0, 110.0));
    assert_eq!(state.measure_state(), MeasureState::AwaitingSecondPoint);
    assert_eq!(state.interaction_state(), InteractionState::Idle);

    let _ = state.on_drag(Point::new(250.0, 110.0));
    assert_eq!(state.preview_label().as_deref(), Some("0' 4\""));

    assert!(state.on_press(Point::new(330.0, 110.0)).is_commit());
    assert_eq!(state.segment_label(0).as_deref(), Some("1' 0\""));
    assert_eq!(state.hint_segment(), Some(0));
}

#[test]
fn test_rotate_ignored_in_measure_mode() {
    let mut state = small_room_state();
    let _ = state.on_press(Point::new(210.0, 110.0));
    let _ = state.on_release(Point::new(210.0, 110.0));
    let _ = state.on_toggle_measurement();

    assert_eq!(state.on_rotate_command(), Outcome::Unchanged);
    assert_eq!(state.furniture()[1].rotation, Rotation::Deg0);
}

#[test]
fn test_toggle_off_commits_only_with_segments() {
    let mut state = small_room_state();
    let _ = state.on_toggle_measurement();
    assert_eq!(state.on_toggle_measurement(), Outcome::Unchanged);
    assert!(!state.can_undo());

    let _ = state.on_toggle_measurement();
    let _ = state.on_press(Point::new(10.0, 10.0));
    let _ = state.on_press(Point::new(10.0, 130.0));
    assert_eq!(state.history_depth(), 2);

    assert!(state.on_key("escape").is_commit());
    assert_eq!(state.mode(), Mode::Layout);
    assert!(state.segments().is_empty());
    assert_eq!(state.history_depth(), 3);

    // undo brings the segment and measure mode back
    let _ = state.on_undo_command();
    assert_eq!(state.mode(), Mode::Measure);
    assert_eq!(state.segments().len(), 1);
    assert_eq!(state.measure_state(), MeasureState::AwaitingFirstPoint);
}

#[test]
fn test_cancel_when_off_is_noop() {
    let mut state = small_room_state();
    assert_eq!(state.on_cancel_measurement(), Outcome::Unchanged);
    assert_eq!(state.history_depth(), 1);
}

#[test]
fn test_undo_clears_transient_state() {
    let mut state = small_room_state();
    let _ = state.on_press(Point::new(210.0, 110.0));
    let _ = state.on_drag(Point::new(260.0, 110.0));
    let _ = state.on_release(Point::new(260.0, 110.0));

    let _ = state.on_press(Point::new(260.0, 110.0));
    assert!(state.selected_slot().is_some());

    let _ = state.on_key("z");
    assert_eq!(state.selected_slot(), None);
    assert_eq!(state.interaction_state(), InteractionState::Idle);
    assert!(state.placement_valid());
    assert_eq!(state.furniture()[1].rect.left, 200.0);
}

#[test]
fn test_keys_dispatch() {
    let mut state = small_room_state();
    let _ = state.on_press(Point::new(210.0, 110.0));
    let _ = state.on_release(Point::new(210.0, 110.0));

    assert!(state.on_key("r").is_commit());
    assert_eq!(state.furniture()[1].rotation, Rotation::Deg90);
    let _ = state.on_key("z");
    assert_eq!(state.furniture()[1].rotation, Rotation::Deg0);
    let _ = state.on_key("y");
    assert_eq!(state.furniture()[1].rotation, Rotation::Deg90);

    assert_eq!(state.on_key("q"), Outcome::Unchanged);
}

#[test]
fn test_apply_parsed_commands() {
    let mut state = DesignerState::new();
    for line in ["load single", "press 640 150", "drag 600 150", "release 600 150"] {
        let command: DesignerCommand = line.parse().unwrap();
        let _ = state.apply(command);
    }
    assert!(state.can_undo());
    assert_eq!(state.furniture()[2].rect.left, 585.0);
}

#[test]
fn test_hover_tracks_room_features() {
    let mut state = small_room_state();
    let _ = state.on_pointer_move(Point::new(350.0, 299.0));
    assert_eq!(state.hovered_feature(), Some(RoomFeature::Door));
    let _ = state.on_pointer_move(Point::new(30.0, 1.0));
    assert_eq!(state.hovered_feature(), Some(RoomFeature::Window(0)));
    let _ = state.on_pointer_move(Point::new(300.0, 200.0));
    assert_eq!(state.hovered_feature(), None);
    assert_eq!(state.feature_at(Point::new(350.0, 299.0)), Some(RoomFeature::Door));
}

#[test]
fn test_view_reflects_state() {
    let mut state = small_room_state();
    let _ = state.on_toggle_measurement();
    let _ = state.on_press(Point::new(10.0, 10.0));
    let _ = state.on_press(Point::new(10.0, 130.0));

    let view = state.view();
    assert_eq!(view.preset, Some("test room"));
    assert_eq!(view.furniture.len(), 2);
    assert_eq!(view.mode, Mode::Measure);
    assert_eq!(view.segments.len(), 1);
    assert_eq!(view.segments[0].label.as_deref(), Some("1' 0\""));
    assert_eq!(view.room_width.as_deref(), Some("3' 4\""));
    assert!(view.can_undo);
}

/// Closet palette entry over empty floor in the small room.
struct FloorPaletteShell;

impl ShellHitTest for FloorPaletteShell {
    fn palette_hit(&self, point: Point) -> Option<FurnitureKind> {
        Rect::new(280.0, 200.0, 60.0, 60.0)
            .contains(point)
            .then_some(FurnitureKind::Closet)
    }

    fn over_trash(&self, _rect: &Rect) -> bool {
        false
    }
}

#[test]
fn test_toggle_mid_drag_restores_grabbed_piece() {
    let mut state = small_room_state();
    let before = state.furniture()[1].clone();
    let depth = state.history_depth();

    let _ = state.on_press(Point::new(210.0, 110.0));
    let _ = state.on_drag(Point::new(60.0, 110.0));
    assert!(!state.placement_valid());

    assert_eq!(state.on_toggle_measurement(), Outcome::Unchanged);
    assert_eq!(state.furniture()[1], before);
    assert_eq!(state.history_depth(), depth);
    assert_eq!(state.interaction_state(), InteractionState::Idle);

    // the next commit snapshots the restored layout
    let _ = state.on_press(Point::new(10.0, 10.0));
    assert!(state.on_press(Point::new(10.0, 50.0)).is_commit());
    assert!(state.on_toggle_measurement().is_commit());
    assert_eq!(state.furniture()[1], before);
    assert!(state.placement_valid());

    let _ = state.on_undo_command();
    assert_eq!(state.furniture()[1], before);
}

#[test]
fn test_toggle_mid_spawn_discards_piece() {
    let mut state = small_room_state();
    state.set_shell(Box::new(FloorPaletteShell));
    let depth = state.history_depth();

    let _ = state.on_press(Point::new(320.0, 240.0));
    let _ = state.on_drag(Point::new(320.0, 250.0));
    assert_eq!(state.furniture().len(), 3);

    assert_eq!(state.on_toggle_measurement(), Outcome::Unchanged);
    assert_eq!(state.furniture().len(), 2);
    assert_eq!(state.selected_slot(), None);
    assert_eq!(state.history_depth(), depth);

    assert_eq!(state.on_toggle_measurement(), Outcome::Unchanged);
    assert_eq!(state.furniture().len(), 2);
    assert!(!state.can_undo());
}

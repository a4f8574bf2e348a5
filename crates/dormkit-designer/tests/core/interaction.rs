use dormkit_designer::{
    Action, DragOrigin, FurnitureItem, FurnitureKind, InteractionController, InteractionState,
    Outcome, Point, Rect, Room, Rotation, Scene, ShellHitTest,
};

/// Palette entry for closets at the top-right, trash at the bottom-right.
struct TestShell;

impl ShellHitTest for TestShell {
    fn palette_hit(&self, point: Point) -> Option<FurnitureKind> {
        Rect::new(500.0, 0.0, 50.0, 50.0)
            .contains(point)
            .then_some(FurnitureKind::Closet)
    }

    fn over_trash(&self, rect: &Rect) -> bool {
        rect.overlaps(&Rect::new(500.0, 400.0, 50.0, 50.0))
    }
}

fn scene() -> Scene {
    Scene::with_items(
        Room::plain(Rect::new(0.0, 0.0, 400.0, 300.0)),
        vec![
            FurnitureItem::with_default_size(FurnitureKind::Bed, 0.0, 0.0, Rotation::Deg0),
            FurnitureItem::with_default_size(FurnitureKind::Desk, 200.0, 100.0, Rotation::Deg0),
        ],
    )
}

#[test]
fn test_press_on_item_starts_drag() {
    let mut scene = scene();
    let mut ctl = InteractionController::new();

    ctl.press(&mut scene, &TestShell, Point::new(210.0, 110.0));
    assert_eq!(ctl.state(&scene), InteractionState::Dragging(DragOrigin::Existing));
    assert_eq!(scene.selected_slot(), Some(1));
    assert!(ctl.is_placement_valid());

    let gesture = ctl.gesture().cloned();
    assert_eq!(gesture.map(|g| (g.offset_x, g.offset_y)), Some((10.0, 10.0)));
}

#[test]
fn test_press_on_nothing_clears_selection() {
    let mut scene = scene();
    let mut ctl = InteractionController::new();
    scene.select(0);

    ctl.press(&mut scene, &TestShell, Point::new(350.0, 250.0));
    assert_eq!(ctl.state(&scene), InteractionState::Idle);
    assert_eq!(scene.selected_slot(), None);
}

#[test]
fn test_drag_tracks_grab_offset() {
    let mut scene = scene();
    let mut ctl = InteractionController::new();

    ctl.press(&mut scene, &TestShell, Point::new(210.0, 110.0));
    ctl.drag(&mut scene, Point::new(260.0, 160.0));
    assert_eq!(scene.items()[1].rect, Rect::new(250.0, 150.0, 70.0, 40.0));

    assert_eq!(ctl.release(&mut scene, &TestShell), Outcome::Commit(Action::Move));
    assert_eq!(ctl.state(&scene), InteractionState::Selected);
}

#[test]
fn test_invalid_move_reverts_exactly() {
    let mut scene = scene();
    let mut ctl = InteractionController::new();
    let before = scene.items()[1].clone();

    ctl.press(&mut scene, &TestShell, Point::new(210.0, 110.0));
    // onto the bed
    ctl.drag(&mut scene, Point::new(60.0, 60.0));
    assert!(!ctl.is_placement_valid());

    assert_eq!(ctl.release(&mut scene, &TestShell), Outcome::Unchanged);
    assert_eq!(scene.items()[1], before);
    assert!(ctl.is_placement_valid());
}

#[test]
fn test_revert_restores_rotation_too() {
    let mut scene = scene();
    let mut ctl = InteractionController::new();
    let before = scene.items()[1].placement();

    ctl.press(&mut scene, &TestShell, Point::new(210.0, 110.0));
    assert!(ctl.rotate(&mut scene).is_commit());
    ctl.drag(&mut scene, Point::new(395.0, 110.0));
    assert_eq!(ctl.release(&mut scene, &TestShell), Outcome::Unchanged);

    assert_eq!(scene.items()[1].placement(), before);
}

#[test]
fn test_release_without_move_does_not_commit() {
    let mut scene = scene();
    let mut ctl = InteractionController::new();

    ctl.press(&mut scene, &TestShell, Point::new(210.0, 110.0));
    ctl.drag(&mut scene, Point::new(210.0, 110.0));
    assert_eq!(ctl.release(&mut scene, &TestShell), Outcome::Unchanged);
}

#[test]
fn test_spawn_and_place() {
    let mut scene = scene();
    let mut ctl = InteractionController::new();

    ctl.press(&mut scene, &TestShell, Point::new(525.0, 25.0));
    assert_eq!(ctl.state(&scene), InteractionState::Dragging(DragOrigin::Spawned));
    assert_eq!(scene.len(), 3);
    assert!(!ctl.is_placement_valid());

    ctl.drag(&mut scene, Point::new(300.0, 250.0));
    assert!(ctl.is_placement_valid());
    assert_eq!(ctl.release(&mut scene, &TestShell), Outcome::Commit(Action::Spawn));
    assert_eq!(scene.len(), 3);
    assert_eq!(scene.items()[2].rect, Rect::new(250.0, 225.0, 100.0, 50.0));
}

#[test]
fn test_spawn_dropped_outside_room_is_deleted() {
    let mut scene = scene();
    let mut ctl = InteractionController::new();

    ctl.press(&mut scene, &TestShell, Point::new(525.0, 25.0));
    ctl.drag(&mut scene, Point::new(530.0, 200.0));
    assert_eq!(ctl.release(&mut scene, &TestShell), Outcome::Unchanged);
    assert_eq!(scene.len(), 2);
    assert_eq!(scene.selected_slot(), None);
}

#[test]
fn test_trash_drop_wins_over_validity() {
    let mut scene = scene();
    let mut ctl = InteractionController::new();

    ctl.press(&mut scene, &TestShell, Point::new(10.0, 10.0));
    ctl.drag(&mut scene, Point::new(510.0, 410.0));
    assert_eq!(ctl.release(&mut scene, &TestShell), Outcome::Commit(Action::Trash));
    assert_eq!(scene.len(), 1);
    assert_eq!(scene.items()[0].kind, FurnitureKind::Desk);
    assert_eq!(ctl.state(&scene), InteractionState::Idle);
}

#[test]
fn test_rotate_four_times_restores_item() {
    let mut scene = scene();
    let mut ctl = InteractionController::new();
    scene.select(1);
    let before = scene.items()[1].clone();

    for expected in [90, 180, 270, 0] {
        assert_eq!(ctl.rotate(&mut scene), Outcome::Commit(Action::Rotate));
        assert_eq!(scene.items()[1].rotation.degrees(), expected);
    }
    assert_eq!(scene.items()[1], before);
}

#[test]
fn test_blocked_rotation_leaves_item_untouched() {
    let mut scene = Scene::with_items(
        Room::plain(Rect::new(0.0, 0.0, 400.0, 300.0)),
        vec![FurnitureItem::with_default_size(
            FurnitureKind::Bed,
            0.0,
            0.0,
            Rotation::Deg0,
        )],
    );
    let mut ctl = InteractionController::new();
    scene.select(0);
    let before = scene.items()[0].clone();

    // turning would push the bed past the left wall
    assert_eq!(ctl.rotate(&mut scene), Outcome::Unchanged);
    assert_eq!(scene.items()[0], before);
    assert!(!ctl.is_placement_valid());
}

#[test]
fn test_rotate_mid_drag_keeps_pointer_offset() {
    let mut scene = scene();
    let mut ctl = InteractionController::new();

    ctl.press(&mut scene, &TestShell, Point::new(210.0, 110.0));
    ctl.drag(&mut scene, Point::new(220.0, 120.0));
    assert!(ctl.rotate(&mut scene).is_commit());

    let rect = scene.items()[1].rect;
    let gesture = ctl.gesture().cloned();
    assert_eq!(
        gesture.map(|g| (g.offset_x, g.offset_y)),
        Some((220.0 - rect.left, 120.0 - rect.top))
    );

    ctl.drag(&mut scene, Point::new(230.0, 120.0));
    assert_eq!(scene.items()[1].rect.left, rect.left + 10.0);
}

#[test]
fn test_rotate_without_selection_is_noop() {
    let mut scene = scene();
    let mut ctl = InteractionController::new();
    assert_eq!(ctl.rotate(&mut scene), Outcome::Unchanged);
    assert!(ctl.is_placement_valid());
}

/// Closet palette entry sitting over empty floor inside the room.
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
fn test_palette_click_without_drag_leaves_no_piece() {
    let mut scene = scene();
    let mut ctl = InteractionController::new();

    ctl.press(&mut scene, &FloorPaletteShell, Point::new(320.0, 240.0));
    assert_eq!(scene.len(), 3);
    // the new closet already sits in a valid spot
    assert!(ctl.is_placement_valid());
    assert_eq!(scene.items()[2].rect, Rect::new(270.0, 215.0, 100.0, 50.0));

    assert_eq!(
        ctl.release(&mut scene, &FloorPaletteShell),
        Outcome::Unchanged
    );
    assert_eq!(scene.len(), 2);
    assert_eq!(scene.selected_slot(), None);
    assert_eq!(ctl.state(&scene), InteractionState::Idle);
}

#[test]
fn test_abort_restores_grabbed_piece() {
    let mut scene = scene();
    let mut ctl = InteractionController::new();
    let before = scene.items()[1].clone();

    ctl.press(&mut scene, &TestShell, Point::new(210.0, 110.0));
    ctl.drag(&mut scene, Point::new(60.0, 110.0));
    assert!(!ctl.is_placement_valid());

    ctl.abort(&mut scene);
    assert_eq!(scene.items()[1], before);
    assert!(ctl.gesture().is_none());
    assert!(ctl.is_placement_valid());
}

#[test]
fn test_abort_discards_spawned_piece() {
    let mut scene = scene();
    let mut ctl = InteractionController::new();

    ctl.press(&mut scene, &TestShell, Point::new(525.0, 25.0));
    ctl.drag(&mut scene, Point::new(300.0, 250.0));
    assert_eq!(scene.len(), 3);

    ctl.abort(&mut scene);
    assert_eq!(scene.len(), 2);
    assert_eq!(scene.selected_slot(), None);
    assert_eq!(ctl.state(&scene), InteractionState::Idle);
}

#[test]
fn test_abort_without_gesture_is_noop() {
    let mut scene = scene();
    let mut ctl = InteractionController::new();
    let before = scene.clone();

    ctl.abort(&mut scene);
    assert_eq!(scene, before);
}

use dormkit_designer::{
    FurnitureItem, FurnitureKind, History, HistorySnapshot, Measurement, Point, Rect, Room,
    Rotation, Scene,
};

fn scene_with(count: usize) -> Scene {
    let items = (0..count)
        .map(|i| {
            FurnitureItem::with_default_size(
                FurnitureKind::Desk,
                i as f64 * 80.0,
                0.0,
                Rotation::Deg0,
            )
        })
        .collect();
    Scene::with_items(Room::plain(Rect::new(0.0, 0.0, 800.0, 600.0)), items)
}

fn snapshot(count: usize) -> HistorySnapshot {
    HistorySnapshot::capture(&scene_with(count), &Measurement::new())
}

#[test]
fn test_new_history_cannot_undo() {
    let mut history = History::new(snapshot(0));
    assert!(!history.can_undo());
    assert!(!history.can_redo());
    assert!(history.undo().is_none());
    assert_eq!(history.done_depth(), 1);
}

#[test]
fn test_commit_then_undo_returns_previous() {
    let mut history = History::new(snapshot(0));
    history.commit(snapshot(1));
    history.commit(snapshot(2));

    let restored = history.undo().cloned();
    assert_eq!(restored.map(|s| s.furniture.len()), Some(1));
    assert!(history.can_redo());
    assert_eq!(history.redo_depth(), 1);
}

#[test]
fn test_undo_stops_at_floor() {
    let mut history = History::new(snapshot(0));
    history.commit(snapshot(1));

    assert!(history.undo().is_some());
    assert!(history.undo().is_none());
    assert_eq!(history.done_depth(), 1);
    assert_eq!(history.current().map(|s| s.furniture.len()), Some(0));
}

#[test]
fn test_redo_reapplies_and_commit_clears_redo() {
    let mut history = History::new(snapshot(0));
    history.commit(snapshot(1));
    history.commit(snapshot(2));
    let _ = history.undo();
    let _ = history.undo();

    let redone = history.redo().cloned();
    assert_eq!(redone.map(|s| s.furniture.len()), Some(1));
    assert!(history.can_redo());

    history.commit(snapshot(3));
    assert!(!history.can_redo());
    assert!(history.redo().is_none());
}

#[test]
fn test_reset_drops_both_stacks() {
    let mut history = History::new(snapshot(0));
    history.commit(snapshot(1));
    history.commit(snapshot(2));
    let _ = history.undo();

    history.reset(snapshot(3));
    assert!(!history.can_undo());
    assert!(!history.can_redo());
    assert_eq!(history.current().map(|s| s.furniture.len()), Some(3));
}

#[test]
fn test_snapshot_is_independent_of_live_scene() {
    let mut scene = scene_with(1);
    let measurement = Measurement::new();
    let snap = HistorySnapshot::capture(&scene, &measurement);

    if let Some(item) = scene.get_mut(0) {
        item.rect = item.rect.moved_to(300.0, 300.0);
    }
    assert_eq!(snap.furniture[0].rect.top_left(), Point::new(0.0, 0.0));
}

#[test]
fn test_restore_replaces_items_and_clears_selection() {
    let snap = snapshot(2);
    let mut scene = scene_with(4);
    scene.select(3);
    let mut measurement = Measurement::new();
    measurement.enter();

    snap.restore_into(&mut scene, &mut measurement);
    assert_eq!(scene.len(), 2);
    assert_eq!(scene.selected_slot(), None);
    assert!(!measurement.is_active());
}

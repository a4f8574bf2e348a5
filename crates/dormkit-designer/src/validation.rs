//! Placement validation: containment in the room plus overlap with other items.

use crate::geometry::{overlaps, Rect};
use crate::scene::Scene;

/// True if the item in `slot` is fully inside the room and touches no other item.
///
/// A slot that does not exist is never valid.
pub fn is_valid_placement(scene: &Scene, slot: usize) -> bool {
    match scene.get(slot) {
        Some(item) => is_valid_candidate(scene, slot, &item.rect),
        None => false,
    }
}

/// Evaluates `rect` as if it were the footprint of the item in `slot`.
///
/// The scene is not modified; the item currently in `slot` is ignored for the
/// overlap test.
pub fn is_valid_candidate(scene: &Scene, slot: usize, rect: &Rect) -> bool {
    if !scene.room().bounds.encloses(rect) {
        return false;
    }
    !scene
        .items()
        .iter()
        .enumerate()
        .any(|(other, item)| other != slot && overlaps(rect, &item.rect))
}

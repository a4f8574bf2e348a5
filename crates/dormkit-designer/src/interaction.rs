//! Select / drag / rotate / spawn / delete state machine.
//!
//! The controller owns only transient gesture state. The scene it edits is
//! passed in on every call, and every call that may change durable state
//! returns an [`Outcome`] telling the caller whether to commit.
//!
//! # Gesture lifecycle
//!
//! ```text
//! press on palette ──► Dragging(Spawned) ──┐
//! press on item ─────► Dragging(Existing) ─┼─ drag* ─► release ─► Selected | Idle
//! press on nothing ──► Idle                │
//!                                          └─ rotate (commits when valid)
//! ```
//!
//! Release resolves the gesture in this order: trash drop, invalid placement
//! (spawned pieces are deleted, existing ones snap back), spawned piece that
//! never moved (deleted), otherwise commit if anything moved.

use serde::Serialize;

use crate::geometry::Point;
use crate::model::{FurnitureItem, Placement};
use crate::outcome::{Action, Outcome};
use crate::scene::Scene;
use crate::shell::ShellHitTest;
use crate::validation::{is_valid_candidate, is_valid_placement};

/// Where the dragged item came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DragOrigin {
    Existing,
    Spawned,
}

/// Externally visible interaction state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum InteractionState {
    Idle,
    Selected,
    Dragging(DragOrigin),
}

/// An in-progress drag.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingGesture {
    pub slot: usize,
    pub origin: DragOrigin,
    /// Pointer position minus the item's top-left corner.
    pub offset_x: f64,
    pub offset_y: f64,
    /// Rect and rotation before the press, restored wholesale on revert.
    pub saved: Placement,
    pub moved: bool,
}

impl PendingGesture {
    fn grab(slot: usize, origin: DragOrigin, item: &FurnitureItem, pointer: Point) -> Self {
        Self {
            slot,
            origin,
            offset_x: pointer.x - item.rect.left,
            offset_y: pointer.y - item.rect.top,
            saved: item.placement(),
            moved: false,
        }
    }
}

/// Drives furniture gestures against a [`Scene`].
#[derive(Debug, Clone)]
pub struct InteractionController {
    gesture: Option<PendingGesture>,
    last_pointer: Option<Point>,
    placement_valid: bool,
}

impl InteractionController {
    pub fn new() -> Self {
        Self {
            gesture: None,
            last_pointer: None,
            placement_valid: true,
        }
    }

    /// Current state, derived from the gesture and the scene's selection.
    pub fn state(&self, scene: &Scene) -> InteractionState {
        match &self.gesture {
            Some(gesture) => InteractionState::Dragging(gesture.origin),
            None if scene.selected_slot().is_some() => InteractionState::Selected,
            None => InteractionState::Idle,
        }
    }

    pub fn gesture(&self) -> Option<&PendingGesture> {
        self.gesture.as_ref()
    }

    /// Live validity of the selected item for feedback rendering.
    pub fn is_placement_valid(&self) -> bool {
        self.placement_valid
    }

    /// Drops any gesture without touching the scene.
    pub fn reset(&mut self) {
        self.gesture = None;
        self.last_pointer = None;
        self.placement_valid = true;
    }

    /// Abandons an unfinished gesture without committing.
    ///
    /// A spawned piece is removed and a grabbed piece goes back to the rect
    /// and rotation it had at press time.
    pub fn abort(&mut self, scene: &mut Scene) {
        if let Some(gesture) = self.gesture.take() {
            match gesture.origin {
                DragOrigin::Spawned => {
                    scene.remove(gesture.slot);
                    tracing::debug!(slot = gesture.slot, "aborted spawn; piece discarded");
                }
                DragOrigin::Existing => {
                    if let Some(item) = scene.get_mut(gesture.slot) {
                        item.set_placement(gesture.saved);
                    }
                    tracing::debug!(slot = gesture.slot, "aborted drag; piece restored");
                }
            }
        }
        self.reset();
    }

    /// Starts a gesture: spawn from the palette, grab an item, or deselect.
    pub fn press(&mut self, scene: &mut Scene, shell: &dyn ShellHitTest, at: Point) {
        self.last_pointer = Some(at);

        if let Some(kind) = shell.palette_hit(at) {
            let item = FurnitureItem::spawn_centered(kind, at);
            let gesture = PendingGesture::grab(scene.len(), DragOrigin::Spawned, &item, at);
            let slot = scene.push(item);
            scene.select(slot);
            self.placement_valid = is_valid_placement(scene, slot);
            self.gesture = Some(gesture);
            tracing::debug!(%kind, slot, valid = self.placement_valid, "spawned furniture from palette");
            return;
        }

        match scene.item_at(at) {
            Some(slot) => {
                if let Some(item) = scene.get(slot) {
                    self.gesture = Some(PendingGesture::grab(slot, DragOrigin::Existing, item, at));
                }
                scene.select(slot);
                self.placement_valid = is_valid_placement(scene, slot);
                tracing::debug!(slot, "grabbed furniture");
            }
            None => {
                scene.clear_selection();
                self.gesture = None;
                self.placement_valid = true;
            }
        }
    }

    /// Moves the dragged item to follow the pointer and refreshes live validity.
    pub fn drag(&mut self, scene: &mut Scene, at: Point) {
        self.last_pointer = Some(at);

        let Some(gesture) = self.gesture.as_mut() else {
            return;
        };
        let Some(item) = scene.get_mut(gesture.slot) else {
            tracing::warn!(slot = gesture.slot, "dragged slot vanished; dropping gesture");
            self.gesture = None;
            return;
        };

        let target = item
            .rect
            .moved_to(at.x - gesture.offset_x, at.y - gesture.offset_y);
        if target != item.rect {
            item.rect = target;
            gesture.moved = true;
        }

        let slot = gesture.slot;
        self.placement_valid = is_valid_placement(scene, slot);
        tracing::trace!(slot, x = at.x, y = at.y, valid = self.placement_valid, "drag");
    }

    /// Ends the gesture, resolving it to a commit, a deletion or a revert.
    pub fn release(&mut self, scene: &mut Scene, shell: &dyn ShellHitTest) -> Outcome {
        self.last_pointer = None;
        self.placement_valid = true;

        let Some(gesture) = self.gesture.take() else {
            return Outcome::Unchanged;
        };
        let Some(item) = scene.get(gesture.slot) else {
            return Outcome::Unchanged;
        };

        if shell.over_trash(&item.rect) {
            scene.remove(gesture.slot);
            scene.clear_selection();
            tracing::debug!(slot = gesture.slot, "dropped furniture on trash");
            return Outcome::Commit(Action::Trash);
        }

        if !is_valid_placement(scene, gesture.slot) {
            match gesture.origin {
                DragOrigin::Spawned => {
                    scene.remove(gesture.slot);
                    tracing::debug!(slot = gesture.slot, "discarded invalid new piece");
                }
                DragOrigin::Existing => {
                    if let Some(item) = scene.get_mut(gesture.slot) {
                        item.set_placement(gesture.saved);
                    }
                    tracing::debug!(slot = gesture.slot, "reverted invalid move");
                }
            }
            return Outcome::Unchanged;
        }

        match (gesture.origin, gesture.moved) {
            (DragOrigin::Spawned, false) => {
                scene.remove(gesture.slot);
                tracing::debug!(slot = gesture.slot, "palette click without drag; piece discarded");
                Outcome::Unchanged
            }
            (DragOrigin::Spawned, true) => Outcome::Commit(Action::Spawn),
            (DragOrigin::Existing, true) => Outcome::Commit(Action::Move),
            (DragOrigin::Existing, false) => Outcome::Unchanged,
        }
    }

    /// Turns the selected item a quarter turn about its center if the result fits.
    pub fn rotate(&mut self, scene: &mut Scene) -> Outcome {
        let Some(slot) = scene.selected_slot() else {
            return Outcome::Unchanged;
        };
        let Some(candidate) = scene.get(slot).map(FurnitureItem::rotated_placement) else {
            return Outcome::Unchanged;
        };

        if !is_valid_candidate(scene, slot, &candidate.rect) {
            self.placement_valid = false;
            tracing::debug!(slot, "rotation rejected");
            return Outcome::Unchanged;
        }

        if let Some(item) = scene.get_mut(slot) {
            item.set_placement(candidate);
        }
        self.placement_valid = true;

        // keep the grab point under the pointer for the rest of the drag
        if let (Some(gesture), Some(pointer)) = (self.gesture.as_mut(), self.last_pointer) {
            gesture.offset_x = pointer.x - candidate.rect.left;
            gesture.offset_y = pointer.y - candidate.rect.top;
        }

        tracing::debug!(slot, degrees = candidate.rotation.degrees(), "rotated furniture");
        Outcome::Commit(Action::Rotate)
    }
}

impl Default for InteractionController {
    fn default() -> Self {
        Self::new()
    }
}

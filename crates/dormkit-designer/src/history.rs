//! Snapshot-based undo/redo.
//!
//! Every committed action pushes a full copy of the furniture list and the
//! measurement state. Undo and redo move whole snapshots between the two
//! stacks; nothing is ever diffed or patched.

use crate::measurement::{MeasureSegment, Measurement};
use crate::model::FurnitureItem;
use crate::scene::Scene;

/// Durable state captured after a committed action.
///
/// Owns its vectors outright, so later edits to the live scene never reach a
/// snapshot already on a stack.
#[derive(Debug, Clone, PartialEq)]
pub struct HistorySnapshot {
    pub furniture: Vec<FurnitureItem>,
    pub segments: Vec<MeasureSegment>,
    pub measure_mode: bool,
    pub hint_segment: Option<usize>,
    pub show_hint: bool,
}

impl HistorySnapshot {
    pub fn capture(scene: &Scene, measurement: &Measurement) -> Self {
        Self {
            furniture: scene.items().to_vec(),
            segments: measurement.segments().to_vec(),
            measure_mode: measurement.is_active(),
            hint_segment: measurement.hint_index(),
            show_hint: measurement.show_hint(),
        }
    }

    /// Writes this snapshot back into the live scene and measurement state.
    pub fn restore_into(&self, scene: &mut Scene, measurement: &mut Measurement) {
        scene.replace_items(self.furniture.clone());
        measurement.restore(
            self.segments.clone(),
            self.measure_mode,
            self.hint_segment,
            self.show_hint,
        );
    }
}

/// Undo/redo stacks for one loaded layout.
///
/// `done` always holds at least the initial snapshot of the layout.
#[derive(Debug, Clone)]
pub struct History {
    done: Vec<HistorySnapshot>,
    redo: Vec<HistorySnapshot>,
}

impl History {
    /// Starts a history whose floor is `initial`.
    pub fn new(initial: HistorySnapshot) -> Self {
        Self {
            done: vec![initial],
            redo: Vec::new(),
        }
    }

    /// Drops everything and starts over from `initial`.
    pub fn reset(&mut self, initial: HistorySnapshot) {
        self.done.clear();
        self.done.push(initial);
        self.redo.clear();
    }

    /// Records a committed state and invalidates redo.
    pub fn commit(&mut self, snapshot: HistorySnapshot) {
        self.redo.clear();
        self.done.push(snapshot);
    }

    /// Steps back one snapshot and returns the state to restore.
    ///
    /// Returns `None` at the floor (only the initial snapshot left).
    pub fn undo(&mut self) -> Option<&HistorySnapshot> {
        if self.done.len() <= 1 {
            return None;
        }
        let last = self.done.pop()?;
        self.redo.push(last);
        self.done.last()
    }

    /// Re-applies the most recently undone snapshot and returns it.
    pub fn redo(&mut self) -> Option<&HistorySnapshot> {
        let snapshot = self.redo.pop()?;
        self.done.push(snapshot);
        self.done.last()
    }

    pub fn can_undo(&self) -> bool {
        self.done.len() > 1
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    /// The snapshot matching the current durable state.
    pub fn current(&self) -> Option<&HistorySnapshot> {
        self.done.last()
    }

    /// Number of snapshots on the done stack, the initial one included.
    pub fn done_depth(&self) -> usize {
        self.done.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo.len()
    }
}

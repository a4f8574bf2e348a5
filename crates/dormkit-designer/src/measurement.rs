//! Two-click ruler tool.
//!
//! While measurement mode is on, the first press inside the room pins a start
//! point and the second press finishes a segment. Between the two, pointer
//! movement updates a preview end point that is never committed.

use dormkit_core::ScaleFactors;
use serde::{Deserialize, Serialize};

use crate::geometry::Point;
use crate::model::Room;
use crate::outcome::{Action, Outcome};

/// A finished measurement between two scene points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeasureSegment {
    pub start: Point,
    pub end: Point,
}

impl MeasureSegment {
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    pub fn pixel_length(&self) -> f64 {
        self.start.distance_to(&self.end)
    }

    /// Distance label such as `3' 4"`.
    pub fn label(&self, scale: &ScaleFactors) -> String {
        scale.format_distance(self.end.x - self.start.x, self.end.y - self.start.y)
    }
}

/// Ruler mode state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MeasureState {
    Off,
    AwaitingFirstPoint,
    AwaitingSecondPoint,
}

/// Committed segments plus the transient pending start and preview.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Measurement {
    active: bool,
    pending_start: Option<Point>,
    preview_end: Option<Point>,
    segments: Vec<MeasureSegment>,
    hint_segment: Option<usize>,
    show_hint: bool,
}

impl Measurement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> MeasureState {
        match (self.active, self.pending_start) {
            (false, _) => MeasureState::Off,
            (true, None) => MeasureState::AwaitingFirstPoint,
            (true, Some(_)) => MeasureState::AwaitingSecondPoint,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn segments(&self) -> &[MeasureSegment] {
        &self.segments
    }

    pub fn pending_start(&self) -> Option<Point> {
        self.pending_start
    }

    /// The live segment from the pending start to the last pointer position.
    pub fn preview_segment(&self) -> Option<MeasureSegment> {
        match (self.pending_start, self.preview_end) {
            (Some(start), Some(end)) => Some(MeasureSegment::new(start, end)),
            _ => None,
        }
    }

    /// Index of the segment that should carry the "press esc" hint.
    pub fn hint_segment(&self) -> Option<usize> {
        if self.show_hint {
            self.hint_segment
        } else {
            None
        }
    }

    pub(crate) fn hint_index(&self) -> Option<usize> {
        self.hint_segment
    }

    pub(crate) fn show_hint(&self) -> bool {
        self.show_hint
    }

    /// Enters measurement mode, discarding any old segments. Never commits.
    pub fn enter(&mut self) {
        if self.active {
            return;
        }
        *self = Self {
            active: true,
            ..Self::default()
        };
        tracing::debug!("measurement mode on");
    }

    /// Leaves measurement mode and clears every segment.
    ///
    /// Commits only when there was something to clear.
    pub fn exit(&mut self) -> Outcome {
        if !self.active {
            return Outcome::Unchanged;
        }
        let had_segments = !self.segments.is_empty();
        *self = Self::default();
        tracing::debug!(had_segments, "measurement mode off");
        if had_segments {
            Outcome::Commit(Action::ClearMeasurements)
        } else {
            Outcome::Unchanged
        }
    }

    /// Handles a press; points outside the room are ignored.
    pub fn press(&mut self, room: &Room, at: Point) -> Outcome {
        if !self.active || !room.contains(at) {
            return Outcome::Unchanged;
        }

        match self.pending_start.take() {
            None => {
                self.pending_start = Some(at);
                self.preview_end = Some(at);
                Outcome::Unchanged
            }
            Some(start) => {
                self.segments.push(MeasureSegment::new(start, at));
                self.hint_segment = Some(self.segments.len() - 1);
                self.show_hint = true;
                self.preview_end = None;
                tracing::debug!(count = self.segments.len(), "measurement segment added");
                Outcome::Commit(Action::Measure)
            }
        }
    }

    /// Updates the preview end point while a start point is pending.
    pub fn hover(&mut self, at: Point) {
        if self.active && self.pending_start.is_some() {
            self.preview_end = Some(at);
        }
    }

    pub fn clear_preview(&mut self) {
        self.pending_start = None;
        self.preview_end = None;
    }

    /// Replaces committed state from a history snapshot; the preview is dropped.
    pub(crate) fn restore(
        &mut self,
        segments: Vec<MeasureSegment>,
        active: bool,
        hint_segment: Option<usize>,
        show_hint: bool,
    ) {
        *self = Self {
            active,
            pending_start: None,
            preview_end: None,
            segments,
            hint_segment,
            show_hint,
        };
    }
}

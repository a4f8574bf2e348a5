//! Read-only accessors for rendering.

use dormkit_core::ScaleFactors;
use serde::Serialize;

use super::{DesignerState, Mode};
use crate::geometry::Point;
use crate::interaction::InteractionState;
use crate::measurement::{MeasureSegment, MeasureState};
use crate::model::{FurnitureItem, Room, RoomFeature};
use crate::presets::LayoutPreset;
use crate::scene::Scene;

/// A measured segment with its distance label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabeledSegment {
    pub segment: MeasureSegment,
    pub label: Option<String>,
}

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, Serialize)]
pub struct DesignerView<'a> {
    pub preset: Option<&'a str>,
    pub room: &'a Room,
    pub room_width: Option<String>,
    pub room_height: Option<String>,
    pub furniture: &'a [FurnitureItem],
    pub selected: Option<usize>,
    pub placement_valid: bool,
    pub interaction: InteractionState,
    pub mode: Mode,
    pub measure_state: MeasureState,
    pub segments: Vec<LabeledSegment>,
    pub preview: Option<LabeledSegment>,
    pub hint_segment: Option<usize>,
    pub can_undo: bool,
    pub can_redo: bool,
}

impl DesignerState {
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn room(&self) -> &Room {
        self.scene.room()
    }

    /// Furniture in z-order, topmost last.
    pub fn furniture(&self) -> &[FurnitureItem] {
        self.scene.items()
    }

    pub fn selected_slot(&self) -> Option<usize> {
        self.scene.selected_slot()
    }

    pub fn selected_item(&self) -> Option<&FurnitureItem> {
        self.scene.selected_item()
    }

    /// Live validity of the selected item, for ghost colouring.
    pub fn placement_valid(&self) -> bool {
        self.interaction.is_placement_valid()
    }

    pub fn interaction_state(&self) -> InteractionState {
        self.interaction.state(&self.scene)
    }

    pub fn measure_state(&self) -> MeasureState {
        self.measurement.state()
    }

    pub fn segments(&self) -> &[MeasureSegment] {
        self.measurement.segments()
    }

    pub fn preview_segment(&self) -> Option<MeasureSegment> {
        self.measurement.preview_segment()
    }

    /// Index of the segment that carries the "esc to exit" hint.
    pub fn hint_segment(&self) -> Option<usize> {
        self.measurement.hint_segment()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn current_preset(&self) -> Option<&LayoutPreset> {
        self.preset.as_ref()
    }

    /// Inches per pixel for the loaded layout.
    pub fn scale(&self) -> Option<ScaleFactors> {
        self.preset.as_ref().map(LayoutPreset::scale)
    }

    /// Distance label of the committed segment at `index`.
    pub fn segment_label(&self, index: usize) -> Option<String> {
        let segment = self.segments().get(index)?;
        Some(segment.label(&self.scale()?))
    }

    pub fn preview_label(&self) -> Option<String> {
        Some(self.preview_segment()?.label(&self.scale()?))
    }

    /// Real room width and height as `F' I"` labels.
    pub fn dimension_labels(&self) -> Option<(String, String)> {
        let real = self.preset.as_ref()?.real_dimensions();
        Some((real.width_label(), real.height_label()))
    }

    /// Door or window under `point`.
    pub fn feature_at(&self, point: Point) -> Option<RoomFeature> {
        self.scene.room().feature_at(point)
    }

    /// Door or window under the pointer after the last hover.
    pub fn hovered_feature(&self) -> Option<RoomFeature> {
        self.hovered_feature
    }

    /// Depth of the undo stack, the initial state included.
    pub fn history_depth(&self) -> usize {
        self.history.done_depth()
    }

    fn labeled(&self, segment: MeasureSegment) -> LabeledSegment {
        LabeledSegment {
            segment,
            label: self.scale().map(|scale| segment.label(&scale)),
        }
    }

    /// Snapshot of everything visible, borrowed from the live state.
    pub fn view(&self) -> DesignerView<'_> {
        let (room_width, room_height) = self.dimension_labels().unzip();
        DesignerView {
            preset: self.preset.as_ref().map(LayoutPreset::name),
            room: self.room(),
            room_width,
            room_height,
            furniture: self.furniture(),
            selected: self.selected_slot(),
            placement_valid: self.placement_valid(),
            interaction: self.interaction_state(),
            mode: self.mode(),
            measure_state: self.measure_state(),
            segments: self
                .segments()
                .iter()
                .map(|segment| self.labeled(*segment))
                .collect(),
            preview: self.preview_segment().map(|segment| self.labeled(segment)),
            hint_segment: self.hint_segment(),
            can_undo: self.can_undo(),
            can_redo: self.can_redo(),
        }
    }
}

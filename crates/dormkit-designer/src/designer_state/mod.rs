//! Designer state for UI integration.
//! Owns the scene, the gesture and ruler state machines and the undo history,
//! and routes shell events to them.
//!
//! This module is split into submodules:
//! - `events`: pointer, keyboard and menu event handlers
//! - `history`: commit, undo and redo
//! - `queries`: read-only accessors for rendering

mod events;
mod history;
mod queries;

pub use queries::{DesignerView, LabeledSegment};

use serde::Serialize;

use crate::history::{History, HistorySnapshot};
use crate::interaction::InteractionController;
use crate::measurement::Measurement;
use crate::model::RoomFeature;
use crate::presets::LayoutPreset;
use crate::scene::Scene;
use crate::shell::{ScreenLayout, ShellHitTest};

/// Which state machine receives pointer events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Mode {
    /// Furniture gestures.
    Layout,
    /// Two-click ruler.
    Measure,
}

/// Designer state for one editing session.
pub struct DesignerState {
    pub(crate) scene: Scene,
    pub(crate) interaction: InteractionController,
    pub(crate) measurement: Measurement,
    pub(crate) history: History,
    pub(crate) preset: Option<LayoutPreset>,
    pub(crate) hovered_feature: Option<RoomFeature>,
    shell: Box<dyn ShellHitTest>,
}

impl DesignerState {
    /// Creates an empty designer using the stock screen layout.
    pub fn new() -> Self {
        Self::with_shell(Box::new(ScreenLayout::default()))
    }

    /// Creates an empty designer that asks `shell` for palette and trash hits.
    pub fn with_shell(shell: Box<dyn ShellHitTest>) -> Self {
        let scene = Scene::default();
        let measurement = Measurement::new();
        let history = History::new(HistorySnapshot::capture(&scene, &measurement));
        Self {
            scene,
            interaction: InteractionController::new(),
            measurement,
            history,
            preset: None,
            hovered_feature: None,
            shell,
        }
    }

    /// Replaces the shell hit tests, e.g. after the window was resized.
    pub fn set_shell(&mut self, shell: Box<dyn ShellHitTest>) {
        self.shell = shell;
    }

    /// The state machine pointer events currently go to.
    pub fn mode(&self) -> Mode {
        if self.measurement.is_active() {
            Mode::Measure
        } else {
            Mode::Layout
        }
    }

    /// Replaces the scene with `preset` and starts a fresh history.
    ///
    /// Measurement mode is left and every transient state is dropped.
    pub fn load_layout(&mut self, preset: LayoutPreset) {
        self.scene = Scene::with_items(preset.room().clone(), preset.furniture().to_vec());
        self.measurement = Measurement::new();
        self.interaction.reset();
        self.hovered_feature = None;
        self.history
            .reset(HistorySnapshot::capture(&self.scene, &self.measurement));
        tracing::debug!(
            preset = preset.name(),
            items = self.scene.len(),
            "loaded layout"
        );
        self.preset = Some(preset);
    }
}

impl Default for DesignerState {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for DesignerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DesignerState")
            .field("scene", &self.scene)
            .field("interaction", &self.interaction)
            .field("measurement", &self.measurement)
            .field("history", &self.history)
            .field("preset", &self.preset.as_ref().map(LayoutPreset::name))
            .finish_non_exhaustive()
    }
}

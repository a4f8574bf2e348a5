//! Event handlers for designer state.
//!
//! These are the only mutators of the scene, the measurements and the
//! history. Each handler returns the [`Outcome`] of the event after any
//! commit has been recorded.

use super::{DesignerState, Mode};
use crate::commands::DesignerCommand;
use crate::geometry::Point;
use crate::outcome::Outcome;
use crate::presets::{LayoutPreset, PresetId};

impl DesignerState {
    /// Primary button pressed at `at`.
    pub fn on_press(&mut self, at: Point) -> Outcome {
        match self.mode() {
            Mode::Measure => {
                let outcome = self.measurement.press(self.scene.room(), at);
                self.settle(outcome)
            }
            Mode::Layout => {
                let shell = self.shell.as_ref();
                self.interaction.press(&mut self.scene, shell, at);
                Outcome::Unchanged
            }
        }
    }

    /// Pointer moved with the button held.
    pub fn on_drag(&mut self, at: Point) -> Outcome {
        match self.mode() {
            Mode::Measure => self.measurement.hover(at),
            Mode::Layout => self.interaction.drag(&mut self.scene, at),
        }
        Outcome::Unchanged
    }

    /// Primary button released. The position is not used to move the item;
    /// the last drag event already did.
    pub fn on_release(&mut self, at: Point) -> Outcome {
        match self.mode() {
            Mode::Measure => Outcome::Unchanged,
            Mode::Layout => {
                tracing::trace!(x = at.x, y = at.y, "release");
                let shell = self.shell.as_ref();
                let outcome = self.interaction.release(&mut self.scene, shell);
                self.settle(outcome)
            }
        }
    }

    /// Pointer moved with no button held: tracks the hovered door or window
    /// and updates the ruler preview.
    pub fn on_pointer_move(&mut self, at: Point) -> Outcome {
        self.hovered_feature = self.scene.room().feature_at(at);
        if self.hovered_feature.is_none() && self.mode() == Mode::Measure {
            self.measurement.hover(at);
        }
        Outcome::Unchanged
    }

    /// Rotates the selected item a quarter turn if the result is valid.
    pub fn on_rotate_command(&mut self) -> Outcome {
        match self.mode() {
            Mode::Measure => Outcome::Unchanged,
            Mode::Layout => {
                let outcome = self.interaction.rotate(&mut self.scene);
                self.settle(outcome)
            }
        }
    }

    /// Turns measurement mode on, or off when it is already on.
    pub fn on_toggle_measurement(&mut self) -> Outcome {
        match self.mode() {
            Mode::Measure => self.on_cancel_measurement(),
            Mode::Layout => {
                self.interaction.abort(&mut self.scene);
                self.scene.clear_selection();
                self.measurement.enter();
                Outcome::Unchanged
            }
        }
    }

    /// Leaves measurement mode, clearing all segments. No-op when off.
    pub fn on_cancel_measurement(&mut self) -> Outcome {
        let outcome = self.measurement.exit();
        self.settle(outcome)
    }

    /// Loads one of the built-in layouts and resets history.
    pub fn on_load_preset(&mut self, id: PresetId) -> Outcome {
        self.load_layout(LayoutPreset::builtin(id));
        Outcome::Unchanged
    }

    /// Keyboard input. Unbound keys are ignored.
    pub fn on_key(&mut self, key: &str) -> Outcome {
        match DesignerCommand::from_key(key) {
            Ok(command) => self.apply(command),
            Err(err) => {
                tracing::trace!(%err, "ignored key");
                Outcome::Unchanged
            }
        }
    }

    /// Dispatches a command to its handler.
    pub fn apply(&mut self, command: DesignerCommand) -> Outcome {
        match command {
            DesignerCommand::Press(at) => self.on_press(at),
            DesignerCommand::Drag(at) => self.on_drag(at),
            DesignerCommand::Release(at) => self.on_release(at),
            DesignerCommand::PointerMove(at) => self.on_pointer_move(at),
            DesignerCommand::Rotate => self.on_rotate_command(),
            DesignerCommand::Undo => self.on_undo_command(),
            DesignerCommand::Redo => self.on_redo_command(),
            DesignerCommand::ToggleMeasurement => self.on_toggle_measurement(),
            DesignerCommand::CancelMeasurement => self.on_cancel_measurement(),
            DesignerCommand::LoadPreset(id) => self.on_load_preset(id),
        }
    }
}

//! Undo/redo for designer state.

use super::DesignerState;
use crate::history::HistorySnapshot;
use crate::outcome::{Action, Outcome};

impl DesignerState {
    /// Records the current durable state when `outcome` is a commit.
    pub(crate) fn settle(&mut self, outcome: Outcome) -> Outcome {
        if let Outcome::Commit(action) = outcome {
            self.commit(action);
        }
        outcome
    }

    fn commit(&mut self, action: Action) {
        self.history
            .commit(HistorySnapshot::capture(&self.scene, &self.measurement));
        tracing::debug!(%action, depth = self.history.done_depth(), "committed");
    }

    /// Steps back one committed action. No-op at the initial state.
    pub fn on_undo_command(&mut self) -> Outcome {
        let Some(snapshot) = self.history.undo().cloned() else {
            tracing::debug!("nothing to undo");
            return Outcome::Unchanged;
        };
        self.restore(&snapshot);
        tracing::debug!(
            depth = self.history.done_depth(),
            redo = self.history.redo_depth(),
            "undo"
        );
        Outcome::Unchanged
    }

    /// Re-applies the most recently undone action. No-op when nothing was undone.
    pub fn on_redo_command(&mut self) -> Outcome {
        let Some(snapshot) = self.history.redo().cloned() else {
            tracing::debug!("nothing to redo");
            return Outcome::Unchanged;
        };
        self.restore(&snapshot);
        tracing::debug!(
            depth = self.history.done_depth(),
            redo = self.history.redo_depth(),
            "redo"
        );
        Outcome::Unchanged
    }

    fn restore(&mut self, snapshot: &HistorySnapshot) {
        snapshot.restore_into(&mut self.scene, &mut self.measurement);
        self.interaction.reset();
    }
}

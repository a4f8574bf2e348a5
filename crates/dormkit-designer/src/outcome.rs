use std::fmt;

/// A user action that changes durable state and therefore earns a history entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Move,
    Spawn,
    Trash,
    Rotate,
    Measure,
    ClearMeasurements,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Move => write!(f, "Move Furniture"),
            Self::Spawn => write!(f, "Add Furniture"),
            Self::Trash => write!(f, "Delete Furniture"),
            Self::Rotate => write!(f, "Rotate Furniture"),
            Self::Measure => write!(f, "Add Measurement"),
            Self::ClearMeasurements => write!(f, "Clear Measurements"),
        }
    }
}

/// Result of feeding one event to a state machine.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The change must be committed to history.
    Commit(Action),
    /// Nothing durable changed.
    Unchanged,
}

impl Outcome {
    pub fn is_commit(&self) -> bool {
        matches!(self, Outcome::Commit(_))
    }
}

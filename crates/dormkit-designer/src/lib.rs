//! # DormKit Designer
//!
//! Interactive core of the room layout designer: furniture placement with
//! collision checks, drag/rotate/spawn/delete gestures, a two-click ruler and
//! snapshot-based undo/redo.
//!
//! ## Architecture
//!
//! ```text
//! DesignerState (one editing session)
//!   ├── Scene (room + furniture in z-order + selection)
//!   ├── InteractionController (press/drag/release/rotate)
//!   ├── Measurement (ruler segments and preview)
//!   └── History (done/redo snapshot stacks)
//! ```
//!
//! The shell feeds pointer, key and menu events to [`DesignerState`] and
//! answers palette/trash hit tests through [`ShellHitTest`]. Sub-state
//! machines return an [`Outcome`]; only `DesignerState` turns a commit into a
//! history entry.
//!
//! ## Usage
//!
//! ```rust
//! use dormkit_designer::{DesignerState, Point, PresetId};
//!
//! let mut state = DesignerState::new();
//! let _ = state.on_load_preset(PresetId::Single);
//!
//! // pick up the desk and slide it left
//! let _ = state.on_press(Point::new(640.0, 150.0));
//! let _ = state.on_drag(Point::new(600.0, 150.0));
//! let outcome = state.on_release(Point::new(600.0, 150.0));
//! assert!(outcome.is_commit());
//! assert!(state.can_undo());
//! ```

pub mod commands;
pub mod designer_state;
pub mod geometry;
pub mod history;
pub mod interaction;
pub mod measurement;
pub mod model;
pub mod outcome;
pub mod presets;
pub mod scene;
pub mod shell;
pub mod validation;

pub use commands::DesignerCommand;
pub use designer_state::{DesignerState, DesignerView, LabeledSegment, Mode};
pub use geometry::{contains, overlaps, Point, Rect};
pub use history::{History, HistorySnapshot};
pub use interaction::{DragOrigin, InteractionController, InteractionState, PendingGesture};
pub use measurement::{MeasureSegment, MeasureState, Measurement};
pub use model::{FurnitureItem, FurnitureKind, Placement, Room, RoomFeature, Rotation};
pub use outcome::{Action, Outcome};
pub use presets::{LayoutPreset, PresetId};
pub use scene::Scene;
pub use shell::{ScreenLayout, ScreenMetrics, ShellHitTest};
pub use validation::{is_valid_candidate, is_valid_placement};

//! Error handling for DormKit
//!
//! Interactive editing never fails: invalid placements are reverted and
//! no-op undo/redo are silent. Errors only appear at the edges of the system:
//! - Layout errors (preset lookup, room geometry, real-world dimensions)
//! - Command errors (parsing text commands from the shell)
//!
//! All error types use `thiserror`.

use thiserror::Error;

/// Layout error type
///
/// Raised while resolving or building a layout preset.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    /// No preset is registered under this name
    #[error("Unknown layout preset: {name}")]
    UnknownPreset {
        /// The name that was looked up.
        name: String,
    },

    /// Room rectangle has no area
    #[error("Invalid room geometry: {reason}")]
    InvalidRoom {
        /// Why the room was rejected.
        reason: String,
    },

    /// Real-world room size could not be used for scaling
    #[error("Invalid room dimensions: {reason}")]
    InvalidDimensions {
        /// Why the dimensions were rejected.
        reason: String,
    },
}

/// Command error type
///
/// Raised by the text command parser used by the shell.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CommandError {
    /// The command keyword is not recognised
    #[error("Unknown command: {input}")]
    UnknownCommand {
        /// The offending keyword.
        input: String,
    },

    /// A required argument was not supplied
    #[error("Command '{command}' is missing argument '{argument}'")]
    MissingArgument {
        /// The command being parsed.
        command: String,
        /// The name of the missing argument.
        argument: String,
    },

    /// An argument could not be parsed as a number
    #[error("Invalid number: {value}")]
    InvalidNumber {
        /// The text that failed to parse.
        value: String,
    },

    /// The key name has no binding
    #[error("Unbound key: {key}")]
    UnboundKey {
        /// The key name.
        key: String,
    },
}

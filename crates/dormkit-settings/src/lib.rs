//! DormKit Settings Crate
//!
//! Loads, validates and saves the screen geometry and logging settings used by
//! the DormKit shell.

pub mod config;
pub mod error;

pub use config::{Config, LoggingSettings, PaletteSettings, TrashSettings, WindowSettings};
pub use error::{SettingsError, SettingsResult};

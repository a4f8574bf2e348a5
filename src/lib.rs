//! # DormKit
//!
//! A room layout editor core for planning dorm rooms:
//! - Collision-aware furniture placement (beds, closets, desks)
//! - Drag, rotate, spawn-from-palette and drag-to-trash gestures
//! - A two-click ruler that reports real distances in feet and inches
//! - Snapshot-based undo/redo
//!
//! ## Architecture
//!
//! DormKit is organized as a workspace with multiple crates:
//!
//! 1. **dormkit-core** - Error types, feet/inch formatting, scale factors
//! 2. **dormkit-designer** - Scene, gestures, ruler, history, presets
//! 3. **dormkit-settings** - Screen geometry and logging configuration
//! 4. **dormkit** - Scripted command shell that drives the designer

pub mod cli;
pub mod session;

pub use dormkit_core::{CommandError, LayoutError};
pub use dormkit_designer as designer;
pub use dormkit_designer::{
    DesignerCommand, DesignerState, LayoutPreset, Outcome, Point, PresetId, ScreenLayout,
    ScreenMetrics,
};
pub use dormkit_settings::{Config, LoggingSettings};
pub use session::{run_session, SessionSummary};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Screen geometry for the palette and trash hit tests.
pub fn screen_metrics(config: &Config) -> ScreenMetrics {
    ScreenMetrics {
        window_width: config.window.width as f64,
        window_height: config.window.height as f64,
        palette_width: config.palette.entry_width,
        palette_height: config.palette.entry_height,
        palette_spacing: config.palette.spacing,
        palette_top: config.palette.top,
        trash_size: config.trash.size,
        trash_margin: config.trash.margin,
    }
}

/// Builds a designer whose shell layout follows `config`.
pub fn designer_from_config(config: &Config) -> DesignerState {
    let layout = ScreenLayout::from_metrics(&screen_metrics(config));
    DesignerState::with_shell(Box::new(layout))
}

/// Initialize logging
///
/// Sets up structured logging with:
/// - Output on stderr, so scripted sessions keep stdout clean
/// - RUST_LOG environment variable support, falling back to the configured level
/// - Pretty or JSON formatting
pub fn init_logging(settings: &LoggingSettings) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.level))
        .map_err(|e| anyhow::anyhow!("invalid log filter '{}': {}", settings.level, e))?;

    if settings.json {
        let fmt_layer = fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_level(true);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()?;
    } else {
        let fmt_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_level(true)
            .with_line_number(true)
            .pretty();

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()?;
    }

    Ok(())
}

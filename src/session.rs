//! Line-oriented command shell over a [`DesignerState`].
//!
//! Each input line is one command (`load single`, `press 400 200`, `key r`,
//! ...). Two extra commands inspect the state: `show` prints the furniture
//! and measurements, `json` prints the full view as one JSON line. Blank
//! lines and lines starting with `#` are skipped. Bad commands are reported
//! and the session continues.

use std::fmt::Write as _;
use std::io::{BufRead, Write};

use anyhow::Context;
use dormkit_designer::{DesignerCommand, DesignerState, Outcome};

/// Counters reported when a session ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub commands: usize,
    pub commits: usize,
    pub errors: usize,
}

/// Runs every command from `input` against `state`, writing replies to `output`.
pub fn run_session<R: BufRead, W: Write>(
    state: &mut DesignerState,
    input: R,
    mut output: W,
) -> anyhow::Result<SessionSummary> {
    let mut summary = SessionSummary::default();

    for (index, line) in input.lines().enumerate() {
        let line = line.with_context(|| format!("failed to read line {}", index + 1))?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        match line {
            "show" => write!(output, "{}", describe(state))?,
            "json" => {
                let json = serde_json::to_string(&state.view())
                    .context("failed to serialize designer state")?;
                writeln!(output, "{}", json)?;
            }
            _ => match line.parse::<DesignerCommand>() {
                Ok(command) => {
                    summary.commands += 1;
                    let outcome = state.apply(command);
                    if outcome.is_commit() {
                        summary.commits += 1;
                    }
                    writeln!(output, "{}", status_line(state, outcome))?;
                }
                Err(err) => {
                    summary.errors += 1;
                    tracing::warn!(line = index + 1, %err, "rejected command");
                    writeln!(output, "error: {}", err)?;
                }
            },
        }
    }

    output.flush()?;
    tracing::info!(
        commands = summary.commands,
        commits = summary.commits,
        errors = summary.errors,
        "session finished"
    );
    Ok(summary)
}

/// One-line summary printed after every command.
pub fn status_line(state: &DesignerState, outcome: Outcome) -> String {
    let result = match outcome {
        Outcome::Commit(action) => format!("committed: {}", action),
        Outcome::Unchanged => "unchanged".to_string(),
    };
    let selected = state
        .selected_slot()
        .map_or_else(|| "-".to_string(), |slot| slot.to_string());
    format!(
        "{} | items={} selected={} valid={} mode={:?} undo={} redo={}",
        result,
        state.furniture().len(),
        selected,
        state.placement_valid(),
        state.mode(),
        state.can_undo(),
        state.can_redo()
    )
}

/// Multi-line listing of the room, furniture and measurements.
pub fn describe(state: &DesignerState) -> String {
    let mut out = String::new();

    let bounds = state.room().bounds;
    let name = state.current_preset().map_or("none", |p| p.name());
    let _ = write!(
        out,
        "room {} at ({}, {}) {}x{}",
        name, bounds.left, bounds.top, bounds.width, bounds.height
    );
    if let Some((width, height)) = state.dimension_labels() {
        let _ = write!(out, " [{} x {}]", width, height);
    }
    out.push('\n');

    for (slot, item) in state.furniture().iter().enumerate() {
        let marker = if state.selected_slot() == Some(slot) { '*' } else { ' ' };
        let _ = writeln!(
            out,
            "{} [{}] {} at ({}, {}) {}x{} {}deg",
            marker,
            slot,
            item.kind,
            item.rect.left,
            item.rect.top,
            item.rect.width,
            item.rect.height,
            item.rotation.degrees()
        );
    }

    for (index, segment) in state.segments().iter().enumerate() {
        let label = state.segment_label(index).unwrap_or_else(|| "?".to_string());
        let _ = writeln!(
            out,
            "  ruler {}: ({}, {}) -> ({}, {}) = {}",
            index, segment.start.x, segment.start.y, segment.end.x, segment.end.y, label
        );
    }
    out
}

//! Events accepted by [`DesignerState`](crate::DesignerState).
//!
//! Every pointer, keyboard and menu event the shell can deliver maps onto one
//! [`DesignerCommand`]. Commands also have a plain-text form (`press 10 20`,
//! `load double`, `key r`) used by scripted sessions.

use std::fmt;
use std::str::FromStr;

use dormkit_core::CommandError;

use crate::geometry::Point;
use crate::presets::PresetId;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DesignerCommand {
    Press(Point),
    Drag(Point),
    Release(Point),
    /// Pointer movement with no button held.
    PointerMove(Point),
    Rotate,
    Undo,
    Redo,
    ToggleMeasurement,
    CancelMeasurement,
    LoadPreset(PresetId),
}

impl DesignerCommand {
    /// Maps a key name to its command.
    ///
    /// `r`/`R` rotate, `z` undoes, `y` redoes and `escape` leaves measurement
    /// mode. Any other key is unbound.
    pub fn from_key(key: &str) -> Result<Self, CommandError> {
        match key {
            "r" | "R" => Ok(Self::Rotate),
            "z" => Ok(Self::Undo),
            "y" => Ok(Self::Redo),
            "escape" | "esc" => Ok(Self::CancelMeasurement),
            _ => Err(CommandError::UnboundKey {
                key: key.to_string(),
            }),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Press(_) => "press",
            Self::Drag(_) => "drag",
            Self::Release(_) => "release",
            Self::PointerMove(_) => "move",
            Self::Rotate => "rotate",
            Self::Undo => "undo",
            Self::Redo => "redo",
            Self::ToggleMeasurement => "measure",
            Self::CancelMeasurement => "cancel",
            Self::LoadPreset(_) => "load",
        }
    }
}

impl fmt::Display for DesignerCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Press(p) | Self::Drag(p) | Self::Release(p) | Self::PointerMove(p) => {
                write!(f, "{} {} {}", self.name(), p.x, p.y)
            }
            Self::LoadPreset(id) => write!(f, "load {}", id),
            _ => write!(f, "{}", self.name()),
        }
    }
}

fn parse_number(value: Option<&str>, command: &str, argument: &str) -> Result<f64, CommandError> {
    let value = value.ok_or_else(|| CommandError::MissingArgument {
        command: command.to_string(),
        argument: argument.to_string(),
    })?;
    value
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| CommandError::InvalidNumber {
            value: value.to_string(),
        })
}

fn parse_point<'a>(
    mut args: impl Iterator<Item = &'a str>,
    command: &str,
) -> Result<Point, CommandError> {
    let x = parse_number(args.next(), command, "x")?;
    let y = parse_number(args.next(), command, "y")?;
    Ok(Point::new(x, y))
}

impl FromStr for DesignerCommand {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        let Some(keyword) = words.next() else {
            return Err(CommandError::UnknownCommand {
                input: s.to_string(),
            });
        };

        match keyword.to_lowercase().as_str() {
            "press" => parse_point(words, "press").map(Self::Press),
            "drag" => parse_point(words, "drag").map(Self::Drag),
            "release" => parse_point(words, "release").map(Self::Release),
            "move" => parse_point(words, "move").map(Self::PointerMove),
            "rotate" => Ok(Self::Rotate),
            "undo" => Ok(Self::Undo),
            "redo" => Ok(Self::Redo),
            "measure" => Ok(Self::ToggleMeasurement),
            "cancel" => Ok(Self::CancelMeasurement),
            "load" => {
                let name = words.next().ok_or_else(|| CommandError::MissingArgument {
                    command: "load".to_string(),
                    argument: "preset".to_string(),
                })?;
                name.parse::<PresetId>()
                    .map(Self::LoadPreset)
                    .map_err(|_| CommandError::UnknownCommand {
                        input: s.trim().to_string(),
                    })
            }
            "key" => {
                let key = words.next().ok_or_else(|| CommandError::MissingArgument {
                    command: "key".to_string(),
                    argument: "name".to_string(),
                })?;
                Self::from_key(key)
            }
            _ => Err(CommandError::UnknownCommand {
                input: s.trim().to_string(),
            }),
        }
    }
}

//! Room layout presets.
//!
//! The three built-in rooms reproduce real dorm floor plans: pixel geometry
//! for the room outline, door, windows and starting furniture, plus the real
//! room size used to scale the ruler.

use std::fmt;
use std::str::FromStr;

use dormkit_core::{LayoutError, RealDimensions, ScaleFactors};

use crate::geometry::Rect;
use crate::model::{FurnitureItem, FurnitureKind, Room, Rotation};

const DOOR_WIDTH: f64 = 70.0;
const DOOR_HEIGHT: f64 = 2.0;
const WINDOW_WIDTH: f64 = 80.0;
const WINDOW_HEIGHT: f64 = 2.0;
const WINDOW_MARGIN: f64 = 20.0;

/// Built-in room types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PresetId {
    Single,
    Double,
    Triple,
}

impl PresetId {
    pub const ALL: [PresetId; 3] = [PresetId::Single, PresetId::Double, PresetId::Triple];
}

impl fmt::Display for PresetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single => write!(f, "single"),
            Self::Double => write!(f, "double"),
            Self::Triple => write!(f, "triple"),
        }
    }
}

impl FromStr for PresetId {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "single" => Ok(Self::Single),
            "double" => Ok(Self::Double),
            "triple" => Ok(Self::Triple),
            _ => Err(LayoutError::UnknownPreset {
                name: s.to_string(),
            }),
        }
    }
}

/// A room with its starting furniture and real-world size.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutPreset {
    id: Option<PresetId>,
    name: String,
    room: Room,
    furniture: Vec<FurnitureItem>,
    real: RealDimensions,
    scale: ScaleFactors,
}

impl LayoutPreset {
    /// Builds a preset from arbitrary geometry.
    ///
    /// Fails when the room has no area or the real size is not positive.
    pub fn custom(
        name: impl Into<String>,
        room: Room,
        furniture: Vec<FurnitureItem>,
        real: RealDimensions,
    ) -> Result<Self, LayoutError> {
        if !room.bounds.has_area() {
            return Err(LayoutError::InvalidRoom {
                reason: format!(
                    "room must have positive size, got {}x{}",
                    room.bounds.width, room.bounds.height
                ),
            });
        }
        if real.width_inches <= 0.0 || real.height_inches <= 0.0 {
            return Err(LayoutError::InvalidDimensions {
                reason: format!(
                    "real size must be positive, got {}x{} in",
                    real.width_inches, real.height_inches
                ),
            });
        }
        let scale = ScaleFactors::from_dimensions(&real, room.bounds.width, room.bounds.height)
            .ok_or_else(|| LayoutError::InvalidRoom {
                reason: "room has no area".to_string(),
            })?;

        Ok(Self {
            id: None,
            name: name.into(),
            room,
            furniture,
            real,
            scale,
        })
    }

    /// One of the built-in floor plans.
    pub fn builtin(id: PresetId) -> Self {
        let (room, furniture, real) = match id {
            PresetId::Single => single_room(),
            PresetId::Double => double_room(),
            PresetId::Triple => triple_room(),
        };
        let scale = ScaleFactors::from_dimensions(&real, room.bounds.width, room.bounds.height)
            .unwrap_or(ScaleFactors::new(1.0, 1.0));
        Self {
            id: Some(id),
            name: id.to_string(),
            room,
            furniture,
            real,
            scale,
        }
    }

    /// The built-in id, `None` for custom layouts.
    pub fn id(&self) -> Option<PresetId> {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn room(&self) -> &Room {
        &self.room
    }

    pub fn furniture(&self) -> &[FurnitureItem] {
        &self.furniture
    }

    pub fn real_dimensions(&self) -> RealDimensions {
        self.real
    }

    /// Inches per pixel on each axis.
    pub fn scale(&self) -> ScaleFactors {
        self.scale
    }
}

fn piece(kind: FurnitureKind, left: f64, top: f64, degrees: i32) -> FurnitureItem {
    FurnitureItem::with_default_size(
        kind,
        left,
        top,
        Rotation::from_degrees(degrees).unwrap_or_default(),
    )
}

fn bottom_right_door(bounds: &Rect) -> Rect {
    Rect::new(
        bounds.right() - DOOR_WIDTH,
        bounds.bottom() - DOOR_HEIGHT,
        DOOR_WIDTH,
        DOOR_HEIGHT,
    )
}

// McGill House single
fn single_room() -> (Room, Vec<FurnitureItem>, RealDimensions) {
    let bounds = Rect::new(300.0, 130.0, 420.0, 290.0);
    let room = Room::new(
        bounds,
        bottom_right_door(&bounds),
        vec![Rect::new(
            bounds.right() - WINDOW_WIDTH - WINDOW_MARGIN,
            bounds.top,
            WINDOW_WIDTH,
            WINDOW_HEIGHT,
        )],
    );
    let furniture = vec![
        piece(FurnitureKind::Bed, bounds.left, bounds.top + 2.0, 0),
        piece(FurnitureKind::Closet, bounds.left + 175.0, bounds.top + 2.0, 0),
        piece(FurnitureKind::Desk, 625.0, 132.0, 0),
    ];
    (room, furniture, RealDimensions::from_feet_inches(12, 11, 8, 7))
}

// McGill House double
fn double_room() -> (Room, Vec<FurnitureItem>, RealDimensions) {
    let bounds = Rect::new(300.0, 100.0, 420.0, 500.0);
    let (bed_w, bed_h) = FurnitureKind::Bed.default_size();
    let room = Room::new(
        bounds,
        bottom_right_door(&bounds),
        vec![
            Rect::new(bounds.left + WINDOW_MARGIN, bounds.top, WINDOW_WIDTH, WINDOW_HEIGHT),
            Rect::new(
                bounds.right() - WINDOW_WIDTH - WINDOW_MARGIN,
                bounds.top,
                WINDOW_WIDTH,
                WINDOW_HEIGHT,
            ),
        ],
    );
    let furniture = vec![
        piece(FurnitureKind::Bed, bounds.left, bounds.bottom() - bed_h, 180),
        piece(FurnitureKind::Bed, bounds.right() - bed_w, bounds.top + WINDOW_HEIGHT, 0),
        piece(FurnitureKind::Closet, bounds.left + 227.0, 548.0, 180),
        piece(FurnitureKind::Closet, bounds.left + 108.0, 102.0, 0),
        piece(FurnitureKind::Desk, bounds.left + 140.0, 558.0, 0),
        piece(FurnitureKind::Desk, bounds.left + 220.0, 102.0, 0),
    ];
    (room, furniture, RealDimensions::from_feet_inches(11, 11, 14, 3))
}

// Morewood Gardens triple
fn triple_room() -> (Room, Vec<FurnitureItem>, RealDimensions) {
    let bounds = Rect::new(300.0, 100.0, 650.0, 400.0);
    let (bed_w, bed_h) = FurnitureKind::Bed.default_size();
    let (_, desk_h) = FurnitureKind::Desk.default_size();
    let window_top = bounds.bottom() - WINDOW_HEIGHT;
    let room = Room::new(
        bounds,
        Rect::new(bounds.right() - DOOR_WIDTH, bounds.top, DOOR_WIDTH, DOOR_HEIGHT),
        vec![
            Rect::new(440.0, window_top, WINDOW_WIDTH, WINDOW_HEIGHT),
            Rect::new(720.0, window_top, WINDOW_WIDTH, WINDOW_HEIGHT),
        ],
    );
    let bed_top = bounds.bottom() - bed_h;
    let desk_top = bounds.bottom() - desk_h - WINDOW_HEIGHT;
    let furniture = vec![
        piece(FurnitureKind::Bed, bounds.left, bed_top, 180),
        piece(
            FurnitureKind::Bed,
            bounds.left + bounds.width / 2.0 - bed_w / 2.0,
            bed_top,
            180,
        ),
        piece(FurnitureKind::Bed, bounds.right() - bed_w, bed_top, 180),
        piece(FurnitureKind::Closet, 320.0, bounds.top + 2.0, 0),
        piece(FurnitureKind::Closet, 520.0, bounds.top + 2.0, 0),
        piece(FurnitureKind::Closet, 705.0, bounds.top + 2.0, 0),
        piece(FurnitureKind::Desk, 445.0, desk_top, 0),
        piece(FurnitureKind::Desk, 725.0, desk_top, 0),
    ];
    (room, furniture, RealDimensions::from_feet_inches(24, 10, 12, 9))
}

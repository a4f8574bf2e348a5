//! Furniture and room value types.

use std::fmt;
use std::str::FromStr;

use dormkit_core::CommandError;
use serde::{Deserialize, Serialize};

use crate::geometry::{Point, Rect};

/// The fixed set of furniture kinds offered by the palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FurnitureKind {
    Bed,
    Closet,
    Desk,
}

impl FurnitureKind {
    /// Palette order, top to bottom.
    pub const ALL: [FurnitureKind; 3] = [FurnitureKind::Bed, FurnitureKind::Closet, FurnitureKind::Desk];

    /// Footprint (width, height) of a freshly spawned piece.
    pub fn default_size(&self) -> (f64, f64) {
        match self {
            FurnitureKind::Bed => (120.0, 220.0),
            FurnitureKind::Closet => (100.0, 50.0),
            FurnitureKind::Desk => (70.0, 40.0),
        }
    }

    /// Image reference handed to the renderer.
    pub fn image_ref(&self) -> &'static str {
        match self {
            FurnitureKind::Bed => "bed2.jpg",
            FurnitureKind::Closet => "closet2.jpg",
            FurnitureKind::Desk => "desk2.jpg",
        }
    }
}

impl fmt::Display for FurnitureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bed => write!(f, "bed"),
            Self::Closet => write!(f, "closet"),
            Self::Desk => write!(f, "desk"),
        }
    }
}

impl FromStr for FurnitureKind {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bed" => Ok(Self::Bed),
            "closet" => Ok(Self::Closet),
            "desk" => Ok(Self::Desk),
            _ => Err(CommandError::UnknownCommand {
                input: s.to_string(),
            }),
        }
    }
}

/// Orientation in quarter turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Rotation {
    #[default]
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Rotation {
    /// The orientation one quarter turn clockwise.
    pub fn next(self) -> Self {
        match self {
            Rotation::Deg0 => Rotation::Deg90,
            Rotation::Deg90 => Rotation::Deg180,
            Rotation::Deg180 => Rotation::Deg270,
            Rotation::Deg270 => Rotation::Deg0,
        }
    }

    pub fn degrees(self) -> u16 {
        match self {
            Rotation::Deg0 => 0,
            Rotation::Deg90 => 90,
            Rotation::Deg180 => 180,
            Rotation::Deg270 => 270,
        }
    }

    /// Maps any multiple of 90 degrees onto a rotation.
    pub fn from_degrees(degrees: i32) -> Option<Self> {
        match degrees.rem_euclid(360) {
            0 => Some(Rotation::Deg0),
            90 => Some(Rotation::Deg90),
            180 => Some(Rotation::Deg180),
            270 => Some(Rotation::Deg270),
            _ => None,
        }
    }
}

/// The fields of an item a gesture may change.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub rect: Rect,
    pub rotation: Rotation,
}

/// A single piece of furniture in the scene.
///
/// Identity is the item's slot in the scene, never its value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FurnitureItem {
    pub kind: FurnitureKind,
    pub rect: Rect,
    pub rotation: Rotation,
    pub image: String,
    /// Image size as drawn; fixed at creation so rotation does not stretch it.
    pub draw_width: f64,
    pub draw_height: f64,
}

impl FurnitureItem {
    pub fn new(kind: FurnitureKind, rect: Rect, rotation: Rotation) -> Self {
        Self {
            kind,
            rect,
            rotation,
            image: kind.image_ref().to_string(),
            draw_width: rect.width,
            draw_height: rect.height,
        }
    }

    /// A new piece of the kind's default size with its top-left at `(left, top)`.
    pub fn with_default_size(kind: FurnitureKind, left: f64, top: f64, rotation: Rotation) -> Self {
        let (width, height) = kind.default_size();
        Self::new(kind, Rect::new(left, top, width, height), rotation)
    }

    /// A new piece of the kind's default size centered on `at`.
    pub fn spawn_centered(kind: FurnitureKind, at: Point) -> Self {
        let (width, height) = kind.default_size();
        Self::new(kind, Rect::centered_at(at, width, height), Rotation::Deg0)
    }

    pub fn placement(&self) -> Placement {
        Placement {
            rect: self.rect,
            rotation: self.rotation,
        }
    }

    pub fn set_placement(&mut self, placement: Placement) {
        self.rect = placement.rect;
        self.rotation = placement.rotation;
    }

    /// Placement after one clockwise quarter turn about the center.
    pub fn rotated_placement(&self) -> Placement {
        Placement {
            rect: self.rect.rotated_quarter(),
            rotation: self.rotation.next(),
        }
    }

    pub fn contains_point(&self, point: Point) -> bool {
        self.rect.contains(point)
    }
}

/// Fixed openings drawn on the room outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoomFeature {
    Door,
    Window(usize),
}

/// The room outline with its door and windows.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Room {
    pub bounds: Rect,
    pub door: Rect,
    pub windows: Vec<Rect>,
}

impl Room {
    pub fn new(bounds: Rect, door: Rect, windows: Vec<Rect>) -> Self {
        Self {
            bounds,
            door,
            windows,
        }
    }

    /// A room with no door or windows.
    pub fn plain(bounds: Rect) -> Self {
        Self::new(bounds, Rect::default(), Vec::new())
    }

    pub fn contains(&self, point: Point) -> bool {
        self.bounds.contains(point)
    }

    /// Door or window under `point`; the door wins when both match.
    pub fn feature_at(&self, point: Point) -> Option<RoomFeature> {
        if self.door.has_area() && self.door.contains(point) {
            return Some(RoomFeature::Door);
        }
        self.windows
            .iter()
            .position(|w| w.contains(point))
            .map(RoomFeature::Window)
    }
}

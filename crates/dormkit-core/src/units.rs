//! Unit conversion utilities
//!
//! Scene coordinates are pixels. Each room preset knows its real-world size in
//! inches, which gives a per-axis inches-per-pixel scale. Distances are shown
//! in feet and inches (`12' 11"`).

use serde::{Deserialize, Serialize};

const INCHES_PER_FOOT: i64 = 12;

/// Format a length in inches as `feet' inches"`.
///
/// The value is rounded to the nearest whole inch (halves away from zero)
/// before splitting, so 11.6 inches becomes `1' 0"`.
pub fn format_feet_inches(inches: f64) -> String {
    let total = inches.round() as i64;
    let feet = total.div_euclid(INCHES_PER_FOOT);
    let rest = total.rem_euclid(INCHES_PER_FOOT);
    format!("{}' {}\"", feet, rest)
}

/// Real-world size of a room
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RealDimensions {
    pub width_inches: f64,
    pub height_inches: f64,
}

impl RealDimensions {
    pub fn new(width_inches: f64, height_inches: f64) -> Self {
        Self {
            width_inches,
            height_inches,
        }
    }

    /// Builds dimensions from floor-plan style feet + inches pairs.
    pub fn from_feet_inches(
        width_feet: u32,
        width_inches: u32,
        height_feet: u32,
        height_inches: u32,
    ) -> Self {
        Self::new(
            f64::from(width_feet * 12 + width_inches),
            f64::from(height_feet * 12 + height_inches),
        )
    }

    pub fn width_label(&self) -> String {
        format_feet_inches(self.width_inches)
    }

    pub fn height_label(&self) -> String {
        format_feet_inches(self.height_inches)
    }
}

/// Inches-per-pixel scale on each axis
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaleFactors {
    pub x: f64,
    pub y: f64,
}

impl ScaleFactors {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Derives the scale from a room's real size and its pixel size.
    ///
    /// Returns `None` when the pixel size has no area.
    pub fn from_dimensions(real: &RealDimensions, pixel_width: f64, pixel_height: f64) -> Option<Self> {
        if pixel_width <= 0.0 || pixel_height <= 0.0 {
            return None;
        }
        Some(Self::new(
            real.width_inches / pixel_width,
            real.height_inches / pixel_height,
        ))
    }

    /// Real-world length in inches of a pixel delta.
    pub fn distance_inches(&self, dx: f64, dy: f64) -> f64 {
        let dx_in = dx * self.x;
        let dy_in = dy * self.y;
        (dx_in * dx_in + dy_in * dy_in).sqrt()
    }

    /// Formats a pixel delta as a feet/inch label.
    pub fn format_distance(&self, dx: f64, dy: f64) -> String {
        format_feet_inches(self.distance_inches(dx, dy))
    }
}

//! Axis-aligned geometry used for placement checks.
//!
//! All bounds are inclusive: a point on an edge is inside, and two rectangles
//! that share an edge overlap.

use serde::{Deserialize, Serialize};

/// A point in scene coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        ((other.x - self.x).powi(2) + (other.y - self.y).powi(2)).sqrt()
    }
}

/// An axis-aligned rectangle anchored at its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Creates a rectangle of the given size centered on `center`.
    pub fn centered_at(center: Point, width: f64, height: f64) -> Self {
        Self::new(
            center.x - width / 2.0,
            center.y - height / 2.0,
            width,
            height,
        )
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn top_left(&self) -> Point {
        Point::new(self.left, self.top)
    }

    pub fn center(&self) -> Point {
        Point::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    pub fn has_area(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }

    pub fn contains(&self, point: Point) -> bool {
        contains(self, point)
    }

    pub fn overlaps(&self, other: &Rect) -> bool {
        overlaps(self, other)
    }

    /// True if `inner` lies entirely within this rectangle, edges included.
    pub fn encloses(&self, inner: &Rect) -> bool {
        inner.left >= self.left
            && inner.right() <= self.right()
            && inner.top >= self.top
            && inner.bottom() <= self.bottom()
    }

    /// Same size, moved so its top-left corner is at `(left, top)`.
    pub fn moved_to(&self, left: f64, top: f64) -> Self {
        Self::new(left, top, self.width, self.height)
    }

    /// Width and height swapped, re-centered on the current center.
    pub fn rotated_quarter(&self) -> Self {
        Self::centered_at(self.center(), self.height, self.width)
    }
}

/// Inclusive point-in-rectangle test.
pub fn contains(rect: &Rect, point: Point) -> bool {
    rect.left <= point.x
        && point.x <= rect.right()
        && rect.top <= point.y
        && point.y <= rect.bottom()
}

/// Inclusive AABB intersection; touching edges count as overlapping.
pub fn overlaps(a: &Rect, b: &Rect) -> bool {
    a.left <= b.right() && a.right() >= b.left && a.top <= b.bottom() && a.bottom() >= b.top
}

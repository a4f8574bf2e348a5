//! Hit tests answered by the surrounding UI shell.
//!
//! The designer never knows where the palette or the trash are drawn. It asks
//! a [`ShellHitTest`] implementation instead. [`ScreenLayout`] is the stock
//! implementation: palette entries stacked on the right edge of the window and
//! a square trash region in the bottom-right corner.

use crate::geometry::{overlaps, Point, Rect};
use crate::model::FurnitureKind;

/// Geometric queries the designer delegates to the shell.
pub trait ShellHitTest {
    /// Palette entry under `point`, if any.
    fn palette_hit(&self, point: Point) -> Option<FurnitureKind>;

    /// True if `rect` overlaps the trash region.
    fn over_trash(&self, rect: &Rect) -> bool;
}

/// Sizes used to place the palette and trash on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenMetrics {
    pub window_width: f64,
    pub window_height: f64,
    pub palette_width: f64,
    pub palette_height: f64,
    pub palette_spacing: f64,
    pub palette_top: f64,
    pub trash_size: f64,
    pub trash_margin: f64,
}

impl Default for ScreenMetrics {
    fn default() -> Self {
        Self {
            window_width: 1280.0,
            window_height: 720.0,
            palette_width: 140.0,
            palette_height: 160.0,
            palette_spacing: 160.0,
            palette_top: 100.0,
            trash_size: 100.0,
            trash_margin: 20.0,
        }
    }
}

/// Palette and trash regions in screen coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenLayout {
    palette: Vec<(FurnitureKind, Rect)>,
    trash: Rect,
}

impl ScreenLayout {
    pub fn new(palette: Vec<(FurnitureKind, Rect)>, trash: Rect) -> Self {
        Self { palette, trash }
    }

    /// Lays out one palette entry per furniture kind down the right edge.
    pub fn from_metrics(metrics: &ScreenMetrics) -> Self {
        let left = metrics.window_width - metrics.palette_width;
        let palette = FurnitureKind::ALL
            .iter()
            .enumerate()
            .map(|(i, kind)| {
                let top = metrics.palette_top + i as f64 * metrics.palette_spacing;
                (
                    *kind,
                    Rect::new(left, top, metrics.palette_width, metrics.palette_height),
                )
            })
            .collect();

        let trash = Rect::new(
            metrics.window_width - metrics.trash_size - metrics.trash_margin,
            metrics.window_height - metrics.trash_size - metrics.trash_margin,
            metrics.trash_size,
            metrics.trash_size,
        );

        Self::new(palette, trash)
    }

    pub fn palette_entries(&self) -> &[(FurnitureKind, Rect)] {
        &self.palette
    }

    pub fn trash(&self) -> Rect {
        self.trash
    }
}

impl Default for ScreenLayout {
    fn default() -> Self {
        Self::from_metrics(&ScreenMetrics::default())
    }
}

impl ShellHitTest for ScreenLayout {
    fn palette_hit(&self, point: Point) -> Option<FurnitureKind> {
        self.palette
            .iter()
            .find(|(_, rect)| rect.contains(point))
            .map(|(kind, _)| *kind)
    }

    fn over_trash(&self, rect: &Rect) -> bool {
        overlaps(rect, &self.trash)
    }
}

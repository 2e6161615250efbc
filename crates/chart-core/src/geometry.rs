// File: crates/chart-core/src/geometry.rs
// Summary: Plot-area rectangle derived from canvas size and insets.

use crate::types::Insets;

/// Inner plotting rectangle in canvas pixels. May be inverted for degenerate
/// canvases smaller than the insets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlotArea {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl PlotArea {
    pub const fn from_ltrb(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self { left, top, right, bottom }
    }

    pub fn from_canvas(width: i32, height: i32, insets: &Insets) -> Self {
        Self::from_ltrb(
            insets.left as i32,
            insets.top as i32,
            width.saturating_sub(insets.right as i32),
            height.saturating_sub(insets.bottom as i32),
        )
    }

    /// Widened to `i64`; an inverted area over the full `i32` range does not fit.
    pub const fn width(&self) -> i64 { self.right as i64 - self.left as i64 }
    pub const fn height(&self) -> i64 { self.bottom as i64 - self.top as i64 }
}

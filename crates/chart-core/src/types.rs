// File: crates/chart-core/src/types.rs
// Summary: Shared types and constants (canvas sizes, margins, chart requests).

use crate::series::Sample;

/// Default canvas width in pixels.
pub const WIDTH: i32 = 600;
/// Default canvas height in pixels.
pub const HEIGHT: i32 = 300;

/// Screen margins around the plot area, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(60, 30, 40, 50)
    }
}

/// One rendering job: the samples to plot, the legend text and the canvas size.
///
/// Width and height are not validated; zero or negative sizes produce a
/// degenerate document rather than an error.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartRequest {
    pub samples: Vec<Sample>,
    pub series_label: String,
    pub width: i32,
    pub height: i32,
}

impl ChartRequest {
    pub fn new(samples: Vec<Sample>, series_label: impl Into<String>) -> Self {
        Self { samples, series_label: series_label.into(), width: WIDTH, height: HEIGHT }
    }

    pub fn with_size(mut self, width: i32, height: i32) -> Self {
        self.width = width;
        self.height = height;
        self
    }
}

// File: crates/chart-core/src/scale.rs
// Summary: Rounded value domain plus index (X) and value (Y) scale transforms.

use crate::geometry::PlotArea;

/// Vertical value range, rounded outward to multiples of 10.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueDomain {
    pub min: f64,
    pub max: f64,
}

impl ValueDomain {
    /// Scan finite values for their bounds, widen a flat series by 1 on each
    /// side, then round min down and max up to the nearest multiple of 10.
    /// With no finite values the series is treated as all zeros.
    pub fn from_values<I: IntoIterator<Item = f64>>(values: I) -> Self {
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        for v in values.into_iter().filter(|v| v.is_finite()) {
            lo = lo.min(v);
            hi = hi.max(v);
        }
        if !lo.is_finite() || !hi.is_finite() {
            lo = 0.0;
            hi = 0.0;
        }
        if lo == hi {
            lo -= 1.0;
            hi += 1.0;
        }
        let min = (lo / 10.0).floor() * 10.0;
        let mut max = (hi / 10.0).ceil() * 10.0;
        // Beyond 2^53 the widening above is lost to rounding; step max past at least one ulp.
        if !(max > min) {
            max = min + (min.abs() * f64::EPSILON * 2.0).max(10.0);
        }
        Self { min, max }
    }

    #[inline]
    pub fn span(&self) -> f64 { self.max - self.min }

    /// Midpoint of the domain, halves rounding up.
    pub fn midpoint(&self) -> f64 {
        ((self.min + self.max) / 2.0 + 0.5).floor()
    }
}

/// Maps ordinal sample index to canvas X across the plot width.
#[derive(Clone, Copy, Debug)]
pub struct IndexScale {
    left: f64,
    inner_width: f64,
    count: usize,
}

impl IndexScale {
    pub fn new(area: &PlotArea, count: usize) -> Self {
        Self { left: area.left as f64, inner_width: area.width() as f64, count }
    }

    /// First index lands on the left edge, last on the right edge. A lone
    /// sample is centered horizontally.
    #[inline]
    pub fn to_px(&self, index: usize) -> f64 {
        if self.count <= 1 {
            return self.left + self.inner_width / 2.0;
        }
        self.left + (index as f64 / (self.count - 1) as f64) * self.inner_width
    }
}

/// Maps a value to canvas Y inside the plot area; larger values sit higher.
#[derive(Clone, Copy, Debug)]
pub struct ValueScale {
    top: f64,
    inner_height: f64,
    domain: ValueDomain,
}

impl ValueScale {
    pub fn new(area: &PlotArea, domain: ValueDomain) -> Self {
        Self { top: area.top as f64, inner_height: area.height() as f64, domain }
    }

    #[inline]
    pub fn to_px(&self, value: f64) -> f64 {
        self.top + self.inner_height
            - ((value - self.domain.min) / self.domain.span()) * self.inner_height
    }
}

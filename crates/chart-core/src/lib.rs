// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports sample extraction and the SVG chart rasterizer.

pub mod chart;
pub mod series;
pub mod axis;
pub mod grid;
pub mod types;
pub mod geometry;
pub mod scale;
pub mod theme;
pub mod svg;
pub mod error;

pub use chart::{ChartRasterizer, RenderOptions};
pub use series::{samples_from_json, samples_from_map, is_period_label, Sample};
pub use types::{ChartRequest, Insets};
pub use scale::ValueDomain;
pub use theme::Theme;
pub use error::ChartError;

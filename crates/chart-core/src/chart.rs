// File: crates/chart-core/src/chart.rs
// Summary: Chart rasterizer turning monthly samples into a self-contained SVG line chart.

use crate::axis::{format_month_label, x_label_indices, y_labels, YLabelKind};
use crate::geometry::PlotArea;
use crate::grid::linspace;
use crate::scale::{IndexScale, ValueDomain, ValueScale};
use crate::svg::{polyline_path, Anchor, SvgWriter, TextStyle};
use crate::theme::Theme;
use crate::types::{ChartRequest, Insets};

pub const NO_DATA_MESSAGE: &str = "No data available";
pub const X_AXIS_TITLE: &str = "Timeline";

// Offsets of the furniture relative to the canvas edges.
const X_LABEL_OFFSET: f64 = 25.0;
const X_TITLE_OFFSET: f64 = 5.0;
const Y_LABEL_GAP: f64 = 10.0;
const LEGEND_SHIFT_X: f64 = 50.0;
const LEGEND_TOP: f64 = 15.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderOptions {
    pub insets: Insets,
    pub theme: Theme,
    /// Radius of the marker drawn at every data point.
    pub point_radius: f64,
    /// Radius of the legend's color dot.
    pub legend_dot_radius: f64,
    pub line_width: f64,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            insets: Insets::default(),
            theme: Theme::light(),
            point_radius: 3.0,
            legend_dot_radius: 4.0,
            line_width: 2.0,
        }
    }
}

impl RenderOptions {
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }
}

/// Renders chart documents. Holds only immutable options, so one instance can
/// be shared freely across threads; output depends on inputs alone.
#[derive(Clone, Copy, Debug, Default)]
pub struct ChartRasterizer {
    opts: RenderOptions,
}

impl ChartRasterizer {
    pub fn new(opts: RenderOptions) -> Self {
        Self { opts }
    }

    /// Render `req` as an SVG document of exactly `req.width` x `req.height`.
    ///
    /// An empty sample list yields the "No data available" placeholder.
    /// Non-finite values are left out of the domain, the line and the markers.
    pub fn render(&self, req: &ChartRequest) -> String {
        let theme = &self.opts.theme;
        let mut svg = SvgWriter::new(req.width, req.height);
        if req.samples.is_empty() {
            draw_placeholder(&mut svg, theme.placeholder_background, theme.muted_text, NO_DATA_MESSAGE);
            return svg.finish();
        }

        let n = req.samples.len();
        let area = PlotArea::from_canvas(req.width, req.height, &self.opts.insets);
        let domain = ValueDomain::from_values(req.samples.iter().map(|s| s.value));
        let xs = IndexScale::new(&area, n);
        let ys = ValueScale::new(&area, domain);

        let points: Vec<(f64, f64)> = req
            .samples
            .iter()
            .enumerate()
            .filter(|(_, s)| s.value.is_finite())
            .map(|(i, s)| (xs.to_px(i), ys.to_px(s.value)))
            .collect();

        svg.comment("Background");
        svg.fill_canvas(theme.background);
        draw_axes(&mut svg, &area, theme);
        draw_grid(&mut svg, &area, theme);

        svg.comment("Axis labels");
        let label_style = TextStyle::new(12, theme.axis_label);
        let x_label_y = req.height as f64 - X_LABEL_OFFSET;
        for i in x_label_indices(n) {
            let text = format_month_label(&req.samples[i].date);
            svg.text(xs.to_px(i), x_label_y, label_style.anchor(Anchor::Middle), &text);
        }
        draw_y_labels(&mut svg, &area, &domain, label_style);

        svg.comment("X axis title");
        svg.text(
            req.width as f64 / 2.0,
            req.height as f64 - X_TITLE_OFFSET,
            TextStyle::new(14, theme.axis_label).anchor(Anchor::Middle),
            X_AXIS_TITLE,
        );

        svg.comment("Legend");
        svg.begin_group_translate(req.width as f64 / 2.0 - LEGEND_SHIFT_X, LEGEND_TOP);
        svg.circle(10.0, 10.0, self.opts.legend_dot_radius, theme.line_stroke);
        svg.text(20.0, 14.0, label_style, &req.series_label);
        svg.end_group();

        svg.comment("Chart line");
        svg.path(&polyline_path(&points), theme.line_stroke, self.opts.line_width);

        svg.comment("Data points");
        for &(x, y) in &points {
            svg.circle(x, y, self.opts.point_radius, theme.line_stroke);
        }

        svg.finish()
    }

    /// Document shown when the data behind a chart could not be obtained:
    /// same canvas contract as [`render`](Self::render), centered error text.
    pub fn render_error(&self, message: &str, width: i32, height: i32) -> String {
        let theme = &self.opts.theme;
        let mut svg = SvgWriter::new(width, height);
        let text = format!("Error generating chart: {message}");
        draw_placeholder(&mut svg, theme.placeholder_background, theme.error_text, &text);
        svg.finish()
    }
}

// ---- helpers ----------------------------------------------------------------

fn draw_placeholder(svg: &mut SvgWriter, background: &str, color: &str, message: &str) {
    svg.fill_canvas(background);
    svg.text("50%", "50%", TextStyle::new(16, color).anchor(Anchor::Middle).centered(), message);
}

fn draw_axes(svg: &mut SvgWriter, area: &PlotArea, theme: &Theme) {
    let (l, t, r, b) = (area.left as f64, area.top as f64, area.right as f64, area.bottom as f64);
    svg.comment("Axes");
    svg.line(l, t, l, b, theme.axis_line, 1.0);
    svg.line(l, b, r, b, theme.axis_line, 1.0);
}

fn draw_grid(svg: &mut SvgWriter, area: &PlotArea, theme: &Theme) {
    let (l, r) = (area.left as f64, area.right as f64);
    svg.comment("Grid lines");
    for y in linspace(area.top as f64, area.bottom as f64, 3) {
        svg.dashed_line(l, y, r, y, theme.grid, "5,5");
    }
}

fn draw_y_labels(svg: &mut SvgWriter, area: &PlotArea, domain: &ValueDomain, style: TextStyle<'_>) {
    let x = area.left as f64 - Y_LABEL_GAP;
    let top = area.top as f64;
    let inner_height = area.height() as f64;
    let style = style.anchor(Anchor::End).centered();
    for label in y_labels(domain) {
        let y = match label.kind {
            YLabelKind::Min => top + inner_height,
            YLabelKind::Mid => top + inner_height / 2.0,
            YLabelKind::Max => top,
        };
        svg.text(x, y, style, &format_value(label.value));
    }
}

/// Integer-valued labels print without a fraction; negative zero prints as `0`.
fn format_value(v: f64) -> String {
    let v = if v == 0.0 { 0.0 } else { v };
    v.to_string()
}

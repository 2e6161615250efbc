// File: crates/chart-core/src/svg.rs
// Summary: Minimal SVG markup writer with text escaping; the drawing surface for chart documents.

use std::borrow::Cow;
use std::fmt::{Display, Write};

pub const FONT_FAMILY: &str = "Arial, sans-serif";

/// Escape text for use in a text node or a double-quoted attribute value.
pub fn escape_text(s: &str) -> Cow<'_, str> {
    if !s.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(s);
    }
    let mut out = String::with_capacity(s.len() + 16);
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// `M x0,y0 L x1,y1 ...` for the given points; empty when there are none.
pub fn polyline_path(points: &[(f64, f64)]) -> String {
    let mut d = String::new();
    for (i, (x, y)) in points.iter().enumerate() {
        let _ = write!(d, "{}{},{}", if i == 0 { "M " } else { " L " }, x, y);
    }
    d
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    Start,
    Middle,
    End,
}

impl Anchor {
    fn as_str(self) -> &'static str {
        match self {
            Anchor::Start => "start",
            Anchor::Middle => "middle",
            Anchor::End => "end",
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct TextStyle<'a> {
    pub size: u32,
    pub fill: &'a str,
    pub anchor: Anchor,
    /// Vertically center the glyphs on `y` instead of sitting on the baseline.
    pub centered_baseline: bool,
}

impl<'a> TextStyle<'a> {
    pub fn new(size: u32, fill: &'a str) -> Self {
        Self { size, fill, anchor: Anchor::Start, centered_baseline: false }
    }
    pub fn anchor(mut self, anchor: Anchor) -> Self {
        self.anchor = anchor;
        self
    }
    pub fn centered(mut self) -> Self {
        self.centered_baseline = true;
        self
    }
}

/// Accumulates one `<svg>` document. Elements are written in call order, one
/// per line; user text goes through [`escape_text`].
pub struct SvgWriter {
    buf: String,
    depth: usize,
}

impl SvgWriter {
    pub fn new(width: i32, height: i32) -> Self {
        let mut buf = String::with_capacity(4096);
        let _ = writeln!(
            buf,
            r#"<svg width="{width}" height="{height}" xmlns="http://www.w3.org/2000/svg">"#
        );
        Self { buf, depth: 1 }
    }

    fn indent(&mut self) {
        for _ in 0..self.depth { self.buf.push_str("  "); }
    }

    pub fn comment(&mut self, text: &str) {
        self.indent();
        let _ = writeln!(self.buf, "<!-- {} -->", text.replace("--", "- -"));
    }

    /// Rectangle covering the whole canvas.
    pub fn fill_canvas(&mut self, fill: &str) {
        self.indent();
        let _ = writeln!(self.buf, r#"<rect width="100%" height="100%" fill="{}"/>"#, escape_text(fill));
    }

    pub fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, stroke: &str, stroke_width: f64) {
        self.indent();
        let _ = writeln!(
            self.buf,
            r#"<line x1="{x1}" y1="{y1}" x2="{x2}" y2="{y2}" stroke="{}" stroke-width="{stroke_width}"/>"#,
            escape_text(stroke)
        );
    }

    pub fn dashed_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, stroke: &str, dash: &str) {
        self.indent();
        let _ = writeln!(
            self.buf,
            r#"<line x1="{x1}" y1="{y1}" x2="{x2}" y2="{y2}" stroke="{}" stroke-dasharray="{}"/>"#,
            escape_text(stroke),
            escape_text(dash)
        );
    }

    pub fn circle(&mut self, cx: f64, cy: f64, r: f64, fill: &str) {
        self.indent();
        let _ = writeln!(self.buf, r#"<circle cx="{cx}" cy="{cy}" r="{r}" fill="{}"/>"#, escape_text(fill));
    }

    /// Unfilled stroked path; `d` is written as given.
    pub fn path(&mut self, d: &str, stroke: &str, stroke_width: f64) {
        self.indent();
        let _ = writeln!(
            self.buf,
            r#"<path d="{}" fill="none" stroke="{}" stroke-width="{stroke_width}"/>"#,
            escape_text(d),
            escape_text(stroke)
        );
    }

    /// Text element. Coordinates accept numbers or strings such as `50%`.
    pub fn text(&mut self, x: impl Display, y: impl Display, style: TextStyle<'_>, content: &str) {
        self.indent();
        let _ = write!(self.buf, r#"<text x="{x}" y="{y}" font-family="{FONT_FAMILY}" font-size="{}" fill="{}""#,
            style.size, escape_text(style.fill));
        if style.anchor != Anchor::Start {
            let _ = write!(self.buf, r#" text-anchor="{}""#, style.anchor.as_str());
        }
        if style.centered_baseline {
            self.buf.push_str(r#" dominant-baseline="middle""#);
        }
        let _ = writeln!(self.buf, ">{}</text>", escape_text(content));
    }

    pub fn begin_group_translate(&mut self, tx: f64, ty: f64) {
        self.indent();
        let _ = writeln!(self.buf, r#"<g transform="translate({tx}, {ty})">"#);
        self.depth += 1;
    }

    pub fn end_group(&mut self) {
        self.depth = self.depth.saturating_sub(1);
        self.indent();
        self.buf.push_str("</g>\n");
    }

    /// Close any open groups and the document.
    pub fn finish(mut self) -> String {
        while self.depth > 1 { self.end_group(); }
        self.buf.push_str("</svg>\n");
        self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(escape_text("plain-repo"), "plain-repo");
        assert!(matches!(escape_text("plain"), Cow::Borrowed(_)));
        assert_eq!(
            escape_text(r#"<script>alert("x") & 'y'</script>"#),
            "&lt;script&gt;alert(&quot;x&quot;) &amp; &#39;y&#39;&lt;/script&gt;"
        );
    }

    #[test]
    fn path_data_joins_points() {
        assert_eq!(polyline_path(&[]), "");
        assert_eq!(polyline_path(&[(60.0, 250.0)]), "M 60,250");
        assert_eq!(polyline_path(&[(60.0, 250.0), (570.0, 40.5)]), "M 60,250 L 570,40.5");
    }

    #[test]
    fn writer_declares_size_and_closes_groups() {
        let mut w = SvgWriter::new(320, 200);
        w.begin_group_translate(110.0, 15.0);
        w.circle(10.0, 10.0, 4.0, "#3b82f6");
        let doc = w.finish();
        assert!(doc.starts_with(r#"<svg width="320" height="200" "#));
        assert!(doc.contains(r#"<g transform="translate(110, 15)">"#));
        assert!(doc.contains("    <circle cx=\"10\" cy=\"10\" r=\"4\" fill=\"#3b82f6\"/>"));
        assert!(doc.ends_with("  </g>\n</svg>\n"));
    }

    #[test]
    fn text_attributes_follow_style() {
        let mut w = SvgWriter::new(10, 10);
        let style = TextStyle::new(12, "#495057").anchor(Anchor::End).centered();
        w.text(50.0, 250.0, style, "a<b");
        let doc = w.finish();
        assert!(doc.contains(
            r##"<text x="50" y="250" font-family="Arial, sans-serif" font-size="12" fill="#495057" text-anchor="end" dominant-baseline="middle">a&lt;b</text>"##
        ));
    }
}

// File: crates/chart-core/src/theme.rs
// Summary: Light/Dark theming for chart document colors.

/// Colors are CSS color strings written verbatim into the document.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    pub name: &'static str,
    pub background: &'static str,
    pub placeholder_background: &'static str,
    pub axis_line: &'static str,
    pub grid: &'static str,
    pub axis_label: &'static str,
    pub muted_text: &'static str,
    pub error_text: &'static str,
    pub line_stroke: &'static str,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: "white",
            placeholder_background: "#f8f9fa",
            axis_line: "#dee2e6",
            grid: "#f1f3f5",
            axis_label: "#495057",
            muted_text: "#6c757d",
            error_text: "#dc3545",
            line_stroke: "#3b82f6",
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: "#121214",
            placeholder_background: "#1c1c20",
            axis_line: "#4a4a52",
            grid: "#28282d",
            axis_label: "#d2d2dc",
            muted_text: "#96969f",
            error_text: "#f87171",
            line_stroke: "#40a0ff",
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Self::light() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::light()
}

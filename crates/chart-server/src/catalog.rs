// File: crates/chart-server/src/catalog.rs
// Summary: Metrics and platforms the upstream service publishes, for clients building chart URLs.

use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct CatalogEntry {
    pub label: &'static str,
    pub value: &'static str,
}

const fn entry(label: &'static str, value: &'static str) -> CatalogEntry {
    CatalogEntry { label, value }
}

pub const METRICS: &[CatalogEntry] = &[
    entry("OpenRank", "openrank"),
    entry("Activity", "activity"),
    entry("Attention", "attention"),
    entry("Stars", "stars"),
    entry("Forks", "technical_fork"),
    entry("Contributors", "contributors"),
    entry("Participants", "participants"),
    entry("IssuesNew", "issues_new"),
    entry("IssuesClosed", "issues_closed"),
    entry("IssueComments", "issue_comments"),
    entry("ChangeRequests", "change_requests"),
    entry("code_change_lines_add", "code_change_lines_add"),
    entry("code_change_lines_remove", "code_change_lines_remove"),
    entry("code_change_lines_sum", "code_change_lines_sum"),
];

pub const PLATFORMS: &[CatalogEntry] = &[
    entry("GitHub", "github"),
    entry("Gitee", "gitee"),
];

#[derive(Debug, Serialize)]
pub struct Catalog {
    pub metrics: &'static [CatalogEntry],
    pub platforms: &'static [CatalogEntry],
    pub themes: Vec<&'static str>,
}

pub fn catalog() -> Catalog {
    Catalog {
        metrics: METRICS,
        platforms: PLATFORMS,
        themes: chart_core::theme::presets().iter().map(|t| t.name).collect(),
    }
}

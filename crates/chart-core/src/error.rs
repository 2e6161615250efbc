// File: crates/chart-core/src/error.rs
// Summary: Error type for sample extraction.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChartError {
    #[error("invalid metric JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("metric document must be a JSON object, found {0}")]
    NotAnObject(&'static str),
}

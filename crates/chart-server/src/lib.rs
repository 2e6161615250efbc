// File: crates/chart-server/src/lib.rs
// Summary: Chart server library: configuration, metric sources and HTTP routes.

pub mod api;
pub mod catalog;
pub mod config;
pub mod source;

pub use self::api::{router, start_server, AppState};
pub use self::config::{load_config, ServerConfig};
pub use self::source::{FetchError, HttpMetricSource, MetricQuery, MetricSource};

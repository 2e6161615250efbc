// File: crates/chart-server/src/config.rs
// Summary: Server configuration loaded from an optional YAML file plus CHART_SERVER__* env overrides.

use std::time::Duration;

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "https://oss.open-digger.cn";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_listen_port")]
    pub listen_port: u16,
    #[serde(default)]
    pub upstream: UpstreamConfig,
    /// `max-age` advertised on successfully rendered charts.
    #[serde(default = "default_cache_max_age_secs")]
    pub cache_max_age_secs: u64,
    #[serde(default = "default_theme")]
    pub default_theme: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl UpstreamConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self { base_url: default_base_url(), timeout_ms: default_timeout_ms() }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_port: default_listen_port(),
            upstream: UpstreamConfig::default(),
            cache_max_age_secs: default_cache_max_age_secs(),
            default_theme: default_theme(),
        }
    }
}

fn default_listen_port() -> u16 { 8080 }
fn default_base_url() -> String { DEFAULT_BASE_URL.to_string() }
fn default_timeout_ms() -> u64 { 10_000 }
fn default_cache_max_age_secs() -> u64 { 3600 }
fn default_theme() -> String { "light".to_string() }

/// Load configuration. The file is optional; every field has a default.
pub fn load_config(path: &str) -> Result<ServerConfig> {
    let config = Config::builder()
        .add_source(File::with_name(path).required(false))
        .add_source(Environment::with_prefix("CHART_SERVER").separator("__"))
        .build()
        .with_context(|| format!("failed to read configuration from '{path}'"))?;

    config.try_deserialize().context("invalid chart-server configuration")
}

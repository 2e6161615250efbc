// File: crates/chart-server/src/source.rs
// Summary: Metric source seam and the HTTP implementation backed by the upstream metrics service.

use async_trait::async_trait;
use chart_core::{samples_from_json, ChartError, Sample};
use thiserror::Error;
use tracing::debug;

use crate::config::UpstreamConfig;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to fetch {url}: HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("unreadable metric document: {0}")]
    Parse(#[from] ChartError),
}

/// Identifies one upstream metric document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricQuery {
    pub platform: String,
    pub repo: String,
    pub metric: String,
}

impl MetricQuery {
    pub fn new(platform: impl Into<String>, repo: impl Into<String>, metric: impl Into<String>) -> Self {
        Self { platform: platform.into(), repo: repo.into(), metric: metric.into() }
    }

    /// `{platform}/{repo}/{metric}.json`, relative to the upstream base URL.
    pub fn path(&self) -> String {
        format!("{}/{}/{}.json", self.platform, self.repo, self.metric)
    }

    /// Legend text for charts of this metric.
    pub fn series_label(&self) -> String {
        format!("{}-{}", self.repo, self.metric)
    }
}

/// Strip surrounding whitespace and a GitHub/Gitee URL prefix, so pasted
/// repository links work as `owner/name`.
pub fn normalize_repo(raw: &str) -> String {
    let trimmed = raw.trim();
    for prefix in ["https://github.com/", "https://gitee.com/"] {
        if let Some(rest) = trimmed.strip_prefix(prefix) {
            return rest.to_string();
        }
    }
    trimmed.to_string()
}

#[async_trait]
pub trait MetricSource: Send + Sync {
    /// Monthly samples of one metric, sorted by date.
    async fn fetch_samples(&self, query: &MetricQuery) -> Result<Vec<Sample>, FetchError>;
}

pub struct HttpMetricSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpMetricSource {
    pub fn new(cfg: &UpstreamConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder().timeout(cfg.timeout()).build()?;
        Ok(Self { client, base_url: cfg.base_url.trim_end_matches('/').to_string() })
    }

    pub fn url_for(&self, query: &MetricQuery) -> String {
        format!("{}/{}", self.base_url, query.path())
    }
}

#[async_trait]
impl MetricSource for HttpMetricSource {
    async fn fetch_samples(&self, query: &MetricQuery) -> Result<Vec<Sample>, FetchError> {
        let url = self.url_for(query);
        debug!(%url, "fetching metric document");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| FetchError::Request { url: url.clone(), source })?;

        if !response.status().is_success() {
            return Err(FetchError::Status { url, status: response.status().as_u16() });
        }

        let body = response
            .text()
            .await
            .map_err(|source| FetchError::Request { url: url.clone(), source })?;
        let samples = samples_from_json(&body)?;
        debug!(%url, samples = samples.len(), "metric document parsed");
        Ok(samples)
    }
}

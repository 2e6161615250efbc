// File: crates/chart-server/tests/api.rs
// Purpose: Route behavior of the chart server against an in-memory metric source.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use chart_core::{samples_from_json, Sample};
use chart_server::{router, AppState, FetchError, MetricQuery, MetricSource, ServerConfig};
use tower::ServiceExt;

/// Serves one canned document (or a canned failure) and records queries.
struct StubSource {
    document: Option<&'static str>,
    seen: Mutex<Vec<MetricQuery>>,
}

impl StubSource {
    fn serving(document: &'static str) -> Arc<Self> {
        Arc::new(Self { document: Some(document), seen: Mutex::new(Vec::new()) })
    }
    fn failing() -> Arc<Self> {
        Arc::new(Self { document: None, seen: Mutex::new(Vec::new()) })
    }
}

#[async_trait]
impl MetricSource for StubSource {
    async fn fetch_samples(&self, query: &MetricQuery) -> Result<Vec<Sample>, FetchError> {
        self.seen.lock().unwrap().push(query.clone());
        match self.document {
            Some(doc) => Ok(samples_from_json(doc)?),
            None => Err(FetchError::Status { url: format!("https://upstream.test/{}", query.path()), status: 404 }),
        }
    }
}

async fn get(source: Arc<StubSource>, uri: &str) -> (StatusCode, Option<String>, Option<String>, String) {
    let app = router(AppState::new(source, ServerConfig::default()));
    let resp = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = resp.status();
    let header_str = |name: header::HeaderName| resp.headers().get(name).map(|v: &header::HeaderValue| v.to_str().unwrap().to_string());
    let content_type = header_str(header::CONTENT_TYPE);
    let cache = header_str(header::CACHE_CONTROL);
    let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    (status, content_type, cache, String::from_utf8(body.to_vec()).unwrap())
}

const DOC: &str = r#"{"2023": 39.5, "2023-02": 27, "2023-01": 12, "2023Q1": 39.5}"#;

#[tokio::test]
async fn renders_chart_for_valid_request() {
    let source = StubSource::serving(DOC);
    let (status, ct, cache, body) =
        get(source.clone(), "/api/svg?repo=X-lab2017/open-digger&metric=openrank&platform=github").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(ct.as_deref(), Some("image/svg+xml"));
    assert_eq!(cache.as_deref(), Some("public, max-age=3600"));
    assert!(body.starts_with(r#"<svg width="600" height="300""#));
    assert!(body.contains(r#"<path d="M 60,229 L 570,71.5""#));
    assert!(body.contains(">X-lab2017/open-digger-openrank</text>"));

    let seen = source.seen.lock().unwrap();
    assert_eq!(seen.as_slice(), &[MetricQuery::new("github", "X-lab2017/open-digger", "openrank")]);
}

#[tokio::test]
async fn honours_size_and_normalizes_repo_links() {
    let source = StubSource::serving(DOC);
    let (status, _, _, body) = get(
        source.clone(),
        "/api/svg?repo=https://github.com/rust-lang/rust&metric=stars&platform=github&width=800&height=400&theme=dark",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.starts_with(r#"<svg width="800" height="400""#));
    assert!(body.contains(r##"fill="#121214""##));
    assert_eq!(source.seen.lock().unwrap()[0].repo, "rust-lang/rust");
}

#[tokio::test]
async fn bad_dimensions_fall_back_to_defaults() {
    let (_, _, _, body) =
        get(StubSource::serving(DOC), "/api/svg?repo=a/b&metric=stars&platform=github&width=wide&height=").await;
    assert!(body.starts_with(r#"<svg width="600" height="300""#));
}

#[tokio::test]
async fn unit_suffixed_dimensions_keep_their_number() {
    let (_, _, _, body) =
        get(StubSource::serving(DOC), "/api/svg?repo=a/b&metric=stars&platform=github&width=800px&height=12.5").await;
    assert!(body.starts_with(r#"<svg width="800" height="12""#));
}

#[tokio::test]
async fn extreme_dimensions_still_render() {
    for uri in [
        "/api/svg?repo=a/b&metric=stars&platform=github&width=-2147483648",
        "/api/svg?repo=a/b&metric=stars&platform=github&width=2147483647&height=-2147483648",
        "/api/svg?repo=a/b&metric=stars&platform=github&width=-99999999999",
    ] {
        let (status, ct, _, body) = get(StubSource::serving(DOC), uri).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
        assert_eq!(ct.as_deref(), Some("image/svg+xml"));
        assert!(body.contains("<path d=\"M "), "{uri}");
        assert!(!body.contains("NaN"), "{uri}");
    }
    let (_, _, _, body) = get(StubSource::serving(DOC), "/api/svg?repo=a/b&metric=stars&platform=github&width=-2147483648").await;
    assert!(body.starts_with(r#"<svg width="-2147483648" height="300""#));
}

#[tokio::test]
async fn missing_parameters_are_rejected() {
    for (uri, name) in [
        ("/api/svg?metric=openrank&platform=github", "repo"),
        ("/api/svg?repo=a/b&platform=github", "metric"),
        ("/api/svg?repo=a/b&metric=openrank", "platform"),
        ("/api/svg?repo=https://gitee.com/&metric=openrank&platform=gitee", "repo"),
    ] {
        let source = StubSource::serving(DOC);
        let (status, _, _, body) = get(source.clone(), uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(body, format!("Missing required parameter: {name}"));
        assert!(source.seen.lock().unwrap().is_empty());
    }
}

#[tokio::test]
async fn upstream_failure_renders_error_document() {
    let (status, ct, cache, body) =
        get(StubSource::failing(), "/api/svg?repo=a/b&metric=openrank&platform=github&width=320&height=160").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(ct.as_deref(), Some("image/svg+xml"));
    assert_eq!(cache, None);
    assert!(body.starts_with(r#"<svg width="320" height="160""#));
    assert!(body.contains("Error generating chart: failed to fetch https://upstream.test/github/a/b/openrank.json: HTTP 404"));
    assert!(!body.contains("<path"));
}

#[tokio::test]
async fn document_without_monthly_keys_renders_placeholder() {
    let (status, _, _, body) =
        get(StubSource::serving(r#"{"2023": 5, "2023Q4": 2}"#), "/api/svg?repo=a/b&metric=stars&platform=github").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(">No data available</text>"));
}

#[tokio::test]
async fn catalog_lists_metrics_platforms_and_themes() {
    let (status, ct, _, body) = get(StubSource::serving(DOC), "/api/catalog").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ct.as_deref(), Some("application/json"));
    let v: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(v["metrics"][0]["value"], "openrank");
    assert_eq!(v["platforms"].as_array().unwrap().len(), 2);
    assert_eq!(v["themes"], serde_json::json!(["light", "dark"]));
}

#[tokio::test]
async fn health_reports_service_name() {
    let (status, _, _, body) = get(StubSource::serving(DOC), "/health").await;
    assert_eq!(status, StatusCode::OK);
    let v: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(v["service"], "chart-server");
    assert_eq!(v["status"], "healthy");
}

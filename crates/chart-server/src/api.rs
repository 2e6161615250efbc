// File: crates/chart-server/src/api.rs
// Summary: HTTP routes: SVG chart endpoint, metric catalog and health check.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use chart_core::types::{HEIGHT, WIDTH};
use chart_core::{theme, ChartRasterizer, ChartRequest, RenderOptions};
use serde::Deserialize;
use serde_json::json;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{error, info};

use crate::catalog::catalog;
use crate::config::ServerConfig;
use crate::source::{normalize_repo, MetricQuery, MetricSource};

pub const SVG_CONTENT_TYPE: &str = "image/svg+xml";

#[derive(Clone)]
pub struct AppState {
    pub source: Arc<dyn MetricSource>,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(source: Arc<dyn MetricSource>, config: ServerConfig) -> Self {
        Self { source, config: Arc::new(config) }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/svg", get(handle_svg))
        .route("/api/catalog", get(handle_catalog))
        .route("/health", get(handle_health))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub async fn start_server(state: AppState, port: u16) -> anyhow::Result<()> {
    let app = router(state);

    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Chart server listening on {}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}

#[derive(Debug, Default, Deserialize)]
pub struct SvgParams {
    repo: Option<String>,
    metric: Option<String>,
    platform: Option<String>,
    width: Option<String>,
    height: Option<String>,
    theme: Option<String>,
}

fn required<'a>(value: &'a Option<String>, name: &str) -> Result<&'a str, Response> {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err((StatusCode::BAD_REQUEST, format!("Missing required parameter: {name}")).into_response()),
    }
}

/// Canvas dimension from a query value, read like an embed URL's `width=800px`:
/// optional sign, then the leading decimal digits; anything after them is ignored.
/// Values without leading digits use the default; out-of-range values clamp to `i32`.
fn parse_dimension(raw: Option<&str>, default: i32) -> i32 {
    let Some(s) = raw.map(str::trim_start) else { return default };
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let digits = rest.bytes().take_while(u8::is_ascii_digit);
    let mut seen = false;
    let mut value: i64 = 0;
    for d in digits {
        seen = true;
        value = value.saturating_mul(10).saturating_add(i64::from(d - b'0'));
    }
    if !seen {
        return default;
    }
    let value = if negative { -value } else { value };
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

async fn handle_svg(State(state): State<AppState>, Query(params): Query<SvgParams>) -> Response {
    let repo = match required(&params.repo, "repo") {
        Ok(v) => normalize_repo(v),
        Err(resp) => return resp,
    };
    if repo.is_empty() {
        return (StatusCode::BAD_REQUEST, "Missing required parameter: repo").into_response();
    }
    let metric = match required(&params.metric, "metric") {
        Ok(v) => v.to_string(),
        Err(resp) => return resp,
    };
    let platform = match required(&params.platform, "platform") {
        Ok(v) => v.to_string(),
        Err(resp) => return resp,
    };
    let width = parse_dimension(params.width.as_deref(), WIDTH);
    let height = parse_dimension(params.height.as_deref(), HEIGHT);
    let theme = theme::find(params.theme.as_deref().unwrap_or(&state.config.default_theme));
    let rasterizer = ChartRasterizer::new(RenderOptions::default().with_theme(theme));

    let query = MetricQuery::new(platform, repo, metric);
    match state.source.fetch_samples(&query).await {
        Ok(samples) => {
            info!(repo = %query.repo, metric = %query.metric, samples = samples.len(), "rendering chart");
            let req = ChartRequest::new(samples, query.series_label()).with_size(width, height);
            let svg = rasterizer.render(&req);
            let cache = format!("public, max-age={}", state.config.cache_max_age_secs);
            (
                [(header::CONTENT_TYPE, SVG_CONTENT_TYPE.to_string()), (header::CACHE_CONTROL, cache)],
                svg,
            )
                .into_response()
        }
        Err(e) => {
            error!(repo = %query.repo, metric = %query.metric, error = %e, "error generating SVG");
            let svg = rasterizer.render_error(&e.to_string(), width, height);
            ([(header::CONTENT_TYPE, SVG_CONTENT_TYPE)], svg).into_response()
        }
    }
}

async fn handle_catalog() -> impl IntoResponse {
    Json(catalog())
}

async fn handle_health() -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "service": "chart-server",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

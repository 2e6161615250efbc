// File: crates/chart-server/src/main.rs
// Summary: Chart server binary; wires configuration, tracing and the HTTP metric source.

use std::sync::Arc;

use anyhow::Result;
use chart_server::{api, config, HttpMetricSource};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "chart-server")]
#[command(about = "Serves repository metric charts as embeddable SVG images")]
struct Args {
    #[arg(short, long, default_value = "config/chart-server.yaml")]
    config: String,

    /// Overrides `listen_port` from the configuration.
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "chart_server=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    // Load configuration
    let config = config::load_config(&args.config)?;
    let port = args.port.unwrap_or(config.listen_port);
    info!(upstream = %config.upstream.base_url, "Starting chart server on port {}", port);

    let source = Arc::new(HttpMetricSource::new(&config.upstream)?);
    api::start_server(api::AppState::new(source, config), port).await?;

    Ok(())
}

// File: crates/demo/src/main.rs
// Summary: Demo loads a metric JSON document or a date/value CSV and renders it to an SVG chart.

use anyhow::{Context, Result};
use chart_core::{is_period_label, samples_from_json, theme, ChartRasterizer, ChartRequest, RenderOptions, Sample};
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(name = "constellation-demo")]
#[command(about = "Render a monthly metric series to an SVG line chart")]
struct Args {
    /// Metric JSON document (period label -> value) or CSV with date,value columns.
    input: PathBuf,

    /// Legend text; defaults to the input file stem.
    #[arg(short, long)]
    label: Option<String>,

    #[arg(long, default_value_t = chart_core::types::WIDTH)]
    width: i32,

    #[arg(long, default_value_t = chart_core::types::HEIGHT)]
    height: i32,

    #[arg(long, default_value = "light")]
    theme: String,

    /// Output path; defaults to target/out/<stem>.svg.
    #[arg(short, long)]
    out: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "constellation_demo=info".into()),
        )
        .init();

    let args = Args::parse();
    info!("Using input file: {}", args.input.display());

    let samples = load_samples(&args.input)
        .with_context(|| format!("failed to load '{}'", args.input.display()))?;
    info!("Loaded {} monthly samples", samples.len());
    if samples.is_empty() {
        warn!("no YYYY-MM entries found; rendering the empty-state chart");
    }

    let label = args.label.clone().unwrap_or_else(|| stem_of(&args.input));
    let rasterizer = ChartRasterizer::new(RenderOptions::default().with_theme(theme::find(&args.theme)));
    let svg = rasterizer.render(&ChartRequest::new(samples, label).with_size(args.width, args.height));

    let out = args.out.clone().unwrap_or_else(|| default_out(&args.input));
    if let Some(parent) = out.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&out, svg).with_context(|| format!("writing {}", out.display()))?;
    info!("Wrote {}", out.display());
    Ok(())
}

fn load_samples(path: &Path) -> Result<Vec<Sample>> {
    let ext = path.extension().map(|e| e.to_string_lossy().to_lowercase()).unwrap_or_default();
    match ext.as_str() {
        "csv" => load_csv(path),
        _ => {
            let doc = std::fs::read_to_string(path)?;
            Ok(samples_from_json(&doc)?)
        }
    }
}

/// Read `date,value` rows; the same filtering and ordering as metric JSON.
fn load_csv(path: &Path) -> Result<Vec<Sample>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.trim().to_lowercase())
        .collect::<Vec<_>>();

    let idx = |names: &[&str]| headers.iter().position(|h| names.contains(&h.as_str()));
    let i_date = idx(&["date", "month", "period"]).context("no date/month/period column")?;
    let i_value = idx(&["value", "count", "metric"]).context("no value/count/metric column")?;

    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let Some(date) = rec.get(i_date).map(str::trim) else { continue };
        if !is_period_label(date) {
            continue;
        }
        let value = rec.get(i_value).and_then(|s| s.trim().parse::<f64>().ok()).unwrap_or(0.0);
        out.push(Sample::new(date, value));
    }
    out.sort_by(|a, b| a.date.cmp(&b.date));
    Ok(out)
}

fn stem_of(path: &Path) -> String {
    path.file_stem().and_then(|s| s.to_str()).unwrap_or("chart").to_string()
}

/// Produce output file name like target/out/<stem>.svg
fn default_out(input: &Path) -> PathBuf {
    let mut out = PathBuf::from("target/out");
    out.push(format!("{}.svg", stem_of(input)));
    out
}

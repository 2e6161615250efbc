// File: crates/chart-core/src/series.rs
// Summary: Sample model and extraction of monthly samples from metric JSON documents.
// Notes:
// - Upstream metric documents map period labels ("2023", "2023-01", "2023Q1", ...)
//   to values. Only year-month labels are charted.

use chrono::NaiveDate;
use serde_json::{Map, Value};

use crate::error::ChartError;

/// One (period label, value) pair. `date` is a zero-padded `YYYY-MM` label.
#[derive(Clone, Debug, PartialEq)]
pub struct Sample {
    pub date: String,
    pub value: f64,
}

impl Sample {
    pub fn new(date: impl Into<String>, value: f64) -> Self {
        Self { date: date.into(), value }
    }

    /// First day of the sample's month, if the label is a valid calendar month.
    pub fn month(&self) -> Option<NaiveDate> {
        parse_month(&self.date)
    }
}

/// True iff `key` is exactly four ASCII digits, a dash, and two ASCII digits.
pub fn is_period_label(key: &str) -> bool {
    let b = key.as_bytes();
    b.len() == 7
        && b[..4].iter().all(u8::is_ascii_digit)
        && b[4] == b'-'
        && b[5..].iter().all(u8::is_ascii_digit)
}

pub(crate) fn parse_month(label: &str) -> Option<NaiveDate> {
    if !is_period_label(label) { return None; }
    let year: i32 = label[..4].parse().ok()?;
    let month: u32 = label[5..].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, 1)
}

/// Keep year-month entries, coerce non-numeric values to 0 and order by date.
pub fn samples_from_map(raw: &Map<String, Value>) -> Vec<Sample> {
    let mut out: Vec<Sample> = raw
        .iter()
        .filter(|(k, _)| is_period_label(k))
        .map(|(k, v)| Sample::new(k.clone(), v.as_f64().unwrap_or(0.0)))
        .collect();
    // zero-padded labels sort chronologically
    out.sort_by(|a, b| a.date.cmp(&b.date));
    out
}

/// Parse a metric JSON document and extract its monthly samples.
pub fn samples_from_json(doc: &str) -> Result<Vec<Sample>, ChartError> {
    match serde_json::from_str::<Value>(doc)? {
        Value::Object(map) => Ok(samples_from_map(&map)),
        other => Err(ChartError::NotAnObject(kind_of(&other))),
    }
}

fn kind_of(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

//! Seed data embedded at compile time.
//!
//! `build.rs` copies `fixtures/metrics.csv` and `fixtures/snapshot.json` into
//! `OUT_DIR`; `include_str!` embeds them into the WASM binary.

use crate::metric::{MetricKind, MetricPoint, MetricStore};
use crate::snapshot::Snapshot;
use anyhow::{anyhow, Context};
use serde::Deserialize;

/// Metric rows: `metric,period,value`.
pub const METRICS_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/metrics.csv"));
/// Weather conditions and sustainability score.
pub const SNAPSHOT_JSON: &str = include_str!(concat!(env!("OUT_DIR"), "/snapshot.json"));

/// Everything the dashboard needs at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct Seed {
    pub metrics: MetricStore,
    pub snapshot: Snapshot,
}

#[derive(Debug, Deserialize)]
struct MetricRow {
    metric: String,
    period: String,
    value: f64,
}

/// Parse metric rows into a store. Rows keep file order within each series;
/// a metric with no rows produces an empty series.
pub fn parse_metrics_csv(csv_data: &str) -> anyhow::Result<MetricStore> {
    let mut store = MetricStore::default();

    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(csv_data.as_bytes());

    let headers = rdr.headers().context("metrics.csv: missing header row")?.clone();
    for result in rdr.records() {
        let record = result.context("metrics.csv: unreadable row")?;
        let line = record_line(csv_data, &record);
        let row: MetricRow = record
            .deserialize(Some(&headers))
            .with_context(|| format!("metrics.csv line {}: malformed row", line))?;
        let kind = MetricKind::from_series_key(&row.metric).ok_or_else(|| {
            anyhow!("metrics.csv line {}: unknown metric '{}'", line, row.metric)
        })?;
        store
            .push(kind, MetricPoint::new(row.period, row.value))
            .with_context(|| format!("metrics.csv line {}", line))?;
    }

    Ok(store)
}

/// 1-based file line a record starts on. The reader position sits just past
/// the previous record, so blank lines in between are skipped here.
fn record_line(csv_data: &str, record: &csv::StringRecord) -> usize {
    let bytes = csv_data.as_bytes();
    let mut start = record
        .position()
        .map_or(0, |pos| pos.byte() as usize)
        .min(bytes.len());
    while matches!(bytes.get(start), Some(b'\r' | b'\n')) {
        start += 1;
    }
    bytes[..start].iter().filter(|&&b| b == b'\n').count() + 1
}

/// Load the embedded seed data.
pub fn load_seed() -> anyhow::Result<Seed> {
    let metrics = parse_metrics_csv(METRICS_CSV)?;
    let snapshot = Snapshot::from_json(SNAPSHOT_JSON)?;
    log::debug!(
        "Loaded seed data: {} metric points, score {}",
        metrics.total_points(),
        snapshot.sustainability_score
    );
    Ok(Seed { metrics, snapshot })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(store: &MetricStore, kind: MetricKind) -> Vec<(String, f64)> {
        store
            .series(kind)
            .points
            .iter()
            .map(|p| (p.period.clone(), p.value))
            .collect()
    }

    #[test]
    fn test_load_seed_literal_values() {
        let seed = load_seed().unwrap();
        assert_eq!(
            values(&seed.metrics, MetricKind::Water),
            vec![
                ("Jan".to_string(), 2500.0),
                ("Feb".to_string(), 2700.0),
                ("Mar".to_string(), 3000.0)
            ]
        );
        assert_eq!(
            values(&seed.metrics, MetricKind::Fertilizer),
            vec![
                ("Jan".to_string(), 150.0),
                ("Feb".to_string(), 180.0),
                ("Mar".to_string(), 200.0)
            ]
        );
        assert_eq!(
            values(&seed.metrics, MetricKind::Yield),
            vec![
                ("Jan".to_string(), 1200.0),
                ("Feb".to_string(), 1400.0),
                ("Mar".to_string(), 1600.0)
            ]
        );
        assert_eq!(seed.snapshot.sustainability_score.to_string(), "85/100");
        assert_eq!(seed.snapshot.weather.condition, "Sunny");
    }

    #[test]
    fn test_missing_metric_is_empty_series() {
        let store = parse_metrics_csv("metric,period,value\nyields,Jan,1200\n").unwrap();
        assert!(store.series(MetricKind::Water).is_empty());
        assert!(store.series(MetricKind::Fertilizer).is_empty());
        assert_eq!(store.series(MetricKind::Yield).len(), 1);
    }

    #[test]
    fn test_header_only() {
        let store = parse_metrics_csv("metric,period,value\n").unwrap();
        assert_eq!(store.total_points(), 0);
    }

    #[test]
    fn test_unknown_metric_names_line() {
        let err = parse_metrics_csv("metric,period,value\nyields,Jan,1\nrainfall,Jan,3\n")
            .unwrap_err()
            .to_string();
        assert!(err.contains("line 3"), "{}", err);
        assert!(err.contains("rainfall"), "{}", err);
    }

    #[test]
    fn test_line_numbers_count_blank_lines() {
        let err = parse_metrics_csv("metric,period,value\n\n\nrainfall,Jan,3\n")
            .unwrap_err()
            .to_string();
        assert!(err.contains("line 4"), "{}", err);

        let err = parse_metrics_csv("metric,period,value\nyields,Jan,1\n\nwater_usage,Feb,oops\n")
            .unwrap_err()
            .to_string();
        assert!(err.contains("line 4"), "{}", err);
    }

    #[test]
    fn test_bad_values_rejected() {
        assert!(parse_metrics_csv("metric,period,value\nwater_usage,Jan,lots\n").is_err());
        assert!(parse_metrics_csv("metric,period,value\nwater_usage,Jan,-5\n").is_err());
    }

    #[test]
    fn test_whitespace_trimmed() {
        let store = parse_metrics_csv("metric,period,value\n water_usage , Jan , 2500 \n").unwrap();
        assert_eq!(values(&store, MetricKind::Water), vec![("Jan".to_string(), 2500.0)]);
    }
}

//! Tracked farm metrics and their time series.

use anyhow::bail;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the three metrics the dashboard tracks.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKind {
    Water,
    Fertilizer,
    Yield,
}

impl MetricKind {
    pub const ALL: [MetricKind; 3] = [MetricKind::Water, MetricKind::Fertilizer, MetricKind::Yield];

    /// Name of the series in `metrics.csv`.
    pub fn series_key(self) -> &'static str {
        match self {
            MetricKind::Water => "water_usage",
            MetricKind::Fertilizer => "fertilizer",
            MetricKind::Yield => "yields",
        }
    }

    pub fn from_series_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.series_key() == key)
    }

    /// Attribute plotted on the value axis (also the legend label).
    pub fn value_key(self) -> &'static str {
        match self {
            MetricKind::Water => "usage",
            MetricKind::Fertilizer | MetricKind::Yield => "amount",
        }
    }

    /// Short lowercase name used in form titles and log lines.
    pub fn slug(self) -> &'static str {
        match self {
            MetricKind::Water => "water",
            MetricKind::Fertilizer => "fertilizer",
            MetricKind::Yield => "yield",
        }
    }

    pub fn action_label(self) -> &'static str {
        match self {
            MetricKind::Water => "Log Water",
            MetricKind::Fertilizer => "Log Fertilizer",
            MetricKind::Yield => "Log Yield",
        }
    }

    /// Stroke color for this metric's chart line.
    pub fn color(self) -> &'static str {
        match self {
            MetricKind::Water => "#2563eb",
            MetricKind::Fertilizer => "#d97706",
            MetricKind::Yield => "#16a34a",
        }
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// A single (period, value) pair, e.g. ("Jan", 2500.0).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricPoint {
    pub period: String,
    pub value: f64,
}

impl MetricPoint {
    pub fn new(period: impl Into<String>, value: f64) -> Self {
        Self {
            period: period.into(),
            value,
        }
    }
}

/// Ordered points for one metric. Order is insertion order, which the seed
/// data keeps chronological. Periods are not required to be unique.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricSeries {
    pub kind: MetricKind,
    pub points: Vec<MetricPoint>,
}

impl MetricSeries {
    pub fn new(kind: MetricKind) -> Self {
        Self {
            kind,
            points: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn value_key(&self) -> &'static str {
        self.kind.value_key()
    }

    pub fn min_value(&self) -> Option<f64> {
        self.points.iter().map(|p| p.value).reduce(f64::min)
    }

    pub fn max_value(&self) -> Option<f64> {
        self.points.iter().map(|p| p.value).reduce(f64::max)
    }
}

/// In-memory table of the three metric series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricStore {
    water_usage: MetricSeries,
    fertilizer: MetricSeries,
    yields: MetricSeries,
}

impl Default for MetricStore {
    fn default() -> Self {
        Self {
            water_usage: MetricSeries::new(MetricKind::Water),
            fertilizer: MetricSeries::new(MetricKind::Fertilizer),
            yields: MetricSeries::new(MetricKind::Yield),
        }
    }
}

impl MetricStore {
    pub fn series(&self, kind: MetricKind) -> &MetricSeries {
        match kind {
            MetricKind::Water => &self.water_usage,
            MetricKind::Fertilizer => &self.fertilizer,
            MetricKind::Yield => &self.yields,
        }
    }

    fn series_mut(&mut self, kind: MetricKind) -> &mut MetricSeries {
        match kind {
            MetricKind::Water => &mut self.water_usage,
            MetricKind::Fertilizer => &mut self.fertilizer,
            MetricKind::Yield => &mut self.yields,
        }
    }

    /// Append a point to the end of a series. Values must be finite and non-negative.
    pub fn push(&mut self, kind: MetricKind, point: MetricPoint) -> anyhow::Result<()> {
        if !point.value.is_finite() || point.value < 0.0 {
            bail!(
                "invalid {} value for {}: {}",
                kind.series_key(),
                point.period,
                point.value
            );
        }
        self.series_mut(kind).points.push(point);
        Ok(())
    }

    pub fn total_points(&self) -> usize {
        MetricKind::ALL.iter().map(|k| self.series(*k).len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_series_keys_round_trip() {
        for kind in MetricKind::ALL {
            assert_eq!(MetricKind::from_series_key(kind.series_key()), Some(kind));
        }
        assert_eq!(MetricKind::from_series_key("rainfall"), None);
    }

    #[test]
    fn test_value_keys() {
        assert_eq!(MetricKind::Water.value_key(), "usage");
        assert_eq!(MetricKind::Fertilizer.value_key(), "amount");
        assert_eq!(MetricKind::Yield.value_key(), "amount");
    }

    #[test]
    fn test_push_keeps_insertion_order() {
        let mut store = MetricStore::default();
        store.push(MetricKind::Water, MetricPoint::new("Feb", 2700.0)).unwrap();
        store.push(MetricKind::Water, MetricPoint::new("Jan", 2500.0)).unwrap();
        store.push(MetricKind::Water, MetricPoint::new("Jan", 2600.0)).unwrap();

        let periods: Vec<&str> = store
            .series(MetricKind::Water)
            .points
            .iter()
            .map(|p| p.period.as_str())
            .collect();
        assert_eq!(periods, vec!["Feb", "Jan", "Jan"]);
        assert!(store.series(MetricKind::Yield).is_empty());
        assert_eq!(store.total_points(), 3);
    }

    #[test]
    fn test_push_rejects_negative_and_nan() {
        let mut store = MetricStore::default();
        assert!(store.push(MetricKind::Yield, MetricPoint::new("Jan", -1.0)).is_err());
        assert!(store.push(MetricKind::Yield, MetricPoint::new("Jan", f64::NAN)).is_err());
        assert!(store.series(MetricKind::Yield).is_empty());
    }

    #[test]
    fn test_min_max() {
        let mut series = MetricSeries::new(MetricKind::Fertilizer);
        assert_eq!(series.min_value(), None);
        series.points.push(MetricPoint::new("Jan", 150.0));
        series.points.push(MetricPoint::new("Feb", 180.0));
        series.points.push(MetricPoint::new("Mar", 120.0));
        assert_eq!(series.min_value(), Some(120.0));
        assert_eq!(series.max_value(), Some(180.0));
    }
}

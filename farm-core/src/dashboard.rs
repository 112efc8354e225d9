//! Which metric series get a chart panel on the dashboard.
//!
//! Fertilizer is tracked and has a data entry form, but no chart.

use crate::chart::{ChartStyle, LineChartModel};
use crate::metric::{MetricKind, MetricStore};

/// A titled chart panel bound to one metric series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartPanel {
    pub kind: MetricKind,
    pub title: &'static str,
}

/// Chart panels in display order.
pub const WIRED_CHARTS: [ChartPanel; 2] = [
    ChartPanel {
        kind: MetricKind::Water,
        title: "Water Usage Trends",
    },
    ChartPanel {
        kind: MetricKind::Yield,
        title: "Crop Yields",
    },
];

/// Build the layout model for every wired panel.
pub fn chart_models(
    store: &MetricStore,
    style: &ChartStyle,
) -> Vec<(ChartPanel, LineChartModel)> {
    WIRED_CHARTS
        .iter()
        .map(|panel| (*panel, LineChartModel::build(store.series(panel.kind), style)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::load_seed;

    #[test]
    fn test_one_chart_per_wired_series() {
        let seed = load_seed().unwrap();
        let models = chart_models(&seed.metrics, &ChartStyle::default());

        let kinds: Vec<MetricKind> = models.iter().map(|(panel, _)| panel.kind).collect();
        assert_eq!(kinds, vec![MetricKind::Water, MetricKind::Yield]);

        for (panel, model) in &models {
            assert_eq!(model.points.len(), seed.metrics.series(panel.kind).len());
        }
    }

    #[test]
    fn test_empty_store_still_builds_panels() {
        let models = chart_models(&MetricStore::default(), &ChartStyle::default());
        assert_eq!(models.len(), 2);
        assert!(models.iter().all(|(_, model)| model.is_empty()));
    }
}

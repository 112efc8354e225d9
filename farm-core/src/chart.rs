//! Layout model for a single-series line chart.
//!
//! `LineChartModel::build` turns a `MetricSeries` into pixel coordinates:
//! a category x-axis with one band per point (left to right in series order),
//! a linear y-axis auto-scaled to "nice" bounds, gridlines, the line path,
//! a legend entry and per-point tooltips. The UI only draws what this
//! model describes, so layout is deterministic and testable without a DOM.

use crate::metric::{MetricKind, MetricSeries};

/// Outer size and margins of a chart, in pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartStyle {
    pub width: f64,
    pub height: f64,
    pub margin_top: f64,
    pub margin_right: f64,
    pub margin_bottom: f64,
    pub margin_left: f64,
    /// Desired number of y-axis ticks; the scale may produce one more or less.
    pub tick_count: usize,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            width: 520.0,
            height: 320.0,
            margin_top: 10.0,
            margin_right: 20.0,
            margin_bottom: 56.0,
            margin_left: 56.0,
            tick_count: 5,
        }
    }
}

/// The inner plotting rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// A labelled position on an axis (x for category ticks, y for value ticks).
#[derive(Debug, Clone, PartialEq)]
pub struct AxisTick {
    pub label: String,
    pub position: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlotPoint {
    pub x: f64,
    pub y: f64,
    pub period: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub label: String,
    pub color: String,
}

/// Hover box contents for one point.
#[derive(Debug, Clone, PartialEq)]
pub struct Tooltip {
    pub period: String,
    pub label: String,
    pub value: String,
    pub color: String,
}

/// Linear value scale over `[min, max]` with evenly spaced ticks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NiceScale {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl NiceScale {
    const UNIT: NiceScale = NiceScale {
        min: 0.0,
        max: 1.0,
        step: 0.25,
    };
    const MAX_TICKS: usize = 100;

    /// Domain that starts at `min(0, data_min)` and is rounded outward to
    /// multiples of a 1/2/2.5/5 x 10^k step. Falls back to `[0, 1]` when
    /// there is no data.
    pub fn for_range(data_min: Option<f64>, data_max: Option<f64>, tick_count: usize) -> Self {
        let lo = data_min.unwrap_or(0.0).min(0.0);
        let mut hi = data_max.unwrap_or(1.0).max(lo);
        if hi - lo <= f64::EPSILON {
            hi = lo + 1.0;
        }

        let intervals = tick_count.saturating_sub(1).max(1) as f64;
        let span = hi - lo;
        if !span.is_finite() {
            return Self::UNIT;
        }

        let step = nice_step(span / intervals);
        let rounded = Self {
            min: (lo / step + 1e-9).floor() * step,
            max: (hi / step - 1e-9).ceil() * step,
            step,
        };
        if rounded.min.is_finite() && rounded.max.is_finite() && step.is_finite() {
            return rounded;
        }

        // Rounding outward overflowed near f64::MAX; keep the raw bounds.
        Self {
            min: lo,
            max: hi,
            step: span / intervals,
        }
    }

    pub fn ticks(&self) -> Vec<f64> {
        let count = ((self.max - self.min) / self.step).round();
        let count = if count.is_finite() {
            (count as usize).min(Self::MAX_TICKS)
        } else {
            0
        };
        (0..=count).map(|i| self.min + i as f64 * self.step).collect()
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Fraction of the way from `min` to `max`.
    pub fn normalize(&self, value: f64) -> f64 {
        (value - self.min) / (self.max - self.min)
    }
}

fn nice_step(raw: f64) -> f64 {
    let exponent = raw.log10().floor();
    let base = 10f64.powf(exponent);
    let fraction = raw / base;
    let nice = if fraction <= 1.0 + 1e-9 {
        1.0
    } else if fraction <= 2.0 + 1e-9 {
        2.0
    } else if fraction <= 2.5 + 1e-9 {
        2.5
    } else if fraction <= 5.0 + 1e-9 {
        5.0
    } else {
        10.0
    };
    nice * base
}

/// Whole numbers print without decimals; fractions keep up to two places.
pub fn format_value(value: f64) -> String {
    if (value - value.round()).abs() < 1e-9 {
        format!("{:.0}", value)
    } else {
        let s = format!("{:.2}", value);
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LineChartModel {
    pub kind: MetricKind,
    pub width: f64,
    pub height: f64,
    pub plot: PlotArea,
    pub scale: NiceScale,
    pub x_ticks: Vec<AxisTick>,
    pub y_ticks: Vec<AxisTick>,
    pub points: Vec<PlotPoint>,
    /// SVG path data for the line; empty when there are no points.
    pub path: String,
    pub legend: LegendEntry,
}

impl LineChartModel {
    pub fn build(series: &MetricSeries, style: &ChartStyle) -> Self {
        let plot = PlotArea {
            left: style.margin_left,
            top: style.margin_top,
            width: (style.width - style.margin_left - style.margin_right).max(0.0),
            height: (style.height - style.margin_top - style.margin_bottom).max(0.0),
        };
        let scale = NiceScale::for_range(series.min_value(), series.max_value(), style.tick_count);
        let scale_y = |value: f64| plot.top + (1.0 - scale.normalize(value)) * plot.height;

        let band = if series.is_empty() {
            0.0
        } else {
            plot.width / series.len() as f64
        };
        let scale_x = |index: usize| plot.left + band * (index as f64 + 0.5);

        let points: Vec<PlotPoint> = series
            .points
            .iter()
            .enumerate()
            .map(|(i, p)| PlotPoint {
                x: scale_x(i),
                y: scale_y(p.value),
                period: p.period.clone(),
                value: p.value,
            })
            .collect();

        let path = points
            .iter()
            .enumerate()
            .map(|(i, p)| {
                let cmd = if i == 0 { 'M' } else { 'L' };
                format!("{} {:.1} {:.1}", cmd, p.x, p.y)
            })
            .collect::<Vec<_>>()
            .join(" ");

        let x_ticks = points
            .iter()
            .map(|p| AxisTick {
                label: p.period.clone(),
                position: p.x,
            })
            .collect();

        let y_ticks = scale
            .ticks()
            .into_iter()
            .map(|v| AxisTick {
                label: format_value(v),
                position: scale_y(v),
            })
            .collect();

        Self {
            kind: series.kind,
            width: style.width,
            height: style.height,
            plot,
            scale,
            x_ticks,
            y_ticks,
            points,
            path,
            legend: LegendEntry {
                label: series.value_key().to_string(),
                color: series.kind.color().to_string(),
            },
        }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn tooltip(&self, index: usize) -> Option<Tooltip> {
        self.points.get(index).map(|p| Tooltip {
            period: p.period.clone(),
            label: self.legend.label.clone(),
            value: format_value(p.value),
            color: self.legend.color.clone(),
        })
    }
}

//! SVG line chart for one metric series.
//!
//! Layout comes from `LineChartModel`; this component only draws it and
//! tracks which point the pointer is over.

use dioxus::prelude::*;
use farm_core::chart::LineChartModel;

const AXIS_COLOR: &str = "#6b7280";
const GRID_COLOR: &str = "#e5e7eb";

fn point_radius(hovered: Option<usize>, index: usize) -> u8 {
    if hovered == Some(index) {
        6
    } else {
        4
    }
}

#[component]
pub fn LineChart(model: LineChartModel) -> Element {
    let mut hovered: Signal<Option<usize>> = use_signal(|| None);
    let hovered_index = hovered();
    let tooltip = hovered_index.and_then(|i| model.tooltip(i));

    let width = model.width;
    let height = model.height;
    let plot = model.plot;
    let color = model.legend.color.clone();
    let legend_label = model.legend.label.clone();
    let legend_y = height - 12.0;
    let legend_x = plot.left + plot.width / 2.0;

    rsx! {
        div {
            class: "line-chart",
            style: "position: relative; width: 100%; height: 100%;",
            svg {
                width: "100%",
                height: "100%",
                view_box: "0 0 {width} {height}",

                // Horizontal gridlines and value axis labels
                for tick in model.y_ticks.iter() {
                    line {
                        class: "grid-line",
                        x1: "{plot.left}",
                        y1: "{tick.position:.1}",
                        x2: "{plot.right()}",
                        y2: "{tick.position:.1}",
                        stroke: GRID_COLOR,
                        stroke_dasharray: "3 3",
                        stroke_width: "1",
                    }
                    text {
                        x: "{plot.left - 8.0}",
                        y: "{tick.position:.1}",
                        text_anchor: "end",
                        dominant_baseline: "middle",
                        font_size: "12",
                        fill: AXIS_COLOR,
                        "{tick.label}"
                    }
                }

                // Vertical gridlines and category axis labels
                for tick in model.x_ticks.iter() {
                    line {
                        class: "grid-line",
                        x1: "{tick.position:.1}",
                        y1: "{plot.top}",
                        x2: "{tick.position:.1}",
                        y2: "{plot.bottom()}",
                        stroke: GRID_COLOR,
                        stroke_dasharray: "3 3",
                        stroke_width: "1",
                    }
                    text {
                        x: "{tick.position:.1}",
                        y: "{plot.bottom() + 18.0}",
                        text_anchor: "middle",
                        font_size: "12",
                        fill: AXIS_COLOR,
                        "{tick.label}"
                    }
                }

                // Axes
                line {
                    x1: "{plot.left}",
                    y1: "{plot.bottom()}",
                    x2: "{plot.right()}",
                    y2: "{plot.bottom()}",
                    stroke: AXIS_COLOR,
                }
                line {
                    x1: "{plot.left}",
                    y1: "{plot.top}",
                    x2: "{plot.left}",
                    y2: "{plot.bottom()}",
                    stroke: AXIS_COLOR,
                }

                if !model.path.is_empty() {
                    path {
                        class: "series-line",
                        d: "{model.path}",
                        fill: "none",
                        stroke: "{color}",
                        stroke_width: "2",
                    }
                }

                for (i, point) in model.points.iter().enumerate() {
                    circle {
                        key: "{i}",
                        class: "data-point",
                        cx: "{point.x:.1}",
                        cy: "{point.y:.1}",
                        r: "{point_radius(hovered_index, i)}",
                        fill: "#ffffff",
                        stroke: "{color}",
                        stroke_width: "2",
                        onmouseenter: move |_| hovered.set(Some(i)),
                        onmouseleave: move |_| hovered.set(None),
                    }
                }

                // Legend
                g {
                    class: "legend",
                    line {
                        x1: "{legend_x - 30.0}",
                        y1: "{legend_y}",
                        x2: "{legend_x - 14.0}",
                        y2: "{legend_y}",
                        stroke: "{color}",
                        stroke_width: "2",
                    }
                    text {
                        x: "{legend_x - 8.0}",
                        y: "{legend_y}",
                        dominant_baseline: "middle",
                        font_size: "12",
                        fill: "{color}",
                        "{legend_label}"
                    }
                }
            }

            if let Some(tip) = tooltip {
                div {
                    class: "chart-tooltip",
                    style: "position: absolute; top: 8px; right: 8px; padding: 8px 10px; background: #ffffff; border: 1px solid #d1d5db; border-radius: 4px; font-size: 12px; pointer-events: none;",
                    div { style: "margin-bottom: 4px;", "{tip.period}" }
                    div { style: "color: {tip.color};", "{tip.label} : {tip.value}" }
                }
            }
        }
    }
}

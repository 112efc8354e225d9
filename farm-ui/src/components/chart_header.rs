//! Chart header component with title and value-axis label.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartHeaderProps {
    /// Chart title
    pub title: String,
    /// Name of the plotted attribute (e.g., "usage")
    #[props(default = String::new())]
    pub value_label: String,
}

/// Header for chart panels showing title and optional value label.
#[component]
pub fn ChartHeader(props: ChartHeaderProps) -> Element {
    rsx! {
        div {
            style: "margin-bottom: 16px;",
            h3 {
                style: "margin: 0 0 4px 0; font-size: 18px; font-weight: 600;",
                "{props.title}"
            }
            if !props.value_label.is_empty() {
                p {
                    style: "margin: 0; font-size: 12px; color: #6b7280;",
                    "Y-axis: {props.value_label}"
                }
            }
        }
    }
}

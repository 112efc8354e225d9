//! Chart panel: a card with a header and a fixed-height chart area.

use super::card::Card;
use super::chart_header::ChartHeader;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// DOM id of the chart area
    pub id: String,
    pub title: String,
    #[props(default = String::new())]
    pub value_label: String,
    /// Chart area height in pixels
    #[props(default = 320)]
    pub height: u32,
    pub children: Element,
}

#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let style = format!("height: {}px; position: relative; width: 100%;", props.height);

    rsx! {
        Card {
            ChartHeader {
                title: props.title.clone(),
                value_label: props.value_label.clone(),
            }
            div {
                id: "{props.id}",
                class: "chart-area",
                style: "{style}",
                {props.children}
            }
        }
    }
}

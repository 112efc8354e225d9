//! Weather and sustainability score cards.

use super::card::Card;
use dioxus::prelude::*;
use farm_core::snapshot::{SustainabilityScore, WeatherSnapshot};

const CARD_LABEL: &str = "font-size: 14px; font-weight: 500; color: #4b5563;";
const CARD_VALUE: &str = "font-size: 24px; font-weight: 700;";
const CARD_DETAIL: &str = "font-size: 14px; color: #6b7280;";

#[component]
pub fn WeatherCard(weather: WeatherSnapshot) -> Element {
    let headline = weather.headline();
    let detail = weather.detail();

    rsx! {
        Card {
            div { style: CARD_LABEL, "Weather" }
            div { style: CARD_VALUE, "{headline}" }
            div { style: CARD_DETAIL, "{detail}" }
            if !weather.forecast.is_empty() {
                div {
                    style: "font-size: 12px; color: #9ca3af; margin-top: 4px;",
                    "{weather.forecast}"
                }
            }
        }
    }
}

#[component]
pub fn ScoreCard(score: SustainabilityScore) -> Element {
    rsx! {
        Card {
            div { style: CARD_LABEL, "Sustainability Score" }
            div { style: CARD_VALUE, "{score}" }
            div { style: CARD_DETAIL, "Based on resource efficiency" }
        }
    }
}

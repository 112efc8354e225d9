//! The dashboard view: summary cards, quick actions, the open form and the trend charts.

use super::card::Card;
use super::chart_container::ChartContainer;
use super::data_entry_form::DataEntryForm;
use super::error_display::ErrorDisplay;
use super::line_chart::LineChart;
use super::loading_spinner::LoadingSpinner;
use super::quick_actions::QuickActions;
use super::summary_cards::{ScoreCard, WeatherCard};
use crate::state::{AppState, FormEvent};
use dioxus::prelude::*;
use farm_core::chart::ChartStyle;
use farm_core::dashboard::chart_models;
use farm_core::record::SubmittedRecord;

/// Loading indicator, error box or the dashboard, depending on seed loading.
#[component]
pub fn DashboardPage() -> Element {
    let state = use_context::<AppState>();

    if let Some(err) = state.error_msg.read().as_ref() {
        return rsx! {
            ErrorDisplay { message: err.clone() }
        };
    }

    rsx! {
        if *state.loading.read() {
            LoadingSpinner {}
        } else {
            Dashboard {}
        }
    }
}

/// Renders entirely from `AppState`; any signal change re-renders it.
#[component]
pub fn Dashboard() -> Element {
    let state = use_context::<AppState>();
    let snapshot = state.snapshot.read().clone();
    let charts = chart_models(&state.metrics.read(), &ChartStyle::default());
    let open_form = state.current_form().kind();

    rsx! {
        div {
            class: "farm-dashboard",
            style: "padding: 24px; max-width: 1152px; margin: 0 auto; background: #f9fafb; min-height: 100vh; font-family: system-ui, -apple-system, sans-serif;",

            div {
                class: "summary-cards",
                style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(220px, 1fr)); gap: 16px; margin-bottom: 24px;",
                if let Some(snapshot) = snapshot {
                    WeatherCard { weather: snapshot.weather.clone() }
                    ScoreCard { score: snapshot.sustainability_score }
                }
                QuickActions {}
            }

            if let Some(kind) = open_form {
                Card {
                    style: "margin-bottom: 24px;".to_string(),
                    DataEntryForm {
                        key: "{kind}",
                        kind,
                        on_submit: move |record: SubmittedRecord| {
                            let mut state = state;
                            state.finish_form(FormEvent::Submit(record));
                        },
                        on_cancel: move |_: ()| {
                            let mut state = state;
                            state.finish_form(FormEvent::Cancel);
                        },
                    }
                }
            }

            div {
                class: "trend-charts",
                style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(420px, 1fr)); gap: 16px;",
                for (panel, model) in charts {
                    ChartContainer {
                        key: "{panel.kind}",
                        id: format!("{}-chart", panel.kind.series_key()),
                        title: panel.title.to_string(),
                        value_label: panel.kind.value_key().to_string(),
                        LineChart { model }
                    }
                }
            }
        }
    }
}

//! Buttons that open a data entry form.

use super::card::{Button, Card};
use crate::state::AppState;
use dioxus::prelude::*;
use farm_core::metric::MetricKind;

/// One "Log ..." button per metric. Pressing a button replaces any open form.
#[component]
pub fn QuickActions() -> Element {
    let state = use_context::<AppState>();

    rsx! {
        Card {
            wide: true,
            div {
                style: "font-size: 14px; font-weight: 500; color: #4b5563; margin-bottom: 12px;",
                "Quick Actions"
            }
            div {
                style: "display: flex; gap: 8px;",
                for kind in MetricKind::ALL {
                    Button {
                        key: "{kind}",
                        onclick: move |_| {
                            let mut state = state;
                            state.show_form(kind);
                        },
                        {kind.action_label()}
                    }
                }
            }
        }
    }
}

//! Error display component.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
}

/// Shown in place of the dashboard when seed data cannot be loaded.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            role: "alert",
            style: "padding: 12px 16px; margin: 24px auto; max-width: 720px; background: #fef2f2; color: #b91c1c; border-radius: 8px; border: 1px solid #fecaca;",
            strong { "Dashboard unavailable: " }
            "{props.message}"
        }
    }
}

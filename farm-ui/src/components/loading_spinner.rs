use dioxus::prelude::*;

/// Placeholder while seed data is parsed.
#[component]
pub fn LoadingSpinner(
    #[props(default = "Loading farm data...".to_string())] label: String,
) -> Element {
    rsx! {
        div {
            style: "display: flex; justify-content: center; align-items: center; padding: 40px; color: #6b7280;",
            "{label}"
        }
    }
}

//! Farm Dashboard
//!
//! Summary cards (weather, sustainability score, quick actions), an optional
//! data entry form and two trend charts (water usage, crop yields).
//!
//! Data flow:
//! 1. `farm-core/build.rs` copies `fixtures/metrics.csv` and
//!    `fixtures/snapshot.json` into `OUT_DIR`; both are embedded with `include_str!`.
//! 2. On mount: parse the fixtures into `AppState`.
//! 3. Quick action buttons open a form; submitting logs the record and
//!    closes the form. Nothing is persisted.

use dioxus::prelude::*;
use farm_core::seed::load_seed;
use farm_ui::components::DashboardPage;
use farm_ui::state::AppState;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("farm-dashboard-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // Parse seed data once on mount
    use_effect(move || {
        web_sys::console::log_1(&"[Farm] loading seed data".into());
        state.apply_seed(load_seed());
    });

    rsx! {
        DashboardPage {}
    }
}

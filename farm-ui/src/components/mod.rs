//! Reusable Dioxus RSX components for the farm dashboard.

mod card;
mod chart_container;
mod chart_header;
mod dashboard;
mod data_entry_form;
mod error_display;
mod line_chart;
mod loading_spinner;
mod quick_actions;
mod summary_cards;

pub use card::{Button, Card};
pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use dashboard::{Dashboard, DashboardPage};
pub use data_entry_form::DataEntryForm;
pub use error_display::ErrorDisplay;
pub use line_chart::LineChart;
pub use loading_spinner::LoadingSpinner;
pub use quick_actions::QuickActions;
pub use summary_cards::{ScoreCard, WeatherCard};

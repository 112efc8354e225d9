//! Shared Dioxus components and browser bridge for the farm dashboard.
//!
//! This crate provides:
//! - `js_bridge`: browser console logging for submitted records
//! - `state`: reactive AppState with Dioxus Signals
//! - `components`: RSX components (cards, quick actions, form, SVG chart, dashboard)

pub mod components;
pub mod js_bridge;
pub mod state;

#[cfg(test)]
mod test_support;

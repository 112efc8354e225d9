//! Core types for the farm dashboard.
//!
//! This crate provides:
//! - `metric`: metric kinds, points, series and the in-memory store
//! - `snapshot`: weather conditions and the sustainability score
//! - `seed`: fixture data embedded at compile time
//! - `form`: which data entry form is visible, as a pure reducer
//! - `record`: the record produced when a form is submitted
//! - `chart`: layout model for the SVG line charts
//! - `dashboard`: which series get a chart panel

pub mod chart;
pub mod dashboard;
pub mod form;
pub mod metric;
pub mod record;
pub mod seed;
pub mod snapshot;

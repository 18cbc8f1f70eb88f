//! workcal: a 365-day workout contribution calendar
//!
//! `calendar` holds the pure grid, label, legend and presentation logic.
//! `services` loads the dashboard snapshot and resolves workout details.
//! `tui` and `cli` are the two front ends.

pub mod calendar;
pub mod cli;
pub mod services;
pub mod tui;
pub mod types;

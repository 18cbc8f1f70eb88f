//! Type definitions for workcal

mod activity;
mod error;

pub use activity::*;
pub use error::*;

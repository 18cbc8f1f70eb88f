//! Services around the calendar core: config, snapshot loading, detail
//! lookups, display formatting and logging

pub mod config;
pub mod detail;
pub mod logging;
pub mod lookup;
pub mod snapshot;
pub mod summary;

pub use config::{Config, Overrides, ThemePreference};
pub use detail::{DetailDispatcher, DetailOutcome, DetailResponse};
pub use lookup::{lookup_for, HttpLookup, SnapshotLookup, WorkoutLookup};
pub use snapshot::{parse_snapshot, SnapshotLoader};
pub use summary::{format_duration_minutes, format_number, StatCard};

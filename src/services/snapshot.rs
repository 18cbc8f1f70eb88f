//! Dashboard snapshot loading
//!
//! The backend exports pre-aggregated dashboard data as a single JSON file.
//! Loading is lenient about individual entries: a calendar day or workout
//! that fails to decode, or carries a malformed date, is skipped with a
//! warning, never fatal. A `null` type list reads as empty. Only an unreadable file or invalid top-level JSON
//! is an error.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use fs2::FileExt;
use serde::Deserialize;

use crate::calendar::parse_date_key;
use crate::types::{
    ActivityBreakdownItem, DailyActivity, DashboardSnapshot, MonthlyStats, PersonalRecords,
    Result, StreakInfo, WorkcalError, Workout,
};

/// Snapshot as it appears on the wire, before validation
#[derive(Debug, Default, Deserialize)]
struct WireSnapshot {
    #[serde(default)]
    contribution_calendar: Vec<serde_json::Value>,
    #[serde(default)]
    streak_info: Option<StreakInfo>,
    #[serde(default)]
    activity_breakdown: Vec<ActivityBreakdownItem>,
    #[serde(default)]
    monthly_stats: Option<MonthlyStats>,
    #[serde(default)]
    personal_records: Option<PersonalRecords>,
    #[serde(default)]
    workouts: Vec<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct WireDailyActivity {
    date: String,
    #[serde(default)]
    count: i64,
    /// `null` is treated like an absent list
    #[serde(default)]
    workout_types: Option<Vec<String>>,
}

impl WireDailyActivity {
    fn into_activity(self) -> Option<DailyActivity> {
        let Some(date) = parse_date_key(&self.date) else {
            tracing::warn!(date = %self.date, "skipping calendar entry with malformed date");
            return None;
        };
        let count = u32::try_from(self.count.max(0)).unwrap_or(u32::MAX);
        if self.count < 0 {
            tracing::warn!(%date, count = self.count, "negative workout count clamped to 0");
        }
        Some(DailyActivity::new(
            date,
            count,
            self.workout_types.unwrap_or_default(),
        ))
    }
}

/// Parse snapshot JSON text
pub fn parse_snapshot(json: &str) -> Result<DashboardSnapshot> {
    let wire: WireSnapshot =
        serde_json::from_str(json).map_err(|e| WorkcalError::Parse(e.to_string()))?;

    let contribution_calendar = wire
        .contribution_calendar
        .into_iter()
        .filter_map(
            |value| match serde_json::from_value::<WireDailyActivity>(value) {
                Ok(entry) => entry.into_activity(),
                Err(e) => {
                    tracing::warn!(error = %e, "skipping malformed calendar entry");
                    None
                }
            },
        )
        .collect();

    let workouts = wire
        .workouts
        .into_iter()
        .filter_map(|value| match serde_json::from_value::<Workout>(value) {
            Ok(workout) => Some(workout),
            Err(e) => {
                tracing::warn!(error = %e, "skipping malformed workout");
                None
            }
        })
        .collect();

    Ok(DashboardSnapshot {
        contribution_calendar,
        streak_info: wire.streak_info,
        activity_breakdown: wire.activity_breakdown,
        monthly_stats: wire.monthly_stats,
        personal_records: wire.personal_records,
        workouts,
    })
}

/// Reads the snapshot file under a shared lock so a concurrent export
/// never hands us a half-written file
pub struct SnapshotLoader {
    path: PathBuf,
}

impl SnapshotLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<DashboardSnapshot> {
        let file = File::open(&self.path).map_err(|e| {
            WorkcalError::Io(std::io::Error::new(
                e.kind(),
                format!("{}: {}", self.path.display(), e),
            ))
        })?;

        file.lock_shared()?;
        let mut content = String::new();
        let read = std::io::BufReader::new(&file).read_to_string(&mut content);
        let _ = file.unlock();
        read?;

        let snapshot = parse_snapshot(&content)?;
        tracing::info!(
            path = %self.path.display(),
            days = snapshot.contribution_calendar.len(),
            workouts = snapshot.workouts.len(),
            "loaded dashboard snapshot"
        );
        Ok(snapshot)
    }
}

//! `workcal day` subcommand: one day's tooltip plus its workout detail

use std::sync::mpsc::RecvTimeoutError;
use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;
use clap::Args;
use serde_json::json;

use crate::calendar::{click_target, parse_date_key, tooltip, CalendarView};
use crate::services::summary::workout_detail_lines;
use crate::services::{DetailDispatcher, WorkoutLookup};
use crate::types::{DashboardSnapshot, Result, WorkcalError, Workout};

/// Longest we wait for a lookup worker; the HTTP client times out first
const LOOKUP_WAIT: Duration = Duration::from_secs(15);

/// Show one day of the calendar
#[derive(Args, Debug)]
pub struct DayArgs {
    /// Date to show (YYYY-MM-DD), within the last 365 days
    #[arg(value_name = "DATE")]
    pub date: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// What `day` found for a date
#[derive(Debug, Clone, PartialEq)]
pub struct DayReport {
    pub date: NaiveDate,
    pub tooltip: String,
    pub count: u32,
    pub workout: Option<Workout>,
}

impl DayArgs {
    pub fn run(
        self,
        snapshot: &DashboardSnapshot,
        lookup: Arc<dyn WorkoutLookup>,
        today: NaiveDate,
    ) -> Result<()> {
        let report = build_report(&self.date, snapshot, lookup, today)?;

        if self.json {
            let value = json!({
                "date": self.date.trim(),
                "count": report.count,
                "tooltip": report.tooltip,
                "workout": report.workout,
            });
            let out = serde_json::to_string_pretty(&value)
                .map_err(|e| WorkcalError::Parse(e.to_string()))?;
            println!("{}", out);
            return Ok(());
        }

        println!("{}", report.tooltip);
        if let Some(workout) = &report.workout {
            println!();
            for (label, value) in workout_detail_lines(workout) {
                println!("  {:<10} {}", label, value);
            }
        }
        Ok(())
    }
}

/// Resolve the tooltip for `date_arg` and, when the day is clickable, wait
/// for its detail lookup. A miss or a failed lookup leaves `workout` empty.
pub fn build_report(
    date_arg: &str,
    snapshot: &DashboardSnapshot,
    lookup: Arc<dyn WorkoutLookup>,
    today: NaiveDate,
) -> Result<DayReport> {
    let date =
        parse_date_key(date_arg).ok_or_else(|| WorkcalError::InvalidDate(date_arg.to_string()))?;

    let view = CalendarView::build(&snapshot.contribution_calendar, today);
    let cell = view.grid.cell_for(date).ok_or_else(|| {
        WorkcalError::InvalidDate(format!(
            "{} is outside {}..={}",
            date,
            view.grid.start(),
            view.grid.end()
        ))
    })?;

    let mut report = DayReport {
        date,
        tooltip: tooltip(cell),
        count: cell.count,
        workout: None,
    };
    if click_target(cell).is_none() {
        return Ok(report);
    }

    let (mut dispatcher, rx) = DetailDispatcher::new(lookup);
    dispatcher.click(cell);
    match rx.recv_timeout(LOOKUP_WAIT) {
        Ok(response) => report.workout = response.into_workout(),
        Err(RecvTimeoutError::Timeout) => {
            tracing::warn!(%date, "detail lookup timed out");
        }
        Err(RecvTimeoutError::Disconnected) => {
            tracing::warn!(%date, "detail lookup worker exited without a response");
        }
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::SnapshotLookup;
    use crate::types::DailyActivity;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn workout(day: NaiveDate) -> Workout {
        Workout {
            id: Some(7),
            date: day,
            workout_type: "run".into(),
            duration_seconds: 1800,
            distance_km: Some(5.0),
            calories: None,
            avg_heart_rate: None,
            max_heart_rate: None,
            elevation_gain: None,
            notes: None,
        }
    }

    fn make_snapshot() -> DashboardSnapshot {
        DashboardSnapshot {
            contribution_calendar: vec![DailyActivity::new(
                date(2025, 6, 15),
                1,
                vec!["run".into()],
            )],
            workouts: vec![workout(date(2025, 6, 15))],
            ..Default::default()
        }
    }

    fn lookup_for(snapshot: &DashboardSnapshot) -> Arc<dyn WorkoutLookup> {
        Arc::new(SnapshotLookup::new(snapshot.workouts.clone()))
    }

    // ========== build_report ==========

    #[test]
    fn test_day_report_active_day_fetches_workout() {
        let snapshot = make_snapshot();
        let report =
            build_report("2025-06-15", &snapshot, lookup_for(&snapshot), date(2025, 6, 15))
                .unwrap();

        assert_eq!(report.tooltip, "Jun 15, 2025: 1 workout\nRun");
        assert_eq!(report.workout, Some(workout(date(2025, 6, 15))));
    }

    #[test]
    fn test_day_report_idle_day_skips_lookup() {
        let snapshot = make_snapshot();
        let report =
            build_report("2025-06-10", &snapshot, lookup_for(&snapshot), date(2025, 6, 15))
                .unwrap();

        assert_eq!(report.count, 0);
        assert_eq!(report.tooltip, "Jun 10, 2025: No workouts");
        assert!(report.workout.is_none());
    }

    #[test]
    fn test_day_report_missing_workout_is_not_an_error() {
        let snapshot = DashboardSnapshot {
            workouts: Vec::new(),
            ..make_snapshot()
        };
        let report =
            build_report("2025-06-15", &snapshot, lookup_for(&snapshot), date(2025, 6, 15))
                .unwrap();

        assert_eq!(report.count, 1);
        assert!(report.workout.is_none());
    }

    #[test]
    fn test_day_report_invalid_date() {
        let snapshot = make_snapshot();
        let err = build_report("2025-13-01", &snapshot, lookup_for(&snapshot), date(2025, 6, 15))
            .unwrap_err();
        assert!(matches!(err, WorkcalError::InvalidDate(_)));
    }

    #[test]
    fn test_day_report_outside_window() {
        let snapshot = make_snapshot();
        let err = build_report("2024-06-15", &snapshot, lookup_for(&snapshot), date(2025, 6, 15))
            .unwrap_err();
        assert!(matches!(err, WorkcalError::InvalidDate(_)));

        let err = build_report("2025-06-16", &snapshot, lookup_for(&snapshot), date(2025, 6, 15))
            .unwrap_err();
        assert!(matches!(err, WorkcalError::InvalidDate(_)));
    }
}

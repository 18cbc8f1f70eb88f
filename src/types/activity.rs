//! Activity types supplied by the aggregation backend

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Workouts recorded on a single calendar date
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct DailyActivity {
    pub date: NaiveDate,
    pub count: u32,
    #[serde(default)]
    pub workout_types: Vec<String>,
}

impl DailyActivity {
    pub fn new(date: NaiveDate, count: u32, workout_types: Vec<String>) -> Self {
        Self {
            date,
            count,
            workout_types,
        }
    }
}

/// Streak stats, passed through for display only
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct StreakInfo {
    #[serde(default)]
    pub current_streak: u32,
    #[serde(default)]
    pub active_days: u32,
}

/// One row of the activity-type breakdown, ordered by significance upstream
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActivityBreakdownItem {
    pub name: String,
    #[serde(default)]
    pub count: u32,
}

/// Current-month totals for the stat cards
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct MonthlyStats {
    #[serde(default)]
    pub workouts: u32,
    #[serde(default)]
    pub distance_km: f64,
    #[serde(default)]
    pub duration_seconds: u64,
    #[serde(default)]
    pub calories: u64,
}

/// All-time bests; any record may be missing
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct PersonalRecords {
    #[serde(default)]
    pub max_distance_km: Option<f64>,
    #[serde(default)]
    pub max_duration_hours: Option<f64>,
    #[serde(default)]
    pub max_heart_rate: Option<u32>,
    #[serde(default)]
    pub max_speed_kmh: Option<f64>,
    #[serde(default)]
    pub max_elevation_gain: Option<f64>,
    #[serde(default)]
    pub max_calories: Option<u64>,
}

/// Full detail of a single workout, returned by the detail lookup
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Workout {
    #[serde(default)]
    pub id: Option<i64>,
    pub date: NaiveDate,
    pub workout_type: String,
    #[serde(default)]
    pub duration_seconds: u64,
    #[serde(default)]
    pub distance_km: Option<f64>,
    #[serde(default)]
    pub calories: Option<u64>,
    #[serde(default)]
    pub avg_heart_rate: Option<u32>,
    #[serde(default)]
    pub max_heart_rate: Option<u32>,
    #[serde(default)]
    pub elevation_gain: Option<f64>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Everything the dashboard renders, as exported by the backend
#[derive(Debug, Clone, Serialize, PartialEq, Default)]
pub struct DashboardSnapshot {
    pub contribution_calendar: Vec<DailyActivity>,
    pub streak_info: Option<StreakInfo>,
    pub activity_breakdown: Vec<ActivityBreakdownItem>,
    pub monthly_stats: Option<MonthlyStats>,
    pub personal_records: Option<PersonalRecords>,
    pub workouts: Vec<Workout>,
}

impl DashboardSnapshot {
    /// Streak info with zero defaults when the backend omitted it
    pub fn streak(&self) -> StreakInfo {
        self.streak_info.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_daily_activity_deserialize() {
        let json = r#"{"date":"2025-06-15","count":3,"workout_types":["run","swim"]}"#;
        let activity: DailyActivity = serde_json::from_str(json).unwrap();

        assert_eq!(activity.date, NaiveDate::from_ymd_opt(2025, 6, 15).unwrap());
        assert_eq!(activity.count, 3);
        assert_eq!(activity.workout_types, vec!["run", "swim"]);
    }

    #[test]
    fn test_daily_activity_missing_types_defaults_empty() {
        let json = r#"{"date":"2025-06-15","count":1}"#;
        let activity: DailyActivity = serde_json::from_str(json).unwrap();
        assert!(activity.workout_types.is_empty());
    }

    #[test]
    fn test_streak_defaults_to_zero() {
        let snapshot = DashboardSnapshot::default();
        assert_eq!(snapshot.streak(), StreakInfo::default());
        assert_eq!(snapshot.streak().current_streak, 0);
    }

    #[test]
    fn test_workout_optional_fields() {
        let json = r#"{"date":"2025-01-05","workout_type":"swim","duration_seconds":1800}"#;
        let workout: Workout = serde_json::from_str(json).unwrap();

        assert_eq!(workout.workout_type, "swim");
        assert!(workout.distance_km.is_none());
        assert!(workout.notes.is_none());
    }
}

//! Display formatting for the stat panels and the workout detail popup
//!
//! The backend supplies these numbers pre-aggregated; this module only turns
//! them into strings. Kept free of ratatui so the CLI's text and JSON output
//! share it with the TUI.

use serde::Serialize;

use crate::calendar::{display_name, format_long_date};
use crate::types::{MonthlyStats, PersonalRecords, StreakInfo, Workout};

/// Shown in place of a missing value
pub const MISSING: &str = "--";

const MONTHLY_SUBTITLE: &str = "This month";
const RECORD_SUBTITLE: &str = "Personal best";

/// Format number with thousands separators
pub fn format_number(n: u64) -> String {
    if n == 0 {
        return "0".to_string();
    }

    let s = n.to_string();
    let len = s.len();
    let mut result = String::with_capacity(len + len / 3);

    // Digits are ASCII, so byte indexing is safe
    for (i, ch) in s.bytes().enumerate() {
        if i > 0 && (len - i).is_multiple_of(3) {
            result.push(',');
        }
        result.push(ch as char);
    }

    result
}

/// `0m`, `45m` or `1h 5m`; seconds below a full minute are dropped
pub fn format_duration_minutes(seconds: u64) -> String {
    let minutes = seconds / 60;
    let hours = minutes / 60;
    let rest = minutes % 60;
    if hours > 0 {
        format!("{}h {}m", hours, rest)
    } else {
        format!("{}m", rest)
    }
}

/// One labelled value on a stat card
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatCard {
    pub label: &'static str,
    pub value: String,
    pub subtitle: &'static str,
}

impl StatCard {
    fn new(label: &'static str, value: String, subtitle: &'static str) -> Self {
        Self {
            label,
            value,
            subtitle,
        }
    }
}

/// The four current-month cards; absent stats read as zero
pub fn monthly_cards(stats: Option<&MonthlyStats>) -> Vec<StatCard> {
    let stats = stats.copied().unwrap_or_default();
    vec![
        StatCard::new("Workouts", stats.workouts.to_string(), MONTHLY_SUBTITLE),
        StatCard::new(
            "Distance",
            format!("{:.1} km", stats.distance_km),
            MONTHLY_SUBTITLE,
        ),
        StatCard::new(
            "Duration",
            format_duration_minutes(stats.duration_seconds),
            MONTHLY_SUBTITLE,
        ),
        StatCard::new("Calories", format_number(stats.calories), MONTHLY_SUBTITLE),
    ]
}

fn positive_f64(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite() && *v > 0.0)
}

fn or_missing<T>(value: Option<T>, format: impl FnOnce(T) -> String) -> String {
    value.map(format).unwrap_or_else(|| MISSING.to_string())
}

/// The six personal-record cards; missing or zero records show `--`
pub fn record_cards(records: Option<&PersonalRecords>) -> Vec<StatCard> {
    let r = records.copied().unwrap_or_default();
    vec![
        StatCard::new(
            "Distance",
            or_missing(positive_f64(r.max_distance_km), |v| format!("{:.1} km", v)),
            RECORD_SUBTITLE,
        ),
        StatCard::new(
            "Duration",
            or_missing(positive_f64(r.max_duration_hours), |v| {
                format!("{:.1} hrs", v)
            }),
            RECORD_SUBTITLE,
        ),
        StatCard::new(
            "Max HR",
            or_missing(r.max_heart_rate.filter(|v| *v > 0), |v| {
                format!("{} bpm", v)
            }),
            RECORD_SUBTITLE,
        ),
        StatCard::new(
            "Speed",
            or_missing(positive_f64(r.max_speed_kmh), |v| format!("{:.1} km/h", v)),
            RECORD_SUBTITLE,
        ),
        StatCard::new(
            "Elevation",
            or_missing(positive_f64(r.max_elevation_gain), |v| format!("{:.0} m", v)),
            RECORD_SUBTITLE,
        ),
        StatCard::new(
            "Calories",
            or_missing(r.max_calories.filter(|v| *v > 0), |v| v.to_string()),
            RECORD_SUBTITLE,
        ),
    ]
}

/// "Current Streak: N days" and "Active Days: N"
pub fn streak_lines(streak: StreakInfo) -> [String; 2] {
    [
        format!("Current Streak: {} days", streak.current_streak),
        format!("Active Days: {}", streak.active_days),
    ]
}

/// Label/value rows for the workout detail popup
pub fn workout_detail_lines(workout: &Workout) -> Vec<(&'static str, String)> {
    vec![
        ("Type", display_name(&workout.workout_type)),
        ("Date", format_long_date(workout.date)),
        ("Duration", format_duration_minutes(workout.duration_seconds)),
        (
            "Distance",
            or_missing(positive_f64(workout.distance_km), |v| format!("{:.2} km", v)),
        ),
        (
            "Calories",
            or_missing(workout.calories.filter(|v| *v > 0), format_number),
        ),
        (
            "Avg HR",
            or_missing(workout.avg_heart_rate.filter(|v| *v > 0), |v| {
                format!("{} bpm", v)
            }),
        ),
        (
            "Max HR",
            or_missing(workout.max_heart_rate.filter(|v| *v > 0), |v| {
                format!("{} bpm", v)
            }),
        ),
        (
            "Elevation",
            or_missing(positive_f64(workout.elevation_gain), |v| {
                format!("{:.0} m", v)
            }),
        ),
        (
            "Notes",
            or_missing(
                workout
                    .notes
                    .as_deref()
                    .map(str::trim)
                    .filter(|n| !n.is_empty()),
                str::to_string,
            ),
        ),
    ]
}

//! Per-cell display rules: background style, tooltip text, click target

use chrono::NaiveDate;

use super::activity_types::{activity_color, display_name, ActivityColor};
use super::grid::GridCell;
use super::index::date_key;

/// Tooltip date format, e.g. "Jan 5, 2025"
pub const LONG_DATE_FORMAT: &str = "%b %-d, %Y";

/// "Jan 5, 2025"
pub fn format_long_date(date: NaiveDate) -> String {
    date.format(LONG_DATE_FORMAT).to_string()
}

/// Background style for a grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayStyle {
    /// Padding cell: nothing rendered, not interactive
    Transparent,
    /// Zero-activity baseline (heat level 0)
    NoActivity,
    /// Colored by the day's first listed activity type
    Activity(ActivityColor),
}

impl DayStyle {
    /// Stable name used in JSON output
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Transparent => "transparent",
            Self::NoActivity => "heat-0",
            Self::Activity(_) => "activity",
        }
    }

    pub fn color(self) -> Option<ActivityColor> {
        match self {
            Self::Activity(color) => Some(color),
            _ => None,
        }
    }
}

/// Resolve the style of a cell.
/// Multiple activity types are not blended: the first listed type wins.
pub fn day_style(cell: &GridCell) -> DayStyle {
    if cell.is_empty() {
        return DayStyle::Transparent;
    }
    if cell.count == 0 {
        return DayStyle::NoActivity;
    }
    match cell.workout_types.first() {
        Some(first) => DayStyle::Activity(activity_color(first)),
        None => DayStyle::NoActivity,
    }
}

/// "1 workout" / "3 workouts"
pub fn workout_count_label(count: u32) -> String {
    if count == 1 {
        "1 workout".to_string()
    } else {
        format!("{} workouts", count)
    }
}

/// Hover text for a cell; empty for padding cells.
/// A day with workouts but no listed types is a single line, with no trailing newline.
pub fn tooltip(cell: &GridCell) -> String {
    let Some(date) = cell.date else {
        return String::new();
    };
    let date_text = format_long_date(date);

    if cell.count == 0 {
        return format!("{}: No workouts", date_text);
    }

    let mut text = format!("{}: {}", date_text, workout_count_label(cell.count));
    if !cell.workout_types.is_empty() {
        let types = cell
            .workout_types
            .iter()
            .map(|t| display_name(t))
            .collect::<Vec<_>>()
            .join(", ");
        text.push('\n');
        text.push_str(&types);
    }
    text
}

/// Date key to look up when the cell is clicked.
/// Only in-window cells with at least one workout are clickable.
pub fn click_target(cell: &GridCell) -> Option<String> {
    match cell.date {
        Some(date) if cell.count > 0 => Some(date_key(date)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::activity_types::FALLBACK_COLOR;
    use crate::calendar::index::DayActivity;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn cell(count: u32, types: &[&str]) -> GridCell {
        GridCell::day(
            date(2025, 6, 15),
            DayActivity {
                count,
                workout_types: types.iter().map(|t| t.to_string()).collect(),
            },
        )
    }

    // ========== day_style tests ==========

    #[test]
    fn test_style_empty_cell_transparent() {
        assert_eq!(day_style(&GridCell::empty()), DayStyle::Transparent);
    }

    #[test]
    fn test_style_zero_count_heat_zero() {
        assert_eq!(day_style(&cell(0, &[])), DayStyle::NoActivity);
        assert_eq!(DayStyle::NoActivity.as_str(), "heat-0");
    }

    #[test]
    fn test_style_first_type_wins() {
        let style = day_style(&cell(3, &["run", "swim"]));
        assert_eq!(style, DayStyle::Activity(activity_color("run")));
        assert_eq!(style.color(), Some(activity_color("run")));
    }

    #[test]
    fn test_style_unknown_type_uses_fallback() {
        assert_eq!(
            day_style(&cell(1, &["sumo"])),
            DayStyle::Activity(FALLBACK_COLOR)
        );
    }

    #[test]
    fn test_style_count_without_types() {
        assert_eq!(day_style(&cell(2, &[])), DayStyle::NoActivity);
    }

    // ========== tooltip tests ==========

    #[test]
    fn test_tooltip_empty_cell() {
        assert_eq!(tooltip(&GridCell::empty()), "");
    }

    #[test]
    fn test_tooltip_no_workouts() {
        assert_eq!(tooltip(&cell(0, &[])), "Jun 15, 2025: No workouts");
    }

    #[test]
    fn test_tooltip_singular() {
        assert_eq!(tooltip(&cell(1, &["yoga"])), "Jun 15, 2025: 1 workout\nYoga");
    }

    #[test]
    fn test_tooltip_plural() {
        assert_eq!(
            tooltip(&cell(3, &["run", "swim"])),
            "Jun 15, 2025: 3 workouts\nRun, Swim"
        );
        assert_eq!(workout_count_label(2), "2 workouts");
    }

    #[test]
    fn test_tooltip_without_types_has_single_line() {
        assert_eq!(tooltip(&cell(2, &[])), "Jun 15, 2025: 2 workouts");
    }

    #[test]
    fn test_long_date_no_zero_padding() {
        assert_eq!(format_long_date(date(2025, 1, 5)), "Jan 5, 2025");
    }

    // ========== click_target tests ==========

    #[test]
    fn test_click_target_only_active_days() {
        assert_eq!(click_target(&GridCell::empty()), None);
        assert_eq!(click_target(&cell(0, &[])), None);
        assert_eq!(
            click_target(&cell(2, &["run"])),
            Some("2025-06-15".to_string())
        );
    }
}

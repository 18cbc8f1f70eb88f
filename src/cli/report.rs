//! Plain text and JSON renderings for the non-interactive subcommands

use serde_json::{json, Value};

use crate::calendar::{
    date_key, day_style, tooltip, CalendarView, DayStyle, GridCell, Legend, DAYS_PER_WEEK,
    LEGEND_PLACEHOLDER,
};
use crate::services::summary::{monthly_cards, record_cards, streak_lines};
use crate::services::StatCard;
use crate::types::DashboardSnapshot;

/// Width of the weekday label column
const LABEL_WIDTH: usize = 4;

/// Characters per week column
const CELL_WIDTH: usize = 2;

const DAY_LABELS: [&str; DAYS_PER_WEEK] = ["Mon", "", "Wed", "", "Fri", "", "Sun"];

fn cell_glyph(cell: &GridCell) -> &'static str {
    match day_style(cell) {
        DayStyle::Transparent => "  ",
        DayStyle::NoActivity => "· ",
        DayStyle::Activity(_) => "■ ",
    }
}

/// Month label row followed by one row per weekday
pub fn calendar_text(view: &CalendarView) -> String {
    let width = LABEL_WIDTH + view.grid.len() * CELL_WIDTH;
    let mut label_row: Vec<char> = vec![' '; width];
    let mut next_free = 0;
    for label in &view.month_labels {
        let x = LABEL_WIDTH + label.position * CELL_WIDTH;
        // Labels closer than their own width would overlap
        if x < next_free {
            continue;
        }
        for (i, ch) in label.name.chars().enumerate() {
            if let Some(slot) = label_row.get_mut(x + i) {
                *slot = ch;
            }
        }
        next_free = x + label.name.len() + 1;
    }

    let mut out = String::new();
    out.push_str(label_row.iter().collect::<String>().trim_end());
    out.push('\n');

    for (day_idx, day_label) in DAY_LABELS.iter().enumerate() {
        let mut row = format!("{:<width$}", day_label, width = LABEL_WIDTH);
        for week in view.grid.weeks() {
            if let Some(cell) = week.cell(day_idx) {
                row.push_str(cell_glyph(cell));
            }
        }
        out.push_str(row.trim_end());
        out.push('\n');
    }
    out
}

fn cell_json(cell: &GridCell) -> Value {
    let style = day_style(cell);
    json!({
        "date": cell.date.map(date_key),
        "count": cell.count,
        "workout_types": cell.workout_types,
        "is_empty": cell.is_empty(),
        "style": style.as_str(),
        "color": style.color().map(|c| c.hex()),
        "tooltip": tooltip(cell),
    })
}

/// `{start, end, weeks, month_labels}`
pub fn calendar_json(view: &CalendarView) -> Value {
    let weeks: Vec<Value> = view
        .grid
        .weeks()
        .iter()
        .map(|week| Value::Array(week.iter().map(cell_json).collect()))
        .collect();
    let month_labels: Vec<Value> = view
        .month_labels
        .iter()
        .map(|label| json!({ "name": label.name, "position": label.position }))
        .collect();

    json!({
        "start": date_key(view.grid.start()),
        "end": date_key(view.grid.end()),
        "weeks": weeks,
        "month_labels": month_labels,
    })
}

pub fn legend_text(legend: &Legend) -> String {
    match legend {
        Legend::Placeholder => format!("{}\n", LEGEND_PLACEHOLDER),
        Legend::Entries(entries) => entries
            .iter()
            .map(|e| format!("{}  {}\n", e.color.hex(), e.display_name))
            .collect(),
    }
}

pub fn legend_json(legend: &Legend) -> Value {
    let entries: Vec<Value> = legend
        .entries()
        .iter()
        .map(|e| {
            json!({
                "type": e.activity_type,
                "name": e.display_name,
                "color": e.color.hex(),
            })
        })
        .collect();
    json!({
        "placeholder": legend.is_placeholder().then_some(LEGEND_PLACEHOLDER),
        "entries": entries,
    })
}

fn cards_text(title: &str, cards: &[StatCard]) -> String {
    let mut out = format!("{}\n", title);
    for card in cards {
        out.push_str(&format!("  {:<18} {}\n", card.label, card.value));
    }
    out
}

/// Streak, this month's cards and personal records
pub fn stats_text(snapshot: &DashboardSnapshot) -> String {
    let [streak, active] = streak_lines(snapshot.streak());
    let mut out = format!("{}\n{}\n\n", streak, active);
    out.push_str(&cards_text(
        "This Month",
        &monthly_cards(snapshot.monthly_stats.as_ref()),
    ));
    out.push('\n');
    out.push_str(&cards_text(
        "Personal Records",
        &record_cards(snapshot.personal_records.as_ref()),
    ));
    out
}

pub fn stats_json(snapshot: &DashboardSnapshot) -> Value {
    let streak = snapshot.streak();
    json!({
        "streak": {
            "current_streak": streak.current_streak,
            "active_days": streak.active_days,
        },
        "monthly": monthly_cards(snapshot.monthly_stats.as_ref()),
        "records": record_cards(snapshot.personal_records.as_ref()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::build_legend;
    use crate::types::{ActivityBreakdownItem, DailyActivity, StreakInfo};
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_view() -> CalendarView {
        let records = vec![DailyActivity::new(
            date(2025, 6, 15),
            3,
            vec!["run".into(), "swim".into()],
        )];
        CalendarView::build(&records, date(2025, 6, 15))
    }

    // ========== calendar ==========

    #[test]
    fn test_calendar_text_has_label_row_and_weekdays() {
        let text = calendar_text(&sample_view());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 1 + DAYS_PER_WEEK);
        assert!(lines[0].contains("Jun"));
        assert!(lines[1].starts_with("Mon"));
        assert!(lines[7].starts_with("Sun"));
        // 2025-06-15 is a Sunday and the last cell of the grid
        assert!(lines[7].ends_with('■'));
    }

    #[test]
    fn test_calendar_json_shape() {
        let view = sample_view();
        let value = calendar_json(&view);

        assert_eq!(value["start"], "2024-06-16");
        assert_eq!(value["end"], "2025-06-15");
        let weeks = value["weeks"].as_array().unwrap();
        assert_eq!(weeks.len(), view.grid.len());
        assert!(weeks.iter().all(|w| w.as_array().unwrap().len() == 7));

        let last = &weeks[weeks.len() - 1][6];
        assert_eq!(last["count"], 3);
        assert_eq!(last["style"], "activity");
        assert_eq!(last["color"], "#f97316");
        assert_eq!(last["tooltip"], "Jun 15, 2025: 3 workouts\nRun, Swim");
    }

    #[test]
    fn test_calendar_json_padding_cells() {
        let value = calendar_json(&sample_view());
        // 2024-06-16 is a Sunday, so the first week is six padding cells
        let first = &value["weeks"][0][0];

        assert_eq!(first["is_empty"], true);
        assert!(first["date"].is_null());
        assert_eq!(first["style"], "transparent");
        assert_eq!(first["tooltip"], "");
    }

    // ========== legend ==========

    #[test]
    fn test_legend_text_placeholder() {
        let legend = build_legend(&[]);
        assert_eq!(legend_text(&legend), "No activities yet\n");
        assert_eq!(legend_json(&legend)["placeholder"], LEGEND_PLACEHOLDER);
    }

    #[test]
    fn test_legend_json_entries() {
        let legend = build_legend(&[
            ActivityBreakdownItem {
                name: "run".into(),
                count: 10,
            },
            ActivityBreakdownItem {
                name: "swim".into(),
                count: 4,
            },
        ]);
        let value = legend_json(&legend);

        assert!(value["placeholder"].is_null());
        assert_eq!(value["entries"][0]["name"], "Run");
        assert_eq!(value["entries"][1]["type"], "swim");
        assert!(legend_text(&legend).contains("Swim"));
    }

    // ========== stats ==========

    #[test]
    fn test_stats_text_defaults() {
        let text = stats_text(&DashboardSnapshot::default());

        assert!(text.contains("Current Streak: 0 days"));
        assert!(text.contains("This Month"));
        assert!(text.contains("Personal Records"));
        assert!(text.contains("--"));
    }

    #[test]
    fn test_stats_json_streak() {
        let snapshot = DashboardSnapshot {
            streak_info: Some(StreakInfo {
                current_streak: 4,
                active_days: 120,
            }),
            ..Default::default()
        };
        let value = stats_json(&snapshot);

        assert_eq!(value["streak"]["current_streak"], 4);
        assert_eq!(value["streak"]["active_days"], 120);
        assert_eq!(value["monthly"].as_array().unwrap().len(), 4);
        assert_eq!(value["records"].as_array().unwrap().len(), 6);
    }
}

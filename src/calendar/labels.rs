//! Month labels positioned over grid week columns

use chrono::Datelike;

use super::grid::Grid;

const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Short English month name for 1-based `month` ("Jan".."Dec")
pub fn month_short_name(month: u32) -> &'static str {
    MONTH_NAMES
        .get(month.wrapping_sub(1) as usize)
        .copied()
        .unwrap_or("")
}

/// A month name anchored at a week column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthLabel {
    pub name: &'static str,
    /// 1-based calendar month
    pub month: u32,
    /// Index of the first week whose first in-window day falls in this month
    pub position: usize,
}

/// One label per month transition, read from each week's first in-window day.
/// Weeks made only of padding are skipped. Positions are strictly increasing.
pub fn month_labels(grid: &Grid) -> Vec<MonthLabel> {
    let mut labels = Vec::new();
    let mut last_month: Option<u32> = None;

    for (week_idx, week) in grid.weeks().iter().enumerate() {
        let Some(date) = week.first_day().and_then(|cell| cell.date) else {
            continue;
        };
        let month = date.month();
        if last_month != Some(month) {
            labels.push(MonthLabel {
                name: month_short_name(month),
                month,
                position: week_idx,
            });
            last_month = Some(month);
        }
    }

    labels
}

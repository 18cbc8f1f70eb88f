//! Trailing-year calendar grid: week columns x 7 weekday rows

use chrono::{Datelike, Duration, NaiveDate};

use super::index::{ActivityIndex, DayActivity};

/// Number of calendar days covered by the grid, ending at (and including) today
pub const WINDOW_DAYS: usize = 365;

/// Rows per week column (Mon..Sun)
pub const DAYS_PER_WEEK: usize = 7;

/// A single cell in the calendar grid.
///
/// Padding cells (`date == None`) only complete the first and last week;
/// they carry no activity and are never clickable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GridCell {
    pub date: Option<NaiveDate>,
    pub count: u32,
    pub workout_types: Vec<String>,
}

impl GridCell {
    /// Padding cell outside the window
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn day(date: NaiveDate, activity: DayActivity) -> Self {
        Self {
            date: Some(date),
            count: activity.count,
            workout_types: activity.workout_types,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.date.is_none()
    }
}

/// One column of the grid, index 0 = Monday .. 6 = Sunday
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekColumn([GridCell; DAYS_PER_WEEK]);

impl WeekColumn {
    pub fn cells(&self) -> &[GridCell; DAYS_PER_WEEK] {
        &self.0
    }

    pub fn cell(&self, day_idx: usize) -> Option<&GridCell> {
        self.0.get(day_idx)
    }

    /// First cell of the week that falls inside the window
    pub fn first_day(&self) -> Option<&GridCell> {
        self.0.iter().find(|cell| !cell.is_empty())
    }

    pub fn iter(&self) -> impl Iterator<Item = &GridCell> {
        self.0.iter()
    }
}

/// Week columns covering `[start, end]`, oldest week first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    start: NaiveDate,
    end: NaiveDate,
    leading_padding: usize,
    weeks: Vec<WeekColumn>,
}

impl Grid {
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn weeks(&self) -> &[WeekColumn] {
        &self.weeks
    }

    pub fn len(&self) -> usize {
        self.weeks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weeks.is_empty()
    }

    pub fn cell(&self, week_idx: usize, day_idx: usize) -> Option<&GridCell> {
        self.weeks.get(week_idx).and_then(|w| w.cell(day_idx))
    }

    /// Non-empty cells in chronological order
    pub fn days(&self) -> impl Iterator<Item = &GridCell> {
        self.weeks
            .iter()
            .flat_map(|w| w.iter())
            .filter(|cell| !cell.is_empty())
    }

    /// (week_idx, day_idx) of `date`, if it falls inside the window
    pub fn locate(&self, date: NaiveDate) -> Option<(usize, usize)> {
        if date < self.start || date > self.end {
            return None;
        }
        let offset = (date - self.start).num_days() as usize + self.leading_padding;
        Some((offset / DAYS_PER_WEEK, offset % DAYS_PER_WEEK))
    }

    /// Cell holding `date`, if it falls inside the window
    pub fn cell_for(&self, date: NaiveDate) -> Option<&GridCell> {
        self.locate(date)
            .and_then(|(week_idx, day_idx)| self.cell(week_idx, day_idx))
    }
}

/// Build the Monday-aligned grid for the 365 days ending at `today`.
///
/// The window is a fixed day count, so leap years do not change its length.
/// Leading cells before the first date and trailing cells after today are
/// padding.
pub fn build_grid(index: &ActivityIndex, today: NaiveDate) -> Grid {
    let start = today
        .checked_sub_signed(Duration::days(WINDOW_DAYS as i64 - 1))
        .unwrap_or(NaiveDate::MIN);

    // Shift so Monday lands in row 0
    let leading_padding = start.weekday().num_days_from_monday() as usize;

    let mut cells: Vec<GridCell> = Vec::with_capacity(leading_padding + WINDOW_DAYS + DAYS_PER_WEEK);
    cells.extend((0..leading_padding).map(|_| GridCell::empty()));
    cells.extend(
        start
            .iter_days()
            .take_while(|date| *date <= today)
            .map(|date| GridCell::day(date, index.get(date))),
    );

    let trailing_padding = (DAYS_PER_WEEK - cells.len() % DAYS_PER_WEEK) % DAYS_PER_WEEK;
    cells.extend((0..trailing_padding).map(|_| GridCell::empty()));

    let week_count = cells.len() / DAYS_PER_WEEK;
    let mut cells = cells.into_iter();
    let weeks = (0..week_count)
        .map(|_| WeekColumn(std::array::from_fn(|_| cells.next().unwrap_or_default())))
        .collect();

    Grid {
        start,
        end: today,
        leading_padding,
        weeks,
    }
}

//! Contribution calendar widget
//!
//! Draws the week-column grid with box borders, one 2-char block per day,
//! and the month labels above it. When the terminal is too narrow for every
//! week, the newest weeks are shown, scrolled back far enough to keep the
//! cursor visible.

use std::ops::Range;

use chrono::NaiveDate;
use ratatui::{buffer::Buffer, layout::Rect, style::Style, widgets::Widget};

use crate::calendar::{day_style, CalendarView, DAYS_PER_WEEK};
use crate::tui::theme::Theme;

/// Cell dimensions for grid layout with borders
const CELL_HEIGHT: u16 = 2; // 1 row content + 1 row border
const CELL_WIDTH: u16 = 3; // 2 chars content + 1 border
const LABEL_WIDTH: u16 = 4; // "Mon " prefix

/// Month row + top border + 7 content/separator pairs
pub const CALENDAR_HEIGHT: u16 = 2 + DAYS_PER_WEEK as u16 * CELL_HEIGHT;

/// Box drawing characters for grid border
const BOX_TOP_LEFT: &str = "┌";
const BOX_TOP_RIGHT: &str = "┐";
const BOX_BOTTOM_LEFT: &str = "└";
const BOX_BOTTOM_RIGHT: &str = "┘";
const BOX_HORIZONTAL: &str = "─";
const BOX_VERTICAL: &str = "│";
const BOX_T_DOWN: &str = "┬";
const BOX_T_UP: &str = "┴";
const BOX_T_RIGHT: &str = "├";
const BOX_T_LEFT: &str = "┤";
const BOX_CROSS: &str = "┼";

const DAY_BLOCK: &str = "██";
const CURSOR_BLOCK: &str = "▐▌";

const WEEKDAY_LABELS: [&str; DAYS_PER_WEEK] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Number of week columns that fit in `width`
pub fn weeks_for_width(width: u16) -> usize {
    // Account for label + left border (1 char)
    let available = width.saturating_sub(LABEL_WIDTH + 1);
    ((available / CELL_WIDTH) as usize).max(1)
}

/// Week columns to draw: the newest `capacity` weeks, shifted back so
/// `cursor_week` stays on screen
pub fn visible_weeks(total: usize, capacity: usize, cursor_week: Option<usize>) -> Range<usize> {
    let shown = capacity.min(total);
    let mut start = total - shown;
    if let Some(cursor) = cursor_week.filter(|c| *c < total) {
        if cursor < start {
            start = cursor;
        }
    }
    start..start + shown
}

/// Calendar heatmap widget for ratatui
pub struct CalendarHeatmap<'a> {
    view: &'a CalendarView,
    cursor: Option<NaiveDate>,
    theme: Theme,
}

impl<'a> CalendarHeatmap<'a> {
    pub fn new(view: &'a CalendarView, theme: Theme) -> Self {
        Self {
            view,
            cursor: None,
            theme,
        }
    }

    pub fn with_cursor(mut self, cursor: NaiveDate) -> Self {
        self.cursor = Some(cursor);
        self
    }

    fn window(&self, width: u16) -> Range<usize> {
        let cursor_week = self
            .cursor
            .and_then(|date| self.view.grid.locate(date))
            .map(|(week, _)| week);
        visible_weeks(self.view.grid.len(), weeks_for_width(width), cursor_week)
    }

    /// Render one horizontal border row, e.g. ├──┼──┼──┤
    fn render_border_row(
        &self,
        buf: &mut Buffer,
        start_x: u16,
        max_x: u16,
        y: u16,
        weeks: usize,
        (left, junction, right): (&str, &str, &str),
    ) {
        let border_style = Style::default().fg(self.theme.muted());

        if start_x < max_x {
            buf.set_string(start_x, y, left, border_style);
        }

        for col in 0..weeks {
            let x = start_x + 1 + (col as u16 * CELL_WIDTH);
            if x + 2 >= max_x {
                break;
            }
            buf.set_string(x, y, BOX_HORIZONTAL, border_style);
            buf.set_string(x + 1, y, BOX_HORIZONTAL, border_style);
            let joint = if col + 1 < weeks { junction } else { right };
            buf.set_string(x + 2, y, joint, border_style);
        }
    }

    /// Render a content row: Mon │██│██│  │
    fn render_content_row(
        &self,
        buf: &mut Buffer,
        label_x: u16,
        max_x: u16,
        y: u16,
        day_idx: usize,
        window: &Range<usize>,
    ) {
        let start_x = label_x + LABEL_WIDTH;
        let border_style = Style::default().fg(self.theme.muted());

        buf.set_string(label_x, y, WEEKDAY_LABELS[day_idx], border_style);
        if start_x < max_x {
            buf.set_string(start_x, y, BOX_VERTICAL, border_style);
        }

        for (col, week_idx) in window.clone().enumerate() {
            let x = start_x + 1 + (col as u16 * CELL_WIDTH);
            if x + 2 >= max_x {
                break;
            }

            if let Some(cell) = self.view.grid.cell(week_idx, day_idx) {
                if let Some(color) = self.theme.day_color(day_style(cell)) {
                    let is_cursor = cell.date.is_some() && cell.date == self.cursor;
                    if is_cursor {
                        let style = Style::default().fg(color).bg(self.theme.accent());
                        buf.set_string(x, y, CURSOR_BLOCK, style);
                    } else {
                        buf.set_string(x, y, DAY_BLOCK, Style::default().fg(color));
                    }
                }
            }

            buf.set_string(x + 2, y, BOX_VERTICAL, border_style);
        }
    }

    /// Month names above the first week column of each month
    fn render_month_labels(
        &self,
        buf: &mut Buffer,
        start_x: u16,
        max_x: u16,
        y: u16,
        window: &Range<usize>,
    ) {
        let style = Style::default().fg(self.theme.muted());
        let mut next_free_x = start_x;

        for label in &self.view.month_labels {
            if !window.contains(&label.position) {
                continue;
            }
            let x = start_x + ((label.position - window.start) as u16 * CELL_WIDTH);
            // Adjacent labels can collide when a month starts mid-window
            if x < next_free_x {
                continue;
            }
            if x + 3 > max_x {
                break;
            }
            buf.set_string(x, y, label.name, style);
            next_free_x = x + 4;
        }
    }
}

impl Widget for CalendarHeatmap<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width <= LABEL_WIDTH + 1 || area.height == 0 || self.view.grid.is_empty() {
            return;
        }

        let window = self.window(area.width);
        let weeks = window.len();
        let grid_width = LABEL_WIDTH + 1 + (weeks as u16 * CELL_WIDTH);
        let label_x = area.x + area.width.saturating_sub(grid_width) / 2;
        let start_x = label_x + LABEL_WIDTH;
        let max_x = area.x + area.width;
        let max_y = area.y + area.height;

        // Row 0: month labels
        self.render_month_labels(buf, start_x + 1, max_x, area.y, &window);

        // Row 1: ┌──┬──┬──┐
        let top_y = area.y + 1;
        if top_y >= max_y {
            return;
        }
        self.render_border_row(
            buf,
            start_x,
            max_x,
            top_y,
            weeks,
            (BOX_TOP_LEFT, BOX_T_DOWN, BOX_TOP_RIGHT),
        );

        for day_idx in 0..DAYS_PER_WEEK {
            let content_y = top_y + 1 + (day_idx as u16 * CELL_HEIGHT);
            if content_y >= max_y {
                break;
            }
            self.render_content_row(buf, label_x, max_x, content_y, day_idx, &window);

            let separator_y = content_y + 1;
            if separator_y >= max_y {
                break;
            }
            let glyphs = if day_idx + 1 < DAYS_PER_WEEK {
                (BOX_T_RIGHT, BOX_CROSS, BOX_T_LEFT)
            } else {
                (BOX_BOTTOM_LEFT, BOX_T_UP, BOX_BOTTOM_RIGHT)
            };
            self.render_border_row(buf, start_x, max_x, separator_y, weeks, glyphs);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DailyActivity;
    use ratatui::style::Color;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_view() -> CalendarView {
        // 2025-06-15 is a Sunday
        let records = vec![
            DailyActivity::new(date(2025, 6, 15), 2, vec!["run".into()]),
            DailyActivity::new(date(2025, 6, 14), 1, vec!["swim".into()]),
        ];
        CalendarView::build(&records, date(2025, 6, 15))
    }

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf.cell((x, y)).unwrap().symbol().to_string())
            .collect()
    }

    // ========== Layout helpers ==========

    #[test]
    fn test_weeks_for_width() {
        // label 4 + left border 1 + 53*3 = 164
        assert_eq!(weeks_for_width(164), 53);
        assert_eq!(weeks_for_width(44), 13);
        assert_eq!(weeks_for_width(0), 1);
    }

    #[test]
    fn test_visible_weeks_shows_newest() {
        assert_eq!(visible_weeks(53, 13, None), 40..53);
        assert_eq!(visible_weeks(53, 80, None), 0..53);
    }

    #[test]
    fn test_visible_weeks_follows_cursor() {
        assert_eq!(visible_weeks(53, 13, Some(5)), 5..18);
        assert_eq!(visible_weeks(53, 13, Some(50)), 40..53);
    }

    #[test]
    fn test_calendar_height() {
        assert_eq!(CALENDAR_HEIGHT, 16);
    }

    // ========== Rendering ==========

    #[test]
    fn test_render_grid_structure() {
        let view = sample_view();
        let area = Rect::new(0, 0, 30, CALENDAR_HEIGHT);
        let mut buf = Buffer::empty(area);
        CalendarHeatmap::new(&view, Theme::Dark).render(area, &mut buf);

        // 30 wide fits 8 weeks: 4 + 1 + 24 = 29, centered with offset 0
        assert_eq!(buf.cell((4, 1)).unwrap().symbol(), BOX_TOP_LEFT);
        assert_eq!(buf.cell((4, 2)).unwrap().symbol(), BOX_VERTICAL);
        assert_eq!(buf.cell((4, 3)).unwrap().symbol(), BOX_T_RIGHT);
        assert_eq!(buf.cell((4, 15)).unwrap().symbol(), BOX_BOTTOM_LEFT);
        assert!(row_text(&buf, 2).starts_with("Mon"));
        assert!(row_text(&buf, 14).starts_with("Sun"));
    }

    #[test]
    fn test_render_activity_colors() {
        let view = sample_view();
        let area = Rect::new(0, 0, 29, CALENDAR_HEIGHT);
        let mut buf = Buffer::empty(area);
        CalendarHeatmap::new(&view, Theme::Dark).render(area, &mut buf);

        // Today (Sunday) is in the last column, last row
        let last_col_x = 4 + 1 + 7 * CELL_WIDTH;
        let sunday = buf.cell((last_col_x, 14)).unwrap();
        assert_eq!(sunday.symbol(), "█");
        assert_eq!(sunday.fg, Color::Rgb(0xf9, 0x73, 0x16));

        // Monday of the same week has no activity
        let monday = buf.cell((last_col_x, 2)).unwrap();
        assert_eq!(monday.fg, Color::Indexed(236));
    }

    #[test]
    fn test_render_cursor() {
        let view = sample_view();
        let area = Rect::new(0, 0, 29, CALENDAR_HEIGHT);
        let mut buf = Buffer::empty(area);
        CalendarHeatmap::new(&view, Theme::Dark)
            .with_cursor(date(2025, 6, 14))
            .render(area, &mut buf);

        let last_col_x = 4 + 1 + 7 * CELL_WIDTH;
        let saturday = buf.cell((last_col_x, 12)).unwrap();
        assert_eq!(saturday.symbol(), "▐");
        assert_eq!(saturday.bg, Color::Cyan);
    }

    #[test]
    fn test_render_month_labels() {
        let view = sample_view();
        let area = Rect::new(0, 0, 29, CALENDAR_HEIGHT);
        let mut buf = Buffer::empty(area);
        CalendarHeatmap::new(&view, Theme::Dark).render(area, &mut buf);

        // Last 8 weeks run from late April to mid June
        let labels = row_text(&buf, 0);
        assert!(labels.contains("May"));
        assert!(labels.contains("Jun"));
    }

    #[test]
    fn test_render_tiny_area_is_noop() {
        let view = sample_view();
        let area = Rect::new(0, 0, 4, 3);
        let mut buf = Buffer::empty(area);
        CalendarHeatmap::new(&view, Theme::Dark).render(area, &mut buf);
        assert_eq!(row_text(&buf, 0).trim(), "");
    }
}

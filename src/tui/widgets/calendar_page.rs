//! Calendar tab: streak headline, heatmap, legend and the selected-day status line

use chrono::NaiveDate;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::calendar::{CalendarHeatmap, CALENDAR_HEIGHT};
use super::legend::LegendBar;
use super::tabs::{Tab, TabBar};
use super::{render_keybindings, render_separator};
use crate::calendar::{tooltip, CalendarView, Legend};
use crate::tui::theme::Theme;
use crate::types::StreakInfo;

/// 53 weeks * 3-char cells + 5 label/border = 164, plus padding
const MAX_CONTENT_WIDTH: u16 = 170;

/// Status text for the selected day; tooltip lines joined on one row
pub fn status_text(view: &CalendarView, cursor: NaiveDate) -> String {
    match view.grid.cell_for(cursor) {
        Some(cell) => tooltip(cell).replace('\n', "  ·  "),
        None => String::new(),
    }
}

/// Calendar tab widget
pub struct CalendarPage<'a> {
    view: &'a CalendarView,
    legend: &'a Legend,
    streak: StreakInfo,
    cursor: NaiveDate,
    selected_tab: Tab,
    theme: Theme,
}

impl<'a> CalendarPage<'a> {
    pub fn new(
        view: &'a CalendarView,
        legend: &'a Legend,
        streak: StreakInfo,
        cursor: NaiveDate,
        theme: Theme,
    ) -> Self {
        Self {
            view,
            legend,
            streak,
            cursor,
            selected_tab: Tab::Calendar,
            theme,
        }
    }

    pub fn with_tab(mut self, tab: Tab) -> Self {
        self.selected_tab = tab;
        self
    }
}

impl Widget for CalendarPage<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let content_width = area.width.min(MAX_CONTENT_WIDTH);
        let x_offset = (area.width.saturating_sub(content_width)) / 2;
        let centered_area = Rect {
            x: area.x + x_offset,
            y: area.y,
            width: content_width,
            height: area.height,
        };

        let chunks = Layout::vertical([
            Constraint::Length(1),               // 0: Top padding
            Constraint::Length(1),               // 1: Tabs
            Constraint::Length(1),               // 2: Separator
            Constraint::Length(2),               // 3: Streak headline
            Constraint::Length(1),               // 4: Blank
            Constraint::Length(CALENDAR_HEIGHT), // 5: Heatmap
            Constraint::Length(1),               // 6: Legend
            Constraint::Length(1),               // 7: Blank
            Constraint::Length(1),               // 8: Selected day
            Constraint::Fill(1),                 // 9: Remaining
            Constraint::Length(1),               // 10: Separator
            Constraint::Length(1),               // 11: Keybindings
        ])
        .split(centered_area);

        TabBar::new(self.selected_tab, self.theme).render(chunks[1], buf);
        render_separator(chunks[2], buf, self.theme);
        self.render_headline(chunks[3], buf);

        CalendarHeatmap::new(self.view, self.theme)
            .with_cursor(self.cursor)
            .render(chunks[5], buf);
        LegendBar::new(self.legend, self.theme).render(chunks[6], buf);
        self.render_status(chunks[8], buf);

        render_separator(chunks[10], buf, self.theme);
        render_keybindings(
            chunks[11],
            buf,
            self.theme,
            &[
                ("←↑↓→", "Move"),
                ("Enter", "Details"),
                ("Tab", "Switch view"),
                ("?", "Help"),
                ("q", "Quit"),
            ],
        );
    }
}

impl CalendarPage<'_> {
    fn render_headline(&self, area: Rect, buf: &mut Buffer) {
        let headline = Paragraph::new(vec![
            Line::from(Span::styled(
                format!("{} day streak", self.streak.current_streak),
                Style::default()
                    .fg(self.theme.accent())
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!("{} active days", self.streak.active_days),
                Style::default().fg(self.theme.muted()),
            )),
        ])
        .alignment(Alignment::Center);
        headline.render(area, buf);
    }

    fn render_status(&self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(Line::from(Span::styled(
            status_text(self.view, self.cursor),
            Style::default().fg(self.theme.date()),
        )))
        .alignment(Alignment::Center)
        .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::build_legend;
    use crate::types::DailyActivity;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_view() -> CalendarView {
        let records = vec![DailyActivity::new(
            date(2025, 6, 15),
            2,
            vec!["run".into(), "swim".into()],
        )];
        CalendarView::build(&records, date(2025, 6, 15))
    }

    #[test]
    fn test_status_text_active_day() {
        let view = sample_view();
        assert_eq!(
            status_text(&view, date(2025, 6, 15)),
            "Jun 15, 2025: 2 workouts  ·  Run, Swim"
        );
    }

    #[test]
    fn test_status_text_quiet_day() {
        let view = sample_view();
        assert_eq!(
            status_text(&view, date(2025, 6, 14)),
            "Jun 14, 2025: No workouts"
        );
    }

    #[test]
    fn test_status_text_outside_window() {
        let view = sample_view();
        assert_eq!(status_text(&view, date(2020, 1, 1)), "");
    }

    #[test]
    fn test_page_renders_streak_and_status() {
        let view = sample_view();
        let legend = build_legend(&[]);
        let streak = StreakInfo {
            current_streak: 3,
            active_days: 42,
        };
        let area = Rect::new(0, 0, 170, 32);
        let mut buf = Buffer::empty(area);
        CalendarPage::new(&view, &legend, streak, date(2025, 6, 15), Theme::Dark)
            .render(area, &mut buf);

        let text: String = (0..area.height)
            .map(|y| {
                (0..area.width)
                    .map(|x| buf.cell((x, y)).unwrap().symbol().to_string())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n");
        assert!(text.contains("3 day streak"));
        assert!(text.contains("42 active days"));
        assert!(text.contains("No activities yet"));
        assert!(text.contains("Jun 15, 2025: 2 workouts"));
    }
}

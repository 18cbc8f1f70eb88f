//! Stats view widget - streak, monthly totals and personal records in card grids

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use super::tabs::{Tab, TabBar};
use super::{render_keybindings, render_separator};
use crate::services::summary::{monthly_cards, record_cards, streak_lines, StatCard};
use crate::tui::theme::Theme;
use crate::types::DashboardSnapshot;

/// Maximum content width for Stats view
const MAX_CONTENT_WIDTH: u16 = 170;

/// Card dimensions
const CARD_WIDTH: u16 = 24;
const CARD_HEIGHT: u16 = 5;

/// Monthly totals sit on one row; the six records form a 2x3 grid
const MONTHLY_COLS: usize = 4;
const RECORD_COLS: usize = 3;

/// Calculate number of cards per row based on available width
fn cards_per_row(width: u16, max_cols: usize) -> usize {
    let usable_width = width.saturating_sub(4); // padding
    let cards = (usable_width / (CARD_WIDTH + 2)) as usize; // +2 for spacing
    cards.clamp(1, max_cols)
}

fn grid_height(card_count: usize, cols: usize) -> u16 {
    let rows = card_count.div_ceil(cols);
    (rows as u16) * (CARD_HEIGHT + 1) // +1 for spacing
}

/// Stats view widget
pub struct StatsView<'a> {
    snapshot: &'a DashboardSnapshot,
    selected_tab: Tab,
    theme: Theme,
}

impl<'a> StatsView<'a> {
    pub fn new(snapshot: &'a DashboardSnapshot, theme: Theme) -> Self {
        Self {
            snapshot,
            selected_tab: Tab::Stats,
            theme,
        }
    }

    pub fn with_tab(mut self, tab: Tab) -> Self {
        self.selected_tab = tab;
        self
    }
}

impl Widget for StatsView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Apply max width constraint and center the content
        let content_width = area.width.min(MAX_CONTENT_WIDTH);
        let x_offset = (area.width.saturating_sub(content_width)) / 2;
        let centered_area = Rect {
            x: area.x + x_offset,
            y: area.y,
            width: content_width,
            height: area.height,
        };

        let monthly = monthly_cards(self.snapshot.monthly_stats.as_ref());
        let records = record_cards(self.snapshot.personal_records.as_ref());
        let monthly_cols = cards_per_row(centered_area.width, MONTHLY_COLS);
        let record_cols = cards_per_row(centered_area.width, RECORD_COLS);

        let chunks = Layout::vertical([
            Constraint::Length(1),                                        // Top padding
            Constraint::Length(1),                                        // Tabs
            Constraint::Length(1),                                        // Separator
            Constraint::Length(1),                                        // Streak line
            Constraint::Length(1),                                        // Blank
            Constraint::Length(1),                                        // Monthly title
            Constraint::Length(grid_height(monthly.len(), monthly_cols)), // Monthly cards
            Constraint::Length(1),                                        // Records title
            Constraint::Length(grid_height(records.len(), record_cols)),  // Record cards
            Constraint::Length(1),                                        // Separator
            Constraint::Length(1),                                        // Keybindings
            Constraint::Min(0),                                           // Remaining space
        ])
        .split(centered_area);

        TabBar::new(self.selected_tab, self.theme).render(chunks[1], buf);
        render_separator(chunks[2], buf, self.theme);
        self.render_streak(chunks[3], buf);
        self.render_title(chunks[5], buf, "This Month");
        self.render_card_grid(chunks[6], buf, &monthly, monthly_cols, self.theme.accent());
        self.render_title(chunks[7], buf, "Personal Records");
        self.render_card_grid(chunks[8], buf, &records, record_cols, self.theme.date());
        render_separator(chunks[9], buf, self.theme);
        render_keybindings(
            chunks[10],
            buf,
            self.theme,
            &[("q", "Quit"), ("Tab", "Switch view"), ("?", "Help")],
        );
    }
}

impl StatsView<'_> {
    fn render_streak(&self, area: Rect, buf: &mut Buffer) {
        let [streak, active] = streak_lines(self.snapshot.streak());
        let line = Line::from(vec![
            Span::styled(
                streak,
                Style::default()
                    .fg(self.theme.bar())
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled(active, Style::default().fg(self.theme.text())),
        ]);
        Paragraph::new(line)
            .alignment(Alignment::Center)
            .render(area, buf);
    }

    fn render_title(&self, area: Rect, buf: &mut Buffer, title: &str) {
        Paragraph::new(Line::from(Span::styled(
            title,
            Style::default()
                .fg(self.theme.text())
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center)
        .render(area, buf);
    }

    fn render_card_grid(
        &self,
        area: Rect,
        buf: &mut Buffer,
        cards: &[StatCard],
        cols: usize,
        color: Color,
    ) {
        let total_cards_width = (cols as u16) * CARD_WIDTH + ((cols - 1) as u16) * 2; // 2 = spacing
        let start_x = area.x + (area.width.saturating_sub(total_cards_width)) / 2;

        for (i, card) in cards.iter().enumerate() {
            let row = i / cols;
            let col = i % cols;

            let card_area = Rect {
                x: start_x + (col as u16) * (CARD_WIDTH + 2),
                y: area.y + (row as u16) * (CARD_HEIGHT + 1),
                width: CARD_WIDTH,
                height: CARD_HEIGHT,
            };

            // Skip if card is outside area
            if card_area.y + CARD_HEIGHT > area.y + area.height
                || card_area.x + CARD_WIDTH > area.x + area.width
            {
                continue;
            }

            self.render_card(card_area, buf, card, color);
        }
    }

    fn render_card(&self, area: Rect, buf: &mut Buffer, card: &StatCard, color: Color) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color));
        block.render(area, buf);

        // Label on line 1, value on line 2, subtitle on line 3 (inside border)
        let centered = |text: &str| area.x + (area.width.saturating_sub(text.len() as u16)) / 2;

        buf.set_string(
            centered(card.label),
            area.y + 1,
            card.label,
            Style::default().fg(color),
        );
        buf.set_string(
            centered(&card.value),
            area.y + 2,
            &card.value,
            Style::default()
                .fg(self.theme.text())
                .add_modifier(Modifier::BOLD),
        );
        buf.set_string(
            centered(card.subtitle),
            area.y + 3,
            card.subtitle,
            Style::default().fg(self.theme.muted()),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{MonthlyStats, StreakInfo};

    fn buffer_text(buf: &Buffer) -> String {
        let area = buf.area;
        let mut text = String::new();
        for y in 0..area.height {
            for x in 0..area.width {
                text.push_str(buf.cell((x, y)).unwrap().symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_cards_per_row_narrow() {
        let cols = cards_per_row(60, RECORD_COLS);
        assert!((1..=2).contains(&cols));
    }

    #[test]
    fn test_cards_per_row_wide() {
        assert_eq!(cards_per_row(170, MONTHLY_COLS), 4);
        assert_eq!(cards_per_row(170, RECORD_COLS), 3);
    }

    #[test]
    fn test_cards_per_row_minimum() {
        assert_eq!(cards_per_row(20, RECORD_COLS), 1);
        assert_eq!(cards_per_row(10, MONTHLY_COLS), 1);
    }

    #[test]
    fn test_grid_height() {
        assert_eq!(grid_height(6, 3), 12);
        assert_eq!(grid_height(4, 4), 6);
    }

    #[test]
    fn test_stats_view_renders_values() {
        let snapshot = DashboardSnapshot {
            streak_info: Some(StreakInfo {
                current_streak: 4,
                active_days: 120,
            }),
            monthly_stats: Some(MonthlyStats {
                workouts: 9,
                distance_km: 42.0,
                duration_seconds: 5400,
                calories: 3200,
            }),
            ..DashboardSnapshot::default()
        };
        let area = Rect::new(0, 0, 120, 40);
        let mut buf = Buffer::empty(area);
        StatsView::new(&snapshot, Theme::Dark).render(area, &mut buf);

        let text = buffer_text(&buf);
        assert!(text.contains("Current Streak: 4 days"));
        assert!(text.contains("Active Days: 120"));
        assert!(text.contains("42.0 km"));
        assert!(text.contains("1h 30m"));
        assert!(text.contains("3,200"));
        assert!(text.contains("--"));
    }
}

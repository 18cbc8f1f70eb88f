//! Workout detail popup, opened by clicking an active day

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

use crate::services::summary::workout_detail_lines;
use crate::tui::theme::Theme;
use crate::types::Workout;

const POPUP_WIDTH: u16 = 48;
const POPUP_HEIGHT: u16 = 15;
const LABEL_WIDTH: usize = 11;

pub struct WorkoutDetailPopup<'a> {
    workout: &'a Workout,
    theme: Theme,
}

impl<'a> WorkoutDetailPopup<'a> {
    pub fn new(workout: &'a Workout, theme: Theme) -> Self {
        Self { workout, theme }
    }

    /// Calculate centered popup area
    pub fn centered_area(area: Rect) -> Rect {
        let x = area.x + (area.width.saturating_sub(POPUP_WIDTH)) / 2;
        let y = area.y + (area.height.saturating_sub(POPUP_HEIGHT)) / 2;
        Rect {
            x,
            y,
            width: POPUP_WIDTH.min(area.width),
            height: POPUP_HEIGHT.min(area.height),
        }
    }
}

impl Widget for WorkoutDetailPopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let block = Block::default()
            .title(" Workout ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.accent()));
        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines: Vec<Line> = vec![Line::default()];
        for (label, value) in workout_detail_lines(self.workout) {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  {:<width$}", label, width = LABEL_WIDTH),
                    Style::default().fg(self.theme.muted()),
                ),
                Span::styled(
                    value,
                    Style::default()
                        .fg(self.theme.text())
                        .add_modifier(Modifier::BOLD),
                ),
            ]));
        }
        lines.push(Line::default());
        lines.push(
            Line::from(Span::styled(
                "Press Esc to close",
                Style::default().fg(self.theme.muted()),
            ))
            .alignment(Alignment::Center),
        );

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }
}

//! TUI widgets

pub mod calendar;
pub mod calendar_page;
pub mod help;
pub mod legend;
pub mod spinner;
pub mod stats;
pub mod tabs;
pub mod workout_detail;

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::tui::theme::Theme;

/// Full-width horizontal rule
pub(crate) fn render_separator(area: Rect, buf: &mut Buffer, theme: Theme) {
    let line = "─".repeat(area.width as usize);
    buf.set_string(area.x, area.y, &line, Style::default().fg(theme.muted()));
}

/// Centered "key: action" hint row
pub(crate) fn render_keybindings(
    area: Rect,
    buf: &mut Buffer,
    theme: Theme,
    bindings: &[(&str, &str)],
) {
    let mut spans = Vec::with_capacity(bindings.len() * 3);
    for (i, (key, action)) in bindings.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(*key, Style::default().fg(theme.accent())));
        spans.push(Span::styled(
            format!(": {}", action),
            Style::default().fg(theme.muted()),
        ));
    }
    Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .render(area, buf);
}

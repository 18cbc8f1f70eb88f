//! One-line activity-type legend

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::calendar::{Legend, LEGEND_PLACEHOLDER};
use crate::tui::theme::Theme;

/// Legend line: "■ Run  ■ Swim  ■ Yoga" or the placeholder text
pub struct LegendBar<'a> {
    legend: &'a Legend,
    theme: Theme,
}

impl<'a> LegendBar<'a> {
    pub fn new(legend: &'a Legend, theme: Theme) -> Self {
        Self { legend, theme }
    }

    fn line(&self) -> Line<'a> {
        if self.legend.is_placeholder() {
            return Line::from(Span::styled(
                LEGEND_PLACEHOLDER,
                Style::default().fg(self.theme.muted()),
            ));
        }

        let mut spans = Vec::with_capacity(self.legend.entries().len() * 2);
        for (i, entry) in self.legend.entries().iter().enumerate() {
            let swatch = if i == 0 { "■ " } else { "  ■ " };
            spans.push(Span::styled(
                swatch,
                Style::default().fg(self.theme.activity(entry.color)),
            ));
            spans.push(Span::styled(
                entry.display_name.as_str(),
                Style::default().fg(self.theme.text()),
            ));
        }
        Line::from(spans)
    }
}

impl Widget for LegendBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.line())
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}

//! Help popup widget - displays keyboard shortcuts

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

use crate::tui::theme::Theme;

/// Version from Cargo.toml
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Width and height of the help popup
const POPUP_WIDTH: u16 = 44;
const POPUP_HEIGHT: u16 = 17;

const NAVIGATION_KEYS: [(&str, &str); 4] = [
    ("Tab / Shift+Tab", "Switch view"),
    ("1-2", "Jump to view"),
    ("Arrows or h/j/k/l", "Move day cursor"),
    ("Enter", "Workout details"),
];

const GENERAL_KEYS: [(&str, &str); 3] = [
    ("Esc", "Close popup"),
    ("q", "Quit"),
    ("?", "Toggle help"),
];

/// Help popup widget showing keyboard shortcuts
pub struct HelpPopup {
    theme: Theme,
}

impl HelpPopup {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
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

    fn render_header(&self, area: Rect, sep_area: Rect, buf: &mut Buffer, title: &str) {
        Paragraph::new(Line::from(Span::styled(
            title,
            Style::default()
                .fg(self.theme.date())
                .add_modifier(Modifier::BOLD),
        )))
        .render(area, buf);

        let sep = "─".repeat(sep_area.width as usize);
        buf.set_string(
            sep_area.x,
            sep_area.y,
            &sep,
            Style::default().fg(self.theme.muted()),
        );
    }
}

impl Widget for HelpPopup {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Clear the area first (for overlay effect)
        Clear.render(area, buf);

        let title = format!(" workcal v{} ", VERSION);
        let block = Block::default()
            .title(title)
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.accent()));

        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::vertical([
            Constraint::Length(1), // [0] Padding
            Constraint::Length(1), // [1] Navigation header
            Constraint::Length(1), // [2] Separator
            Constraint::Length(1), // [3] Tab/Shift+Tab
            Constraint::Length(1), // [4] 1-2
            Constraint::Length(1), // [5] Arrows
            Constraint::Length(1), // [6] Enter
            Constraint::Length(1), // [7] Padding
            Constraint::Length(1), // [8] General header
            Constraint::Length(1), // [9] Separator
            Constraint::Length(1), // [10] Esc
            Constraint::Length(1), // [11] q
            Constraint::Length(1), // [12] ?
            Constraint::Length(1), // [13] Close hint
            Constraint::Min(0),    // Remaining
        ])
        .split(inner);

        self.render_header(chunks[1], chunks[2], buf, "Navigation");
        for (i, (key, desc)) in NAVIGATION_KEYS.iter().enumerate() {
            render_keybinding(chunks[3 + i], buf, key, desc, self.theme);
        }

        self.render_header(chunks[8], chunks[9], buf, "General");
        for (i, (key, desc)) in GENERAL_KEYS.iter().enumerate() {
            render_keybinding(chunks[10 + i], buf, key, desc, self.theme);
        }

        Paragraph::new(Line::from(Span::styled(
            "Press ? to close",
            Style::default().fg(self.theme.muted()),
        )))
        .alignment(Alignment::Center)
        .render(chunks[13], buf);
    }
}

/// Render a single keybinding line
fn render_keybinding(area: Rect, buf: &mut Buffer, key: &str, desc: &str, theme: Theme) {
    let line = Line::from(vec![
        Span::styled(
            format!("  {:<20}", key),
            Style::default().fg(theme.accent()),
        ),
        Span::styled(desc, Style::default().fg(theme.text())),
    ]);
    Paragraph::new(line)
        .alignment(Alignment::Left)
        .render(area, buf);
}

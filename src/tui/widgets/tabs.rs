//! Tab bar widget for view navigation

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::Widget,
};

use crate::tui::theme::Theme;

/// Available tabs in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Calendar,
    Stats,
}

impl Tab {
    /// Get the display label for this tab
    pub fn label(self) -> &'static str {
        match self {
            Self::Calendar => "Calendar",
            Self::Stats => "Stats",
        }
    }

    /// Get all tabs in order
    pub fn all() -> &'static [Tab] {
        &[Tab::Calendar, Tab::Stats]
    }

    /// Get the next tab (wrapping)
    pub fn next(self) -> Self {
        match self {
            Self::Calendar => Self::Stats,
            Self::Stats => Self::Calendar,
        }
    }

    /// Get the previous tab (wrapping)
    pub fn prev(self) -> Self {
        // Two tabs: previous and next coincide
        self.next()
    }

    /// Get tab from number key (1-2)
    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(Self::Calendar),
            2 => Some(Self::Stats),
            _ => None,
        }
    }
}

/// Tab bar widget showing available views
pub struct TabBar {
    selected: Tab,
    theme: Theme,
}

impl TabBar {
    pub fn new(selected: Tab, theme: Theme) -> Self {
        Self { selected, theme }
    }
}

impl Widget for TabBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        // Calculate total width of all tabs for centering
        let total_width: u16 = Tab::all()
            .iter()
            .map(|tab| {
                let label = tab.label();
                let display_len = if *tab == self.selected {
                    label.len() + 2 // "[label]"
                } else {
                    label.len()
                };
                display_len as u16 + 2 // + spacing
            })
            .sum::<u16>()
            .saturating_sub(2); // Remove trailing spacing

        let mut x = area.x + (area.width.saturating_sub(total_width)) / 2;

        for tab in Tab::all() {
            let is_selected = *tab == self.selected;
            let display = if is_selected {
                format!("[{}]", tab.label())
            } else {
                tab.label().to_string()
            };

            let display_len = display.len() as u16;
            if x + display_len > area.x + area.width {
                break;
            }

            let style = if is_selected {
                Style::default()
                    .fg(self.theme.accent())
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(self.theme.muted())
            };

            buf.set_string(x, area.y, &display, style);
            x += display_len + 2;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_labels() {
        assert_eq!(Tab::Calendar.label(), "Calendar");
        assert_eq!(Tab::Stats.label(), "Stats");
    }

    #[test]
    fn test_tab_all() {
        assert_eq!(Tab::all(), &[Tab::Calendar, Tab::Stats]);
    }

    #[test]
    fn test_tab_next_prev_wrap() {
        assert_eq!(Tab::Calendar.next(), Tab::Stats);
        assert_eq!(Tab::Stats.next(), Tab::Calendar);
        assert_eq!(Tab::Calendar.prev(), Tab::Stats);
        assert_eq!(Tab::Stats.prev(), Tab::Calendar);
    }

    #[test]
    fn test_tab_default() {
        assert_eq!(Tab::default(), Tab::Calendar);
    }

    #[test]
    fn test_tab_from_number() {
        assert_eq!(Tab::from_number(1), Some(Tab::Calendar));
        assert_eq!(Tab::from_number(2), Some(Tab::Stats));
        assert_eq!(Tab::from_number(0), None);
        assert_eq!(Tab::from_number(3), None);
    }

    #[test]
    fn test_tab_bar_marks_selected() {
        let area = Rect::new(0, 0, 40, 1);
        let mut buf = Buffer::empty(area);
        TabBar::new(Tab::Stats, Theme::Dark).render(area, &mut buf);

        let line: String = (0..area.width)
            .map(|x| buf.cell((x, 0)).unwrap().symbol().to_string())
            .collect();
        assert!(line.contains("[Stats]"));
        assert!(line.contains("Calendar"));
        assert!(!line.contains("[Calendar]"));
    }
}

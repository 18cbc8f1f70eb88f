//! Terminal theme detection and color definitions

use ratatui::style::Color;

use crate::calendar::{ActivityColor, DayStyle};
use crate::services::ThemePreference;

/// Terminal color scheme (dark or light background)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Auto-detect terminal theme from background luminance.
    /// Must be called **before** entering raw mode (ratatui::init).
    /// Falls back to Dark if detection fails.
    pub fn detect() -> Self {
        match terminal_light::luma() {
            Ok(luma) if luma > 0.6 => Self::Light,
            _ => Self::Dark,
        }
    }

    /// Resolve a configured preference, detecting only for `Auto`
    pub fn from_preference(preference: ThemePreference) -> Self {
        match preference {
            ThemePreference::Auto => Self::detect(),
            ThemePreference::Dark => Self::Dark,
            ThemePreference::Light => Self::Light,
        }
    }

    /// Primary text color (headers, body text)
    pub fn text(self) -> Color {
        match self {
            Self::Dark => Color::White,
            Self::Light => Color::Black,
        }
    }

    /// Active/accent color (selected tabs, keybinding keys, cursor)
    pub fn accent(self) -> Color {
        match self {
            Self::Dark => Color::Cyan,
            Self::Light => Color::Indexed(25), // dark blue (ANSI 256)
        }
    }

    /// Secondary/muted text (separators, inactive tabs, hints, grid borders)
    pub fn muted(self) -> Color {
        match self {
            Self::Dark => Color::DarkGray,
            Self::Light => Color::Gray,
        }
    }

    /// Date text color
    pub fn date(self) -> Color {
        match self {
            Self::Dark => Color::Yellow,
            Self::Light => Color::Indexed(130), // dark orange/yellow (ANSI 256)
        }
    }

    /// Streak and positive indicator color
    pub fn bar(self) -> Color {
        match self {
            Self::Dark => Color::Green,
            Self::Light => Color::Indexed(22), // dark green (ANSI 256)
        }
    }

    /// Error/negative indicator color
    pub fn error(self) -> Color {
        match self {
            Self::Dark => Color::Red,
            Self::Light => Color::Indexed(124), // dark red (ANSI 256)
        }
    }

    /// Day with zero workouts
    pub fn heat_zero(self) -> Color {
        match self {
            Self::Dark => Color::Indexed(236),
            Self::Light => Color::Indexed(254),
        }
    }

    /// Activity-type color as true color
    pub fn activity(self, color: ActivityColor) -> Color {
        let ActivityColor(r, g, b) = color;
        Color::Rgb(r, g, b)
    }

    /// Fill color for a calendar cell; padding cells have none
    pub fn day_color(self, style: DayStyle) -> Option<Color> {
        match style {
            DayStyle::Transparent => None,
            DayStyle::NoActivity => Some(self.heat_zero()),
            DayStyle::Activity(color) => Some(self.activity(color)),
        }
    }
}

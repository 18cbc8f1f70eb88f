//! Activity-type colors and display names

use std::fmt;

/// Display color for an activity type (sRGB)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivityColor(pub u8, pub u8, pub u8);

impl ActivityColor {
    /// CSS-style hex string, e.g. "#f97316"
    pub fn hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

impl fmt::Display for ActivityColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex())
    }
}

/// Color used for any identifier missing from the table
pub const FALLBACK_COLOR: ActivityColor = ActivityColor(0x6b, 0x72, 0x80);

/// (identifier, color); aliases share the canonical type's color
const ACTIVITY_COLORS: &[(&str, ActivityColor)] = &[
    ("run", ActivityColor(0xf9, 0x73, 0x16)),
    ("running", ActivityColor(0xf9, 0x73, 0x16)),
    ("walk", ActivityColor(0x84, 0xcc, 0x16)),
    ("walking", ActivityColor(0x84, 0xcc, 0x16)),
    ("hike", ActivityColor(0x65, 0xa3, 0x0d)),
    ("hiking", ActivityColor(0x65, 0xa3, 0x0d)),
    ("cycle", ActivityColor(0x3b, 0x82, 0xf6)),
    ("cycling", ActivityColor(0x3b, 0x82, 0xf6)),
    ("biking", ActivityColor(0x3b, 0x82, 0xf6)),
    ("ride", ActivityColor(0x3b, 0x82, 0xf6)),
    ("swim", ActivityColor(0x06, 0xb6, 0xd4)),
    ("swimming", ActivityColor(0x06, 0xb6, 0xd4)),
    ("strength", ActivityColor(0xa8, 0x55, 0xf7)),
    ("strength_training", ActivityColor(0xa8, 0x55, 0xf7)),
    ("weights", ActivityColor(0xa8, 0x55, 0xf7)),
    ("weight_training", ActivityColor(0xa8, 0x55, 0xf7)),
    ("yoga", ActivityColor(0xec, 0x48, 0x99)),
    ("hiit", ActivityColor(0xef, 0x44, 0x44)),
    ("row", ActivityColor(0x14, 0xb8, 0xa6)),
    ("rowing", ActivityColor(0x14, 0xb8, 0xa6)),
    ("elliptical", ActivityColor(0xea, 0xb3, 0x08)),
    ("ski", ActivityColor(0x0e, 0xa5, 0xe9)),
    ("other", ActivityColor(0x94, 0xa3, 0xb8)),
];

/// Resolve the color for an activity type identifier.
/// Case-insensitive; unknown identifiers get `FALLBACK_COLOR`.
pub fn activity_color(activity_type: &str) -> ActivityColor {
    let key = activity_type.trim().to_ascii_lowercase();
    ACTIVITY_COLORS
        .iter()
        .find(|(name, _)| *name == key)
        .map(|&(_, color)| color)
        .unwrap_or(FALLBACK_COLOR)
}

/// Whether the identifier has a dedicated color
pub fn is_known_activity(activity_type: &str) -> bool {
    let key = activity_type.trim().to_ascii_lowercase();
    ACTIVITY_COLORS.iter().any(|(name, _)| *name == key)
}

/// Human display name: "strength_training" -> "Strength Training"
pub fn display_name(activity_type: &str) -> String {
    activity_type
        .split(['_', '-', ' '])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

//! Activity-type legend built from the backend's breakdown

use super::activity_types::{activity_color, display_name, ActivityColor};
use crate::types::ActivityBreakdownItem;

/// Maximum number of activity types shown in the legend
pub const MAX_LEGEND_ENTRIES: usize = 6;

/// Text shown when there is nothing to list
pub const LEGEND_PLACEHOLDER: &str = "No activities yet";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegendEntry {
    pub activity_type: String,
    pub display_name: String,
    pub color: ActivityColor,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Legend {
    /// Breakdown was empty
    Placeholder,
    Entries(Vec<LegendEntry>),
}

impl Legend {
    pub fn entries(&self) -> &[LegendEntry] {
        match self {
            Self::Placeholder => &[],
            Self::Entries(entries) => entries,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder)
    }
}

/// First `MAX_LEGEND_ENTRIES` distinct types, in breakdown order.
/// Blank names are skipped and do not count toward the limit.
pub fn build_legend(breakdown: &[ActivityBreakdownItem]) -> Legend {
    let mut entries: Vec<LegendEntry> = Vec::with_capacity(MAX_LEGEND_ENTRIES);

    for item in breakdown {
        if entries.len() == MAX_LEGEND_ENTRIES {
            break;
        }
        let name = item.name.trim();
        if name.is_empty() || entries.iter().any(|e| e.activity_type == name) {
            continue;
        }
        entries.push(LegendEntry {
            activity_type: name.to_string(),
            display_name: display_name(name),
            color: activity_color(name),
        });
    }

    if entries.is_empty() {
        Legend::Placeholder
    } else {
        Legend::Entries(entries)
    }
}

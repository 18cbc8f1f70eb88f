//! Contribution calendar core
//!
//! Pure derivations from the sparse daily activity list:
//! index -> grid -> month labels, plus per-cell presentation and the legend.
//! Nothing here reads the clock or touches the filesystem; "today" is always
//! passed in.

pub mod activity_types;
pub mod grid;
pub mod index;
pub mod labels;
pub mod legend;
pub mod memo;
pub mod presentation;

pub use activity_types::{activity_color, display_name, ActivityColor, FALLBACK_COLOR};
pub use grid::{build_grid, Grid, GridCell, WeekColumn, DAYS_PER_WEEK, WINDOW_DAYS};
pub use index::{date_key, parse_date_key, ActivityIndex, DayActivity};
pub use labels::{month_labels, month_short_name, MonthLabel};
pub use legend::{build_legend, Legend, LegendEntry, LEGEND_PLACEHOLDER, MAX_LEGEND_ENTRIES};
pub use memo::{CalendarMemo, CalendarView};
pub use presentation::{click_target, day_style, format_long_date, tooltip, DayStyle};

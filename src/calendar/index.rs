//! Date -> activity lookup built from the backend's sparse daily records

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::types::DailyActivity;

/// Date key format used for lookups and the detail collaborator
pub const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

/// Format a date as its `YYYY-MM-DD` key
pub fn date_key(date: NaiveDate) -> String {
    date.format(DATE_KEY_FORMAT).to_string()
}

/// Parse a `YYYY-MM-DD` key back into a date
pub fn parse_date_key(key: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(key.trim(), DATE_KEY_FORMAT).ok()
}

/// Activity recorded on one day
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DayActivity {
    pub count: u32,
    pub workout_types: Vec<String>,
}

/// Fast lookup from calendar date to that day's activity.
///
/// Records are applied in input order. When the same date appears more than
/// once the later record replaces the earlier one; callers should not rely on
/// which duplicate wins.
#[derive(Debug, Clone, Default)]
pub struct ActivityIndex {
    days: HashMap<NaiveDate, DayActivity>,
}

impl ActivityIndex {
    pub fn from_records(records: &[DailyActivity]) -> Self {
        let mut days = HashMap::with_capacity(records.len());
        for record in records {
            let previous = days.insert(
                record.date,
                DayActivity {
                    count: record.count,
                    workout_types: record.workout_types.clone(),
                },
            );
            if previous.is_some() {
                tracing::debug!(date = %record.date, "duplicate activity date, keeping later record");
            }
        }
        Self { days }
    }

    /// Activity for `date`, or an empty default when nothing was recorded
    pub fn get(&self, date: NaiveDate) -> DayActivity {
        self.days.get(&date).cloned().unwrap_or_default()
    }

    /// Lookup by `YYYY-MM-DD` key; malformed keys behave like absent dates
    pub fn get_by_key(&self, key: &str) -> DayActivity {
        parse_date_key(key)
            .map(|date| self.get(date))
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

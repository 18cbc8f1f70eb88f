//! Workout detail lookup collaborators
//!
//! Given a `YYYY-MM-DD` key, return the workout recorded that day (or none).
//! Two sources: the `workouts` list of the loaded snapshot, or the backend's
//! HTTP endpoint.

use std::sync::Arc;
use std::time::Duration;

use reqwest::StatusCode;

use crate::calendar::parse_date_key;
use crate::services::config::Config;
use crate::types::{Result, WorkcalError, Workout};

/// HTTP request timeout in seconds
const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Source of per-day workout detail
pub trait WorkoutLookup: Send + Sync {
    /// Short name for logs
    fn name(&self) -> &str;

    /// Look up the workout for `date_key` (`YYYY-MM-DD`)
    fn workout_by_date(&self, date_key: &str) -> Result<Option<Workout>>;
}

fn validate_key(date_key: &str) -> Result<chrono::NaiveDate> {
    parse_date_key(date_key).ok_or_else(|| WorkcalError::InvalidDate(date_key.to_string()))
}

/// Looks up workouts from the snapshot's embedded list
#[derive(Debug, Clone, Default)]
pub struct SnapshotLookup {
    workouts: Vec<Workout>,
}

impl SnapshotLookup {
    pub fn new(workouts: Vec<Workout>) -> Self {
        Self { workouts }
    }
}

impl WorkoutLookup for SnapshotLookup {
    fn name(&self) -> &str {
        "snapshot"
    }

    fn workout_by_date(&self, date_key: &str) -> Result<Option<Workout>> {
        let date = validate_key(date_key)?;
        Ok(self.workouts.iter().find(|w| w.date == date).cloned())
    }
}

/// Looks up workouts via `GET {base_url}/workouts/{date}`
pub struct HttpLookup {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl HttpLookup {
    pub fn new(base_url: &str) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| WorkcalError::Lookup(format!("HTTP client error: {}", e)))?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn url_for(&self, date_key: &str) -> String {
        format!("{}/workouts/{}", self.base_url, date_key)
    }
}

impl WorkoutLookup for HttpLookup {
    fn name(&self) -> &str {
        "http"
    }

    fn workout_by_date(&self, date_key: &str) -> Result<Option<Workout>> {
        validate_key(date_key)?;
        let url = self.url_for(date_key);

        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| WorkcalError::Lookup(format!("HTTP request failed: {}", e)))?;

        match response.status() {
            StatusCode::NOT_FOUND => Ok(None),
            status if status.is_success() => response
                .json::<Option<Workout>>()
                .map_err(|e| WorkcalError::Parse(format!("workout response: {}", e))),
            status => Err(WorkcalError::Lookup(format!("{} returned {}", url, status))),
        }
    }
}

/// The backend when `api_url` is configured, otherwise the snapshot's own list
pub fn lookup_for(config: &Config, workouts: &[Workout]) -> Result<Arc<dyn WorkoutLookup>> {
    match &config.api_url {
        Some(url) => Ok(Arc::new(HttpLookup::new(url)?)),
        None => Ok(Arc::new(SnapshotLookup::new(workouts.to_vec()))),
    }
}

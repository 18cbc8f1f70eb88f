//! Click -> workout detail dispatch
//!
//! Clicking an active day spawns one background lookup and returns
//! immediately. Lookups are never awaited, cancelled or de-duplicated: two
//! quick clicks issue two lookups, and responses are applied in the order
//! they arrive. Each request carries an id so logs can tie a response back
//! to its click.

use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::thread;

use crate::calendar::{click_target, GridCell};
use crate::services::lookup::WorkoutLookup;
use crate::types::Workout;

/// Result of one lookup
#[derive(Debug, Clone, PartialEq)]
pub enum DetailOutcome {
    Found(Box<Workout>),
    NotFound,
    Failed(String),
}

/// Message sent back from a lookup worker
#[derive(Debug, Clone, PartialEq)]
pub struct DetailResponse {
    pub request_id: u64,
    pub date_key: String,
    pub outcome: DetailOutcome,
}

impl DetailResponse {
    /// Workout to display, if any. Misses and failures are logged and
    /// otherwise dropped.
    pub fn into_workout(self) -> Option<Workout> {
        match self.outcome {
            DetailOutcome::Found(workout) => Some(*workout),
            DetailOutcome::NotFound => {
                tracing::info!(
                    request_id = self.request_id,
                    date = %self.date_key,
                    "no workout found for date"
                );
                None
            }
            DetailOutcome::Failed(message) => {
                tracing::warn!(
                    request_id = self.request_id,
                    date = %self.date_key,
                    error = %message,
                    "failed to fetch workout for date"
                );
                None
            }
        }
    }
}

/// Fire-and-forget dispatcher for detail lookups
pub struct DetailDispatcher {
    lookup: Arc<dyn WorkoutLookup>,
    tx: Sender<DetailResponse>,
    next_request_id: u64,
}

impl DetailDispatcher {
    /// Create a dispatcher and the receiver its responses arrive on
    pub fn new(lookup: Arc<dyn WorkoutLookup>) -> (Self, Receiver<DetailResponse>) {
        let (tx, rx) = mpsc::channel();
        let dispatcher = Self {
            lookup,
            tx,
            next_request_id: 1,
        };
        (dispatcher, rx)
    }

    /// Handle a click on `cell`. Returns the request id when a lookup was
    /// issued; padding cells and days without workouts issue nothing.
    pub fn click(&mut self, cell: &GridCell) -> Option<u64> {
        let date_key = click_target(cell)?;
        Some(self.request(date_key))
    }

    /// Issue a lookup for `date_key` on a worker thread
    pub fn request(&mut self, date_key: String) -> u64 {
        let request_id = self.next_request_id;
        self.next_request_id += 1;

        let lookup = Arc::clone(&self.lookup);
        let tx = self.tx.clone();
        tracing::debug!(request_id, date = %date_key, source = lookup.name(), "detail lookup issued");

        thread::spawn(move || {
            let outcome = match lookup.workout_by_date(&date_key) {
                Ok(Some(workout)) => DetailOutcome::Found(Box::new(workout)),
                Ok(None) => DetailOutcome::NotFound,
                Err(e) => DetailOutcome::Failed(e.to_string()),
            };
            // Receiver gone means the UI has shut down
            let _ = tx.send(DetailResponse {
                request_id,
                date_key,
                outcome,
            });
        });

        request_id
    }
}

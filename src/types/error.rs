use thiserror::Error;

/// workcal error types
#[derive(Error, Debug)]
pub enum WorkcalError {
    /// Failed to parse snapshot or lookup JSON
    #[error("parse error: {0}")]
    Parse(String),

    /// File I/O error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("config error: {0}")]
    Config(String),

    /// Workout detail lookup failed
    #[error("lookup error: {0}")]
    Lookup(String),

    /// Date string is not a valid YYYY-MM-DD calendar date
    #[error("invalid date: {0}")]
    InvalidDate(String),
}

/// Result type alias for workcal
pub type Result<T> = std::result::Result<T, WorkcalError>;

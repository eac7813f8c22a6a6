//! Error types for the agenda grid.

use thiserror::Error;

/// Errors that can occur while building or configuring an agenda grid.
#[derive(Error, Debug)]
pub enum AgendaError {
    #[error("Invalid hour range {start}..={end}: hours must satisfy start <= end <= 23")]
    InvalidHourRange { start: u32, end: u32 },

    #[error("Invalid hour {0}: expected 0-23")]
    InvalidHour(u32),

    #[error("Week around {0} falls outside the supported calendar")]
    DateOutOfRange(chrono::NaiveDate),

    #[error("Invalid timestamp '{0}'. Expected YYYY-MM-DDTHH:MM[:SS] or RFC 3339")]
    Timestamp(String),

    #[error("No slot at column '{column}', hour {hour}")]
    NoSuchSlot { column: String, hour: u32 },

    #[error("No appointment #{position} in column '{column}', hour {hour}")]
    NoSuchEntry {
        column: String,
        hour: u32,
        position: usize,
    },
}

/// Result type alias for agenda operations.
pub type AgendaResult<T> = Result<T, AgendaError>;

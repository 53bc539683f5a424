//! Error types.

use chrono::NaiveDate;
use thiserror::Error;

use crate::models::Role;
use crate::validation::ValidationError;

/// Errors raised by generation and store mutations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    /// A rotation pool has no members.
    #[error("{role} pool is empty")]
    EmptyPool { role: Role },

    /// The period ends before it starts.
    #[error("invalid period: end {end} is before start {start}")]
    InvalidPeriod { start: NaiveDate, end: NaiveDate },

    /// A swap named the same week twice.
    #[error("cannot swap week at index {index} with itself")]
    SameWeek { index: usize },

    /// A week index is past the end of the schedule.
    #[error("week index {index} is out of range (schedule has {len} weeks)")]
    WeekOutOfRange { index: usize, len: usize },

    /// A holiday date lies outside the week it was added to.
    #[error("holiday date {date} is outside the week range {start} to {end}")]
    HolidayOutOfRange {
        date: NaiveDate,
        start: NaiveDate,
        end: NaiveDate,
    },

    /// A holiday index is past the end of the week's holiday list.
    #[error("holiday index {index} is out of range for week {week} ({len} holidays)")]
    HolidayIndexOutOfRange { week: u32, index: usize, len: usize },
}

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Figment extraction or merge error.
    #[error("configuration error: {0}")]
    Figment(#[from] figment::Error),

    /// An explicitly requested config file does not exist.
    #[error("config file not found: {path}")]
    NotFound { path: String },

    /// The configuration loaded but failed validation.
    #[error("invalid configuration: {}", summarize(.0))]
    Invalid(Vec<ValidationError>),
}

fn summarize(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

//! Error types for datecalc operations.
//!
//! Arithmetic on an unparseable date is not an error: it yields `None`.
//! The variants here cover caller mistakes that are reported up front.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    #[error("Invalid week option: {0}")]
    InvalidWeekOption(String),

    #[error("Malformed range: expected a [start, end] pair, got {len} element(s)")]
    MalformedRange { len: usize },
}

pub type Result<T> = std::result::Result<T, CalcError>;

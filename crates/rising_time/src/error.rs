//! Error types for birth-date handling and UTC offset resolution.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from date parsing, date validation, or offset handling.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TimeError {
    /// Date text did not parse, or its fields do not form a Gregorian date.
    InvalidDateFormat(String),
    /// A caller-supplied UTC offset is not finite or lies outside ±14 h.
    InvalidUtcOffset(f64),
    /// Latitude or longitude outside its valid range.
    InvalidCoordinate(&'static str),
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDateFormat(msg) => write!(f, "invalid date: {msg}"),
            Self::InvalidUtcOffset(h) => write!(f, "invalid UTC offset: {h} h"),
            Self::InvalidCoordinate(msg) => write!(f, "invalid coordinate: {msg}"),
        }
    }
}

impl Error for TimeError {}

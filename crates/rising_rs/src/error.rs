//! Unified error type for the convenience layer.

use std::error::Error;
use std::fmt::{Display, Formatter};

use rising_chart::ChartError;
use rising_config::ConfigError;
use rising_time::TimeError;

/// Any failure on the way from raw birth data to a chart.
#[derive(Debug)]
#[non_exhaustive]
pub enum RisingError {
    /// Date, location or chart geometry failure.
    Chart(ChartError),
    /// Settings could not be loaded or are invalid.
    Config(ConfigError),
    /// The geocoder knows no place by this name.
    LocationNotFound(String),
    /// The geocoder itself failed.
    Geocoder(String),
}

impl Display for RisingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Chart(e) => write!(f, "{e}"),
            Self::Config(e) => write!(f, "{e}"),
            Self::LocationNotFound(place) => write!(f, "location not found: {place:?}"),
            Self::Geocoder(msg) => write!(f, "geocoder error: {msg}"),
        }
    }
}

impl Error for RisingError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Chart(e) => Some(e),
            Self::Config(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ChartError> for RisingError {
    fn from(e: ChartError) -> Self {
        Self::Chart(e)
    }
}

impl From<TimeError> for RisingError {
    fn from(e: TimeError) -> Self {
        Self::Chart(ChartError::from(e))
    }
}

impl From<ConfigError> for RisingError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

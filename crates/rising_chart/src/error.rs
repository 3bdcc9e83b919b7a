//! Error types for chart computation.

use std::error::Error;
use std::fmt::{Display, Formatter};

use rising_time::TimeError;

use crate::houses::HouseSystem;

/// Errors from Ascendant and house computation.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ChartError {
    /// Error from date handling or UTC offset resolution.
    Time(TimeError),
    /// Invalid geographic location parameter.
    InvalidLocation(&'static str),
    /// Latitude too close to a pole for the horizon to define an Ascendant.
    PolarIndeterminate { latitude_deg: f64 },
    /// The house system is undefined at this latitude.
    HouseSystemUnavailable {
        system: HouseSystem,
        latitude_deg: f64,
    },
    /// Iterative algorithm did not converge.
    NoConvergence(&'static str),
}

impl Display for ChartError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Time(e) => write!(f, "time error: {e}"),
            Self::InvalidLocation(msg) => write!(f, "invalid location: {msg}"),
            Self::PolarIndeterminate { latitude_deg } => write!(
                f,
                "ascendant indeterminate at latitude {latitude_deg:.2}°: too close to the pole"
            ),
            Self::HouseSystemUnavailable {
                system,
                latitude_deg,
            } => write!(
                f,
                "{} houses are undefined at latitude {latitude_deg:.2}°",
                system.name()
            ),
            Self::NoConvergence(msg) => write!(f, "no convergence: {msg}"),
        }
    }
}

impl Error for ChartError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Time(e) => Some(e),
            _ => None,
        }
    }
}

impl From<TimeError> for ChartError {
    fn from(e: TimeError) -> Self {
        match e {
            TimeError::InvalidCoordinate(msg) => Self::InvalidLocation(msg),
            other => Self::Time(other),
        }
    }
}

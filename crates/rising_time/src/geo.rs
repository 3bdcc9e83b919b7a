//! Geographic coordinates of a birth place.

use std::fmt::{Display, Formatter};

use crate::error::TimeError;

/// Geographic coordinate on Earth's surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoCoordinate {
    /// Geodetic latitude in degrees, north positive. Range: [-90, 90].
    pub latitude_deg: f64,
    /// Geodetic longitude in degrees, east positive. Range: [-180, 180].
    pub longitude_deg: f64,
}

impl GeoCoordinate {
    /// Create a validated coordinate.
    pub fn new(latitude_deg: f64, longitude_deg: f64) -> Result<Self, TimeError> {
        if !latitude_deg.is_finite() || !(-90.0..=90.0).contains(&latitude_deg) {
            return Err(TimeError::InvalidCoordinate("latitude must be within [-90, 90]"));
        }
        if !longitude_deg.is_finite() || !(-180.0..=180.0).contains(&longitude_deg) {
            return Err(TimeError::InvalidCoordinate(
                "longitude must be within [-180, 180]",
            ));
        }
        Ok(Self {
            latitude_deg,
            longitude_deg,
        })
    }

    /// Latitude in radians.
    pub fn latitude_rad(&self) -> f64 {
        self.latitude_deg.to_radians()
    }

    /// Longitude in radians (east positive).
    pub fn longitude_rad(&self) -> f64 {
        self.longitude_deg.to_radians()
    }
}

/// `45.8500°N 18.3000°E`
impl Display for GeoCoordinate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let ns = if self.latitude_deg < 0.0 { 'S' } else { 'N' };
        let ew = if self.longitude_deg < 0.0 { 'W' } else { 'E' };
        write!(
            f,
            "{:.4}°{ns} {:.4}°{ew}",
            self.latitude_deg.abs(),
            self.longitude_deg.abs()
        )
    }
}

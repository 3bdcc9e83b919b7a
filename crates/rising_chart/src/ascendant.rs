//! Ascendant and Midheaven from sidereal time, obliquity and latitude.
//!
//! With RAMC the right ascension of the meridian (local sidereal time as
//! an angle), ε the obliquity and φ the geographic latitude:
//!
//!   Asc = atan2(cos RAMC, −(sin RAMC·cos ε + tan φ·sin ε))
//!   MC  = atan2(sin RAMC, cos RAMC·cos ε)
//!
//! Two-argument arctangent places the Ascendant on the eastern horizon in
//! every quadrant, so no separate quadrant correction is applied.
//!
//! Sources: Meeus, "Astronomical Algorithms" (2nd ed), ch. 13 and 14.

use rising_time::normalize_deg;

use crate::error::ChartError;

/// Latitudes at or beyond this magnitude have no usable Ascendant.
pub const POLAR_LIMIT_DEG: f64 = 89.9;

/// The four chart angles, ecliptic longitudes in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartAngles {
    pub ascendant_deg: f64,
    pub midheaven_deg: f64,
    /// Right ascension of the meridian, degrees.
    pub ramc_deg: f64,
}

impl ChartAngles {
    pub fn descendant_deg(&self) -> f64 {
        normalize_deg(self.ascendant_deg + 180.0)
    }

    pub fn imum_coeli_deg(&self) -> f64 {
        normalize_deg(self.midheaven_deg + 180.0)
    }
}

fn check_latitude(latitude_deg: f64) -> Result<(), ChartError> {
    if !latitude_deg.is_finite() || latitude_deg.abs() > 90.0 {
        return Err(ChartError::InvalidLocation(
            "latitude must be within [-90, 90]",
        ));
    }
    if latitude_deg.abs() >= POLAR_LIMIT_DEG {
        return Err(ChartError::PolarIndeterminate { latitude_deg });
    }
    Ok(())
}

/// Ecliptic longitude of the Ascendant in degrees, [0, 360).
pub fn ascendant_deg(
    ramc_deg: f64,
    obliquity_deg: f64,
    latitude_deg: f64,
) -> Result<f64, ChartError> {
    check_latitude(latitude_deg)?;
    let ramc = ramc_deg.to_radians();
    let eps = obliquity_deg.to_radians();
    let phi = latitude_deg.to_radians();

    let asc = f64::atan2(
        ramc.cos(),
        -(ramc.sin() * eps.cos() + phi.tan() * eps.sin()),
    )
    .to_degrees();
    if !asc.is_finite() {
        return Err(ChartError::PolarIndeterminate { latitude_deg });
    }
    Ok(normalize_deg(asc))
}

/// Ecliptic longitude of the Midheaven in degrees, [0, 360).
///
/// Independent of latitude.
pub fn midheaven_deg(ramc_deg: f64, obliquity_deg: f64) -> f64 {
    let ramc = ramc_deg.to_radians();
    let eps = obliquity_deg.to_radians();
    normalize_deg(f64::atan2(ramc.sin(), ramc.cos() * eps.cos()).to_degrees())
}

/// Ascendant and Midheaven sharing one RAMC.
pub fn chart_angles(
    ramc_deg: f64,
    obliquity_deg: f64,
    latitude_deg: f64,
) -> Result<ChartAngles, ChartError> {
    Ok(ChartAngles {
        ascendant_deg: ascendant_deg(ramc_deg, obliquity_deg, latitude_deg)?,
        midheaven_deg: midheaven_deg(ramc_deg, obliquity_deg),
        ramc_deg: normalize_deg(ramc_deg),
    })
}

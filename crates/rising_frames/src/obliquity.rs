//! Obliquity of the ecliptic.
//!
//! Mean obliquity from the IAU 1976 expression (Lieske et al. 1977):
//!
//!   ε₀ = 84381.448″ − 46.8150″·T − 0.00059″·T² + 0.001813″·T³
//!
//! with T in Julian centuries from J2000.0 (TT). True obliquity adds the
//! nutation in obliquity Δε.

use crate::nutation::Nutation;

/// Mean obliquity at J2000.0 in arcseconds.
pub const OBLIQUITY_J2000_ARCSEC: f64 = 84_381.448;

/// Mean obliquity of the ecliptic in degrees.
pub fn mean_obliquity_deg(t: f64) -> f64 {
    let t2 = t * t;
    let t3 = t2 * t;
    (OBLIQUITY_J2000_ARCSEC - 46.8150 * t - 0.00059 * t2 + 0.001813 * t3) / 3600.0
}

/// True obliquity: mean obliquity plus nutation in obliquity, degrees.
pub fn true_obliquity_deg(t: f64, nutation: &Nutation) -> f64 {
    mean_obliquity_deg(t) + nutation.deps_deg()
}

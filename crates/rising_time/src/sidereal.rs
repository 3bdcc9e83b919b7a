//! Greenwich Mean and Local Sidereal Time.
//!
//! GMST follows Meeus, "Astronomical Algorithms" eq. 12.4, valid for any
//! instant (not only 0h UT):
//!
//!   θ₀ = 280.46061837° + 360.98564736629°·(JD − 2451545.0)
//!        + 0.000387933°·T² − T³/38710000
//!
//! with T in Julian centuries of UT from J2000.0. All results are degrees
//! in [0, 360).

use crate::julian::{J2000_JD, julian_centuries};

/// Normalize an angle in degrees to [0, 360).
pub fn normalize_deg(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs.
    if r >= 360.0 { 0.0 } else { r }
}

/// Greenwich Mean Sidereal Time at a UT Julian Date, degrees.
pub fn gmst_deg(jd_ut: f64) -> f64 {
    let t = julian_centuries(jd_ut);
    let theta = 280.460_618_37 + 360.985_647_366_29 * (jd_ut - J2000_JD)
        + 0.000_387_933 * t * t
        - t * t * t / 38_710_000.0;
    normalize_deg(theta)
}

/// Local Sidereal Time from GMST and observer east longitude, degrees.
pub fn local_sidereal_time_deg(gmst_deg: f64, longitude_east_deg: f64) -> f64 {
    normalize_deg(gmst_deg + longitude_east_deg)
}

/// Angle in degrees as hours of right ascension, [0, 24).
pub fn deg_to_hours(deg: f64) -> f64 {
    normalize_deg(deg) / 15.0
}

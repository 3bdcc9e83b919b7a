//! House cusp computation.
//!
//! Cusp 1 is the Ascendant and cusp 10 the Midheaven for every quadrant
//! system. Supported systems:
//!
//! - **Placidus**: time trisection of each point's own semi-arc, solved by
//!   fixed-point iteration. Undefined beyond the polar circles.
//! - **Porphyry**: ecliptic trisection of the four quadrants.
//! - **Equal**: 30° steps from the Ascendant.
//! - **Whole Sign**: house 1 is the whole sign holding the Ascendant.

use std::fmt::{Display, Formatter};

use rising_time::normalize_deg;
use serde::{Deserialize, Serialize};

use crate::ascendant::ChartAngles;
use crate::error::ChartError;

/// Placidus (and any semi-arc system) is undefined beyond this latitude.
pub const SEMI_ARC_LIMIT_DEG: f64 = 66.5;

const MAX_ITERATIONS: usize = 100;
const TOLERANCE_DEG: f64 = 1e-10;

/// Supported house division systems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HouseSystem {
    Placidus,
    Porphyry,
    Equal,
    WholeSign,
}

/// All supported systems in enum order.
pub const ALL_HOUSE_SYSTEMS: [HouseSystem; 4] = [
    HouseSystem::Placidus,
    HouseSystem::Porphyry,
    HouseSystem::Equal,
    HouseSystem::WholeSign,
];

impl HouseSystem {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Placidus => "Placidus",
            Self::Porphyry => "Porphyry",
            Self::Equal => "Equal",
            Self::WholeSign => "Whole Sign",
        }
    }

    /// Whether the system fails for |latitude| > 66.5°.
    pub const fn latitude_dependent(self) -> bool {
        matches!(self, Self::Placidus)
    }

    pub const fn all() -> &'static [HouseSystem] {
        &ALL_HOUSE_SYSTEMS
    }

    /// Parse a case-insensitive name: `placidus`, `porphyry`, `equal`,
    /// `whole-sign` / `whole_sign` / `wholesign`.
    pub fn from_name(name: &str) -> Option<Self> {
        let key: String = name
            .trim()
            .to_ascii_lowercase()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect();
        match key.as_str() {
            "placidus" => Some(Self::Placidus),
            "porphyry" => Some(Self::Porphyry),
            "equal" => Some(Self::Equal),
            "wholesign" => Some(Self::WholeSign),
            _ => None,
        }
    }
}

impl Display for HouseSystem {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Twelve house cusps, ecliptic longitudes in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HouseCusps {
    pub system: HouseSystem,
    /// `cusps[0]` is cusp 1.
    pub cusps: [f64; 12],
}

impl HouseCusps {
    /// Cusp `n` (1-based). Wraps modulo 12.
    pub fn cusp(&self, n: usize) -> f64 {
        self.cusps[(n + 11) % 12]
    }

    /// House number (1..=12) containing an ecliptic longitude.
    pub fn house_of(&self, longitude_deg: f64) -> u8 {
        let lon = normalize_deg(longitude_deg);
        for i in 0..12 {
            let start = self.cusps[i];
            let width = arc_forward(start, self.cusps[(i + 1) % 12]);
            if arc_forward(start, lon) < width {
                return (i + 1) as u8;
            }
        }
        // Only reachable with degenerate (zero-width) cusps.
        1
    }
}

/// Compute house cusps from the chart angles.
pub fn compute_houses(
    angles: &ChartAngles,
    obliquity_deg: f64,
    latitude_deg: f64,
    system: HouseSystem,
) -> Result<HouseCusps, ChartError> {
    if system.latitude_dependent() && latitude_deg.abs() > SEMI_ARC_LIMIT_DEG {
        return Err(ChartError::HouseSystemUnavailable {
            system,
            latitude_deg,
        });
    }
    let asc = angles.ascendant_deg;
    let mc = angles.midheaven_deg;
    let cusps = match system {
        HouseSystem::Placidus => {
            compute_placidus(asc, mc, angles.ramc_deg, latitude_deg, obliquity_deg)?
        }
        HouseSystem::Porphyry => compute_porphyry(asc, mc),
        HouseSystem::Equal => compute_equal(asc),
        HouseSystem::WholeSign => compute_equal((asc / 30.0).floor() * 30.0),
    };
    Ok(HouseCusps { system, cusps })
}

fn compute_equal(start_deg: f64) -> [f64; 12] {
    let mut cusps = [0.0; 12];
    for (i, cusp) in cusps.iter_mut().enumerate() {
        *cusp = normalize_deg(start_deg + (i as f64) * 30.0);
    }
    cusps
}

fn compute_porphyry(asc_deg: f64, mc_deg: f64) -> [f64; 12] {
    let desc_deg = normalize_deg(asc_deg + 180.0);
    let ic_deg = normalize_deg(mc_deg + 180.0);

    let mut cusps = [0.0; 12];
    // (quadrant start, quadrant end, index of the start cusp)
    for (from, to, first) in [
        (asc_deg, ic_deg, 0),
        (ic_deg, desc_deg, 3),
        (desc_deg, mc_deg, 6),
        (mc_deg, asc_deg, 9),
    ] {
        let arc = arc_forward(from, to);
        cusps[first] = from;
        cusps[first + 1] = normalize_deg(from + arc / 3.0);
        cusps[first + 2] = normalize_deg(from + 2.0 * arc / 3.0);
    }
    cusps
}

fn compute_placidus(
    asc_deg: f64,
    mc_deg: f64,
    ramc_deg: f64,
    lat_deg: f64,
    eps_deg: f64,
) -> Result<[f64; 12], ChartError> {
    let mut cusps = [0.0; 12];
    cusps[0] = asc_deg;
    cusps[9] = mc_deg;
    cusps[3] = normalize_deg(mc_deg + 180.0);
    cusps[6] = normalize_deg(asc_deg + 180.0);

    // Above the horizon, east of the meridian: RA = RAMC + k·DSA/3.
    cusps[10] = placidus_cusp(ramc_deg, lat_deg, eps_deg, 1.0, true)?;
    cusps[11] = placidus_cusp(ramc_deg, lat_deg, eps_deg, 2.0, true)?;
    // Below the horizon: RA = RAMC + 180° − k·NSA/3.
    cusps[1] = placidus_cusp(ramc_deg, lat_deg, eps_deg, 2.0, false)?;
    cusps[2] = placidus_cusp(ramc_deg, lat_deg, eps_deg, 1.0, false)?;

    for i in [1, 2, 10, 11] {
        cusps[(i + 6) % 12] = normalize_deg(cusps[i] + 180.0);
    }
    Ok(cusps)
}

/// One Placidus cusp: iterate RA → ecliptic point → declination → semi-arc
/// until the right ascension settles.
fn placidus_cusp(
    ramc_deg: f64,
    lat_deg: f64,
    eps_deg: f64,
    thirds: f64,
    diurnal: bool,
) -> Result<f64, ChartError> {
    let phi = lat_deg.to_radians();
    let eps = eps_deg.to_radians();
    let target = |ra_deg: f64| {
        let lon = ecliptic_longitude_of_ra(ra_deg.to_radians(), eps);
        let dec = (eps.sin() * lon.sin()).asin();
        let dsa = diurnal_semi_arc_deg(dec, phi);
        if diurnal {
            ramc_deg + thirds * dsa / 3.0
        } else {
            ramc_deg + 180.0 - thirds * (180.0 - dsa) / 3.0
        }
    };

    let mut ra = if diurnal {
        ramc_deg + thirds * 30.0
    } else {
        ramc_deg + 180.0 - thirds * 30.0
    };
    for _ in 0..MAX_ITERATIONS {
        let next = target(ra);
        if !next.is_finite() {
            return Err(ChartError::NoConvergence("Placidus semi-arc undefined"));
        }
        if (next - ra).abs() < TOLERANCE_DEG {
            return Ok(normalize_deg(
                ecliptic_longitude_of_ra(next.to_radians(), eps).to_degrees(),
            ));
        }
        ra = next;
    }
    Err(ChartError::NoConvergence("Placidus cusp iteration"))
}

/// Diurnal semi-arc in degrees: `acos(−tan δ · tan φ)`.
fn diurnal_semi_arc_deg(dec: f64, phi: f64) -> f64 {
    (-(dec.tan() * phi.tan())).clamp(-1.0, 1.0).acos().to_degrees()
}

/// Ecliptic longitude (radians) of the ecliptic point with right ascension `ra`.
fn ecliptic_longitude_of_ra(ra: f64, eps: f64) -> f64 {
    f64::atan2(ra.sin(), ra.cos() * eps.cos())
}

/// Forward arc from a to b in degrees, [0, 360).
fn arc_forward(a: f64, b: f64) -> f64 {
    (b - a).rem_euclid(360.0)
}

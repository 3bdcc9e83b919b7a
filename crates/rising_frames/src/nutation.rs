//! Low-precision nutation (Meeus, "Astronomical Algorithms" ch. 22).
//!
//! Four-term series in the longitude of the Moon's ascending node Ω and
//! the mean longitudes of the Sun (L) and Moon (L′):
//!
//!   Δψ = −17.20″·sin Ω − 1.32″·sin 2L − 0.23″·sin 2L′ + 0.21″·sin 2Ω
//!   Δε =  +9.20″·cos Ω + 0.57″·cos 2L + 0.10″·cos 2L′ − 0.09″·cos 2Ω
//!
//! Accurate to about 0.5″ in Δψ and 0.1″ in Δε, far below the minute of
//! arc the zodiac position is reported to.

/// Nutation angles in arcseconds.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Nutation {
    /// Nutation in longitude Δψ.
    pub dpsi_arcsec: f64,
    /// Nutation in obliquity Δε.
    pub deps_arcsec: f64,
}

impl Nutation {
    pub fn dpsi_deg(&self) -> f64 {
        self.dpsi_arcsec / 3600.0
    }

    pub fn deps_deg(&self) -> f64 {
        self.deps_arcsec / 3600.0
    }
}

/// Fundamental arguments `[Ω, L, L′]` in degrees (not normalized).
///
/// `t` = Julian centuries of TT since J2000.0.
pub fn fundamental_arguments_deg(t: f64) -> [f64; 3] {
    let om = 125.044_52 - 1934.136_261 * t;
    let l_sun = 280.4665 + 36_000.7698 * t;
    let l_moon = 218.3165 + 481_267.8813 * t;
    [om, l_sun, l_moon]
}

/// Δψ and Δε at `t` Julian centuries from J2000.0.
pub fn nutation_low_precision(t: f64) -> Nutation {
    let [om, l_sun, l_moon] = fundamental_arguments_deg(t).map(f64::to_radians);

    let dpsi = -17.20 * om.sin() - 1.32 * (2.0 * l_sun).sin() - 0.23 * (2.0 * l_moon).sin()
        + 0.21 * (2.0 * om).sin();
    let deps = 9.20 * om.cos() + 0.57 * (2.0 * l_sun).cos() + 0.10 * (2.0 * l_moon).cos()
        - 0.09 * (2.0 * om).cos();

    Nutation {
        dpsi_arcsec: dpsi,
        deps_arcsec: deps,
    }
}

/// Equation of the equinoxes Δψ·cos ε in degrees.
///
/// Added to mean sidereal time to give apparent sidereal time.
pub fn equation_of_equinoxes_deg(nutation: &Nutation, obliquity_deg: f64) -> f64 {
    nutation.dpsi_deg() * obliquity_deg.to_radians().cos()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meeus_example_22a() {
        // 1987 April 10, 0h TD. Full theory: Δψ = −3.788″, Δε = +9.443″.
        let t = (2_446_895.5 - 2_451_545.0) / 36_525.0;
        let n = nutation_low_precision(t);
        assert!((n.dpsi_arcsec + 3.788).abs() < 0.5, "Δψ = {}", n.dpsi_arcsec);
        assert!((n.deps_arcsec - 9.443).abs() < 0.1, "Δε = {}", n.deps_arcsec);
    }

    #[test]
    fn amplitude_bounds() {
        for i in -200..=200 {
            let t = i as f64 * 0.01;
            let n = nutation_low_precision(t);
            assert!(n.dpsi_arcsec.abs() < 19.0, "Δψ({t}) = {}", n.dpsi_arcsec);
            assert!(n.deps_arcsec.abs() < 10.0, "Δε({t}) = {}", n.deps_arcsec);
        }
    }

    #[test]
    fn equation_of_equinoxes_scales_by_cos_eps() {
        let n = Nutation {
            dpsi_arcsec: 3600.0,
            deps_arcsec: 0.0,
        };
        assert!((equation_of_equinoxes_deg(&n, 0.0) - 1.0).abs() < 1e-15);
        assert!((equation_of_equinoxes_deg(&n, 60.0) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn node_regresses() {
        let [om0, ..] = fundamental_arguments_deg(0.0);
        let [om1, ..] = fundamental_arguments_deg(0.01);
        assert!(om1 < om0);
    }
}

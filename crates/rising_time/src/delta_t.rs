//! ΔT = TT − UT.
//!
//! Piecewise polynomial expressions of Espenak & Meeus (NASA "Five
//! Millennium Canon of Solar Eclipses", 2006) over the whole time axis.
//! The lunar secular-acceleration correction is not applied.
//!
//! Polynomials take a decimal year `y = year + (month − 0.5) / 12`.

/// Decimal year at the middle of `month`.
pub fn decimal_year(year: i32, month: u32) -> f64 {
    year as f64 + (month as f64 - 0.5) / 12.0
}

/// Evaluate `c[0] + c[1]·t + c[2]·t² + …` by Horner's scheme.
fn poly(t: f64, c: &[f64]) -> f64 {
    c.iter().rev().fold(0.0, |acc, &k| acc * t + k)
}

/// Long-term parabola used outside the tabulated span.
fn parabola(y: f64) -> f64 {
    let u = (y - 1820.0) / 100.0;
    -20.0 + 32.0 * u * u
}

/// ΔT in seconds at decimal year `y`.
pub fn delta_t_seconds(y: f64) -> f64 {
    if y < -500.0 {
        parabola(y)
    } else if y < 500.0 {
        poly(
            y / 100.0,
            &[
                10583.6,
                -1014.41,
                33.78311,
                -5.952053,
                -0.1798452,
                0.022174192,
                0.0090316521,
            ],
        )
    } else if y < 1600.0 {
        poly(
            (y - 1000.0) / 100.0,
            &[
                1574.2,
                -556.01,
                71.23472,
                0.319781,
                -0.8503463,
                -0.005050998,
                0.0083572073,
            ],
        )
    } else if y < 1700.0 {
        poly(y - 1600.0, &[120.0, -0.9808, -0.01532, 1.0 / 7129.0])
    } else if y < 1800.0 {
        poly(
            y - 1700.0,
            &[8.83, 0.1603, -0.0059285, 0.00013336, -1.0 / 1_174_000.0],
        )
    } else if y < 1860.0 {
        poly(
            y - 1800.0,
            &[
                13.72,
                -0.332447,
                0.0068612,
                0.0041116,
                -0.00037436,
                0.0000121272,
                -0.0000001699,
                0.000000000875,
            ],
        )
    } else if y < 1900.0 {
        poly(
            y - 1860.0,
            &[
                7.62,
                0.5737,
                -0.251754,
                0.01680668,
                -0.0004473624,
                1.0 / 233_174.0,
            ],
        )
    } else if y < 1920.0 {
        poly(
            y - 1900.0,
            &[-2.79, 1.494119, -0.0598939, 0.0061966, -0.000197],
        )
    } else if y < 1941.0 {
        poly(y - 1920.0, &[21.20, 0.84493, -0.076100, 0.0020936])
    } else if y < 1961.0 {
        poly(y - 1950.0, &[29.07, 0.407, -1.0 / 233.0, 1.0 / 2547.0])
    } else if y < 1986.0 {
        poly(y - 1975.0, &[45.45, 1.067, -1.0 / 260.0, -1.0 / 718.0])
    } else if y < 2005.0 {
        poly(
            y - 2000.0,
            &[
                63.86,
                0.3345,
                -0.060374,
                0.0017275,
                0.000651814,
                0.00002373599,
            ],
        )
    } else if y < 2050.0 {
        poly(y - 2000.0, &[62.92, 0.32217, 0.005589])
    } else if y < 2150.0 {
        parabola(y) - 0.5628 * (2150.0 - y)
    } else {
        parabola(y)
    }
}

/// ΔT in seconds for the middle of a calendar month.
pub fn delta_t_for_month(year: i32, month: u32) -> f64 {
    delta_t_seconds(decimal_year(year, month))
}

/// Julian Ephemeris Day from a UT Julian Day and ΔT in seconds.
pub fn jde_from_jd(jd_ut: f64, delta_t_s: f64) -> f64 {
    jd_ut + delta_t_s / 86_400.0
}

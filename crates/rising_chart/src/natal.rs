//! End-to-end natal pipeline: birth data → Ascendant, Midheaven, houses.
//!
//! Stages: parse time → resolve UTC offset → normalize to UTC → Julian Day
//! (and ΔT) → sidereal time and obliquity (with optional nutation) →
//! chart angles → zodiac positions.

use rising_frames::{
    equation_of_equinoxes_deg, mean_obliquity_deg, nutation_low_precision, true_obliquity_deg,
};
use rising_time::{
    BirthDate, GeoCoordinate, ParsedTime, TimezoneTable, UtcInstant, UtcOffset,
    UtcOffsetProvider, check_offset_hours, delta_t_for_month, gmst_deg, jde_from_jd,
    julian_centuries, julian_day, local_sidereal_time_deg, normalize, normalize_deg,
    parse_birth_time,
};

use crate::ascendant::{ChartAngles, chart_angles};
use crate::error::ChartError;
use crate::houses::{HouseCusps, compute_houses};
use crate::options::ChartOptions;
use crate::zodiac::{ZodiacPosition, zodiac_position};

/// Whether the chart rests on a real birth time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Confidence {
    /// Computed from the supplied birth time.
    Exact,
    /// Birth time unknown; computed for local noon.
    Generalized,
}

/// Intermediate quantities of one birth instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartMoment {
    pub time: ParsedTime,
    pub offset: UtcOffset,
    pub utc: UtcInstant,
    /// Julian Day (UT).
    pub jd_ut: f64,
    /// ΔT in seconds; zero when not applied.
    pub delta_t_s: f64,
    /// Julian Ephemeris Day used for obliquity and nutation.
    pub jde: f64,
    pub gmst_deg: f64,
    /// Local sidereal time (apparent when nutation is applied), degrees.
    pub lst_deg: f64,
    /// Obliquity of the ecliptic (true when nutation is applied), degrees.
    pub obliquity_deg: f64,
}

impl ChartMoment {
    pub fn confidence(&self) -> Confidence {
        if self.time.is_defaulted() {
            Confidence::Generalized
        } else {
            Confidence::Exact
        }
    }
}

/// The Ascendant of a birth chart and how it was obtained.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AscendantReport {
    pub position: ZodiacPosition,
    /// Ecliptic longitude of the Ascendant, [0, 360).
    pub longitude_deg: f64,
    pub confidence: Confidence,
    pub midheaven: ZodiacPosition,
    pub midheaven_deg: f64,
    pub moment: ChartMoment,
}

impl AscendantReport {
    /// UTC instant the chart was cast for.
    pub fn utc(&self) -> UtcInstant {
        self.moment.utc
    }

    /// Offset applied to the local birth time.
    pub fn offset(&self) -> UtcOffset {
        self.moment.offset
    }

    /// Julian Day (UT) of the birth instant.
    pub fn julian_day(&self) -> f64 {
        self.moment.jd_ut
    }
}

/// Ascendant report plus house cusps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NatalChart {
    pub ascendant: AscendantReport,
    pub houses: HouseCusps,
}

/// Ascendant with default options and the built-in timezone table.
///
/// `time_text` is free-form; unparseable or unknown times fall back to
/// noon and yield [`Confidence::Generalized`].
pub fn compute_ascendant(
    date: &BirthDate,
    time_text: &str,
    location: &GeoCoordinate,
) -> Result<AscendantReport, ChartError> {
    compute_ascendant_with(
        date,
        parse_birth_time(time_text),
        location,
        &ChartOptions::default(),
        TimezoneTable::builtin(),
    )
}

/// Ascendant with explicit options and offset source.
pub fn compute_ascendant_with(
    date: &BirthDate,
    time: ParsedTime,
    location: &GeoCoordinate,
    options: &ChartOptions,
    offsets: &dyn UtcOffsetProvider,
) -> Result<AscendantReport, ChartError> {
    let moment = resolve_moment(date, time, location, options, offsets)?;
    let angles = chart_angles(moment.lst_deg, moment.obliquity_deg, location.latitude_deg)?;
    let position = zodiac_position(angles.ascendant_deg);
    log::debug!(
        "ascendant {:.6}° ({position}), midheaven {:.6}°",
        angles.ascendant_deg,
        angles.midheaven_deg
    );
    Ok(AscendantReport {
        position,
        longitude_deg: angles.ascendant_deg,
        confidence: moment.confidence(),
        midheaven: zodiac_position(angles.midheaven_deg),
        midheaven_deg: angles.midheaven_deg,
        moment,
    })
}

/// Ascendant and house cusps in `options.house_system`.
pub fn compute_chart(
    date: &BirthDate,
    time: ParsedTime,
    location: &GeoCoordinate,
    options: &ChartOptions,
    offsets: &dyn UtcOffsetProvider,
) -> Result<NatalChart, ChartError> {
    let ascendant = compute_ascendant_with(date, time, location, options, offsets)?;
    let angles = ChartAngles {
        ascendant_deg: ascendant.longitude_deg,
        midheaven_deg: ascendant.midheaven_deg,
        ramc_deg: ascendant.moment.lst_deg,
    };
    let houses = compute_houses(
        &angles,
        ascendant.moment.obliquity_deg,
        location.latitude_deg,
        options.house_system,
    )?;
    Ok(NatalChart { ascendant, houses })
}

/// Run the time stages of the pipeline: offset, UTC, JD, sidereal time and
/// obliquity.
pub fn resolve_moment(
    date: &BirthDate,
    time: ParsedTime,
    location: &GeoCoordinate,
    options: &ChartOptions,
    offsets: &dyn UtcOffsetProvider,
) -> Result<ChartMoment, ChartError> {
    // Fields are public; revalidate rather than trust the caller.
    GeoCoordinate::new(location.latitude_deg, location.longitude_deg)?;

    if let ParsedTime::Defaulted(reason) = time {
        log::warn!("{}; computing for 12:00 local time", reason.describe());
    }
    let local = time.time();

    let offset = offsets.utc_offset(location, date, local)?;
    check_offset_hours(offset.hours)?;
    let utc = normalize(date, local, &offset);
    log::debug!("{date} {local} at {offset} -> {utc}");

    let jd_ut = julian_day(&utc);
    let delta_t_s = if options.apply_delta_t {
        delta_t_for_month(utc.year, utc.month)
    } else {
        0.0
    };
    let jde = jde_from_jd(jd_ut, delta_t_s);
    let t = julian_centuries(jde);

    let gmst = gmst_deg(jd_ut);
    let mean_lst = local_sidereal_time_deg(gmst, location.longitude_deg);
    let (lst_deg, obliquity_deg) = if options.apply_nutation {
        let nutation = nutation_low_precision(t);
        let eps = true_obliquity_deg(t, &nutation);
        (
            normalize_deg(mean_lst + equation_of_equinoxes_deg(&nutation, eps)),
            eps,
        )
    } else {
        (mean_lst, mean_obliquity_deg(t))
    };
    log::debug!(
        "JD {jd_ut:.6}, ΔT {delta_t_s:.2} s, LST {lst_deg:.6}°, ε {obliquity_deg:.6}°"
    );

    Ok(ChartMoment {
        time,
        offset,
        utc,
        jd_ut,
        delta_t_s,
        jde,
        gmst_deg: gmst,
        lst_deg,
        obliquity_deg,
    })
}

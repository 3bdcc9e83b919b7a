//! Types for historical UTC offset resolution.
//!
//! Regions are lat/lon boxes with a standard offset. Daylight-saving history
//! is a list of [`DstRule`]s, each tying a region and an era (inclusive year
//! span) to a [`DstWindow`].

use std::fmt::{Display, Formatter};

use crate::calendar::{last_sunday, nth_sunday, sunday_on_or_after};

/// Regions with a known standard offset and DST history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegionId {
    Hungary,
    /// Slovenia, Croatia, Bosnia, Serbia, Montenegro, North Macedonia.
    FormerYugoslavia,
    Portugal,
    /// Great Britain and Ireland.
    BritishIsles,
    /// Central European Time band west of Hungary: Spain to Poland.
    WesternEurope,
    /// Eastern European Time: Finland, Romania, Bulgaria, Greece.
    EasternEurope,
    India,
    China,
    /// Japan and Korea.
    Japan,
    UsEastern,
    /// Indiana: eastern standard time without DST from 1971 to 2005.
    Indiana,
    UsCentral,
    UsMountain,
    /// Arizona keeps mountain standard time all year.
    Arizona,
    UsPacific,
    /// New South Wales, Victoria, ACT.
    AustraliaSouthEast,
    Queensland,
}

impl RegionId {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Hungary => "Hungary",
            Self::FormerYugoslavia => "Former Yugoslavia",
            Self::Portugal => "Portugal",
            Self::BritishIsles => "British Isles",
            Self::WesternEurope => "Western/Central Europe",
            Self::EasternEurope => "Eastern Europe",
            Self::India => "India",
            Self::China => "China",
            Self::Japan => "Japan/Korea",
            Self::UsEastern => "North America Eastern",
            Self::Indiana => "Indiana",
            Self::UsCentral => "North America Central",
            Self::UsMountain => "North America Mountain",
            Self::Arizona => "Arizona",
            Self::UsPacific => "North America Pacific",
            Self::AustraliaSouthEast => "Australia South-East",
            Self::Queensland => "Queensland",
        }
    }
}

impl Display for RegionId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Inclusive latitude/longitude box, degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoBox {
    pub lat_min: f64,
    pub lat_max: f64,
    pub lon_min: f64,
    pub lon_max: f64,
}

impl GeoBox {
    pub const fn new(lat_min: f64, lat_max: f64, lon_min: f64, lon_max: f64) -> Self {
        Self {
            lat_min,
            lat_max,
            lon_min,
            lon_max,
        }
    }

    pub fn contains(&self, lat: f64, lon: f64) -> bool {
        (self.lat_min..=self.lat_max).contains(&lat) && (self.lon_min..=self.lon_max).contains(&lon)
    }
}

/// A region: one or more boxes sharing a standard offset.
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    pub id: RegionId,
    pub bounds: Vec<GeoBox>,
    /// Standard (winter) offset from UTC in hours.
    pub standard_offset_hours: f64,
}

impl Region {
    pub fn new(id: RegionId, standard_offset_hours: f64, bounds: &[GeoBox]) -> Self {
        Self {
            id,
            bounds: bounds.to_vec(),
            standard_offset_hours,
        }
    }

    pub fn contains(&self, lat: f64, lon: f64) -> bool {
        self.bounds.iter().any(|b| b.contains(lat, lon))
    }
}

/// How a transition date is chosen within a year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayRule {
    /// A fixed calendar day.
    Fixed { month: u32, day: u32 },
    /// Last Sunday of the month.
    LastSunday { month: u32 },
    /// `n`-th Sunday of the month (1-based).
    NthSunday { month: u32, n: u32 },
    /// First Sunday on or after the given day.
    SundayOnOrAfter { month: u32, day: u32 },
}

impl DayRule {
    /// `(month, day)` of this rule in `year`.
    pub fn resolve(self, year: i32) -> (u32, u32) {
        match self {
            Self::Fixed { month, day } => (month, day),
            Self::LastSunday { month } => (month, last_sunday(year, month)),
            Self::NthSunday { month, n } => (month, nth_sunday(year, month, n)),
            Self::SundayOnOrAfter { month, day } => (month, sunday_on_or_after(year, month, day)),
        }
    }
}

/// A DST transition: a day plus the local wall-clock time it takes effect.
///
/// `minute` may be 1440 to mean the end of the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub day: DayRule,
    pub minute: u32,
}

impl Transition {
    pub const fn at(day: DayRule, hour: u32) -> Self {
        Self {
            day,
            minute: hour * 60,
        }
    }

    /// Sortable `(month, day, minute)` key of this transition in `year`.
    pub fn key(self, year: i32) -> (u32, u32, u32) {
        let (m, d) = self.day.resolve(year);
        (m, d, self.minute)
    }
}

/// DST interval within one calendar year, `[start, end)` in local wall time.
///
/// When `start` falls after `end` (southern hemisphere) the window wraps:
/// DST holds from `start` to the end of the year and from January 1 to `end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DstWindow {
    pub start: Transition,
    pub end: Transition,
}

impl DstWindow {
    pub const fn new(start: Transition, end: Transition) -> Self {
        Self { start, end }
    }

    /// Whether local `(month, day, minute)` of `year` falls in the window.
    pub fn contains(&self, year: i32, month: u32, day: u32, minute: u32) -> bool {
        let at = (month, day, minute);
        let start = self.start.key(year);
        let end = self.end.key(year);
        if start <= end {
            at >= start && at < end
        } else {
            at >= start || at < end
        }
    }
}

/// Inclusive span of years; `last_year: None` means open-ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Era {
    pub first_year: i32,
    pub last_year: Option<i32>,
}

impl Era {
    pub const fn years(first_year: i32, last_year: i32) -> Self {
        Self {
            first_year,
            last_year: Some(last_year),
        }
    }

    pub const fn single(year: i32) -> Self {
        Self::years(year, year)
    }

    pub const fn since(first_year: i32) -> Self {
        Self {
            first_year,
            last_year: None,
        }
    }

    pub fn contains(&self, year: i32) -> bool {
        year >= self.first_year && self.last_year.is_none_or(|last| year <= last)
    }
}

/// One row of the DST history table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DstRule {
    pub region: RegionId,
    pub era: Era,
    pub window: DstWindow,
}

impl DstRule {
    pub const fn new(region: RegionId, era: Era, window: DstWindow) -> Self {
        Self {
            region,
            era,
            window,
        }
    }
}

/// How much trust to place in a resolved offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OffsetAccuracy {
    /// Resolved from a known region and its DST history.
    Regional(RegionId),
    /// Naive `round(longitude / 15)` estimate; no DST applied.
    Approximate,
    /// Supplied by the caller or an external timezone database.
    Supplied,
}

/// UTC offset in effect at a birth instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UtcOffset {
    /// Signed offset in hours, local = UTC + hours.
    pub hours: f64,
    /// Whether daylight saving contributed one hour.
    pub dst_active: bool,
    pub accuracy: OffsetAccuracy,
}

impl UtcOffset {
    /// Offset rounded to whole minutes.
    pub fn minutes(&self) -> i32 {
        (self.hours * 60.0).round() as i32
    }

    pub fn is_approximate(&self) -> bool {
        self.accuracy == OffsetAccuracy::Approximate
    }
}

impl Display for UtcOffset {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let total = self.minutes();
        let sign = if total < 0 { '-' } else { '+' };
        let abs = total.unsigned_abs();
        write!(f, "UTC{sign}{:02}:{:02}", abs / 60, abs % 60)?;
        if self.dst_active {
            f.write_str(" (DST)")?;
        }
        Ok(())
    }
}

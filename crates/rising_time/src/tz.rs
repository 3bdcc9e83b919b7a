//! Historical UTC offset resolution.
//!
//! Offsets come from a table of regions (lat/lon boxes with a standard
//! offset) and a table of daylight-saving rules keyed by region and era.
//! Locations outside every region, or inside an excluded box, fall back to
//! `round(longitude / 15)` and are flagged [`OffsetAccuracy::Approximate`].
//! Excluded boxes carve out territory a region box would otherwise claim
//! with the wrong offset or DST history.
//!
//! The boxes are coarse: they follow borders only roughly and will
//! misclassify places near a frontier. Callers holding an authoritative
//! timezone database should implement [`UtcOffsetProvider`] instead.

use once_cell::sync::Lazy;

use crate::calendar::BirthDate;
use crate::clock::BirthTime;
use crate::error::TimeError;
use crate::geo::GeoCoordinate;
use crate::tz_types::{
    DayRule, DstRule, DstWindow, Era, GeoBox, OffsetAccuracy, Region, RegionId, Transition,
    UtcOffset,
};

/// Largest accepted magnitude for a caller-supplied offset, hours.
pub const MAX_OFFSET_HOURS: f64 = 14.0;

/// Source of the UTC offset in effect at a local birth instant.
pub trait UtcOffsetProvider {
    fn utc_offset(
        &self,
        location: &GeoCoordinate,
        date: &BirthDate,
        local_time: BirthTime,
    ) -> Result<UtcOffset, TimeError>;
}

/// Reject offsets that are not finite or exceed [`MAX_OFFSET_HOURS`].
pub fn check_offset_hours(hours: f64) -> Result<f64, TimeError> {
    if !hours.is_finite() || hours.abs() > MAX_OFFSET_HOURS {
        return Err(TimeError::InvalidUtcOffset(hours));
    }
    Ok(hours)
}

/// Naive offset from longitude alone: `round(longitude / 15)` hours.
pub fn naive_offset_hours(longitude_deg: f64) -> f64 {
    (longitude_deg / 15.0).round()
}

/// Region and DST tables used to resolve historical offsets.
#[derive(Debug, Clone, PartialEq)]
pub struct TimezoneTable {
    regions: Vec<Region>,
    rules: Vec<DstRule>,
    excluded: Vec<GeoBox>,
}

static BUILTIN: Lazy<TimezoneTable> = Lazy::new(|| {
    let table = TimezoneTable::new(builtin_regions(), builtin_rules());
    builtin_exclusions()
        .into_iter()
        .fold(table, TimezoneTable::with_exclusion)
});

impl TimezoneTable {
    /// Regions are matched in order; the first containing box wins.
    /// Rules are matched in order; the first matching region and era wins.
    pub fn new(regions: Vec<Region>, rules: Vec<DstRule>) -> Self {
        Self {
            regions,
            rules,
            excluded: Vec::new(),
        }
    }

    /// A table with no regions: every location resolves approximately.
    pub fn empty() -> Self {
        Self::new(Vec::new(), Vec::new())
    }

    /// The built-in region and DST history tables.
    pub fn builtin() -> &'static TimezoneTable {
        &BUILTIN
    }

    /// Append a region, matched after all existing ones.
    pub fn with_region(mut self, region: Region) -> Self {
        self.regions.push(region);
        self
    }

    /// Append a DST rule, matched after all existing ones.
    pub fn with_rule(mut self, rule: DstRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Exclude a box: locations inside it match no region.
    pub fn with_exclusion(mut self, bounds: GeoBox) -> Self {
        self.excluded.push(bounds);
        self
    }

    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    pub fn rules(&self) -> &[DstRule] {
        &self.rules
    }

    pub fn exclusions(&self) -> &[GeoBox] {
        &self.excluded
    }

    /// First region whose boxes contain `location`, unless it is excluded.
    pub fn region_at(&self, location: &GeoCoordinate) -> Option<&Region> {
        let (lat, lon) = (location.latitude_deg, location.longitude_deg);
        if self.excluded.iter().any(|b| b.contains(lat, lon)) {
            return None;
        }
        self.regions.iter().find(|r| r.contains(lat, lon))
    }

    /// Whether DST is in effect in `region` at the given local wall time.
    ///
    /// The era is keyed on the calendar year of `date`, so a wrapping
    /// southern-hemisphere window is looked up per year on both sides of
    /// January 1.
    pub fn dst_active(&self, region: RegionId, date: &BirthDate, local_time: BirthTime) -> bool {
        let year = date.year();
        self.rules
            .iter()
            .find(|r| r.region == region && r.era.contains(year))
            .is_some_and(|r| {
                r.window
                    .contains(year, date.month(), date.day(), local_time.minutes_of_day())
            })
    }

    /// Resolve the offset at a local birth instant. Never fails.
    pub fn resolve(
        &self,
        location: &GeoCoordinate,
        date: &BirthDate,
        local_time: BirthTime,
    ) -> UtcOffset {
        match self.region_at(location) {
            Some(region) => {
                let dst_active = self.dst_active(region.id, date, local_time);
                let hours = region.standard_offset_hours + if dst_active { 1.0 } else { 0.0 };
                log::debug!(
                    "offset for {date} {local_time} in {}: {hours:+} h (dst {dst_active})",
                    region.id
                );
                UtcOffset {
                    hours,
                    dst_active,
                    accuracy: OffsetAccuracy::Regional(region.id),
                }
            }
            None => {
                let hours = naive_offset_hours(location.longitude_deg);
                log::warn!(
                    "no timezone region for ({:.4}, {:.4}); using approximate offset {hours:+} h",
                    location.latitude_deg,
                    location.longitude_deg
                );
                UtcOffset {
                    hours,
                    dst_active: false,
                    accuracy: OffsetAccuracy::Approximate,
                }
            }
        }
    }
}

impl Default for TimezoneTable {
    fn default() -> Self {
        Self::builtin().clone()
    }
}

impl UtcOffsetProvider for TimezoneTable {
    fn utc_offset(
        &self,
        location: &GeoCoordinate,
        date: &BirthDate,
        local_time: BirthTime,
    ) -> Result<UtcOffset, TimeError> {
        Ok(self.resolve(location, date, local_time))
    }
}

/// A known offset supplied by the caller, applied regardless of location.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedOffset {
    hours: f64,
}

impl FixedOffset {
    pub fn new(hours: f64) -> Result<Self, TimeError> {
        check_offset_hours(hours).map(|hours| Self { hours })
    }

    pub fn hours(&self) -> f64 {
        self.hours
    }
}

impl UtcOffsetProvider for FixedOffset {
    fn utc_offset(
        &self,
        _location: &GeoCoordinate,
        _date: &BirthDate,
        _local_time: BirthTime,
    ) -> Result<UtcOffset, TimeError> {
        Ok(UtcOffset {
            hours: self.hours,
            dst_active: false,
            accuracy: OffsetAccuracy::Supplied,
        })
    }
}

// ---------------------------------------------------------------------------
// Built-in tables
// ---------------------------------------------------------------------------

const fn fixed(month: u32, day: u32) -> DayRule {
    DayRule::Fixed { month, day }
}

const fn last_sun(month: u32) -> DayRule {
    DayRule::LastSunday { month }
}

const fn sun_from(month: u32, day: u32) -> DayRule {
    DayRule::SundayOnOrAfter { month, day }
}

const fn window(start: DayRule, start_hour: u32, end: DayRule, end_hour: u32) -> DstWindow {
    DstWindow::new(
        Transition::at(start, start_hour),
        Transition::at(end, end_hour),
    )
}

/// Never-ending window end, used for years spent entirely in DST.
const YEAR_END: Transition = Transition {
    day: fixed(12, 31),
    minute: 1440,
};

fn builtin_regions() -> Vec<Region> {
    use RegionId::*;
    vec![
        Region::new(
            Hungary,
            1.0,
            &[
                GeoBox::new(45.75, 47.8, 17.2, 18.95),
                GeoBox::new(46.17, 48.25, 18.95, 20.9),
                GeoBox::new(46.4, 47.75, 16.1, 17.2),
                GeoBox::new(46.4, 47.0, 20.9, 21.4),
                GeoBox::new(47.0, 47.6, 20.9, 21.8),
                GeoBox::new(47.6, 48.6, 20.9, 22.4),
            ],
        ),
        Region::new(
            FormerYugoslavia,
            1.0,
            &[
                GeoBox::new(42.0, 44.8, 14.5, 22.65),
                GeoBox::new(44.8, 46.9, 13.4, 20.6),
                GeoBox::new(41.0, 42.0, 18.4, 23.1),
            ],
        ),
        Region::new(
            Portugal,
            0.0,
            &[
                GeoBox::new(41.0, 42.2, -9.6, -6.2),
                GeoBox::new(38.0, 41.0, -9.6, -7.0),
                GeoBox::new(36.9, 38.0, -9.1, -7.4),
            ],
        ),
        Region::new(
            BritishIsles,
            0.0,
            &[
                GeoBox::new(51.3, 61.0, -10.7, 1.8),
                GeoBox::new(50.0, 51.3, -10.7, 1.45),
                GeoBox::new(49.8, 50.0, -6.5, -5.0),
            ],
        ),
        Region::new(
            EasternEurope,
            2.0,
            &[
                GeoBox::new(59.7, 64.0, 21.0, 31.6),
                GeoBox::new(64.0, 70.1, 23.5, 31.6),
                GeoBox::new(43.6, 48.3, 20.2, 30.2),
                GeoBox::new(41.2, 44.3, 22.3, 28.7),
                GeoBox::new(34.8, 41.8, 19.3, 29.7),
            ],
        ),
        Region::new(
            WesternEurope,
            1.0,
            &[
                GeoBox::new(35.9, 55.1, -9.4, 15.2),
                GeoBox::new(49.0, 54.0, 15.2, 23.65),
                GeoBox::new(54.0, 54.9, 14.0, 19.6),
                GeoBox::new(36.6, 47.1, 15.2, 18.6),
                GeoBox::new(46.4, 49.0, 15.2, 17.2),
                GeoBox::new(47.7, 49.6, 16.8, 22.6),
                GeoBox::new(54.9, 60.5, 4.5, 19.5),
                GeoBox::new(60.5, 71.2, 4.5, 24.2),
            ],
        ),
        Region::new(
            India,
            5.5,
            &[
                GeoBox::new(6.5, 23.9, 68.0, 89.0),
                GeoBox::new(23.9, 30.5, 73.9, 88.2),
            ],
        ),
        Region::new(
            Japan,
            9.0,
            &[
                GeoBox::new(30.0, 45.6, 129.5, 146.0),
                GeoBox::new(24.0, 30.0, 122.9, 131.5),
                GeoBox::new(33.0, 38.7, 124.5, 129.6),
            ],
        ),
        Region::new(
            China,
            8.0,
            &[
                GeoBox::new(22.9, 53.6, 97.5, 134.8),
                GeoBox::new(21.5, 22.9, 107.9, 117.0),
                GeoBox::new(28.3, 36.5, 79.5, 97.5),
                GeoBox::new(36.5, 42.5, 79.0, 97.5),
                GeoBox::new(42.5, 45.0, 80.5, 95.0),
                GeoBox::new(18.0, 21.5, 108.0, 117.0),
                GeoBox::new(21.8, 25.4, 119.9, 122.1),
            ],
        ),
        Region::new(Arizona, -7.0, &[GeoBox::new(31.3, 37.0, -114.8, -109.05)]),
        Region::new(
            Indiana,
            -5.0,
            &[
                GeoBox::new(38.8, 41.76, -87.5, -84.8),
                GeoBox::new(37.8, 38.8, -87.5, -86.0),
            ],
        ),
        Region::new(UsEastern, -5.0, &[GeoBox::new(24.5, 47.5, -87.6, -66.9)]),
        Region::new(UsCentral, -6.0, &[GeoBox::new(25.8, 49.4, -104.1, -87.6)]),
        Region::new(UsMountain, -7.0, &[GeoBox::new(31.3, 49.0, -114.8, -104.1)]),
        Region::new(UsPacific, -8.0, &[GeoBox::new(32.5, 49.0, -124.8, -114.8)]),
        Region::new(Queensland, 10.0, &[GeoBox::new(-28.2, -10.0, 138.0, 153.7)]),
        Region::new(
            AustraliaSouthEast,
            10.0,
            &[GeoBox::new(-39.2, -28.2, 140.9, 153.7)],
        ),
    ]
}

/// Territory inside the region boxes that keeps a different clock.
fn builtin_exclusions() -> Vec<GeoBox> {
    vec![
        // Maghreb coast under the Iberian and Italian boxes.
        GeoBox::new(35.9, 37.4, -2.2, 11.2),
        // Albania.
        GeoBox::new(39.9, 41.9, 19.25, 20.5),
        // Turkey: Thrace and the Aegean coast.
        GeoBox::new(40.0, 42.1, 26.3, 29.7),
        GeoBox::new(34.8, 40.0, 26.6, 29.7),
        // North Korea.
        GeoBox::new(37.7, 42.0, 124.2, 126.7),
        GeoBox::new(38.3, 42.0, 126.7, 130.7),
        GeoBox::new(42.0, 42.5, 128.2, 130.7),
        // Russia along the northern Chinese border.
        GeoBox::new(50.3, 53.6, 97.5, 116.5),
        GeoBox::new(49.0, 53.6, 127.0, 134.8),
    ]
}

fn builtin_rules() -> Vec<DstRule> {
    use RegionId::*;
    let mut rules = vec![
        // Hungary
        DstRule::new(Hungary, Era::single(1954), window(fixed(5, 23), 0, fixed(10, 3), 0)),
        DstRule::new(Hungary, Era::single(1955), window(fixed(5, 22), 2, fixed(10, 2), 3)),
        DstRule::new(
            Hungary,
            Era::years(1956, 1957),
            window(sun_from(6, 1), 2, last_sun(9), 3),
        ),
        DstRule::new(Hungary, Era::single(1980), window(fixed(4, 6), 0, fixed(9, 28), 1)),
        DstRule::new(
            Hungary,
            Era::years(1981, 1983),
            window(last_sun(3), 0, last_sun(9), 1),
        ),
        DstRule::new(
            Hungary,
            Era::years(1984, 1995),
            window(last_sun(3), 2, last_sun(9), 3),
        ),
        DstRule::new(Hungary, Era::since(1996), window(last_sun(3), 2, last_sun(10), 3)),
        // Central European Time outside Hungary
        DstRule::new(
            WesternEurope,
            Era::single(1980),
            window(fixed(4, 6), 2, fixed(9, 28), 3),
        ),
        DstRule::new(
            WesternEurope,
            Era::years(1981, 1995),
            window(last_sun(3), 2, last_sun(9), 3),
        ),
        DstRule::new(
            WesternEurope,
            Era::since(1996),
            window(last_sun(3), 2, last_sun(10), 3),
        ),
        DstRule::new(
            FormerYugoslavia,
            Era::years(1983, 1995),
            window(last_sun(3), 2, last_sun(9), 3),
        ),
        DstRule::new(
            FormerYugoslavia,
            Era::since(1996),
            window(last_sun(3), 2, last_sun(10), 3),
        ),
        // Western European Time
        DstRule::new(
            BritishIsles,
            Era::single(1968),
            DstWindow::new(Transition::at(fixed(2, 18), 2), YEAR_END),
        ),
        DstRule::new(
            BritishIsles,
            Era::years(1969, 1970),
            DstWindow::new(Transition::at(fixed(1, 1), 0), YEAR_END),
        ),
        DstRule::new(
            BritishIsles,
            Era::single(1971),
            window(fixed(1, 1), 0, fixed(10, 31), 3),
        ),
        DstRule::new(
            BritishIsles,
            Era::years(1972, 1980),
            window(sun_from(3, 16), 2, sun_from(10, 23), 3),
        ),
        DstRule::new(
            BritishIsles,
            Era::years(1981, 1994),
            window(last_sun(3), 1, sun_from(10, 23), 2),
        ),
        DstRule::new(
            BritishIsles,
            Era::single(1995),
            window(last_sun(3), 1, fixed(10, 22), 2),
        ),
        DstRule::new(
            BritishIsles,
            Era::since(1996),
            window(last_sun(3), 1, last_sun(10), 2),
        ),
        DstRule::new(
            Portugal,
            Era::years(1983, 1995),
            window(last_sun(3), 1, last_sun(9), 2),
        ),
        DstRule::new(Portugal, Era::since(1996), window(last_sun(3), 1, last_sun(10), 2)),
        // Eastern European Time
        DstRule::new(
            EasternEurope,
            Era::years(1981, 1995),
            window(last_sun(3), 3, last_sun(9), 4),
        ),
        DstRule::new(
            EasternEurope,
            Era::since(1996),
            window(last_sun(3), 3, last_sun(10), 4),
        ),
        // China
        DstRule::new(China, Era::single(1986), window(fixed(5, 4), 2, fixed(9, 14), 2)),
        DstRule::new(
            China,
            Era::years(1987, 1991),
            window(sun_from(4, 11), 2, sun_from(9, 11), 2),
        ),
    ];

    let us_eras = [
        (Era::years(1967, 1973), window(last_sun(4), 2, last_sun(10), 2)),
        (Era::single(1974), window(fixed(1, 6), 2, last_sun(10), 2)),
        (Era::single(1975), window(fixed(2, 23), 2, last_sun(10), 2)),
        (Era::years(1976, 1986), window(last_sun(4), 2, last_sun(10), 2)),
        (Era::years(1987, 2006), window(sun_from(4, 1), 2, last_sun(10), 2)),
        (Era::since(2007), window(sun_from(3, 8), 2, sun_from(11, 1), 2)),
    ];
    for region in [UsEastern, UsCentral, UsMountain, UsPacific] {
        rules.extend(
            us_eras
                .iter()
                .map(|&(era, window)| DstRule::new(region, era, window)),
        );
    }
    // Indiana stayed on standard time from 1971 through 2005.
    rules.extend([
        DstRule::new(
            Indiana,
            Era::years(1967, 1970),
            window(last_sun(4), 2, last_sun(10), 2),
        ),
        DstRule::new(
            Indiana,
            Era::single(2006),
            window(sun_from(4, 1), 2, last_sun(10), 2),
        ),
        DstRule::new(Indiana, Era::since(2007), window(sun_from(3, 8), 2, sun_from(11, 1), 2)),
    ]);

    // Southern hemisphere: windows start in spring and wrap past January 1.
    // A Jan 1 00:00 end means nothing carried over from the previous year.
    let south_east = [
        (Era::single(1971), last_sun(10), fixed(1, 1), 0),
        (Era::single(1972), last_sun(10), fixed(2, 27), 3),
        (Era::years(1973, 1981), last_sun(10), sun_from(3, 1), 3),
        (Era::years(1982, 1983), last_sun(10), sun_from(4, 1), 3),
        (Era::years(1984, 1985), last_sun(10), sun_from(3, 1), 3),
        (Era::single(1986), fixed(10, 19), sun_from(3, 15), 3),
        (Era::years(1987, 1989), last_sun(10), sun_from(3, 15), 3),
        (Era::years(1990, 1995), last_sun(10), sun_from(3, 1), 3),
        (Era::years(1996, 1999), last_sun(10), last_sun(3), 3),
        (Era::single(2000), last_sun(8), last_sun(3), 3),
        (Era::years(2001, 2005), last_sun(10), last_sun(3), 3),
        (Era::single(2006), last_sun(10), sun_from(4, 1), 3),
        (Era::single(2007), last_sun(10), last_sun(3), 3),
        (Era::since(2008), sun_from(10, 1), sun_from(4, 1), 3),
    ];
    rules.extend(south_east.iter().map(|&(era, start, end, end_hour)| {
        DstRule::new(AustraliaSouthEast, era, window(start, 2, end, end_hour))
    }));

    rules.extend([
        DstRule::new(Queensland, Era::single(1989), window(last_sun(10), 2, fixed(1, 1), 0)),
        DstRule::new(
            Queensland,
            Era::years(1990, 1991),
            window(last_sun(10), 2, sun_from(3, 1), 3),
        ),
        DstRule::new(
            Queensland,
            Era::single(1992),
            DstWindow::new(YEAR_END, Transition::at(sun_from(3, 1), 3)),
        ),
    ]);

    rules
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geo(lat: f64, lon: f64) -> GeoCoordinate {
        GeoCoordinate::new(lat, lon).unwrap()
    }

    fn date(d: u32, m: u32, y: i32) -> BirthDate {
        BirthDate::new(d, m, y).unwrap()
    }

    fn at(h: u32, m: u32) -> BirthTime {
        BirthTime::new(h, m).unwrap()
    }

    const BUDAPEST: (f64, f64) = (47.4979, 19.0402);

    fn budapest(d: u32, m: u32, y: i32, t: BirthTime) -> UtcOffset {
        TimezoneTable::builtin().resolve(&geo(BUDAPEST.0, BUDAPEST.1), &date(d, m, y), t)
    }

    #[test]
    fn naive_rounding() {
        assert_eq!(naive_offset_hours(19.04), 1.0);
        assert_eq!(naive_offset_hours(-73.9), -5.0);
        assert_eq!(naive_offset_hours(7.5), 1.0);
        assert_eq!(naive_offset_hours(-7.5), -1.0);
        assert_eq!(naive_offset_hours(0.0), 0.0);
    }

    #[test]
    fn hungary_1971_has_no_dst() {
        let o = budapest(11, 6, 1971, at(10, 15));
        assert_eq!(o.hours, 1.0);
        assert!(!o.dst_active);
        assert_eq!(o.accuracy, OffsetAccuracy::Regional(RegionId::Hungary));
    }

    #[test]
    fn hungary_summer_eras() {
        assert_eq!(budapest(15, 7, 1985, at(12, 0)).hours, 2.0);
        assert_eq!(budapest(15, 7, 1954, at(12, 0)).hours, 2.0);
        // Before 1996 summer time ended in September.
        assert_eq!(budapest(15, 10, 1990, at(12, 0)).hours, 1.0);
        assert_eq!(budapest(15, 10, 1997, at(12, 0)).hours, 2.0);
        assert_eq!(budapest(15, 1, 2020, at(12, 0)).hours, 1.0);
    }

    #[test]
    fn hungary_transition_hours() {
        // 2024: Mar 31 02:00 -> Oct 27 03:00 local wall time.
        assert!(!budapest(31, 3, 2024, at(1, 59)).dst_active);
        assert!(budapest(31, 3, 2024, at(2, 0)).dst_active);
        assert!(budapest(27, 10, 2024, at(2, 59)).dst_active);
        assert!(!budapest(27, 10, 2024, at(3, 0)).dst_active);
    }

    #[test]
    fn us_2007_rules() {
        let nyc = geo(40.7128, -74.0060);
        let t = TimezoneTable::builtin();
        let before = t.resolve(&nyc, &date(10, 3, 2024), at(1, 59));
        let after = t.resolve(&nyc, &date(10, 3, 2024), at(3, 0));
        assert_eq!(before.hours, -5.0);
        assert_eq!(after.hours, -4.0);
        assert_eq!(t.resolve(&nyc, &date(3, 11, 2024), at(1, 0)).hours, -4.0);
        assert_eq!(t.resolve(&nyc, &date(3, 11, 2024), at(2, 0)).hours, -5.0);
        // Under the 1987-2006 rules March 15 was still standard time.
        assert_eq!(t.resolve(&nyc, &date(15, 3, 2000), at(12, 0)).hours, -5.0);
    }

    #[test]
    fn arizona_keeps_standard_time() {
        let phoenix = geo(33.4484, -112.0740);
        let o = TimezoneTable::builtin().resolve(&phoenix, &date(1, 7, 2015), at(12, 0));
        assert_eq!(o.hours, -7.0);
        assert_eq!(o.accuracy, OffsetAccuracy::Regional(RegionId::Arizona));
        let denver = geo(39.7392, -104.9903);
        assert_eq!(
            TimezoneTable::builtin()
                .resolve(&denver, &date(1, 7, 2015), at(12, 0))
                .hours,
            -6.0
        );
    }

    #[test]
    fn sydney_wraps_the_year() {
        let sydney = geo(-33.8688, 151.2093);
        let t = TimezoneTable::builtin();
        assert_eq!(t.resolve(&sydney, &date(15, 1, 2015), at(12, 0)).hours, 11.0);
        assert_eq!(t.resolve(&sydney, &date(15, 7, 2015), at(12, 0)).hours, 10.0);
        assert_eq!(t.resolve(&sydney, &date(15, 12, 2015), at(12, 0)).hours, 11.0);
        // First season started late October 1971; January 1971 had none.
        assert_eq!(t.resolve(&sydney, &date(15, 1, 1971), at(12, 0)).hours, 10.0);
        assert_eq!(t.resolve(&sydney, &date(15, 1, 1972), at(12, 0)).hours, 11.0);
    }

    #[test]
    fn india_half_hour_offset() {
        let delhi = geo(28.6139, 77.2090);
        let o = TimezoneTable::builtin().resolve(&delhi, &date(1, 1, 1990), at(6, 0));
        assert_eq!(o.hours, 5.5);
        assert_eq!(o.minutes(), 330);
    }

    #[test]
    fn british_standard_time_experiment() {
        let london = geo(51.5074, -0.1278);
        let t = TimezoneTable::builtin();
        assert_eq!(t.resolve(&london, &date(15, 1, 1970), at(12, 0)).hours, 1.0);
        assert_eq!(t.resolve(&london, &date(15, 1, 1967), at(12, 0)).hours, 0.0);
        assert_eq!(t.resolve(&london, &date(15, 11, 1971), at(12, 0)).hours, 0.0);
    }

    #[test]
    fn unknown_region_is_approximate() {
        let pacific = geo(-20.0, -140.0);
        let o = TimezoneTable::builtin().resolve(&pacific, &date(1, 1, 2000), at(12, 0));
        assert!(o.is_approximate());
        assert!(!o.dst_active);
        assert_eq!(o.hours, naive_offset_hours(-140.0));
    }

    #[test]
    fn exclusion_overrides_region() {
        let spot = geo(10.0, 10.0);
        let d = date(1, 7, 2000);
        let table = TimezoneTable::empty().with_region(Region::new(
            RegionId::WesternEurope,
            1.0,
            &[GeoBox::new(0.0, 20.0, 0.0, 20.0)],
        ));
        assert_eq!(
            table.resolve(&spot, &d, at(12, 0)).accuracy,
            OffsetAccuracy::Regional(RegionId::WesternEurope)
        );

        let carved = table.with_exclusion(GeoBox::new(5.0, 15.0, 5.0, 15.0));
        assert!(carved.region_at(&spot).is_none());
        assert!(carved.resolve(&spot, &d, at(12, 0)).is_approximate());
        assert!(carved.region_at(&geo(18.0, 18.0)).is_some());
    }

    #[test]
    fn builtin_exclusions_fall_back() {
        let t = TimezoneTable::builtin();
        assert!(!t.exclusions().is_empty());
        // Algiers sits under the Iberian box; Tirana under the Yugoslav one.
        for (lat, lon) in [(36.7538, 3.0588), (41.3275, 19.8187), (39.0392, 125.7625)] {
            assert!(t.region_at(&geo(lat, lon)).is_none(), "({lat}, {lon})");
        }
    }

    #[test]
    fn indiana_skipped_dst_until_2006() {
        let indianapolis = geo(39.7684, -86.1581);
        let t = TimezoneTable::builtin();
        let o = t.resolve(&indianapolis, &date(1, 7, 1990), at(12, 0));
        assert_eq!(o.hours, -5.0);
        assert!(!o.dst_active);
        assert_eq!(o.accuracy, OffsetAccuracy::Regional(RegionId::Indiana));
        assert_eq!(t.resolve(&indianapolis, &date(1, 7, 2006), at(12, 0)).hours, -4.0);
        assert_eq!(t.resolve(&indianapolis, &date(1, 7, 2010), at(12, 0)).hours, -4.0);
        // Louisville, across the Ohio river, kept Eastern DST.
        let louisville = geo(38.2527, -85.7585);
        assert_eq!(t.resolve(&louisville, &date(1, 7, 1990), at(12, 0)).hours, -4.0);
    }

    #[test]
    fn empty_table_and_custom_rules() {
        let spot = geo(10.0, 10.0);
        let d = date(1, 7, 2000);
        assert!(TimezoneTable::empty().resolve(&spot, &d, at(12, 0)).is_approximate());

        let table = TimezoneTable::empty()
            .with_region(Region::new(
                RegionId::WesternEurope,
                1.0,
                &[GeoBox::new(0.0, 20.0, 0.0, 20.0)],
            ))
            .with_rule(DstRule::new(
                RegionId::WesternEurope,
                Era::since(2000),
                window(fixed(6, 1), 0, fixed(8, 1), 0),
            ));
        let o = table.resolve(&spot, &d, at(12, 0));
        assert_eq!(o.hours, 2.0);
        assert!(o.dst_active);
    }

    #[test]
    fn fixed_offset_validation() {
        assert!(FixedOffset::new(5.75).is_ok());
        assert!(FixedOffset::new(-14.0).is_ok());
        assert_eq!(
            FixedOffset::new(14.5),
            Err(TimeError::InvalidUtcOffset(14.5))
        );
        assert!(FixedOffset::new(f64::NAN).is_err());
        let o = FixedOffset::new(3.0)
            .unwrap()
            .utc_offset(&geo(0.0, 0.0), &date(1, 1, 2000), BirthTime::NOON)
            .unwrap();
        assert_eq!(o.accuracy, OffsetAccuracy::Supplied);
        assert_eq!(o.hours, 3.0);
    }
}

//! Historical offset checks against known civil-time history.

use rising_time::{
    BirthDate, BirthTime, GeoCoordinate, OffsetAccuracy, RegionId, TimezoneTable, UtcOffset,
    normalize,
};

fn offset_at(lat: f64, lon: f64, d: u32, m: u32, y: i32, h: u32, min: u32) -> (f64, bool) {
    let o = TimezoneTable::builtin().resolve(
        &GeoCoordinate::new(lat, lon).unwrap(),
        &BirthDate::new(d, m, y).unwrap(),
        BirthTime::new(h, min).unwrap(),
    );
    (o.hours, o.dst_active)
}

fn resolve(lat: f64, lon: f64, d: u32, m: u32, y: i32) -> UtcOffset {
    TimezoneTable::builtin().resolve(
        &GeoCoordinate::new(lat, lon).unwrap(),
        &BirthDate::new(d, m, y).unwrap(),
        BirthTime::NOON,
    )
}

// ===== Central Europe =====

#[test]
fn budapest_1971_scenario() {
    let loc = GeoCoordinate::new(47.4979, 19.0402).unwrap();
    let date = BirthDate::new(11, 6, 1971).unwrap();
    let time = BirthTime::new(10, 15).unwrap();
    let o = TimezoneTable::builtin().resolve(&loc, &date, time);
    assert_eq!(o.hours, 1.0);
    assert!(!o.dst_active);
    assert_eq!(o.accuracy, OffsetAccuracy::Regional(RegionId::Hungary));

    let u = normalize(&date, time, &o);
    assert_eq!((u.year, u.month, u.day, u.hour, u.minute), (1971, 6, 11, 9, 15));
}

#[test]
fn hungary_1980_single_season() {
    assert_eq!(offset_at(47.5, 19.0, 5, 4, 1980, 12, 0), (1.0, false));
    assert_eq!(offset_at(47.5, 19.0, 6, 4, 1980, 12, 0), (2.0, true));
    assert_eq!(offset_at(47.5, 19.0, 28, 9, 1980, 0, 30), (2.0, true));
    assert_eq!(offset_at(47.5, 19.0, 29, 9, 1980, 12, 0), (1.0, false));
}

#[test]
fn hungary_gap_years_have_no_dst() {
    for year in [1958, 1965, 1975, 1979] {
        assert_eq!(offset_at(47.5, 19.0, 1, 7, year, 12, 0), (1.0, false), "{year}");
    }
}

#[test]
fn zagreb_follows_yugoslav_history() {
    // Yugoslavia adopted summer time in 1983, three years after Hungary.
    assert_eq!(offset_at(45.815, 15.9819, 1, 7, 1982, 12, 0), (1.0, false));
    assert_eq!(offset_at(45.815, 15.9819, 1, 7, 1983, 12, 0), (2.0, true));
}

#[test]
fn paris_and_warsaw_share_cet() {
    assert_eq!(offset_at(48.8566, 2.3522, 1, 7, 1990, 12, 0), (2.0, true));
    assert_eq!(offset_at(52.2297, 21.0122, 1, 1, 1990, 12, 0), (1.0, false));
}

#[test]
fn vienna_and_bratislava_are_not_hungarian() {
    for (lat, lon) in [(48.2082, 16.3738), (48.1486, 17.1077)] {
        let o = resolve(lat, lon, 1, 7, 1982);
        assert_eq!(o.accuracy, OffsetAccuracy::Regional(RegionId::WesternEurope));
        assert_eq!(o.hours, 2.0);
    }
    // Eastern Hungary stays Hungarian.
    let debrecen = resolve(47.5316, 21.6273, 1, 7, 1982);
    assert_eq!(debrecen.accuracy, OffsetAccuracy::Regional(RegionId::Hungary));
}

#[test]
fn western_romania_keeps_eastern_european_time() {
    // Timisoara, Arad, Oradea.
    for (lat, lon) in [(45.7489, 21.2087), (46.1866, 21.3123), (47.0465, 21.9189)] {
        let o = resolve(lat, lon, 15, 1, 2000);
        assert_eq!(o.hours, 2.0, "({lat}, {lon})");
        assert_eq!(o.accuracy, OffsetAccuracy::Regional(RegionId::EasternEurope));
    }
}

#[test]
fn reference_birthplace_stays_hungarian() {
    let o = resolve(45.85, 18.30, 11, 6, 1971);
    assert_eq!(o.accuracy, OffsetAccuracy::Regional(RegionId::Hungary));
    assert_eq!(o.hours, 1.0);
}

// ===== Western and Eastern Europe =====

#[test]
fn lisbon_and_london() {
    assert_eq!(offset_at(38.7223, -9.1393, 1, 7, 2010, 12, 0), (1.0, true));
    assert_eq!(offset_at(38.7223, -9.1393, 1, 1, 2010, 12, 0), (0.0, false));
    assert_eq!(offset_at(51.5074, -0.1278, 1, 7, 1985, 12, 0), (1.0, true));
}

#[test]
fn helsinki_and_athens() {
    assert_eq!(offset_at(60.1699, 24.9384, 1, 7, 2000, 12, 0), (3.0, true));
    assert_eq!(offset_at(37.9838, 23.7275, 1, 1, 2000, 12, 0), (2.0, false));
}

#[test]
fn riga_is_outside_the_central_european_band() {
    let o = resolve(56.9496, 24.1052, 15, 1, 2010);
    assert!(o.is_approximate());
    assert_eq!(o.hours, 2.0);
    // Stockholm, just across the Baltic, is still Central European.
    let stockholm = resolve(59.3293, 18.0686, 15, 1, 2010);
    assert_eq!(stockholm.accuracy, OffsetAccuracy::Regional(RegionId::WesternEurope));
}

#[test]
fn north_africa_and_albania_are_not_european_regions() {
    let algiers = resolve(36.7538, 3.0588, 15, 7, 2010);
    assert!(algiers.is_approximate());
    assert!(!algiers.dst_active);
    let tunis = resolve(36.8065, 10.1815, 15, 7, 2010);
    assert!(tunis.is_approximate());
    let tirana = resolve(41.3275, 19.8187, 15, 1, 2010);
    assert!(tirana.is_approximate());
    assert_eq!(tirana.hours, 1.0);
    // Southern Spain and Sicily keep their region.
    for (lat, lon) in [(36.7213, -4.4214), (38.1157, 13.3615)] {
        let o = resolve(lat, lon, 15, 7, 2010);
        assert_eq!(o.accuracy, OffsetAccuracy::Regional(RegionId::WesternEurope));
        assert_eq!(o.hours, 2.0);
    }
}

#[test]
fn turkey_is_not_eastern_european() {
    for (lat, lon) in [(41.0082, 28.9784), (38.4237, 27.1428), (41.6771, 26.5557)] {
        assert!(resolve(lat, lon, 15, 7, 2018).is_approximate(), "({lat}, {lon})");
    }
    assert_eq!(
        resolve(42.6977, 23.3219, 15, 7, 2018).accuracy,
        OffsetAccuracy::Regional(RegionId::EasternEurope)
    );
}

// ===== Asia =====

#[test]
fn china_summer_time_1986_to_1991() {
    let beijing = (39.9042, 116.4074);
    assert_eq!(offset_at(beijing.0, beijing.1, 1, 7, 1985, 12, 0), (8.0, false));
    assert_eq!(offset_at(beijing.0, beijing.1, 1, 7, 1988, 12, 0), (9.0, true));
    assert_eq!(offset_at(beijing.0, beijing.1, 1, 7, 1992, 12, 0), (8.0, false));
}

#[test]
fn china_boxes_stop_at_the_border() {
    // Lahore and Almaty sit west of Xinjiang.
    let lahore = resolve(31.5497, 74.3436, 15, 1, 2010);
    assert!(lahore.is_approximate());
    assert_eq!(lahore.hours, 5.0);
    assert!(resolve(43.2220, 76.8512, 15, 1, 2010).is_approximate());
    assert!(resolve(42.8746, 74.5698, 15, 1, 2010).is_approximate());
    // Pyongyang is not on Beijing time.
    assert!(resolve(39.0392, 125.7625, 15, 1, 2010).is_approximate());
    // Urumqi, Lhasa and Harbin are.
    for (lat, lon) in [(43.8256, 87.6168), (29.6520, 91.1721), (45.8038, 126.5349)] {
        let o = resolve(lat, lon, 15, 1, 2010);
        assert_eq!(o.accuracy, OffsetAccuracy::Regional(RegionId::China), "({lat}, {lon})");
        assert_eq!(o.hours, 8.0);
    }
}

#[test]
fn tokyo_and_mumbai_never_shift() {
    assert_eq!(offset_at(35.6762, 139.6503, 1, 7, 1990, 12, 0), (9.0, false));
    assert_eq!(offset_at(19.076, 72.8777, 1, 7, 1990, 12, 0), (5.5, false));
}

// ===== North America =====

#[test]
fn us_energy_crisis_years() {
    let chicago = (41.8781, -87.6298);
    assert_eq!(offset_at(chicago.0, chicago.1, 15, 1, 1974, 12, 0), (-5.0, true));
    assert_eq!(offset_at(chicago.0, chicago.1, 15, 1, 1975, 12, 0), (-6.0, false));
    assert_eq!(offset_at(chicago.0, chicago.1, 1, 3, 1975, 12, 0), (-5.0, true));
}

#[test]
fn indianapolis_standard_time_years() {
    let indy = (39.7684, -86.1581);
    assert_eq!(offset_at(indy.0, indy.1, 1, 7, 1990, 12, 0), (-5.0, false));
    assert_eq!(offset_at(indy.0, indy.1, 1, 7, 2005, 12, 0), (-5.0, false));
    assert_eq!(offset_at(indy.0, indy.1, 1, 7, 2007, 12, 0), (-4.0, true));
    // New York observed DST throughout.
    assert_eq!(offset_at(40.7128, -74.0060, 1, 7, 1990, 12, 0), (-4.0, true));
}

#[test]
fn los_angeles_summer() {
    assert_eq!(offset_at(34.0522, -118.2437, 4, 7, 1976, 12, 0), (-7.0, true));
    assert_eq!(offset_at(34.0522, -118.2437, 25, 12, 1976, 12, 0), (-8.0, false));
}

// ===== Southern hemisphere =====

#[test]
fn brisbane_has_no_modern_dst() {
    assert_eq!(offset_at(-27.4698, 153.0251, 15, 1, 2015, 12, 0), (10.0, false));
    assert_eq!(offset_at(-27.4698, 153.0251, 15, 1, 1990, 12, 0), (11.0, true));
}

#[test]
fn melbourne_sydney_olympics_start() {
    // 2000 season began on the last Sunday of August.
    assert_eq!(offset_at(-33.8688, 151.2093, 1, 9, 2000, 12, 0), (11.0, true));
    assert_eq!(offset_at(-37.8136, 144.9631, 1, 9, 2001, 12, 0), (10.0, false));
}

// ===== Fallback =====

#[test]
fn open_ocean_uses_naive_offset() {
    let o = TimezoneTable::builtin().resolve(
        &GeoCoordinate::new(0.0, -30.0).unwrap(),
        &BirthDate::new(1, 1, 2000).unwrap(),
        BirthTime::NOON,
    );
    assert_eq!(o.hours, -2.0);
    assert!(o.is_approximate());
}

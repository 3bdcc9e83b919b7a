//! End-to-end tests through the convenience layer.

use proptest::prelude::*;
use rising_rs::*;

fn settings_from(text: &str) -> Settings {
    Settings::from_toml_str(text).unwrap()
}

#[test]
fn reference_scenario_by_coordinates() {
    let r = ascendant(&Settings::default(), "11/06/1971", "10:15", 45.85, 18.30).unwrap();
    assert_eq!(r.position.to_string(), "Virgo 4°33′");
    assert_eq!(r.confidence, Confidence::Exact);
    assert_eq!(r.offset().hours, 1.0);
    assert!(matches!(r.offset().accuracy, OffsetAccuracy::Regional(_)));
}

#[test]
fn reference_scenario_by_place() {
    let g = StaticGeocoder::new().with_place("Pécs", GeoCoordinate::new(45.85, 18.30).unwrap());
    let r = ascendant_for_place(&g, &Settings::default(), "11/06/1971", "10:15", "pécs").unwrap();
    assert_eq!(r.position.sign, Sign::Virgo);
}

#[test]
fn fixed_offset_setting_overrides_table() {
    let s = settings_from("[timezone]\nfixed_offset_hours = 2\n");
    let r = ascendant(&s, "11/06/1971", "10:15", 45.85, 18.30).unwrap();
    assert_eq!(r.offset().accuracy, OffsetAccuracy::Supplied);
    assert_eq!(r.position.sign, Sign::Leo);
}

#[test]
fn custom_sentinel_generalizes() {
    let s = settings_from("[time]\nunknown_sentinels = [\"no idea\"]\n");
    let r = ascendant(&s, "11/06/1971", "No Idea", 45.85, 18.30).unwrap();
    assert_eq!(r.confidence, Confidence::Generalized);
}

#[test]
fn chart_uses_configured_house_system() {
    let s = settings_from("[chart]\nhouse_system = \"equal\"\n");
    let c = chart(&s, "11/06/1971", "10:15", 45.85, 18.30).unwrap();
    assert_eq!(c.houses.system, HouseSystem::Equal);
    let width = (c.houses.cusp(2) - c.houses.cusp(1)).rem_euclid(360.0);
    assert!((width - 30.0).abs() < 1e-9);
}

#[test]
fn chart_for_builtin_place() {
    let g = StaticGeocoder::builtin();
    let c = chart_for_place(&g, &Settings::default(), "01/01/2000", "00:00", "Budapest").unwrap();
    assert_eq!(c.ascendant.position.sign, Sign::Libra);
    assert_eq!(c.houses.system, HouseSystem::Placidus);
}

#[test]
fn errors_are_layered() {
    let s = Settings::default();
    assert!(matches!(
        ascendant(&s, "31/02/1971", "10:15", 45.85, 18.30),
        Err(RisingError::Chart(ChartError::Time(TimeError::InvalidDateFormat(_))))
    ));
    assert!(matches!(
        ascendant(&s, "11/06/1971", "10:15", 95.0, 18.30),
        Err(RisingError::Chart(ChartError::InvalidLocation(_)))
    ));
    assert!(matches!(
        ascendant(&s, "11/06/1971", "10:15", 89.95, 18.30),
        Err(RisingError::Chart(ChartError::PolarIndeterminate { .. }))
    ));
    assert!(matches!(
        ascendant_for_place(&StaticGeocoder::new(), &s, "11/06/1971", "10:15", "Nowhere"),
        Err(RisingError::LocationNotFound(_))
    ));
}

#[test]
fn hand_built_invalid_settings_are_rejected() {
    let mut s = Settings::default();
    s.timezone.fixed_offset_hours = Some(30.0);
    assert!(matches!(
        ascendant(&s, "11/06/1971", "10:15", 45.85, 18.30),
        Err(RisingError::Config(ConfigError::Invalid(_)))
    ));
}

proptest! {
    #[test]
    fn any_valid_input_gives_a_chart_position(
        day in 1u32..=28,
        month in 1u32..=12,
        year in 1900i32..2100,
        hour in 0u32..24,
        minute in 0u32..60,
        lat in -80.0f64..80.0,
        lon in -180.0f64..180.0,
    ) {
        let date = format!("{day:02}/{month:02}/{year}");
        let time = format!("{hour}:{minute:02}");
        let r = ascendant(&Settings::default(), &date, &time, lat, lon).unwrap();
        prop_assert!((0.0..360.0).contains(&r.longitude_deg));
        prop_assert_eq!(r.confidence, Confidence::Exact);
        prop_assert!(r.offset().hours.abs() <= 14.0);
    }

    #[test]
    fn unparseable_time_never_errors(text in "[a-z ]{0,20}") {
        let r = ascendant(&Settings::default(), "11/06/1971", &text, 45.85, 18.30).unwrap();
        prop_assert_eq!(r.confidence, Confidence::Generalized);
    }
}

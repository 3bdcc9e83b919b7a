//! Text-in entry points that parse the birth date and compute with the given settings.
//!
//! Place-name variants resolve the location through a [`Geocoder`] first.

use rising_chart::{
    AscendantReport, GeoCoordinate, NatalChart, compute_ascendant_with, compute_chart,
};
use rising_config::Settings;
use rising_time::BirthDate;

use crate::error::RisingError;
use crate::geocode::Geocoder;

/// Parse the date and coordinate and check the settings.
fn prepare(
    settings: &Settings,
    date_text: &str,
    latitude_deg: f64,
    longitude_deg: f64,
) -> Result<(BirthDate, GeoCoordinate), RisingError> {
    let date: BirthDate = date_text.parse()?;
    let location = GeoCoordinate::new(latitude_deg, longitude_deg)?;
    settings.validate()?;
    Ok((date, location))
}

/// Ascendant for text date and time at a coordinate.
///
/// `time_text` goes through the settings' unknown-time sentinels; an
/// unrecognised time yields a generalized (noon) chart, not an error.
pub fn ascendant(
    settings: &Settings,
    date_text: &str,
    time_text: &str,
    latitude_deg: f64,
    longitude_deg: f64,
) -> Result<AscendantReport, RisingError> {
    let (date, location) = prepare(settings, date_text, latitude_deg, longitude_deg)?;
    let offsets = settings.offset_source()?;
    Ok(compute_ascendant_with(
        &date,
        settings.parse_time(time_text),
        &location,
        &settings.chart,
        &offsets,
    )?)
}

/// Ascendant plus house cusps in the configured house system.
pub fn chart(
    settings: &Settings,
    date_text: &str,
    time_text: &str,
    latitude_deg: f64,
    longitude_deg: f64,
) -> Result<NatalChart, RisingError> {
    let (date, location) = prepare(settings, date_text, latitude_deg, longitude_deg)?;
    let offsets = settings.offset_source()?;
    Ok(compute_chart(
        &date,
        settings.parse_time(time_text),
        &location,
        &settings.chart,
        &offsets,
    )?)
}

/// Ascendant for a birth place given by name.
pub fn ascendant_for_place(
    geocoder: &dyn Geocoder,
    settings: &Settings,
    date_text: &str,
    time_text: &str,
    place: &str,
) -> Result<AscendantReport, RisingError> {
    let location = geocoder.resolve_coordinates(place)?;
    ascendant(
        settings,
        date_text,
        time_text,
        location.latitude_deg,
        location.longitude_deg,
    )
}

/// Full chart for a birth place given by name.
pub fn chart_for_place(
    geocoder: &dyn Geocoder,
    settings: &Settings,
    date_text: &str,
    time_text: &str,
    place: &str,
) -> Result<NatalChart, RisingError> {
    let location = geocoder.resolve_coordinates(place)?;
    chart(
        settings,
        date_text,
        time_text,
        location.latitude_deg,
        location.longitude_deg,
    )
}

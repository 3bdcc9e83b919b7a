//! TOML settings for the chart pipeline.
//!
//! ```toml
//! [chart]
//! apply_delta_t = true
//! apply_nutation = true
//! house_system = "placidus"   # porphyry | equal | whole_sign
//!
//! [time]
//! unknown_sentinels = ["unknown", "nem tudom", "?"]
//!
//! [timezone]
//! fixed_offset_hours = 5.5    # omit to use the historical table
//! ```
//!
//! Every key is optional; missing keys take their defaults.

use std::path::Path;

use rising_chart::ChartOptions;
use rising_time::{
    BirthDate, BirthTime, DEFAULT_UNKNOWN_SENTINELS, FixedOffset, GeoCoordinate, ParsedTime,
    TimeError, TimezoneTable, UtcOffset, UtcOffsetProvider, parse_birth_time_with,
};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// `[time]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TimeSettings {
    /// Texts meaning "birth time not known", compared case-insensitively.
    pub unknown_sentinels: Vec<String>,
}

impl Default for TimeSettings {
    fn default() -> Self {
        Self {
            unknown_sentinels: DEFAULT_UNKNOWN_SENTINELS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

/// `[timezone]` section.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TimezoneSettings {
    /// Use this offset for every birth instead of the historical table.
    pub fixed_offset_hours: Option<f64>,
}

/// All settings of the calculator.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub chart: ChartOptions,
    pub time: TimeSettings,
    pub timezone: TimezoneSettings,
}

impl Settings {
    /// Read and validate a settings file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_toml_str(&text)?;
        log::debug!("loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Parse and validate settings from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let settings: Self = toml::from_str(text)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Serialize back to TOML.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Check values serde cannot: offset range and sentinel content.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(hours) = self.timezone.fixed_offset_hours {
            FixedOffset::new(hours).map_err(|e| {
                ConfigError::Invalid(format!("timezone.fixed_offset_hours: {e}"))
            })?;
        }
        if let Some(i) = self
            .time
            .unknown_sentinels
            .iter()
            .position(|s| s.trim().is_empty())
        {
            return Err(ConfigError::Invalid(format!(
                "time.unknown_sentinels[{i}] is blank"
            )));
        }
        Ok(())
    }

    /// Parse birth-time text against the configured sentinels.
    pub fn parse_time(&self, text: &str) -> ParsedTime {
        parse_birth_time_with(text, self.time.unknown_sentinels.as_slice())
    }

    /// The offset source these settings select.
    pub fn offset_source(&self) -> Result<OffsetSource, ConfigError> {
        match self.timezone.fixed_offset_hours {
            Some(hours) => FixedOffset::new(hours)
                .map(OffsetSource::Fixed)
                .map_err(|e| ConfigError::Invalid(format!("timezone.fixed_offset_hours: {e}"))),
            None => Ok(OffsetSource::Table(TimezoneTable::builtin())),
        }
    }
}

/// Where UTC offsets come from: the historical table or a fixed value.
#[derive(Debug, Clone, Copy)]
pub enum OffsetSource {
    Table(&'static TimezoneTable),
    Fixed(FixedOffset),
}

impl UtcOffsetProvider for OffsetSource {
    fn utc_offset(
        &self,
        location: &GeoCoordinate,
        date: &BirthDate,
        time: BirthTime,
    ) -> Result<UtcOffset, TimeError> {
        match self {
            Self::Table(table) => table.utc_offset(location, date, time),
            Self::Fixed(fixed) => fixed.utc_offset(location, date, time),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rising_chart::HouseSystem;
    use rising_time::{DefaultReason, OffsetAccuracy};

    #[test]
    fn empty_text_gives_defaults() {
        let s = Settings::from_toml_str("").unwrap();
        assert_eq!(s, Settings::default());
        assert!(s.chart.apply_delta_t);
        assert!(s.chart.apply_nutation);
        assert_eq!(s.chart.house_system, HouseSystem::Placidus);
        assert_eq!(s.timezone.fixed_offset_hours, None);
        assert_eq!(s.time.unknown_sentinels.len(), DEFAULT_UNKNOWN_SENTINELS.len());
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let s = Settings::from_toml_str(
            r#"
            [chart]
            house_system = "whole_sign"
            "#,
        )
        .unwrap();
        assert_eq!(s.chart.house_system, HouseSystem::WholeSign);
        assert!(s.chart.apply_nutation);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = Settings::from_toml_str("[chart]\nayanamsha = 1\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)), "{err}");
    }

    #[test]
    fn bad_house_system_is_a_parse_error() {
        let err = Settings::from_toml_str("[chart]\nhouse_system = \"koch\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn offset_out_of_range_is_invalid() {
        let err = Settings::from_toml_str("[timezone]\nfixed_offset_hours = 15.0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
        assert!(err.to_string().contains("fixed_offset_hours"));
    }

    #[test]
    fn blank_sentinel_is_invalid() {
        let err =
            Settings::from_toml_str("[time]\nunknown_sentinels = [\"n/a\", \"  \"]\n").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid settings: time.unknown_sentinels[1] is blank"
        );
    }

    #[test]
    fn sentinels_drive_time_parsing() {
        let s = Settings::from_toml_str("[time]\nunknown_sentinels = [\"n/a\"]\n").unwrap();
        assert_eq!(
            s.parse_time("N/A"),
            ParsedTime::Defaulted(DefaultReason::Unspecified)
        );
        assert_eq!(
            s.parse_time("unknown"),
            ParsedTime::Defaulted(DefaultReason::Unrecognized)
        );
        assert_eq!(
            s.parse_time("10:15"),
            ParsedTime::Parsed(BirthTime::new(10, 15).unwrap())
        );
    }

    #[test]
    fn offset_source_selection() {
        let date = BirthDate::new(11, 6, 1971).unwrap();
        let loc = GeoCoordinate::new(45.85, 18.30).unwrap();

        let table = Settings::default().offset_source().unwrap();
        let o = table.utc_offset(&loc, &date, BirthTime::NOON).unwrap();
        assert_eq!(o.hours, 1.0);
        assert!(matches!(o.accuracy, OffsetAccuracy::Regional(_)));

        let fixed = Settings::from_toml_str("[timezone]\nfixed_offset_hours = 2.0\n")
            .unwrap()
            .offset_source()
            .unwrap();
        let o = fixed.utc_offset(&loc, &date, BirthTime::NOON).unwrap();
        assert_eq!(o.hours, 2.0);
        assert_eq!(o.accuracy, OffsetAccuracy::Supplied);
    }

    #[test]
    fn toml_round_trip() {
        let mut s = Settings::default();
        s.chart.house_system = HouseSystem::Porphyry;
        s.chart.apply_delta_t = false;
        s.timezone.fixed_offset_hours = Some(-3.5);
        s.time.unknown_sentinels = vec!["n/a".into(), "???".into()];
        let text = s.to_toml_string().unwrap();
        assert_eq!(Settings::from_toml_str(&text).unwrap(), s);
    }
}

//! Convenience wrapper for the rising chart calculator.
//!
//! Takes birth data as text, applies [`Settings`], and returns the chart.
//!
//! # Quick start
//!
//! ```rust
//! use rising_rs::*;
//!
//! let settings = Settings::default();
//! let report = ascendant(&settings, "11/06/1971", "10:15", 45.85, 18.30).unwrap();
//! assert_eq!(report.position.sign, Sign::Virgo);
//! println!("Ascendant: {}", report.position);
//! ```

pub mod convenience;
pub mod error;
pub mod geocode;

pub use convenience::{ascendant, ascendant_for_place, chart, chart_for_place};
pub use error::RisingError;
pub use geocode::{Geocoder, StaticGeocoder};

// Re-export the types callers see in results.
pub use rising_chart::{
    AscendantReport, ChartError, ChartOptions, Confidence, GeoCoordinate, HouseCusps, HouseSystem,
    NatalChart, Sign, ZodiacPosition,
};
pub use rising_config::{ConfigError, Settings};
pub use rising_time::{OffsetAccuracy, TimeError, UtcInstant, UtcOffset};

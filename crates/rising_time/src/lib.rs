//! Birth-moment time handling.
//!
//! This crate provides:
//! - Validated birth dates and free-form birth time parsing
//! - Historical UTC offsets from a region and DST-era table
//! - Local → UTC normalization with exact calendar rollover
//! - Julian Date ↔ calendar conversions and ΔT (TT − UT)
//! - Greenwich and local mean sidereal time

pub mod calendar;
pub mod clock;
pub mod delta_t;
pub mod error;
pub mod geo;
pub mod instant;
pub mod julian;
pub mod sidereal;
pub mod tz;
pub mod tz_types;

pub use calendar::{BirthDate, days_in_month, is_leap_year};
pub use clock::{
    BirthTime, DEFAULT_UNKNOWN_SENTINELS, DefaultReason, ParsedTime, parse_birth_time,
    parse_birth_time_with,
};
pub use delta_t::{decimal_year, delta_t_for_month, delta_t_seconds, jde_from_jd};
pub use error::TimeError;
pub use geo::GeoCoordinate;
pub use instant::{UtcInstant, normalize};
pub use julian::{J2000_JD, calendar_to_jd, jd_to_calendar, julian_centuries, julian_day};
pub use sidereal::{deg_to_hours, gmst_deg, local_sidereal_time_deg, normalize_deg};
pub use tz::{
    FixedOffset, MAX_OFFSET_HOURS, TimezoneTable, UtcOffsetProvider, check_offset_hours,
    naive_offset_hours,
};
pub use tz_types::{OffsetAccuracy, RegionId, UtcOffset};

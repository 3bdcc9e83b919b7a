//! Local birth instant to UTC.
//!
//! The offset is rounded to whole minutes and subtracted from the local
//! minute count; whole days carried or borrowed walk the Gregorian calendar,
//! so month-end, year-end and February 28/29 boundaries come out exact in
//! both directions.

use std::fmt::{Display, Formatter};

use crate::calendar::{BirthDate, civil_from_days, days_from_civil};
use crate::clock::BirthTime;
use crate::tz_types::UtcOffset;

const MINUTES_PER_DAY: i64 = 1440;

/// A UTC calendar instant with minute precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UtcInstant {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
}

impl UtcInstant {
    /// Hour of day as a real number, e.g. 09:15 → 9.25.
    pub fn fractional_hour(&self) -> f64 {
        self.hour as f64 + self.minute as f64 / 60.0
    }

    /// Whole minutes since 1970-01-01 00:00 UTC.
    pub fn minutes_since_epoch(&self) -> i64 {
        days_from_civil(self.year, self.month, self.day) * MINUTES_PER_DAY
            + (self.hour * 60 + self.minute) as i64
    }

    fn from_minutes_since_epoch(total: i64) -> Self {
        let days = total.div_euclid(MINUTES_PER_DAY);
        let mins = total.rem_euclid(MINUTES_PER_DAY) as u32;
        let (year, month, day) = civil_from_days(days);
        Self {
            year,
            month,
            day,
            hour: mins / 60,
            minute: mins % 60,
        }
    }
}

impl Display for UtcInstant {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}Z",
            self.year, self.month, self.day, self.hour, self.minute
        )
    }
}

/// Convert a local wall-clock birth instant to UTC.
pub fn normalize(date: &BirthDate, time: BirthTime, offset: &UtcOffset) -> UtcInstant {
    let local = date.days_since_epoch() * MINUTES_PER_DAY + time.minutes_of_day() as i64;
    UtcInstant::from_minutes_since_epoch(local - offset.minutes() as i64)
}

//! Proleptic Gregorian calendar arithmetic and the validated [`BirthDate`].
//!
//! Every date in the workspace is proleptic Gregorian. The leap rule is the
//! Gregorian one (divisible by 4, except centuries not divisible by 400),
//! applied uniformly across the supported year range 1..=9999.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::TimeError;

/// Smallest supported year.
pub const MIN_YEAR: i32 = 1;
/// Largest supported year.
pub const MAX_YEAR: i32 = 9999;

/// Gregorian leap-year test.
pub const fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Number of days in `month` (1-12) of `year`. Returns 0 for an invalid month.
pub const fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

/// Days since 1970-01-01 for a proleptic Gregorian date.
///
/// Era-based integer algorithm (H. Hinnant, "chrono-Compatible Low-Level
/// Date Algorithms"); exact for all `i32` years.
pub fn days_from_civil(year: i32, month: u32, day: u32) -> i64 {
    let y = if month <= 2 { year as i64 - 1 } else { year as i64 };
    let era = y.div_euclid(400);
    let yoe = y - era * 400;
    let m = month as i64;
    let mp = (m + 9) % 12;
    let doy = (153 * mp + 2) / 5 + day as i64 - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468
}

/// Inverse of [`days_from_civil`]: `(year, month, day)`.
pub fn civil_from_days(days: i64) -> (i32, u32, u32) {
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = (doy - (153 * mp + 2) / 5 + 1) as u32;
    let month = (if mp < 10 { mp + 3 } else { mp - 9 }) as u32;
    let year = yoe + era * 400 + if month <= 2 { 1 } else { 0 };
    (year as i32, month, day)
}

/// Day of week for a proleptic Gregorian date, 0 = Sunday .. 6 = Saturday.
pub fn weekday(year: i32, month: u32, day: u32) -> u32 {
    // 1970-01-01 was a Thursday.
    (days_from_civil(year, month, day) + 4).rem_euclid(7) as u32
}

/// Day of the month of the last Sunday in `month`.
pub fn last_sunday(year: i32, month: u32) -> u32 {
    let last = days_in_month(year, month);
    last - weekday(year, month, last)
}

/// Day of the month of the `n`-th Sunday (1-based) in `month`.
pub fn nth_sunday(year: i32, month: u32, n: u32) -> u32 {
    let first_dow = weekday(year, month, 1);
    let first_sunday = 1 + (7 - first_dow) % 7;
    first_sunday + 7 * (n.max(1) - 1)
}

/// First Sunday on or after `day` of `month`.
pub fn sunday_on_or_after(year: i32, month: u32, day: u32) -> u32 {
    let dow = weekday(year, month, day);
    day + (7 - dow) % 7
}

/// A validated civil birth date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BirthDate {
    year: i32,
    month: u32,
    day: u32,
}

impl BirthDate {
    /// Validate and construct a date. Argument order follows the
    /// `DD/MM/YYYY` convention of the input forms.
    pub fn new(day: u32, month: u32, year: i32) -> Result<Self, TimeError> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(TimeError::InvalidDateFormat(format!(
                "year {year} outside {MIN_YEAR}..={MAX_YEAR}"
            )));
        }
        if !(1..=12).contains(&month) {
            return Err(TimeError::InvalidDateFormat(format!(
                "month {month} outside 1..=12"
            )));
        }
        let dim = days_in_month(year, month);
        if day == 0 || day > dim {
            return Err(TimeError::InvalidDateFormat(format!(
                "day {day} outside 1..={dim} for {month:02}/{year}"
            )));
        }
        Ok(Self { year, month, day })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    /// Days since 1970-01-01.
    pub fn days_since_epoch(&self) -> i64 {
        days_from_civil(self.year, self.month, self.day)
    }

    /// Day of week, 0 = Sunday.
    pub fn weekday(&self) -> u32 {
        weekday(self.year, self.month, self.day)
    }
}

impl Display for BirthDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}/{:02}/{:04}", self.day, self.month, self.year)
    }
}

fn parse_field(s: &str, what: &str, input: &str) -> Result<u32, TimeError> {
    let s = s.trim();
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(TimeError::InvalidDateFormat(format!(
            "bad {what} field in {input:?}"
        )));
    }
    s.parse::<u32>()
        .map_err(|_| TimeError::InvalidDateFormat(format!("bad {what} field in {input:?}")))
}

/// Parses `DD/MM/YYYY`, `D.M.YYYY`, `YYYY.MM.DD.` and ISO `YYYY-MM-DD`.
impl FromStr for BirthDate {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        let (sep, year_first) = if input.contains('/') {
            ('/', false)
        } else if input.contains('-') {
            ('-', true)
        } else if input.contains('.') {
            let head = input.split('.').next().unwrap_or("");
            ('.', head.trim().len() == 4)
        } else {
            return Err(TimeError::InvalidDateFormat(format!(
                "unrecognised date {input:?}, expected DD/MM/YYYY"
            )));
        };

        let parts: Vec<&str> = input
            .trim_end_matches(sep)
            .split(sep)
            .map(str::trim)
            .collect();
        if parts.len() != 3 {
            return Err(TimeError::InvalidDateFormat(format!(
                "expected three fields in {input:?}"
            )));
        }

        let (d, m, y) = if year_first {
            (parts[2], parts[1], parts[0])
        } else {
            (parts[0], parts[1], parts[2])
        };
        let day = parse_field(d, "day", input)?;
        let month = parse_field(m, "month", input)?;
        let year = parse_field(y, "year", input)?;
        let year = i32::try_from(year)
            .map_err(|_| TimeError::InvalidDateFormat(format!("year out of range in {input:?}")))?;
        Self::new(day, month, year)
    }
}

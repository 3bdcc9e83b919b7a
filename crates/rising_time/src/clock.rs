//! Free-form birth time parsing.
//!
//! Accepts 24-hour clock text (`14:30`, `14.30`, `14h30`, `14:30:15`),
//! 12-hour clock text with `AM`/`PM` (`2:30 pm`, `2 PM`, `2:30 p.m.`) and
//! Hungarian period markers before or after the clock (`du. 2:30`,
//! `2:30 délután`, `reggel 7:15`, `este 9`, `éjjel 1:40`).
//!
//! Anything else resolves to [`ParsedTime::Defaulted`] with a reason. The
//! caller then works with noon and must report the result as generalized.

use std::fmt::{Display, Formatter};

use once_cell::sync::Lazy;
use regex::Regex;

/// Sentinels that mean "the birth time is not known".
pub const DEFAULT_UNKNOWN_SENTINELS: &[&str] = &[
    "i don't know my exact time",
    "i dont know my exact time",
    "unknown",
    "nem tudom",
    "nem tudom a pontos időt",
    "?",
    "-",
    "--:--",
];

/// A wall-clock birth time, minute precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BirthTime {
    pub hour: u32,
    pub minute: u32,
}

impl BirthTime {
    /// The fallback used whenever the time is unknown.
    pub const NOON: BirthTime = BirthTime {
        hour: 12,
        minute: 0,
    };

    /// Construct a time, `None` if outside 00:00..=23:59.
    pub const fn new(hour: u32, minute: u32) -> Option<Self> {
        if hour < 24 && minute < 60 {
            Some(Self { hour, minute })
        } else {
            None
        }
    }

    /// Minutes since local midnight.
    pub const fn minutes_of_day(self) -> u32 {
        self.hour * 60 + self.minute
    }
}

impl Display for BirthTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// Why the parser fell back to noon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DefaultReason {
    /// Input was empty or whitespace.
    Empty,
    /// Input matched an "unknown time" sentinel.
    Unspecified,
    /// Input did not match any accepted shape.
    Unrecognized,
}

impl DefaultReason {
    pub const fn describe(self) -> &'static str {
        match self {
            Self::Empty => "no birth time given",
            Self::Unspecified => "birth time marked as unknown",
            Self::Unrecognized => "birth time not recognised",
        }
    }
}

/// Result of parsing birth-time text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParsedTime {
    /// The text named a concrete time.
    Parsed(BirthTime),
    /// Time unknown; defaulted to noon.
    Defaulted(DefaultReason),
}

impl ParsedTime {
    /// The time to compute with: the parsed value, or noon.
    pub const fn time(self) -> BirthTime {
        match self {
            Self::Parsed(t) => t,
            Self::Defaulted(_) => BirthTime::NOON,
        }
    }

    pub const fn is_defaulted(self) -> bool {
        matches!(self, Self::Defaulted(_))
    }
}

/// Which half of the day a period marker names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Period {
    /// Before noon: `AM`, `de.`, `délelőtt`, `reggel`.
    Morning,
    /// After noon: `PM`, `du.`, `délután`, `este`.
    Afternoon,
    /// Small hours: `éjjel`. 12 means midnight, 1-5 are morning hours,
    /// 6-11 are evening hours.
    Night,
}

// Clock part: hour, optional minute (":", "." or "h" separated), optional seconds.
const CLOCK: &str = r"(?P<h>\d{1,2})(?:\s*[:.h]\s*(?P<m>\d{2})(?:\s*:\s*(?P<s>\d{2}))?)?";
const MARKER: &str = r"a\.?\s?m\.?|p\.?\s?m\.?|de\.?|du\.?|délelőtt|délután|reggel|este|éjjel|ejjel";

static TRAILING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"(?i)^{CLOCK}\s*(?P<p>{MARKER})?$"))
        .expect("trailing time pattern is valid")
});

static LEADING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"(?i)^(?P<p>{MARKER})\s*{CLOCK}$"))
        .expect("leading time pattern is valid")
});

fn period_of(marker: &str) -> Option<Period> {
    let m: String = marker
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '.')
        .collect();
    match m.as_str() {
        "am" | "de" | "délelőtt" | "reggel" => Some(Period::Morning),
        "pm" | "du" | "délután" | "este" => Some(Period::Afternoon),
        "éjjel" | "ejjel" => Some(Period::Night),
        _ => None,
    }
}

fn apply_period(hour: u32, period: Option<Period>) -> Option<u32> {
    match period {
        None => (hour < 24).then_some(hour),
        Some(_) if hour == 0 || hour > 12 => None,
        Some(Period::Morning) => Some(hour % 12),
        Some(Period::Afternoon) => Some(hour % 12 + 12),
        Some(Period::Night) => match hour {
            12 => Some(0),
            1..=5 => Some(hour),
            _ => Some(hour + 12),
        },
    }
}

fn clock_from_captures(caps: &regex::Captures<'_>) -> Option<BirthTime> {
    let hour: u32 = caps.name("h")?.as_str().parse().ok()?;
    let minute: u32 = match caps.name("m") {
        Some(m) => m.as_str().parse().ok()?,
        None => 0,
    };
    if let Some(s) = caps.name("s") {
        let sec: u32 = s.as_str().parse().ok()?;
        if sec >= 60 {
            return None;
        }
    }
    let period = match caps.name("p") {
        Some(p) => Some(period_of(p.as_str())?),
        None => None,
    };
    // A bare hour with no minutes and no marker ("14") is too ambiguous.
    if period.is_none() && caps.name("m").is_none() {
        return None;
    }
    BirthTime::new(apply_period(hour, period)?, minute)
}

/// Parse birth-time text using the built-in unknown-time sentinels.
pub fn parse_birth_time(text: &str) -> ParsedTime {
    parse_birth_time_with(text, DEFAULT_UNKNOWN_SENTINELS)
}

/// Parse birth-time text against a caller-supplied sentinel list.
///
/// Sentinels are compared case-insensitively after trimming.
pub fn parse_birth_time_with<S: AsRef<str>>(text: &str, sentinels: &[S]) -> ParsedTime {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return ParsedTime::Defaulted(DefaultReason::Empty);
    }
    let lowered = trimmed.to_lowercase();
    if sentinels
        .iter()
        .any(|s| s.as_ref().trim().to_lowercase() == lowered)
    {
        return ParsedTime::Defaulted(DefaultReason::Unspecified);
    }

    let parsed = TRAILING
        .captures(trimmed)
        .and_then(|c| clock_from_captures(&c))
        .or_else(|| LEADING.captures(trimmed).and_then(|c| clock_from_captures(&c)));

    match parsed {
        Some(t) => ParsedTime::Parsed(t),
        None => ParsedTime::Defaulted(DefaultReason::Unrecognized),
    }
}

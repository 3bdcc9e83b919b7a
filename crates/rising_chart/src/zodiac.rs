//! Tropical zodiac signs and degree/minute positions.
//!
//! The ecliptic is divided into 12 signs of 30° each, starting from Aries
//! at the vernal equinox. Positions are reported as whole degrees and
//! rounded arc-minutes within a sign; rounding carries upward, so 29°59.7′
//! Pisces becomes 0°00′ Aries.

use std::fmt::{Display, Formatter};

use rising_time::normalize_deg;
use serde::{Deserialize, Serialize};

/// The 12 tropical signs starting from Aries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Sign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

/// All 12 signs in order (0 = Aries, 11 = Pisces).
pub const ALL_SIGNS: [Sign; 12] = [
    Sign::Aries,
    Sign::Taurus,
    Sign::Gemini,
    Sign::Cancer,
    Sign::Leo,
    Sign::Virgo,
    Sign::Libra,
    Sign::Scorpio,
    Sign::Sagittarius,
    Sign::Capricorn,
    Sign::Aquarius,
    Sign::Pisces,
];

/// Classical element of a sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

/// Classical modality (quadruplicity) of a sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Modality {
    Cardinal,
    Fixed,
    Mutable,
}

impl Sign {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Aries => "Aries",
            Self::Taurus => "Taurus",
            Self::Gemini => "Gemini",
            Self::Cancer => "Cancer",
            Self::Leo => "Leo",
            Self::Virgo => "Virgo",
            Self::Libra => "Libra",
            Self::Scorpio => "Scorpio",
            Self::Sagittarius => "Sagittarius",
            Self::Capricorn => "Capricorn",
            Self::Aquarius => "Aquarius",
            Self::Pisces => "Pisces",
        }
    }

    /// Unicode astrological symbol.
    pub const fn glyph(self) -> char {
        match self {
            Self::Aries => '♈',
            Self::Taurus => '♉',
            Self::Gemini => '♊',
            Self::Cancer => '♋',
            Self::Leo => '♌',
            Self::Virgo => '♍',
            Self::Libra => '♎',
            Self::Scorpio => '♏',
            Self::Sagittarius => '♐',
            Self::Capricorn => '♑',
            Self::Aquarius => '♒',
            Self::Pisces => '♓',
        }
    }

    /// 0-based index (Aries = 0 .. Pisces = 11).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Sign at `index` modulo 12.
    pub const fn from_index(index: u8) -> Self {
        ALL_SIGNS[(index % 12) as usize]
    }

    /// The following sign, Pisces wrapping to Aries.
    pub const fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    pub const fn element(self) -> Element {
        match self.index() % 4 {
            0 => Element::Fire,
            1 => Element::Earth,
            2 => Element::Air,
            _ => Element::Water,
        }
    }

    pub const fn modality(self) -> Modality {
        match self.index() % 3 {
            0 => Modality::Cardinal,
            1 => Modality::Fixed,
            _ => Modality::Mutable,
        }
    }

    /// Longitude of the first degree of the sign.
    pub fn start_deg(self) -> f64 {
        self.index() as f64 * 30.0
    }

    /// All 12 signs in order.
    pub const fn all() -> &'static [Sign; 12] {
        &ALL_SIGNS
    }
}

impl Display for Sign {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Position within a sign at arc-minute resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ZodiacPosition {
    pub sign: Sign,
    /// Whole degrees within the sign, 0..=29.
    pub degree: u32,
    /// Arc-minutes, 0..=59.
    pub minute: u32,
}

impl ZodiacPosition {
    /// Longitude the rounded position stands for, degrees.
    pub fn longitude_deg(&self) -> f64 {
        self.sign.start_deg() + self.degree as f64 + self.minute as f64 / 60.0
    }
}

impl Display for ZodiacPosition {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}°{:02}′", self.sign, self.degree, self.minute)
    }
}

/// Map an ecliptic longitude (any real value) to a sign, degree and minute.
pub fn zodiac_position(longitude_deg: f64) -> ZodiacPosition {
    let lon = normalize_deg(longitude_deg);
    let mut sign = sign_of(lon);
    let within = lon - sign.start_deg();

    let mut degree = within.floor() as u32;
    let mut minute = ((within - degree as f64) * 60.0).round() as u32;
    if minute == 60 {
        minute = 0;
        degree += 1;
    }
    if degree >= 30 {
        degree = 0;
        sign = sign.next();
    }

    ZodiacPosition {
        sign,
        degree,
        minute,
    }
}

/// Sign containing a longitude, without minute rounding.
pub fn sign_of(longitude_deg: f64) -> Sign {
    let lon = normalize_deg(longitude_deg);
    // min(11) guards a value a hair under 360 rounding up in the division.
    Sign::from_index(((lon / 30.0).floor() as u8).min(11))
}

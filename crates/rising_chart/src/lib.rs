//! Birth-chart geometry: Ascendant, Midheaven, house cusps and zodiac
//! positions, plus the pipeline that takes raw birth data to a chart.
//!
//! The pipeline is pure and synchronous. Offsets come from any
//! [`UtcOffsetProvider`]; the built-in [`TimezoneTable`] is the default.

pub mod ascendant;
pub mod error;
pub mod houses;
pub mod natal;
pub mod options;
pub mod zodiac;

pub use ascendant::{ChartAngles, POLAR_LIMIT_DEG, ascendant_deg, chart_angles, midheaven_deg};
pub use error::ChartError;
pub use houses::{ALL_HOUSE_SYSTEMS, HouseCusps, HouseSystem, compute_houses};
pub use natal::{
    AscendantReport, ChartMoment, Confidence, NatalChart, compute_ascendant,
    compute_ascendant_with, compute_chart, resolve_moment,
};
pub use options::ChartOptions;
pub use zodiac::{ALL_SIGNS, Element, Modality, Sign, ZodiacPosition, sign_of, zodiac_position};

pub use rising_time::{GeoCoordinate, TimezoneTable, UtcOffsetProvider};

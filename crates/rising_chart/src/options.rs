//! Computation switches for the natal pipeline.

use serde::{Deserialize, Serialize};

use crate::houses::HouseSystem;

/// Options for [`crate::natal::compute_ascendant_with`].
///
/// Part of the explicit input: the same options and birth data always
/// produce the same chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChartOptions {
    /// Feed TT (UT + ΔT) rather than UT into obliquity and nutation.
    pub apply_delta_t: bool,
    /// Use true obliquity and apparent sidereal time.
    pub apply_nutation: bool,
    /// House system for [`crate::natal::compute_chart`].
    pub house_system: HouseSystem,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            apply_delta_t: true,
            apply_nutation: true,
            house_system: HouseSystem::Placidus,
        }
    }
}

impl ChartOptions {
    /// Mean-of-date geometry: no ΔT, no nutation.
    pub fn mean() -> Self {
        Self {
            apply_delta_t: false,
            apply_nutation: false,
            ..Self::default()
        }
    }
}

//! Ecliptic frame quantities for horizon geometry.
//!
//! Provides the mean and true obliquity of the ecliptic and the
//! low-precision nutation terms used to turn mean sidereal time into
//! apparent sidereal time.

pub mod nutation;
pub mod obliquity;

pub use nutation::{Nutation, equation_of_equinoxes_deg, nutation_low_precision};
pub use obliquity::{mean_obliquity_deg, true_obliquity_deg};

//! Settings for the rising chart calculator, loaded from TOML.
//!
//! Library crates take plain option structs; this crate is the only one
//! that reads files.

pub mod error;
pub mod settings;

pub use error::ConfigError;
pub use settings::{OffsetSource, Settings, TimeSettings, TimezoneSettings};

//! Error types for settings loading.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

/// Errors from reading, parsing or validating settings.
#[derive(Debug)]
#[non_exhaustive]
pub enum ConfigError {
    /// The settings file could not be read.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The text is not valid TOML or does not match the settings layout.
    Parse(toml::de::Error),
    /// Well-formed settings with an out-of-range or contradictory value.
    Invalid(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "cannot read settings {}: {source}", path.display())
            }
            Self::Parse(e) => write!(f, "malformed settings: {e}"),
            Self::Invalid(msg) => write!(f, "invalid settings: {msg}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(e) => Some(e),
            Self::Invalid(_) => None,
        }
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        Self::Parse(e)
    }
}

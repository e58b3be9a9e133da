//! Chart-layer errors and their coarse classification.

use jyotishi_ephem::EphemerisError;
use serde::Serialize;

/// Errors from chart and transit requests.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum ChartError {
    /// Date/time did not match any accepted format.
    #[error("could not parse '{input}': expected YYYY-MM-DD with HH:MM or HH:MM AM/PM")]
    Parse { input: String },
    /// The ephemeris provider failed.
    #[error(transparent)]
    Ephemeris(#[from] EphemerisError),
    /// Configuration could not be read or is invalid.
    #[error("config error: {0}")]
    Config(String),
}

/// Which stage a failed request broke in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorKind {
    Parse,
    Provider,
    Config,
}

impl ChartError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Parse { .. } => ErrorKind::Parse,
            Self::Ephemeris(_) => ErrorKind::Provider,
            Self::Config(_) => ErrorKind::Config,
        }
    }
}

impl From<toml::de::Error> for ChartError {
    fn from(e: toml::de::Error) -> Self {
        Self::Config(e.to_string())
    }
}

//! Error types for ephemeris lookups and dataset loading.

use crate::body::Body;

/// Errors from the ephemeris provider.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum EphemerisError {
    /// Name did not match any known body.
    #[error("unknown body: {0}")]
    UnknownBody(String),
    /// Body exists but has no geocentric position (the Earth itself).
    #[error("{0} cannot be observed from the geocenter")]
    UnsupportedBody(Body),
    /// Dataset has no element record for the body.
    #[error("no orbital elements for {0}")]
    MissingElements(Body),
    /// Instant outside the supported year range.
    #[error("year {year} is outside the supported range {min}..={max}")]
    OutOfRange { year: i32, min: i32, max: i32 },
    /// Element dataset could not be parsed.
    #[error("dataset parse error: {0}")]
    Dataset(String),
    /// Element record failed validation.
    #[error("invalid elements for {body}: {reason}")]
    InvalidElements { body: String, reason: &'static str },
    /// Invalid provider configuration.
    #[error("invalid config: {0}")]
    InvalidConfig(&'static str),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for EphemerisError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}

impl From<toml::de::Error> for EphemerisError {
    fn from(e: toml::de::Error) -> Self {
        Self::Dataset(e.to_string())
    }
}

//! Birth request input and timestamp parsing.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::ChartError;

/// 24-hour clock, tried first.
pub const FORMAT_24H: &str = "%Y-%m-%d %H:%M";

/// 12-hour clock with meridian, tried second.
pub const FORMAT_12H: &str = "%Y-%m-%d %I:%M %p";

/// One chart request as received from the caller.
///
/// The time is taken as UTC. The location is a free-text label; it is
/// logged but does not enter the calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthQuery {
    pub date: String,
    pub time: String,
    pub location: String,
}

impl BirthQuery {
    pub fn new(
        date: impl Into<String>,
        time: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            time: time.into(),
            location: location.into(),
        }
    }

    /// Parsed birth instant.
    pub fn instant(&self) -> Result<NaiveDateTime, ChartError> {
        parse_birth_instant(&self.date, &self.time)
    }
}

/// Parse `YYYY-MM-DD` plus `HH:MM` or `HH:MM AM|PM` (any case).
pub fn parse_birth_instant(date: &str, time: &str) -> Result<NaiveDateTime, ChartError> {
    let input = format!("{} {}", date.trim(), time.trim());
    let normalized = input.replace("am", "AM").replace("pm", "PM");

    NaiveDateTime::parse_from_str(&normalized, FORMAT_24H)
        .or_else(|_| NaiveDateTime::parse_from_str(&normalized, FORMAT_12H))
        .map_err(|_| ChartError::Parse { input })
}

//! Result types returned to the caller.
//!
//! Domain enums are kept typed in Rust and serialized through their
//! `Display` names ("Aries", "Purva Phalguni", "Mercury").

use std::fmt::Display;

use chrono::NaiveDateTime;
use jyotishi_ephem::Body;
use jyotishi_vedic_base::{Graha, Nakshatra, Rashi};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::error::{ChartError, ErrorKind};

fn as_display<T: Display, S: Serializer>(value: &T, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}

/// Estimated rising sign.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LagnaPlacement {
    #[serde(serialize_with = "as_display")]
    pub sign: Rashi,
    /// Always false: the estimate has no degree to test.
    pub is_cusp: bool,
}

/// Natal Moon placement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MoonPlacement {
    #[serde(serialize_with = "as_display")]
    pub sign: Rashi,
    #[serde(serialize_with = "as_display")]
    pub nakshatra: Nakshatra,
    pub pada: u8,
    pub is_cusp: bool,
    #[serde(skip)]
    pub sidereal_longitude: f64,
}

/// Running Vimshottari period at birth.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DashaSummary {
    #[serde(serialize_with = "as_display")]
    pub current_lord: Graha,
    /// Remaining years rounded to one decimal.
    pub balance_years: f64,
    #[serde(skip)]
    pub exact_balance_years: f64,
}

/// Natal snapshot plus the transits at request time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartResult {
    pub lagna: LagnaPlacement,
    pub moon: MoonPlacement,
    pub dasha: DashaSummary,
    pub current_transits: TransitSnapshot,
}

/// Bodies reported in a transit snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransitBody {
    Sun,
    Jupiter,
    Saturn,
    /// Placeholder: reads the Moon's position, not the lunar node.
    Rahu,
}

/// Snapshot order.
pub const TRANSIT_BODIES: [TransitBody; 4] = [
    TransitBody::Sun,
    TransitBody::Jupiter,
    TransitBody::Saturn,
    TransitBody::Rahu,
];

impl TransitBody {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Jupiter => "Jupiter",
            Self::Saturn => "Saturn",
            Self::Rahu => "Rahu",
        }
    }

    /// Body whose position stands for this entry.
    pub const fn source_body(self) -> Body {
        match self {
            Self::Sun => Body::Sun,
            Self::Jupiter => Body::Jupiter,
            Self::Saturn => Body::Saturn,
            Self::Rahu => Body::Moon,
        }
    }
}

impl Display for TransitBody {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Sidereal sign of each transit body at one instant.
///
/// Serializes as a map from body name to sign name, in
/// [`TRANSIT_BODIES`] order.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitSnapshot {
    instant: NaiveDateTime,
    signs: Vec<(TransitBody, Rashi)>,
}

impl TransitSnapshot {
    pub fn new(instant: NaiveDateTime, signs: Vec<(TransitBody, Rashi)>) -> Self {
        Self { instant, signs }
    }

    pub fn instant(&self) -> NaiveDateTime {
        self.instant
    }

    pub fn sign_of(&self, body: TransitBody) -> Option<Rashi> {
        self.signs
            .iter()
            .find(|(b, _)| *b == body)
            .map(|(_, sign)| *sign)
    }

    pub fn iter(&self) -> impl Iterator<Item = (TransitBody, Rashi)> + '_ {
        self.signs.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.signs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.signs.is_empty()
    }
}

impl Serialize for TransitSnapshot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.signs.len()))?;
        for (body, sign) in &self.signs {
            map.serialize_entry(body.name(), sign.western_name())?;
        }
        map.end()
    }
}

/// Tagged result handed back across the tool boundary.
///
/// Serializes with a `status` field of `"success"` or `"error"`; success
/// payload fields sit alongside it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ToolOutcome<T> {
    Success(T),
    Error { kind: ErrorKind, message: String },
}

pub type ChartOutcome = ToolOutcome<ChartResult>;
pub type TransitOutcome = ToolOutcome<TransitSnapshot>;

impl<T> ToolOutcome<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Error message, if this is a failure.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Success(_) => None,
            Self::Error { message, .. } => Some(message),
        }
    }

    pub fn into_result(self) -> Result<T, (ErrorKind, String)> {
        match self {
            Self::Success(v) => Ok(v),
            Self::Error { kind, message } => Err((kind, message)),
        }
    }
}

impl<T> From<Result<T, ChartError>> for ToolOutcome<T> {
    fn from(result: Result<T, ChartError>) -> Self {
        match result {
            Ok(v) => Self::Success(v),
            Err(e) => Self::Error {
                kind: e.kind(),
                message: e.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use serde_json::json;

    use super::*;

    fn snapshot() -> TransitSnapshot {
        let instant = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        TransitSnapshot::new(
            instant,
            vec![
                (TransitBody::Sun, Rashi::Dhanu),
                (TransitBody::Jupiter, Rashi::Mesha),
                (TransitBody::Saturn, Rashi::Kumbha),
                (TransitBody::Rahu, Rashi::Kanya),
            ],
        )
    }

    #[test]
    fn snapshot_serializes_as_name_map() {
        let v = serde_json::to_value(snapshot()).unwrap();
        assert_eq!(
            v,
            json!({"Sun": "Sagittarius", "Jupiter": "Aries", "Saturn": "Aquarius", "Rahu": "Virgo"})
        );
    }

    #[test]
    fn snapshot_lookup() {
        let s = snapshot();
        assert_eq!(s.sign_of(TransitBody::Saturn), Some(Rashi::Kumbha));
        assert_eq!(s.len(), 4);
    }

    #[test]
    fn rahu_reads_moon() {
        assert_eq!(TransitBody::Rahu.source_body(), Body::Moon);
        assert_eq!(TransitBody::Jupiter.source_body(), Body::Jupiter);
    }

    #[test]
    fn success_outcome_is_flat() {
        let outcome: TransitOutcome = ToolOutcome::Success(snapshot());
        let v = serde_json::to_value(&outcome).unwrap();
        assert_eq!(v["status"], "success");
        assert_eq!(v["Jupiter"], "Aries");
    }

    #[test]
    fn error_outcome_shape() {
        let outcome: TransitOutcome = Err(ChartError::Config("nope".into())).into();
        assert!(!outcome.is_success());
        assert_eq!(outcome.message(), Some("config error: nope"));
        let v = serde_json::to_value(&outcome).unwrap();
        assert_eq!(
            v,
            json!({"status": "error", "kind": "config", "message": "config error: nope"})
        );
    }
}

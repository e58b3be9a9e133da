//! Provider with constant positions.
//!
//! Returns the same longitude for a body at every instant and a frozen
//! `now()`. Used to drive the chart layer deterministically.

use std::collections::HashMap;

use chrono::NaiveDateTime;

use crate::body::Body;
use crate::error::EphemerisError;
use crate::provider::EphemerisProvider;

#[derive(Debug, Clone, PartialEq)]
pub struct FixedEphemeris {
    longitudes: HashMap<Body, f64>,
    now: NaiveDateTime,
}

impl FixedEphemeris {
    /// Empty provider whose clock reads `now`.
    pub fn new(now: NaiveDateTime) -> Self {
        Self {
            longitudes: HashMap::new(),
            now,
        }
    }

    /// Set the tropical longitude reported for `body`.
    pub fn with(mut self, body: Body, tropical_lon_deg: f64) -> Self {
        self.longitudes.insert(body, tropical_lon_deg);
        self
    }
}

impl EphemerisProvider for FixedEphemeris {
    fn observe(&self, body: Body, _instant: NaiveDateTime) -> Result<f64, EphemerisError> {
        self.longitudes
            .get(&body)
            .map(|lon| lon.rem_euclid(360.0))
            .ok_or(EphemerisError::MissingElements(body))
    }

    fn now(&self) -> NaiveDateTime {
        self.now
    }
}

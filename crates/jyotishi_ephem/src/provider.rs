//! The ephemeris provider contract.

use chrono::NaiveDateTime;

use crate::body::Body;
use crate::error::EphemerisError;

/// Source of tropical ecliptic longitudes.
///
/// Implementations must be shareable across threads; the chart layer holds
/// one provider for the life of the process.
pub trait EphemerisProvider: Send + Sync {
    /// Geocentric tropical ecliptic longitude of `body` at a naive UTC
    /// instant, in degrees [0, 360).
    fn observe(&self, body: Body, instant: NaiveDateTime) -> Result<f64, EphemerisError>;

    /// The present instant, naive UTC.
    fn now(&self) -> NaiveDateTime;

    /// [`observe`](Self::observe) with a body given by name.
    fn observe_named(&self, name: &str, instant: NaiveDateTime) -> Result<f64, EphemerisError> {
        self.observe(Body::from_name(name)?, instant)
    }
}

impl<P: EphemerisProvider + ?Sized> EphemerisProvider for &P {
    fn observe(&self, body: Body, instant: NaiveDateTime) -> Result<f64, EphemerisError> {
        (**self).observe(body, instant)
    }

    fn now(&self) -> NaiveDateTime {
        (**self).now()
    }
}

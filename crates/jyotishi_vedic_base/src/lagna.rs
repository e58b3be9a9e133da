//! Approximate Lagna (ascendant) sign.
//!
//! This is an approximation policy, not a physical model. It assumes
//! sunrise at a fixed local hour, that the Sun's own sign is rising at
//! sunrise, and that one sign rises every two hours after that. Latitude,
//! unequal rising times and local sidereal time are all ignored. The result
//! is a sign only; there is no ascendant degree to test for sandhi.

use crate::rashi::{RASHI_SPAN, Rashi};
use crate::sidereal::normalize_360;

/// Assumed local sunrise hour.
pub const DEFAULT_SUNRISE_HOUR: f64 = 6.0;

/// Assumed hours for one sign to rise.
pub const DEFAULT_HOURS_PER_SIGN: f64 = 2.0;

/// Parameters of the sunrise-offset approximation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LagnaApproximation {
    pub sunrise_hour: f64,
    pub hours_per_sign: f64,
}

impl Default for LagnaApproximation {
    fn default() -> Self {
        Self {
            sunrise_hour: DEFAULT_SUNRISE_HOUR,
            hours_per_sign: DEFAULT_HOURS_PER_SIGN,
        }
    }
}

impl LagnaApproximation {
    /// Whole signs risen since sunrise: `floor((hour - sunrise) / hours_per_sign)`.
    ///
    /// Negative before sunrise.
    pub fn signs_passed(&self, hour_of_day: u32) -> i64 {
        ((hour_of_day as f64 - self.sunrise_hour) / self.hours_per_sign).floor() as i64
    }

    /// Estimated lagna from the Sun's sidereal longitude and the hour of day.
    pub fn estimate(&self, sun_sidereal_lon: f64, hour_of_day: u32) -> Rashi {
        let sun_idx = (normalize_360(sun_sidereal_lon) / RASHI_SPAN).floor() as i64;
        Rashi::from_index_wrapping(sun_idx.min(11) + self.signs_passed(hour_of_day))
    }
}

/// Estimated lagna with the default 06:00 sunrise and 2 hours per sign.
pub fn approximate_lagna(sun_sidereal_lon: f64, hour_of_day: u32) -> Rashi {
    LagnaApproximation::default().estimate(sun_sidereal_lon, hour_of_day)
}

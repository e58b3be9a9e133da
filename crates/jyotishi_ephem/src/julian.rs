//! Julian Date helpers.
//!
//! Instants are naive UTC. UTC is used in place of TT; the ~1 minute
//! difference is below the precision of the analytic ephemeris.

use chrono::NaiveDateTime;

/// Julian Date of the J2000.0 epoch (2000-01-01 12:00).
pub const J2000_JD: f64 = 2_451_545.0;

/// Julian Date of the Unix epoch (1970-01-01 00:00).
pub const UNIX_EPOCH_JD: f64 = 2_440_587.5;

/// Days per Julian century.
pub const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Julian Date of a naive UTC instant.
pub fn jd_from_datetime(instant: NaiveDateTime) -> f64 {
    let millis = instant.and_utc().timestamp_millis();
    UNIX_EPOCH_JD + millis as f64 / 86_400_000.0
}

/// Julian centuries since J2000.0.
pub fn centuries_since_j2000(instant: NaiveDateTime) -> f64 {
    (jd_from_datetime(instant) - J2000_JD) / DAYS_PER_CENTURY
}

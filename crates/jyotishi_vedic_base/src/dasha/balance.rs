//! Birth balance for the Vimshottari dasha.
//!
//! The fraction of the Moon's nakshatra still ahead of it at birth equals
//! the fraction of the ruling graha's full period still owed from birth.

use crate::graha::Graha;
use crate::nakshatra::{NAKSHATRA_SPAN_27, nakshatra_from_longitude};
use crate::sidereal::normalize_360;

use super::vimshottari::lord_for_nakshatra;

/// Currently running mahadasha at birth and its remaining length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashaBalance {
    /// Ruling graha of the running period.
    pub lord: Graha,
    /// Full period length of `lord` in years.
    pub lord_years: f64,
    /// Remaining years, full precision, in [0, lord_years].
    pub balance_years: f64,
    /// Fraction of the nakshatra already traversed, in [0, 1].
    pub elapsed_fraction: f64,
}

impl DashaBalance {
    /// Balance rounded to one decimal place, for presentation.
    pub fn rounded_balance_years(&self) -> f64 {
        (self.balance_years * 10.0).round() / 10.0
    }
}

/// Running dasha from the Moon's sidereal longitude and its nakshatra index.
///
/// The index is normally the one returned by
/// [`nakshatra_from_longitude`](crate::nakshatra::nakshatra_from_longitude)
/// for the same longitude. The remaining fraction is clamped to [0, 1], so
/// an index that disagrees with the longitude still yields an in-range
/// balance.
pub fn current_dasha(moon_sidereal_lon: f64, nakshatra_index: u8) -> DashaBalance {
    let idx = nakshatra_index.min(26);
    let lon = normalize_360(moon_sidereal_lon);
    let traversed = lon - (idx as f64) * NAKSHATRA_SPAN_27;
    let remaining = NAKSHATRA_SPAN_27 - traversed;
    let percent_left = (remaining / NAKSHATRA_SPAN_27).clamp(0.0, 1.0);
    let period = lord_for_nakshatra(idx);

    DashaBalance {
        lord: period.graha,
        lord_years: period.years,
        balance_years: period.years * percent_left,
        elapsed_fraction: 1.0 - percent_left,
    }
}

/// Running dasha from the Moon's sidereal longitude alone.
pub fn vimshottari_balance(moon_sidereal_lon: f64) -> DashaBalance {
    let info = nakshatra_from_longitude(moon_sidereal_lon);
    current_dasha(moon_sidereal_lon, info.nakshatra_index)
}

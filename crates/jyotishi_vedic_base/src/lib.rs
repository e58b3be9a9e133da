//! Sidereal zodiac primitives for a simplified Vedic chart.
//!
//! This crate provides:
//! - A linear ayanamsha model and tropical-to-sidereal conversion
//! - Rashi (sign) lookup with sandhi (cusp) detection and DMS formatting
//! - Nakshatra and pada lookup (27-scheme)
//! - Vimshottari dasha birth balance
//! - A coarse sunrise-offset lagna approximation
//!
//! Everything here is a pure function of its inputs; ephemeris lookups
//! live in `jyotishi_ephem`.

pub mod ayanamsha;
pub mod dasha;
pub mod graha;
pub mod lagna;
pub mod nakshatra;
pub mod rashi;
pub mod sidereal;

pub use ayanamsha::{
    ANNUAL_RATE_ARCSEC, LinearAyanamsha, REFERENCE_AYANAMSHA_DEG, REFERENCE_YEAR, ayanamsha_deg,
};
pub use dasha::{
    DashaBalance, VIMSHOTTARI_SEQUENCE, VIMSHOTTARI_TOTAL_YEARS, VimshottariPeriod, current_dasha,
    lord_for_nakshatra, vimshottari_balance,
};
pub use graha::{ALL_GRAHAS, Graha};
pub use lagna::{
    DEFAULT_HOURS_PER_SIGN, DEFAULT_SUNRISE_HOUR, LagnaApproximation, approximate_lagna,
};
pub use nakshatra::{
    ALL_NAKSHATRAS_27, NAKSHATRA_SPAN_27, Nakshatra, NakshatraInfo, PADA_SPAN,
    nakshatra_from_longitude,
};
pub use rashi::{
    ALL_RASHIS, Dms, RASHI_SPAN, Rashi, RashiInfo, SANDHI_ORB_DEG, deg_to_dms, dms_to_deg,
    is_sandhi, rashi_from_longitude, rashi_from_tropical,
};
pub use sidereal::{normalize_360, tropical_to_sidereal};

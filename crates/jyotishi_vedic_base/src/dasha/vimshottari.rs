//! Const data for the Vimshottari dasha system (120 years, 9 grahas).

use crate::graha::Graha;

/// Full cycle length in years.
pub const VIMSHOTTARI_TOTAL_YEARS: f64 = 120.0;

/// One entry of the Vimshottari sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VimshottariPeriod {
    pub graha: Graha,
    pub years: f64,
}

/// Vimshottari sequence in dasha order: Ketu, Venus, Sun, Moon, Mars,
/// Rahu, Jupiter, Saturn, Mercury.
pub const VIMSHOTTARI_SEQUENCE: [VimshottariPeriod; 9] = [
    VimshottariPeriod { graha: Graha::Ketu, years: 7.0 },
    VimshottariPeriod { graha: Graha::Shukra, years: 20.0 },
    VimshottariPeriod { graha: Graha::Surya, years: 6.0 },
    VimshottariPeriod { graha: Graha::Chandra, years: 10.0 },
    VimshottariPeriod { graha: Graha::Mangal, years: 7.0 },
    VimshottariPeriod { graha: Graha::Rahu, years: 18.0 },
    VimshottariPeriod { graha: Graha::Guru, years: 16.0 },
    VimshottariPeriod { graha: Graha::Shani, years: 19.0 },
    VimshottariPeriod { graha: Graha::Buddh, years: 17.0 },
];

/// Ruling period for a nakshatra: every 9th nakshatra shares a graha.
///
/// Indices past 26 are clamped to Revati.
pub const fn lord_for_nakshatra(nakshatra_index: u8) -> VimshottariPeriod {
    let idx = if nakshatra_index > 26 { 26 } else { nakshatra_index };
    VIMSHOTTARI_SEQUENCE[(idx % 9) as usize]
}

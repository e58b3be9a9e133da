//! Vimshottari dasha (planetary period) calculations.
//!
//! - `vimshottari`: the fixed 9-graha, 120-year sequence and its mapping
//!   from nakshatras to ruling grahas.
//! - `balance`: the birth balance owed to the starting graha, from the
//!   Moon's position within its nakshatra.

pub mod balance;
pub mod vimshottari;

pub use balance::{DashaBalance, current_dasha, vimshottari_balance};
pub use vimshottari::{
    VIMSHOTTARI_SEQUENCE, VIMSHOTTARI_TOTAL_YEARS, VimshottariPeriod, lord_for_nakshatra,
};

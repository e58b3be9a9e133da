//! Rashi lookup with sandhi (cusp) detection and DMS formatting.
//!
//! Twelve equal 30 degree signs starting at sidereal 0 (Mesha). A point is
//! in sandhi when it lies within [`SANDHI_ORB_DEG`] of either edge of its sign.

use std::fmt;

use crate::sidereal::{normalize_360, tropical_to_sidereal};

pub const RASHI_SPAN: f64 = 30.0;

/// Sandhi orb in degrees, measured from either sign boundary.
pub const SANDHI_ORB_DEG: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rashi {
    Mesha,
    Vrishabha,
    Mithuna,
    Karka,
    Simha,
    Kanya,
    Tula,
    Vrischika,
    Dhanu,
    Makara,
    Kumbha,
    Meena,
}

// (sanskrit, western), indexed by discriminant.
const RASHI_NAMES: [(&str, &str); 12] = [
    ("Mesha", "Aries"),
    ("Vrishabha", "Taurus"),
    ("Mithuna", "Gemini"),
    ("Karka", "Cancer"),
    ("Simha", "Leo"),
    ("Kanya", "Virgo"),
    ("Tula", "Libra"),
    ("Vrischika", "Scorpio"),
    ("Dhanu", "Sagittarius"),
    ("Makara", "Capricorn"),
    ("Kumbha", "Aquarius"),
    ("Meena", "Pisces"),
];

/// Signs in zodiacal order, Mesha first.
pub const ALL_RASHIS: [Rashi; 12] = {
    use Rashi::*;
    [
        Mesha, Vrishabha, Mithuna, Karka, Simha, Kanya, Tula, Vrischika, Dhanu, Makara,
        Kumbha, Meena,
    ]
};

impl Rashi {
    pub const fn name(self) -> &'static str {
        RASHI_NAMES[self as usize].0
    }

    /// English sign name; this is what chart JSON carries.
    pub const fn western_name(self) -> &'static str {
        RASHI_NAMES[self as usize].1
    }

    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Sign at `index` counted from Mesha, modulo 12 (negative counts backwards).
    pub const fn from_index_wrapping(index: i64) -> Self {
        ALL_RASHIS[index.rem_euclid(12) as usize]
    }

    pub const fn all() -> &'static [Rashi; 12] {
        &ALL_RASHIS
    }
}

impl fmt::Display for Rashi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.western_name())
    }
}

/// An unsigned angle split into degrees, arc-minutes and arc-seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dms {
    pub degrees: u16,
    pub minutes: u8,
    /// Fractional seconds are kept.
    pub seconds: f64,
}

impl fmt::Display for Dms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}° {}' {:.1}\"", self.degrees, self.minutes, self.seconds)
    }
}

/// Where a sidereal longitude falls in the zodiac.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RashiInfo {
    pub rashi: Rashi,
    pub rashi_index: u8,
    /// Offset into the sign as DMS.
    pub dms: Dms,
    /// Offset into the sign, in [0, 30).
    pub degrees_in_rashi: f64,
    pub is_sandhi: bool,
}

pub fn dms_to_deg(dms: &Dms) -> f64 {
    f64::from(dms.degrees) + f64::from(dms.minutes) / 60.0 + dms.seconds / 3600.0
}

/// Split `deg` into DMS. The sign of the input is dropped.
pub fn deg_to_dms(deg: f64) -> Dms {
    let abs = deg.abs();
    let whole = abs.trunc();
    let arcmin = (abs - whole) * 60.0;
    let whole_min = arcmin.trunc();
    Dms {
        degrees: whole as u16,
        minutes: whole_min as u8,
        seconds: (arcmin - whole_min) * 60.0,
    }
}

/// True when the offset into the sign is below 1 degree or above 29.
pub fn is_sandhi(sidereal_lon_deg: f64) -> bool {
    let offset = normalize_360(sidereal_lon_deg) % RASHI_SPAN;
    offset < SANDHI_ORB_DEG || RASHI_SPAN - offset < SANDHI_ORB_DEG
}

/// Sign, offset and sandhi flag for a sidereal longitude. Any real input
/// is accepted and wrapped first.
pub fn rashi_from_longitude(sidereal_lon_deg: f64) -> RashiInfo {
    let lon = normalize_360(sidereal_lon_deg);
    let rashi = Rashi::from_index_wrapping(((lon / RASHI_SPAN) as i64).min(11));
    let degrees_in_rashi = lon - f64::from(rashi.index()) * RASHI_SPAN;

    RashiInfo {
        rashi,
        rashi_index: rashi.index(),
        dms: deg_to_dms(degrees_in_rashi),
        degrees_in_rashi,
        is_sandhi: is_sandhi(lon),
    }
}

pub fn rashi_from_tropical(tropical_lon_deg: f64, ayanamsha_deg: f64) -> RashiInfo {
    rashi_from_longitude(tropical_to_sidereal(tropical_lon_deg, ayanamsha_deg))
}

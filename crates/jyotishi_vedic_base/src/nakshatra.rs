//! Nakshatra and pada lookup on the uniform 27-fold division.
//!
//! Each nakshatra spans 13° 20' and splits into four padas of 3° 20'.

use std::fmt;

use crate::sidereal::normalize_360;

pub const NAKSHATRA_SPAN_27: f64 = 360.0 / 27.0;
pub const PADA_SPAN: f64 = NAKSHATRA_SPAN_27 / 4.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nakshatra {
    Ashwini,
    Bharani,
    Krittika,
    Rohini,
    Mrigashira,
    Ardra,
    Punarvasu,
    Pushya,
    Ashlesha,
    Magha,
    PurvaPhalguni,
    UttaraPhalguni,
    Hasta,
    Chitra,
    Swati,
    Vishakha,
    Anuradha,
    Jyeshtha,
    Mula,
    PurvaAshadha,
    UttaraAshadha,
    Shravana,
    Dhanishta,
    Shatabhisha,
    PurvaBhadrapada,
    UttaraBhadrapada,
    Revati,
}

// Display names, indexed by discriminant.
const NAKSHATRA_NAMES: [&str; 27] = [
    "Ashwini", "Bharani", "Krittika", "Rohini", "Mrigashira", "Ardra", "Punarvasu", "Pushya",
    "Ashlesha", "Magha", "Purva Phalguni", "Uttara Phalguni", "Hasta", "Chitra", "Swati",
    "Vishakha", "Anuradha", "Jyeshtha", "Mula", "Purva Ashadha", "Uttara Ashadha", "Shravana",
    "Dhanishta", "Shatabhisha", "Purva Bhadrapada", "Uttara Bhadrapada", "Revati",
];

/// Ashwini through Revati.
pub const ALL_NAKSHATRAS_27: [Nakshatra; 27] = {
    use Nakshatra::*;
    [
        Ashwini, Bharani, Krittika, Rohini, Mrigashira, Ardra, Punarvasu, Pushya, Ashlesha,
        Magha, PurvaPhalguni, UttaraPhalguni, Hasta, Chitra, Swati, Vishakha, Anuradha,
        Jyeshtha, Mula, PurvaAshadha, UttaraAshadha, Shravana, Dhanishta, Shatabhisha,
        PurvaBhadrapada, UttaraBhadrapada, Revati,
    ]
};

impl Nakshatra {
    /// Name as printed in chart output, with compound names spaced.
    pub const fn name(self) -> &'static str {
        NAKSHATRA_NAMES[self as usize]
    }

    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn all() -> &'static [Nakshatra; 27] {
        &ALL_NAKSHATRAS_27
    }
}

impl fmt::Display for Nakshatra {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NakshatraInfo {
    pub nakshatra: Nakshatra,
    pub nakshatra_index: u8,
    /// 1 to 4.
    pub pada: u8,
    /// Offset into the nakshatra, in [0, 13.333...).
    pub degrees_in_nakshatra: f64,
    /// Offset into the pada, in [0, 3.333...).
    pub degrees_in_pada: f64,
}

/// Nakshatra and pada for a sidereal longitude. Input is wrapped to [0, 360).
pub fn nakshatra_from_longitude(sidereal_lon_deg: f64) -> NakshatraInfo {
    let lon = normalize_360(sidereal_lon_deg);
    let idx = ((lon / NAKSHATRA_SPAN_27) as usize).min(26);
    let within = lon - idx as f64 * NAKSHATRA_SPAN_27;
    let quarter = ((within / PADA_SPAN) as u8).min(3);

    NakshatraInfo {
        nakshatra: ALL_NAKSHATRAS_27[idx],
        nakshatra_index: idx as u8,
        pada: quarter + 1,
        degrees_in_nakshatra: within,
        degrees_in_pada: within - f64::from(quarter) * PADA_SPAN,
    }
}

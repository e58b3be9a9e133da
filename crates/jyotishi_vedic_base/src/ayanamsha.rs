//! Linear ayanamsha model.
//!
//! The ayanamsha is the angular offset between the tropical zodiac (defined
//! by the vernal equinox) and the sidereal zodiac (anchored to fixed stars).
//! As the equinox precesses westward, the ayanamsha increases over time.
//!
//! This model is deliberately coarse: a Lahiri-style reference value at a
//! reference year plus a constant annual drift, evaluated on the calendar
//! year only. Month and day do not contribute.

/// Reference year of the default model.
pub const REFERENCE_YEAR: i32 = 2000;

/// Ayanamsha at [`REFERENCE_YEAR`], in degrees.
pub const REFERENCE_AYANAMSHA_DEG: f64 = 23.86;

/// Annual precession drift in arcseconds per year.
pub const ANNUAL_RATE_ARCSEC: f64 = 50.29;

/// Linear ayanamsha: `reference_deg + (year - reference_year) * rate`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearAyanamsha {
    pub reference_year: i32,
    pub reference_deg: f64,
    pub annual_rate_arcsec: f64,
}

impl Default for LinearAyanamsha {
    fn default() -> Self {
        Self {
            reference_year: REFERENCE_YEAR,
            reference_deg: REFERENCE_AYANAMSHA_DEG,
            annual_rate_arcsec: ANNUAL_RATE_ARCSEC,
        }
    }
}

impl LinearAyanamsha {
    pub const fn new(reference_year: i32, reference_deg: f64, annual_rate_arcsec: f64) -> Self {
        Self {
            reference_year,
            reference_deg,
            annual_rate_arcsec,
        }
    }

    /// Annual drift in degrees per year.
    pub fn annual_rate_deg(&self) -> f64 {
        self.annual_rate_arcsec / 3600.0
    }

    /// Ayanamsha in degrees for a calendar year.
    ///
    /// Floored at zero: years before the zero-ayanamsha epoch (around 290 CE
    /// with the default constants) report 0 instead of a negative offset.
    pub fn ayanamsha_deg(&self, year: i32) -> f64 {
        let diff_years = (year as i64 - self.reference_year as i64) as f64;
        (self.reference_deg + diff_years * self.annual_rate_deg()).max(0.0)
    }
}

/// Ayanamsha in degrees for `year` using the default model.
pub fn ayanamsha_deg(year: i32) -> f64 {
    LinearAyanamsha::default().ayanamsha_deg(year)
}

//! Chart configuration.
//!
//! Loaded from TOML. Every section and field is optional; omitted values
//! fall back to the built-in constants.
//!
//! ```toml
//! [ayanamsa]
//! reference_year = 2000
//! reference_deg = 23.86
//! annual_rate_arcsec = 50.29
//!
//! [lagna]
//! sunrise_hour = 6.0
//! hours_per_sign = 2.0
//!
//! [location]
//! label = "New Delhi"
//! latitude_deg = 28.61
//! longitude_deg = 77.20
//!
//! [ephemeris]
//! precess_to_date = false
//! light_time = true
//! ```

use std::path::Path;

use jyotishi_ephem::EphemerisConfig;
use jyotishi_vedic_base::{
    ANNUAL_RATE_ARCSEC, DEFAULT_HOURS_PER_SIGN, DEFAULT_SUNRISE_HOUR, LagnaApproximation,
    LinearAyanamsha, REFERENCE_AYANAMSHA_DEG, REFERENCE_YEAR,
};
use serde::Deserialize;

use crate::error::ChartError;

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChartConfig {
    pub ayanamsa: AyanamsaSettings,
    pub lagna: LagnaSettings,
    pub location: LocationSettings,
    pub ephemeris: EphemerisConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AyanamsaSettings {
    pub reference_year: i32,
    pub reference_deg: f64,
    pub annual_rate_arcsec: f64,
}

impl Default for AyanamsaSettings {
    fn default() -> Self {
        Self {
            reference_year: REFERENCE_YEAR,
            reference_deg: REFERENCE_AYANAMSHA_DEG,
            annual_rate_arcsec: ANNUAL_RATE_ARCSEC,
        }
    }
}

impl AyanamsaSettings {
    pub fn model(&self) -> LinearAyanamsha {
        LinearAyanamsha::new(
            self.reference_year,
            self.reference_deg,
            self.annual_rate_arcsec,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LagnaSettings {
    pub sunrise_hour: f64,
    pub hours_per_sign: f64,
}

impl Default for LagnaSettings {
    fn default() -> Self {
        Self {
            sunrise_hour: DEFAULT_SUNRISE_HOUR,
            hours_per_sign: DEFAULT_HOURS_PER_SIGN,
        }
    }
}

impl LagnaSettings {
    pub fn policy(&self) -> LagnaApproximation {
        LagnaApproximation {
            sunrise_hour: self.sunrise_hour,
            hours_per_sign: self.hours_per_sign,
        }
    }
}

/// Reference location. Recorded and logged; no calculation reads it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LocationSettings {
    pub label: String,
    pub latitude_deg: f64,
    pub longitude_deg: f64,
}

impl Default for LocationSettings {
    fn default() -> Self {
        Self {
            label: "New Delhi".to_string(),
            latitude_deg: 28.61,
            longitude_deg: 77.20,
        }
    }
}

impl ChartConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(src: &str) -> Result<Self, ChartError> {
        let config: ChartConfig = toml::from_str(src)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ChartError> {
        let path = path.as_ref();
        let src = std::fs::read_to_string(path)
            .map_err(|e| ChartError::Config(format!("failed to read {}: {e}", path.display())))?;
        Self::from_toml_str(&src)
    }

    pub fn validate(&self) -> Result<(), ChartError> {
        let bad = |msg: &str| Err(ChartError::Config(msg.to_string()));

        let aya = &self.ayanamsa;
        if !aya.reference_deg.is_finite() {
            return bad("ayanamsa.reference_deg must be finite");
        }
        if !(aya.annual_rate_arcsec.is_finite() && aya.annual_rate_arcsec >= 0.0) {
            return bad("ayanamsa.annual_rate_arcsec must be >= 0");
        }

        let lagna = &self.lagna;
        if !(0.0..24.0).contains(&lagna.sunrise_hour) {
            return bad("lagna.sunrise_hour must be in [0, 24)");
        }
        if !(lagna.hours_per_sign.is_finite() && lagna.hours_per_sign > 0.0) {
            return bad("lagna.hours_per_sign must be > 0");
        }

        let loc = &self.location;
        if !(-90.0..=90.0).contains(&loc.latitude_deg) {
            return bad("location.latitude_deg must be in [-90, 90]");
        }
        if !(-180.0..=180.0).contains(&loc.longitude_deg) {
            return bad("location.longitude_deg must be in [-180, 180]");
        }

        self.ephemeris
            .validate()
            .map_err(|e| ChartError::Config(e.to_string()))
    }
}

//! Built-in analytic ephemeris.

use std::ops::RangeInclusive;
use std::path::PathBuf;

use chrono::{Datelike, NaiveDateTime, Utc};
use log::{debug, info, warn};
use serde::Deserialize;

use crate::body::Body;
use crate::elements::ElementSet;
use crate::error::EphemerisError;
use crate::julian::{DAYS_PER_CENTURY, centuries_since_j2000};
use crate::kepler::{Vec3, heliocentric_position};
use crate::lunar::moon_longitude_j2000;
use crate::precession::{nutation_in_longitude_deg, precession_in_longitude_deg};
use crate::provider::EphemerisProvider;

/// Earliest year the provider will evaluate.
pub const MIN_YEAR: i32 = -3000;

/// Latest year the provider will evaluate.
pub const MAX_YEAR: i32 = 3000;

/// Years covered by the fit of the default element set.
pub const ACCURATE_YEARS: RangeInclusive<i32> = 1800..=2050;

/// Light travel time per AU, in days.
const LIGHT_TIME_DAYS_PER_AU: f64 = 0.005_775_518_3;

/// Constant of annual aberration applied to the Sun, degrees.
const SUN_ABERRATION_DEG: f64 = -20.4898 / 3600.0;

/// Provider configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EphemerisConfig {
    /// Element dataset to load instead of the built-in one.
    pub elements_path: Option<PathBuf>,
    /// Refer longitudes to the true equinox of date instead of J2000.
    pub precess_to_date: bool,
    /// Apply one light-time iteration to planet positions.
    pub light_time: bool,
}

impl Default for EphemerisConfig {
    fn default() -> Self {
        Self {
            elements_path: None,
            precess_to_date: false,
            light_time: true,
        }
    }
}

impl EphemerisConfig {
    pub fn validate(&self) -> Result<(), EphemerisError> {
        if let Some(path) = &self.elements_path {
            if path.as_os_str().is_empty() {
                return Err(EphemerisError::InvalidConfig(
                    "elements_path must not be empty",
                ));
            }
        }
        Ok(())
    }
}

/// Low-precision ephemeris from Keplerian elements and a truncated lunar
/// series.
///
/// Accuracy is a few arcminutes for the planets and Sun over the element
/// fit interval, which is far below a sign or nakshatra boundary except
/// for positions right on one. `Ephemeris` is [`Send`] + [`Sync`].
#[derive(Debug, Clone)]
pub struct Ephemeris {
    config: EphemerisConfig,
    elements: ElementSet,
}

impl Ephemeris {
    /// Load the configured dataset (or the built-in one).
    pub fn new(config: EphemerisConfig) -> Result<Self, EphemerisError> {
        config.validate()?;
        let elements = match &config.elements_path {
            Some(path) => {
                let set = ElementSet::load(path)?;
                info!(
                    "loaded {} element records from {}",
                    set.len(),
                    path.display()
                );
                set
            }
            None => {
                let set = ElementSet::builtin()?;
                info!("loaded built-in element set ({} records)", set.len());
                set
            }
        };
        Ok(Self { config, elements })
    }

    /// Use an already parsed dataset.
    pub fn with_elements(
        config: EphemerisConfig,
        elements: ElementSet,
    ) -> Result<Self, EphemerisError> {
        config.validate()?;
        Ok(Self { config, elements })
    }

    pub fn config(&self) -> &EphemerisConfig {
        &self.config
    }

    pub fn elements(&self) -> &ElementSet {
        &self.elements
    }

    fn check_range(instant: NaiveDateTime) -> Result<(), EphemerisError> {
        let year = instant.year();
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(EphemerisError::OutOfRange {
                year,
                min: MIN_YEAR,
                max: MAX_YEAR,
            });
        }
        if !ACCURATE_YEARS.contains(&year) {
            warn!(
                "year {year} is outside {}..={}; positions are approximate",
                ACCURATE_YEARS.start(),
                ACCURATE_YEARS.end()
            );
        }
        Ok(())
    }

    fn heliocentric(&self, body: Body, t: f64) -> Result<Vec3, EphemerisError> {
        Ok(heliocentric_position(&self.elements.get(body)?.at(t)))
    }

    /// Longitude in the mean ecliptic and equinox of J2000.
    fn j2000_longitude(&self, body: Body, t: f64) -> Result<f64, EphemerisError> {
        match body {
            Body::Earth => Err(EphemerisError::UnsupportedBody(body)),
            Body::Moon => Ok(moon_longitude_j2000(t)),
            Body::Sun => {
                let earth = self.heliocentric(Body::Earth, t)?;
                let lon = (-earth.y).atan2(-earth.x).to_degrees() + SUN_ABERRATION_DEG;
                Ok(lon.rem_euclid(360.0))
            }
            _ => {
                let earth = self.heliocentric(Body::Earth, t)?;
                let mut geo = self.heliocentric(body, t)?.sub(earth);
                if self.config.light_time {
                    let tau = LIGHT_TIME_DAYS_PER_AU * geo.norm() / DAYS_PER_CENTURY;
                    geo = self.heliocentric(body, t - tau)?.sub(earth);
                }
                Ok(geo.longitude_deg())
            }
        }
    }
}

impl EphemerisProvider for Ephemeris {
    fn observe(&self, body: Body, instant: NaiveDateTime) -> Result<f64, EphemerisError> {
        Self::check_range(instant)?;
        let t = centuries_since_j2000(instant);
        let mut lon = self.j2000_longitude(body, t)?;
        if self.config.precess_to_date {
            lon += precession_in_longitude_deg(t) + nutation_in_longitude_deg(t);
        }
        // rem_euclid can round a tiny negative up to 360.0
        let lon = match lon.rem_euclid(360.0) {
            wrapped if wrapped >= 360.0 => 0.0,
            wrapped => wrapped,
        };
        debug!("{body} at {instant}: tropical {lon:.4}");
        Ok(lon)
    }

    fn now(&self) -> NaiveDateTime {
        Utc::now().naive_utc()
    }
}

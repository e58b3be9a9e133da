//! Ephemeris provider contract and a built-in analytic ephemeris.
//!
//! The chart layer only needs one thing from an ephemeris: the geocentric
//! tropical ecliptic longitude of a body at an instant. That contract is
//! [`EphemerisProvider`]. [`Ephemeris`] implements it from a TOML dataset
//! of Keplerian elements (planets, Sun) and a truncated lunar series (Moon).
//!
//! Longitudes are referred to the mean ecliptic and equinox of J2000 unless
//! [`EphemerisConfig::precess_to_date`] is set.

pub mod body;
pub mod elements;
pub mod engine;
pub mod error;
pub mod fixed;
pub mod julian;
pub mod kepler;
pub mod lunar;
pub mod precession;
pub mod provider;

pub use body::{ALL_BODIES, Body};
pub use elements::{DEFAULT_ELEMENTS_TOML, ElementSet, ElementsAt, OrbitalElements};
pub use engine::{ACCURATE_YEARS, Ephemeris, EphemerisConfig, MAX_YEAR, MIN_YEAR};
pub use error::EphemerisError;
pub use fixed::FixedEphemeris;
pub use julian::{centuries_since_j2000, jd_from_datetime};
pub use provider::EphemerisProvider;

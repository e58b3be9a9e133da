//! Natal chart and transit services.
//!
//! [`ChartService`] turns a birth date and time into a small sidereal
//! profile: approximate lagna, Moon sign and nakshatra, and the running
//! Vimshottari dasha with its balance. [`TransitService`] reports the
//! present sidereal sign of the Sun, Jupiter, Saturn and "Rahu".
//!
//! Both services borrow an [`EphemerisProvider`](jyotishi_ephem::EphemerisProvider)
//! and a [`ChartConfig`]; neither keeps state between calls. Failures are
//! returned as [`ChartError`] or, at the tool boundary, as the tagged
//! [`ToolOutcome`].

pub mod chart;
pub mod config;
pub mod error;
pub mod query;
pub mod transit;
pub mod types;

pub use chart::ChartService;
pub use config::{AyanamsaSettings, ChartConfig, LagnaSettings, LocationSettings};
pub use error::{ChartError, ErrorKind};
pub use query::{BirthQuery, FORMAT_12H, FORMAT_24H, parse_birth_instant};
pub use transit::TransitService;
pub use types::{
    ChartOutcome, ChartResult, DashaSummary, LagnaPlacement, MoonPlacement, TRANSIT_BODIES,
    ToolOutcome, TransitBody, TransitOutcome, TransitSnapshot,
};

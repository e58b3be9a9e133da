//! Process-wide entry points for Vedic chart and transit requests.
//!
//! Holds one ephemeris and one [`ChartConfig`] for the life of the process
//! and exposes the two tool functions a conversational caller invokes.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use jyotishi_rs::*;
//!
//! // Optional: without this the first call loads defaults.
//! init(ChartConfig::default()).expect("context init");
//!
//! let outcome = calculate_vedic_chart("1991-06-18", "07:10 PM", "Mumbai");
//! println!("{}", serde_json::to_string_pretty(&outcome).unwrap());
//! ```

pub mod convenience;
pub mod error;
pub mod global;

pub use convenience::{calculate_vedic_chart, chart_at, get_current_transits, transits_at};
pub use error::JyotishiError;
pub use global::{config, ephemeris, init, is_initialized};

// Re-export the result and config types so callers need only this crate.
pub use jyotishi_chart::{
    BirthQuery, ChartConfig, ChartError, ChartOutcome, ChartResult, ErrorKind, ToolOutcome,
    TransitBody, TransitOutcome, TransitSnapshot,
};
pub use jyotishi_ephem::{Body, Ephemeris, EphemerisConfig, EphemerisError, EphemerisProvider};
pub use jyotishi_vedic_base::{Graha, Nakshatra, Rashi};

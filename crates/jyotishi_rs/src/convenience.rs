//! Tool functions over the global context.
//!
//! The two `*_outcome`-style functions never fail: every error, including
//! a failed context load, comes back as a tagged error outcome.

use chrono::NaiveDateTime;
use jyotishi_chart::{
    BirthQuery, ChartOutcome, ChartResult, ChartService, ToolOutcome, TransitOutcome,
    TransitService, TransitSnapshot,
};
use log::warn;

use crate::error::JyotishiError;
use crate::global::context;

fn failure<T>(e: JyotishiError) -> ToolOutcome<T> {
    warn!("jyotishi context unavailable: {e}");
    ToolOutcome::Error {
        kind: e.kind(),
        message: e.to_string(),
    }
}

/// Natal chart for a birth date (`YYYY-MM-DD`), time (`HH:MM` or
/// `HH:MM AM/PM`, UTC) and free-text location.
pub fn calculate_vedic_chart(date: &str, time: &str, location: &str) -> ChartOutcome {
    match context() {
        Ok(ctx) => ChartService::new(&ctx.ephemeris, &ctx.config)
            .calculate(&BirthQuery::new(date, time, location)),
        Err(e) => failure(e),
    }
}

/// Sidereal signs of the transit bodies right now.
pub fn get_current_transits() -> TransitOutcome {
    match context() {
        Ok(ctx) => TransitService::new(&ctx.ephemeris, &ctx.config).outcome(),
        Err(e) => failure(e),
    }
}

/// Typed chart for an already parsed birth instant.
pub fn chart_at(birth: NaiveDateTime) -> Result<ChartResult, JyotishiError> {
    let ctx = context()?;
    Ok(ChartService::new(&ctx.ephemeris, &ctx.config).build_chart(birth)?)
}

/// Typed transit snapshot for an arbitrary instant.
pub fn transits_at(instant: NaiveDateTime) -> Result<TransitSnapshot, JyotishiError> {
    let ctx = context()?;
    Ok(TransitService::new(&ctx.ephemeris, &ctx.config).snapshot_at(instant)?)
}

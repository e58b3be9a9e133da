//! Present-moment sidereal signs for a fixed set of bodies.

use chrono::{Datelike, NaiveDateTime};
use jyotishi_ephem::EphemerisProvider;
use jyotishi_vedic_base::{rashi_from_tropical, tropical_to_sidereal};
use log::debug;

use crate::config::ChartConfig;
use crate::error::ChartError;
use crate::types::{TRANSIT_BODIES, TransitOutcome, TransitSnapshot};

/// Computes [`TransitSnapshot`]s. Nothing is cached between calls.
pub struct TransitService<'a, P: ?Sized> {
    provider: &'a P,
    config: &'a ChartConfig,
}

impl<'a, P: EphemerisProvider + ?Sized> TransitService<'a, P> {
    pub fn new(provider: &'a P, config: &'a ChartConfig) -> Self {
        Self { provider, config }
    }

    /// Signs at the provider's present instant.
    pub fn current_transits(&self) -> Result<TransitSnapshot, ChartError> {
        self.snapshot_at(self.provider.now())
    }

    /// Signs at an arbitrary instant.
    pub fn snapshot_at(&self, instant: NaiveDateTime) -> Result<TransitSnapshot, ChartError> {
        let ayanamsha = self.config.ayanamsa.model().ayanamsha_deg(instant.year());
        let mut signs = Vec::with_capacity(TRANSIT_BODIES.len());
        for body in TRANSIT_BODIES {
            let tropical = self.provider.observe(body.source_body(), instant)?;
            let info = rashi_from_tropical(tropical, ayanamsha);
            debug!(
                "transit {body}: tropical {tropical:.4}, sidereal {:.4}, {}",
                tropical_to_sidereal(tropical, ayanamsha),
                info.rashi
            );
            signs.push((body, info.rashi));
        }
        Ok(TransitSnapshot::new(instant, signs))
    }

    /// [`current_transits`](Self::current_transits) as a tagged outcome.
    pub fn outcome(&self) -> TransitOutcome {
        self.current_transits().into()
    }
}

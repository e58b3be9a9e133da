//! Natal chart assembly.

use chrono::{Datelike, NaiveDateTime, Timelike};
use jyotishi_ephem::{Body, EphemerisProvider};
use jyotishi_vedic_base::{
    current_dasha, nakshatra_from_longitude, rashi_from_longitude, tropical_to_sidereal,
};
use log::{debug, info, warn};

use crate::config::ChartConfig;
use crate::error::ChartError;
use crate::query::BirthQuery;
use crate::transit::TransitService;
use crate::types::{ChartOutcome, ChartResult, DashaSummary, LagnaPlacement, MoonPlacement};

/// Builds [`ChartResult`]s from a provider and a configuration.
pub struct ChartService<'a, P: ?Sized> {
    provider: &'a P,
    config: &'a ChartConfig,
}

impl<'a, P: EphemerisProvider + ?Sized> ChartService<'a, P> {
    pub fn new(provider: &'a P, config: &'a ChartConfig) -> Self {
        Self { provider, config }
    }

    /// Natal snapshot for a birth instant (UTC), with transits for the
    /// provider's present instant embedded.
    pub fn build_chart(&self, birth: NaiveDateTime) -> Result<ChartResult, ChartError> {
        let ayanamsha = self.config.ayanamsa.model().ayanamsha_deg(birth.year());

        let moon_tropical = self.provider.observe(Body::Moon, birth)?;
        let sun_tropical = self.provider.observe(Body::Sun, birth)?;
        let moon_sid = tropical_to_sidereal(moon_tropical, ayanamsha);
        let sun_sid = tropical_to_sidereal(sun_tropical, ayanamsha);
        debug!("birth {birth}: ayanamsha {ayanamsha:.4}, moon {moon_sid:.4}, sun {sun_sid:.4}");

        let moon_rashi = rashi_from_longitude(moon_sid);
        let nakshatra = nakshatra_from_longitude(moon_sid);
        let dasha = current_dasha(moon_sid, nakshatra.nakshatra_index);
        let lagna = self.config.lagna.policy().estimate(sun_sid, birth.hour());
        debug!(
            "moon in {} / {} pada {}, dasha {} {:.3}y, lagna {}",
            moon_rashi.rashi,
            nakshatra.nakshatra,
            nakshatra.pada,
            dasha.lord,
            dasha.balance_years,
            lagna
        );

        let current_transits =
            TransitService::new(self.provider, self.config).current_transits()?;

        Ok(ChartResult {
            lagna: LagnaPlacement {
                sign: lagna,
                is_cusp: false,
            },
            moon: MoonPlacement {
                sign: moon_rashi.rashi,
                nakshatra: nakshatra.nakshatra,
                pada: nakshatra.pada,
                is_cusp: moon_rashi.is_sandhi,
                sidereal_longitude: moon_sid,
            },
            dasha: DashaSummary {
                current_lord: dasha.lord,
                balance_years: dasha.rounded_balance_years(),
                exact_balance_years: dasha.balance_years,
            },
            current_transits,
        })
    }

    /// Parse the query and build its chart. Every failure becomes an
    /// error outcome.
    pub fn calculate(&self, query: &BirthQuery) -> ChartOutcome {
        let loc = &self.config.location;
        info!(
            "chart request {} {} at '{}' (reference location {} {:.2}, {:.2})",
            query.date, query.time, query.location, loc.label, loc.latitude_deg, loc.longitude_deg
        );
        let result = query.instant().and_then(|birth| self.build_chart(birth));
        if let Err(e) = &result {
            warn!("chart request failed: {e}");
        }
        result.into()
    }
}

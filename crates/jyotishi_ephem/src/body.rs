//! Bodies known to the ephemeris.

use std::fmt::{Display, Formatter};

use crate::error::EphemerisError;

/// Bodies the provider can be asked about.
///
/// `Earth` names the Earth-Moon barycenter record of the element dataset;
/// it cannot be observed from the geocenter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Earth,
    Mars,
    Jupiter,
    Saturn,
}

/// All bodies in enum order.
pub const ALL_BODIES: [Body; 8] = [
    Body::Sun,
    Body::Moon,
    Body::Mercury,
    Body::Venus,
    Body::Earth,
    Body::Mars,
    Body::Jupiter,
    Body::Saturn,
];

impl Body {
    /// Display name ("Sun", "Jupiter", ...).
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
            Self::Mercury => "Mercury",
            Self::Venus => "Venus",
            Self::Earth => "Earth",
            Self::Mars => "Mars",
            Self::Jupiter => "Jupiter",
            Self::Saturn => "Saturn",
        }
    }

    /// Dataset key ("sun", "jupiter", ...).
    pub const fn key(self) -> &'static str {
        match self {
            Self::Sun => "sun",
            Self::Moon => "moon",
            Self::Mercury => "mercury",
            Self::Venus => "venus",
            Self::Earth => "earth",
            Self::Mars => "mars",
            Self::Jupiter => "jupiter",
            Self::Saturn => "saturn",
        }
    }

    /// Case-insensitive lookup by name.
    pub fn from_name(name: &str) -> Result<Self, EphemerisError> {
        let wanted = name.trim();
        ALL_BODIES
            .iter()
            .copied()
            .find(|b| b.key().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| EphemerisError::UnknownBody(wanted.to_string()))
    }

    /// Whether positions come from the Keplerian element dataset.
    pub const fn is_planet(self) -> bool {
        matches!(
            self,
            Self::Mercury | Self::Venus | Self::Mars | Self::Jupiter | Self::Saturn
        )
    }
}

impl Display for Body {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_name_is_case_insensitive() {
        assert_eq!(Body::from_name("Jupiter").unwrap(), Body::Jupiter);
        assert_eq!(Body::from_name("SATURN").unwrap(), Body::Saturn);
        assert_eq!(Body::from_name(" moon ").unwrap(), Body::Moon);
    }

    #[test]
    fn from_name_unknown() {
        let err = Body::from_name("pluto").unwrap_err();
        assert_eq!(err, EphemerisError::UnknownBody("pluto".into()));
    }

    #[test]
    fn keys_round_trip() {
        for b in ALL_BODIES {
            assert_eq!(Body::from_name(b.key()).unwrap(), b);
        }
    }

    #[test]
    fn planets() {
        assert!(Body::Jupiter.is_planet());
        assert!(!Body::Sun.is_planet());
        assert!(!Body::Moon.is_planet());
        assert!(!Body::Earth.is_planet());
    }
}

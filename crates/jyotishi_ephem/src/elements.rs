//! Orbital element dataset.
//!
//! Keplerian elements of the planets and the Earth-Moon barycenter, each
//! given as a value at J2000.0 plus a linear rate per Julian century. The
//! dataset is TOML; a default set is compiled into the crate and a custom
//! file can replace it.

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use serde::Deserialize;

use crate::body::Body;
use crate::error::EphemerisError;

/// Embedded default dataset.
pub const DEFAULT_ELEMENTS_TOML: &str = include_str!("../data/elements.toml");

/// Keplerian elements with per-century rates.
///
/// Each field is `[value_at_j2000, rate_per_century]`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OrbitalElements {
    pub semi_major_axis_au: [f64; 2],
    pub eccentricity: [f64; 2],
    pub inclination_deg: [f64; 2],
    pub mean_longitude_deg: [f64; 2],
    pub perihelion_longitude_deg: [f64; 2],
    pub ascending_node_deg: [f64; 2],
}

/// Elements evaluated at one epoch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementsAt {
    pub a_au: f64,
    pub e: f64,
    pub i_deg: f64,
    pub mean_longitude_deg: f64,
    pub perihelion_longitude_deg: f64,
    pub node_deg: f64,
}

fn linear(pair: [f64; 2], t: f64) -> f64 {
    pair[0] + pair[1] * t
}

impl OrbitalElements {
    /// Evaluate the elements `t` Julian centuries after J2000.0.
    pub fn at(&self, t: f64) -> ElementsAt {
        ElementsAt {
            a_au: linear(self.semi_major_axis_au, t),
            e: linear(self.eccentricity, t),
            i_deg: linear(self.inclination_deg, t),
            mean_longitude_deg: linear(self.mean_longitude_deg, t),
            perihelion_longitude_deg: linear(self.perihelion_longitude_deg, t),
            node_deg: linear(self.ascending_node_deg, t),
        }
    }

    fn validate(&self, key: &str) -> Result<(), EphemerisError> {
        let invalid = |reason| EphemerisError::InvalidElements {
            body: key.to_string(),
            reason,
        };
        let all = [
            self.semi_major_axis_au,
            self.eccentricity,
            self.inclination_deg,
            self.mean_longitude_deg,
            self.perihelion_longitude_deg,
            self.ascending_node_deg,
        ];
        if all.iter().flatten().any(|v| !v.is_finite()) {
            return Err(invalid("values must be finite"));
        }
        if self.semi_major_axis_au[0] <= 0.0 {
            return Err(invalid("semi-major axis must be positive"));
        }
        if !(0.0..1.0).contains(&self.eccentricity[0]) {
            return Err(invalid("eccentricity must be in [0, 1)"));
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ElementFile {
    bodies: BTreeMap<String, OrbitalElements>,
}

/// Validated element dataset keyed by body.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementSet {
    elements: HashMap<Body, OrbitalElements>,
}

impl ElementSet {
    /// Parse and validate a TOML dataset.
    ///
    /// Every key must name a body with Keplerian motion (a planet or
    /// `earth`), and `earth` must be present.
    pub fn from_toml_str(src: &str) -> Result<Self, EphemerisError> {
        let file: ElementFile = toml::from_str(src)?;
        let mut elements = HashMap::with_capacity(file.bodies.len());
        for (key, el) in &file.bodies {
            let body = Body::from_name(key)?;
            if !(body.is_planet() || body == Body::Earth) {
                return Err(EphemerisError::InvalidElements {
                    body: key.clone(),
                    reason: "only planets and earth take orbital elements",
                });
            }
            el.validate(key)?;
            elements.insert(body, *el);
        }
        if !elements.contains_key(&Body::Earth) {
            return Err(EphemerisError::MissingElements(Body::Earth));
        }
        Ok(Self { elements })
    }

    /// Load a dataset file.
    pub fn load(path: &Path) -> Result<Self, EphemerisError> {
        let src = std::fs::read_to_string(path)?;
        Self::from_toml_str(&src)
    }

    /// The compiled-in dataset.
    pub fn builtin() -> Result<Self, EphemerisError> {
        Self::from_toml_str(DEFAULT_ELEMENTS_TOML)
    }

    /// Elements for `body`.
    pub fn get(&self, body: Body) -> Result<&OrbitalElements, EphemerisError> {
        self.elements
            .get(&body)
            .ok_or(EphemerisError::MissingElements(body))
    }

    pub fn contains(&self, body: Body) -> bool {
        self.elements.contains_key(&body)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

//! Two-body orbit evaluation.
//!
//! Heliocentric position from Keplerian elements, in the mean ecliptic and
//! equinox of J2000, following the JPL "Approximate Positions of the Planets"
//! procedure.

use crate::elements::ElementsAt;

const KEPLER_TOL: f64 = 1e-12;
const KEPLER_MAX_ITER: usize = 50;

/// Heliocentric ecliptic rectangular coordinates in AU.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub fn sub(self, other: Vec3) -> Vec3 {
        Vec3 {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }

    pub fn norm(self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Ecliptic longitude in degrees, [0, 360).
    pub fn longitude_deg(self) -> f64 {
        self.y.atan2(self.x).to_degrees().rem_euclid(360.0)
    }
}

/// Solve Kepler's equation `M = E - e sin E` for `E` (radians).
pub fn solve_kepler(mean_anomaly_rad: f64, e: f64) -> f64 {
    let mut ecc_anomaly = mean_anomaly_rad;
    for _ in 0..KEPLER_MAX_ITER {
        let delta = (ecc_anomaly - e * ecc_anomaly.sin() - mean_anomaly_rad)
            / (1.0 - e * ecc_anomaly.cos());
        ecc_anomaly -= delta;
        if delta.abs() < KEPLER_TOL {
            break;
        }
    }
    ecc_anomaly
}

/// Heliocentric position for elements already evaluated at the epoch.
pub fn heliocentric_position(el: &ElementsAt) -> Vec3 {
    let e = el.e;
    let arg_perihelion = el.perihelion_longitude_deg - el.node_deg;

    // Mean anomaly reduced to [-180, 180]
    let mut m = (el.mean_longitude_deg - el.perihelion_longitude_deg).rem_euclid(360.0);
    if m > 180.0 {
        m -= 360.0;
    }

    let ecc_anomaly = solve_kepler(m.to_radians(), e);
    let xp = el.a_au * (ecc_anomaly.cos() - e);
    let yp = el.a_au * (1.0 - e * e).sqrt() * ecc_anomaly.sin();

    let (sw, cw) = arg_perihelion.to_radians().sin_cos();
    let (so, co) = el.node_deg.to_radians().sin_cos();
    let (si, ci) = el.i_deg.to_radians().sin_cos();

    Vec3 {
        x: (cw * co - sw * so * ci) * xp + (-sw * co - cw * so * ci) * yp,
        y: (cw * so + sw * co * ci) * xp + (-sw * so + cw * co * ci) * yp,
        z: (sw * si) * xp + (cw * si) * yp,
    }
}

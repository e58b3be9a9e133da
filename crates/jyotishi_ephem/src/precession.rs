//! Frame corrections between the J2000 ecliptic and the ecliptic of date.
//!
//! General precession: Capitaine, Wallace & Chapront 2003 (IAU 2006),
//! Table 1. Nutation in longitude: the four largest terms of the IAU 1980
//! series, good to about 0.5 arcsec.

const ARCSEC_PER_DEG: f64 = 3600.0;

// p_A coefficients in arcsec for T^1..T^5.
const P_A: [f64; 5] = [5028.796195, 1.1054348, 0.00007964, -0.000023857, -0.0000000383];

/// Accumulated precession in longitude since J2000, degrees, for `t` Julian
/// centuries of TT. Fixed points gain tropical longitude as `t` grows.
pub fn precession_in_longitude_deg(t: f64) -> f64 {
    let arcsec = P_A.iter().rev().fold(0.0, |acc, c| (acc + c) * t);
    arcsec / ARCSEC_PER_DEG
}

/// Nutation in longitude (delta psi), degrees.
pub fn nutation_in_longitude_deg(t: f64) -> f64 {
    let node = (125.04452 - 1934.136261 * t).to_radians();
    let sun = (280.4665 + 36000.7698 * t).to_radians();
    let moon = (218.3165 + 481267.8813 * t).to_radians();
    let arcsec = -17.20 * node.sin() - 1.32 * (2.0 * sun).sin() - 0.23 * (2.0 * moon).sin()
        + 0.21 * (2.0 * node).sin();
    arcsec / ARCSEC_PER_DEG
}

//! Tropical to sidereal longitude conversion.
//!
//! All longitudes in this crate pass through [`normalize_360`], which uses a
//! Euclidean remainder so negative differences land in [0, 360).

/// Wrap an angle into [0, 360) degrees.
///
/// A tiny negative input can round up to exactly 360.0; that case folds
/// back to 0.
pub fn normalize_360(deg: f64) -> f64 {
    let wrapped = deg.rem_euclid(360.0);
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Sidereal longitude `(tropical - ayanamsha) mod 360`, always in [0, 360).
pub fn tropical_to_sidereal(tropical_lon_deg: f64, ayanamsha_deg: f64) -> f64 {
    normalize_360(tropical_lon_deg - ayanamsha_deg)
}

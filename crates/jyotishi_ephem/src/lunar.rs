//! Truncated lunar theory.
//!
//! Geocentric ecliptic longitude of the Moon from the largest periodic
//! terms of ELP-2000/82 as tabulated by Meeus (Astronomical Algorithms,
//! ch. 47). The 24 terms kept here give roughly 0.05 deg accuracy.

use crate::precession::precession_in_longitude_deg;

/// `(D, M, M', F, coefficient in 1e-6 deg)`.
const LONGITUDE_TERMS: [(i8, i8, i8, i8, f64); 24] = [
    (0, 0, 1, 0, 6_288_774.0),
    (2, 0, -1, 0, 1_274_027.0),
    (2, 0, 0, 0, 658_314.0),
    (0, 0, 2, 0, 213_618.0),
    (0, 1, 0, 0, -185_116.0),
    (0, 0, 0, 2, -114_332.0),
    (2, 0, -2, 0, 58_793.0),
    (2, -1, -1, 0, 57_066.0),
    (2, 0, 1, 0, 53_322.0),
    (2, -1, 0, 0, 45_758.0),
    (0, 1, -1, 0, -40_923.0),
    (1, 0, 0, 0, -34_720.0),
    (0, 1, 1, 0, -30_383.0),
    (2, 0, 0, -2, 15_327.0),
    (0, 0, 1, 2, -12_528.0),
    (0, 0, 1, -2, 10_980.0),
    (4, 0, -1, 0, 10_675.0),
    (0, 0, 3, 0, 10_034.0),
    (4, 0, -2, 0, 8_548.0),
    (2, 1, -1, 0, -7_888.0),
    (2, 1, 0, 0, -6_766.0),
    (1, 0, -1, 0, -5_163.0),
    (1, 1, 0, 0, 4_987.0),
    (2, -1, 1, 0, 4_036.0),
];

/// Moon longitude referred to the mean equinox of date, degrees [0, 360).
pub fn moon_longitude_of_date(t: f64) -> f64 {
    let mean_lon = 218.316_447_7 + 481_267.881_234_21 * t;
    let elong = (297.850_192_1 + 445_267.111_403_4 * t).to_radians();
    let sun_anom = (357.529_109_2 + 35_999.050_290_9 * t).to_radians();
    let moon_anom = (134.963_396_4 + 477_198.867_505_5 * t).to_radians();
    let arg_lat = (93.272_095_0 + 483_202.017_523_3 * t).to_radians();
    // Decreasing eccentricity of Earth's orbit
    let ecc = 1.0 - 0.002_516 * t;

    let sum: f64 = LONGITUDE_TERMS
        .iter()
        .map(|&(d, m, mp, f, coef)| {
            let arg = f64::from(d) * elong
                + f64::from(m) * sun_anom
                + f64::from(mp) * moon_anom
                + f64::from(f) * arg_lat;
            coef * ecc.powi(i32::from(m.unsigned_abs())) * arg.sin()
        })
        .sum();

    (mean_lon + sum * 1e-6).rem_euclid(360.0)
}

/// Moon longitude referred to the mean ecliptic and equinox of J2000.
pub fn moon_longitude_j2000(t: f64) -> f64 {
    (moon_longitude_of_date(t) - precession_in_longitude_deg(t)).rem_euclid(360.0)
}

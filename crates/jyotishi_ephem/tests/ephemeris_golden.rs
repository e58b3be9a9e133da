//! Golden positions for the built-in ephemeris.
//!
//! Reference values are apparent geocentric longitudes in the J2000
//! ecliptic. Tolerances reflect the low-precision element set.

use std::io::Write;

use chrono::{Duration, NaiveDate, NaiveDateTime};
use jyotishi_ephem::{
    ALL_BODIES, Body, DEFAULT_ELEMENTS_TOML, Ephemeris, EphemerisConfig, EphemerisError,
    EphemerisProvider, MAX_YEAR, MIN_YEAR,
};
use proptest::prelude::*;

fn dt(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, min, 0)
        .unwrap()
}

fn ang_diff(a: f64, b: f64) -> f64 {
    let d = (a - b).rem_euclid(360.0);
    d.min(360.0 - d)
}

fn eph() -> Ephemeris {
    Ephemeris::new(EphemerisConfig::default()).unwrap()
}

#[test]
fn j2000_epoch_positions() {
    let eph = eph();
    let t = dt(2000, 1, 1, 12, 0);
    let cases = [
        (Body::Sun, 280.37, 0.05),
        (Body::Moon, 223.31, 0.3),
        (Body::Mars, 327.97, 0.2),
        (Body::Jupiter, 25.35, 0.2),
        (Body::Saturn, 40.24, 0.2),
    ];
    for (body, expected, tol) in cases {
        let lon = eph.observe(body, t).unwrap();
        assert!(
            ang_diff(lon, expected) < tol,
            "{body}: got {lon}, expected {expected}"
        );
    }
}

#[test]
fn march_equinox_2024() {
    let eph = eph();
    let t = dt(2024, 3, 20, 12, 0);
    // Sun crosses 0 deg of date near 03:06 UTC; in J2000 it sits just past 0
    let sun = eph.observe(Body::Sun, t).unwrap();
    assert!(ang_diff(sun, 0.03) < 0.1, "sun = {sun}");
    let jup = eph.observe(Body::Jupiter, t).unwrap();
    assert!(ang_diff(jup, 44.57) < 0.3, "jupiter = {jup}");
    let sat = eph.observe(Body::Saturn, t).unwrap();
    assert!(ang_diff(sat, 342.0) < 0.3, "saturn = {sat}");
}

#[test]
fn all_longitudes_in_range() {
    let eph = eph();
    for year in (1800..=2050).step_by(25) {
        let t = dt(year, 7, 15, 0, 0);
        for body in [
            Body::Sun,
            Body::Moon,
            Body::Mercury,
            Body::Venus,
            Body::Mars,
            Body::Jupiter,
            Body::Saturn,
        ] {
            let lon = eph.observe(body, t).unwrap();
            assert!((0.0..360.0).contains(&lon), "{body} {year}: {lon}");
        }
    }
}

#[test]
fn sun_advances_about_one_degree_per_day() {
    let eph = eph();
    let a = eph.observe(Body::Sun, dt(2015, 5, 1, 0, 0)).unwrap();
    let b = eph.observe(Body::Sun, dt(2015, 5, 2, 0, 0)).unwrap();
    let step = (b - a).rem_euclid(360.0);
    assert!((0.9..1.05).contains(&step), "step = {step}");
}

#[test]
fn custom_dataset_from_file() {
    // Keep only earth and jupiter
    let keep: String = DEFAULT_ELEMENTS_TOML
        .split("[bodies.")
        .skip(1)
        .filter(|chunk| chunk.starts_with("earth]") || chunk.starts_with("jupiter]"))
        .map(|chunk| format!("[bodies.{chunk}"))
        .collect();
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(keep.as_bytes()).unwrap();

    let eph = Ephemeris::new(EphemerisConfig {
        elements_path: Some(file.path().to_path_buf()),
        ..EphemerisConfig::default()
    })
    .unwrap();
    assert_eq!(eph.elements().len(), 2);

    let t = dt(2000, 1, 1, 12, 0);
    assert!(ang_diff(eph.observe(Body::Jupiter, t).unwrap(), 25.35) < 0.2);
    assert!(eph.observe(Body::Sun, t).is_ok());
    assert!(eph.observe(Body::Moon, t).is_ok());
    assert_eq!(
        eph.observe(Body::Saturn, t).unwrap_err(),
        EphemerisError::MissingElements(Body::Saturn)
    );
}

#[test]
fn missing_dataset_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Ephemeris::new(EphemerisConfig {
        elements_path: Some(dir.path().join("nope.toml")),
        ..EphemerisConfig::default()
    })
    .unwrap_err();
    assert!(matches!(err, EphemerisError::Io(_)), "{err}");
}

#[test]
fn far_past_rejected() {
    let err = eph().observe(Body::Moon, dt(-4000, 1, 1, 0, 0)).unwrap_err();
    assert!(matches!(err, EphemerisError::OutOfRange { year: -4000, .. }));
}

proptest! {
    #[test]
    fn prop_every_body_in_range_across_supported_years(
        year in MIN_YEAR..=MAX_YEAR,
        month in 1u32..=12,
        day in 1u32..=28,
        hour in 0u32..24,
    ) {
        let eph = eph();
        let t = dt(year, month, day, hour, 0);
        for body in ALL_BODIES.into_iter().filter(|b| *b != Body::Earth) {
            let lon = eph.observe(body, t).unwrap();
            prop_assert!((0.0..360.0).contains(&lon), "{} at {}: {}", body, t, lon);
        }
    }

    #[test]
    fn prop_moon_daily_motion(
        year in MIN_YEAR..MAX_YEAR,
        month in 1u32..=12,
        day in 1u32..=28,
        hour in 0u32..24,
    ) {
        let eph = eph();
        let t = dt(year, month, day, hour, 0);
        let a = eph.observe(Body::Moon, t).unwrap();
        let b = eph.observe(Body::Moon, t + Duration::days(1)).unwrap();
        let step = (b - a).rem_euclid(360.0);
        prop_assert!((11.0..16.0).contains(&step), "{}: {}", t, step);
    }
}

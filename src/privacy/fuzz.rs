//! GPS masking applied before a farm location is stored.
//!
//! Each call draws fresh noise from the thread-local RNG. Nothing about the
//! draw is kept, so a fuzzed coordinate cannot be mapped back to the input.

use rand::Rng;

use crate::error::{FarmError, Result};
use crate::models::Coordinate;

/// Default masking radius in meters.
pub const DEFAULT_FUZZ_RADIUS_M: f64 = 500.0;

/// Approximate length of one degree of latitude.
pub const METERS_PER_DEGREE: f64 = 111_000.0;

/// Beyond this latitude cos(lat) is too small for a bounded longitude offset.
pub const MAX_FUZZ_LATITUDE: f64 = 89.9;

/// Decimal places kept in the output (~1.1 m).
const OUTPUT_DECIMALS: u32 = 5;

/// Round a float to n decimal places.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10_f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Wrap a longitude into [-180, 180).
fn wrap_longitude(longitude: f64) -> f64 {
    (longitude + 180.0).rem_euclid(360.0) - 180.0
}

/// Offset a coordinate by uniform noise of up to `radius_meters` per axis.
///
/// Latitude moves by up to `radius / 111000` degrees; longitude by up to
/// `radius / (111000 * cos(lat))`. The latitude is clamped to [-90, 90], the
/// longitude wrapped into [-180, 180), and both rounded to 5 decimal places.
///
/// Errors when `|latitude| > 89.9` (the longitude offset blows up near the
/// poles) or when the radius is negative or not finite.
pub fn fuzz_location(latitude: f64, longitude: f64, radius_meters: f64) -> Result<Coordinate> {
    fuzz_location_with(&mut rand::thread_rng(), latitude, longitude, radius_meters)
}

fn fuzz_location_with<R: Rng + ?Sized>(
    rng: &mut R,
    latitude: f64,
    longitude: f64,
    radius_meters: f64,
) -> Result<Coordinate> {
    if !latitude.is_finite() || latitude.abs() > MAX_FUZZ_LATITUDE {
        return Err(FarmError::LatitudeOutOfRange(latitude));
    }
    if !longitude.is_finite() {
        return Err(FarmError::InvalidInput(format!(
            "longitude must be finite, got {}",
            longitude
        )));
    }
    if !radius_meters.is_finite() || radius_meters < 0.0 {
        return Err(FarmError::InvalidInput(format!(
            "fuzz radius must be a non-negative number of meters, got {}",
            radius_meters
        )));
    }

    let lat_noise: f64 = rng.gen_range(-1.0..=1.0);
    let lng_noise: f64 = rng.gen_range(-1.0..=1.0);

    let lat_offset = lat_noise * radius_meters / METERS_PER_DEGREE;
    let lng_offset =
        lng_noise * radius_meters / (METERS_PER_DEGREE * latitude.to_radians().cos());

    Ok(Coordinate {
        latitude: round_to((latitude + lat_offset).clamp(-90.0, 90.0), OUTPUT_DECIMALS),
        longitude: round_to(wrap_longitude(longitude + lng_offset), OUTPUT_DECIMALS),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(12.345678, 5), 12.34568);
        assert_eq!(round_to(-0.000004, 5), -0.0);
    }

    #[test]
    fn test_wrap_longitude() {
        assert!((wrap_longitude(180.5) - (-179.5)).abs() < 1e-9);
        assert!((wrap_longitude(-180.5) - 179.5).abs() < 1e-9);
        assert!((wrap_longitude(77.2) - 77.2).abs() < 1e-9);
    }

    #[test]
    fn test_offsets_bounded_by_radius() {
        let mut rng = StdRng::seed_from_u64(42);
        let (lat, lng) = (18.5204_f64, 73.8567);
        let max_lat = 500.0 / METERS_PER_DEGREE + 5e-6;
        let max_lng = 500.0 / (METERS_PER_DEGREE * lat.to_radians().cos()) + 5e-6;

        for _ in 0..1000 {
            let out = fuzz_location_with(&mut rng, lat, lng, 500.0).unwrap();
            assert!((out.latitude - lat).abs() <= max_lat);
            assert!((out.longitude - lng).abs() <= max_lng);
        }
    }

    #[test]
    fn test_zero_radius_only_rounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let out = fuzz_location_with(&mut rng, 12.3456789, 76.5432109, 0.0).unwrap();
        assert_eq!(out, Coordinate::new(12.34568, 76.54321));
    }

    #[test]
    fn test_output_has_five_decimals() {
        let mut rng = StdRng::seed_from_u64(1);
        let out = fuzz_location_with(&mut rng, 30.9, 75.85, 500.0).unwrap();
        assert!((out.latitude * 1e5 - (out.latitude * 1e5).round()).abs() < 1e-6);
        assert!((out.longitude * 1e5 - (out.longitude * 1e5).round()).abs() < 1e-6);
    }

    #[test]
    fn test_polar_latitude_rejected() {
        let mut rng = StdRng::seed_from_u64(3);
        assert!(matches!(
            fuzz_location_with(&mut rng, 90.0, 0.0, 500.0),
            Err(FarmError::LatitudeOutOfRange(_))
        ));
        assert!(matches!(
            fuzz_location_with(&mut rng, -89.95, 0.0, 500.0),
            Err(FarmError::LatitudeOutOfRange(_))
        ));
        assert!(fuzz_location_with(&mut rng, 89.9, 0.0, 500.0).is_ok());
    }

    #[test]
    fn test_large_radius_near_pole_stays_on_globe() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..500 {
            let north = fuzz_location_with(&mut rng, 89.9, 10.0, 50_000.0).unwrap();
            assert!(north.is_valid(), "{:?}", north);
            let south = fuzz_location_with(&mut rng, -89.9, 10.0, 50_000.0).unwrap();
            assert!(south.is_valid(), "{:?}", south);
        }
    }

    #[test]
    fn test_bad_radius_rejected() {
        let mut rng = StdRng::seed_from_u64(3);
        assert!(fuzz_location_with(&mut rng, 10.0, 10.0, -1.0).is_err());
        assert!(fuzz_location_with(&mut rng, 10.0, 10.0, f64::NAN).is_err());
        assert!(fuzz_location_with(&mut rng, 10.0, f64::INFINITY, 500.0).is_err());
    }
}

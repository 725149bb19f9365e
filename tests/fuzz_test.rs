use net_realization_rs::error::FarmError;
use net_realization_rs::models::Coordinate;
use net_realization_rs::privacy::{fuzz_location, DEFAULT_FUZZ_RADIUS_M, METERS_PER_DEGREE};

const TRIALS: usize = 2000;

#[test]
fn test_displacement_bounded_by_radius() {
    let farm = Coordinate::new(30.901, 75.857);
    let radius = DEFAULT_FUZZ_RADIUS_M;

    // Noise is uniform per axis, so the worst case is the corner of the box.
    // Slack covers the 111 km/degree approximation and 5-decimal rounding.
    let max_m = radius * std::f64::consts::SQRT_2 * 1.01 + 2.0;

    let mut within_radius = 0;
    for _ in 0..TRIALS {
        let fuzzed = fuzz_location(farm.latitude, farm.longitude, radius).unwrap();
        let d = farm.haversine_m(&fuzzed);
        assert!(d <= max_m, "moved {} m", d);
        if d <= radius * 1.01 {
            within_radius += 1;
        }
    }

    // A disc covers pi/4 (~78%) of the square noise box.
    let share = within_radius as f64 / TRIALS as f64;
    assert!(share > 0.7, "only {:.2} of draws within radius", share);
}

#[test]
fn test_latitude_offset_bound() {
    let (lat, lng) = (-33.87, 151.21);
    let bound = 300.0 / METERS_PER_DEGREE + 5e-6;

    for _ in 0..TRIALS {
        let fuzzed = fuzz_location(lat, lng, 300.0).unwrap();
        assert!((fuzzed.latitude - lat).abs() <= bound);
    }
}

#[test]
fn test_output_differs_from_input() {
    let (lat, lng) = (19.076, 72.8777);
    let unchanged = (0..200)
        .map(|_| fuzz_location(lat, lng, 500.0).unwrap())
        .filter(|c| c.latitude == lat && c.longitude == lng)
        .count();
    assert!(unchanged <= 1);
}

#[test]
fn test_not_reversible() {
    // The same input gives a fresh draw every time; no seed or offset is
    // retained, so an output alone cannot identify the input.
    let (lat, lng) = (26.9124, 75.7873);
    let outputs: Vec<Coordinate> = (0..50)
        .map(|_| fuzz_location(lat, lng, 500.0).unwrap())
        .collect();

    let distinct = outputs
        .iter()
        .enumerate()
        .filter(|(i, c)| !outputs[..*i].contains(*c))
        .count();
    assert!(distinct > 45);
}

#[test]
fn test_output_precision_is_five_decimals() {
    for _ in 0..100 {
        let c = fuzz_location(12.9716, 77.5946, 500.0).unwrap();
        for v in [c.latitude, c.longitude] {
            let scaled = v * 1e5;
            assert!((scaled - scaled.round()).abs() < 1e-6, "{} has extra precision", v);
        }
    }
}

#[test]
fn test_poles_rejected() {
    for lat in [90.0, -90.0, 89.95, f64::NAN] {
        assert!(matches!(
            fuzz_location(lat, 10.0, 500.0),
            Err(FarmError::LatitudeOutOfRange(_))
        ));
    }
}

#[test]
fn test_high_latitude_stays_finite() {
    let c = fuzz_location(89.9, 10.0, 500.0).unwrap();
    assert!(c.latitude.is_finite() && c.longitude.is_finite());
    assert!(c.is_valid());
}

#[test]
fn test_wide_radius_near_pole_never_passes_ninety() {
    for _ in 0..TRIALS {
        let c = fuzz_location(89.9, 10.0, 50_000.0).unwrap();
        assert!(c.latitude <= 90.0, "latitude {}", c.latitude);
        assert!(c.is_valid());
    }
}

#[test]
fn test_coordinate_fuzzed_uses_default_radius() {
    let farm = Coordinate::new(22.5726, 88.3639);
    let fuzzed = farm.fuzzed().unwrap();
    let bound = DEFAULT_FUZZ_RADIUS_M / METERS_PER_DEGREE + 5e-6;
    assert!((fuzzed.latitude - farm.latitude).abs() <= bound);
}

use assert_float_eq::assert_float_absolute_eq;

use net_realization_rs::engine::{compute_quality_loss, known_crops, DEFAULT_DECAY_RATE};
use net_realization_rs::models::DecayInput;

#[test]
fn test_zero_hours_is_always_zero() {
    for crop in known_crops() {
        for temp in [-10.0, 0.0, 20.0, 35.0, 50.0] {
            assert_eq!(compute_quality_loss(crop, temp, 65.0, 0.0), 0.0);
        }
    }
}

#[test]
fn test_result_always_in_unit_interval() {
    let crops = ["Tomato", "onion", "POTATO", "Cotton", "wheat", "Rice", "Mango"];
    let temps = [-40.0, 0.0, 20.0, 30.0, 31.0, 45.0, 60.0, 200.0];
    let hours = [0.0, 0.5, 10.0, 100.0, 1_000.0, 1e9];

    for crop in crops {
        for &t in &temps {
            for &h in &hours {
                let loss = compute_quality_loss(crop, t, 70.0, h);
                assert!(
                    (0.0..=1.0).contains(&loss),
                    "{} at {}°C for {} h gave {}",
                    crop,
                    t,
                    h,
                    loss
                );
            }
        }
    }
}

#[test]
fn test_monotonic_in_temperature_above_baseline() {
    for crop in known_crops() {
        let mut previous = compute_quality_loss(crop, 20.0, 65.0, 5.0);
        for step in 1..=30 {
            let t = 20.0 + step as f64;
            let loss = compute_quality_loss(crop, t, 65.0, 5.0);
            assert!(loss > previous, "{} not increasing at {}°C", crop, t);
            previous = loss;
        }
    }
}

#[test]
fn test_tomato_at_baseline() {
    // 0.005 * 1.0 * 10
    assert_float_absolute_eq!(compute_quality_loss("Tomato", 20.0, 65.0, 10.0), 0.05, 1e-12);
}

#[test]
fn test_tomato_in_heat() {
    // 0.005 * 2^2 * (1 + 10 * 0.1) * 1
    assert_float_absolute_eq!(compute_quality_loss("Tomato", 40.0, 65.0, 1.0), 0.04, 1e-12);
}

#[test]
fn test_cotton_skips_heat_penalty() {
    // 0.00001 * 4 * 100, no high-temp multiplier for non-perishables
    assert_float_absolute_eq!(compute_quality_loss("Cotton", 40.0, 65.0, 100.0), 0.004, 1e-12);
}

#[test]
fn test_unknown_crop_matches_default_rate() {
    let loss = compute_quality_loss("Jackfruit", 20.0, 65.0, 10.0);
    assert_float_absolute_eq!(loss, DEFAULT_DECAY_RATE * 10.0, 1e-12);
}

#[test]
fn test_crop_name_case_does_not_matter() {
    let a = compute_quality_loss("tomato", 33.0, 65.0, 7.0);
    let b = compute_quality_loss("TOMATO", 33.0, 65.0, 7.0);
    let c = DecayInput::new("Tomato", 33.0, 65.0, 7.0).quality_loss();
    assert_eq!(a, b);
    assert_eq!(a, c);
}

#[test]
fn test_humidity_is_accepted_but_unused() {
    let base = compute_quality_loss("Potato", 35.0, 0.0, 48.0);
    for humidity in [20.0, 50.0, 80.0, 100.0] {
        assert_eq!(compute_quality_loss("Potato", 35.0, humidity, 48.0), base);
    }
}

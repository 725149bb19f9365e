use assert_float_eq::assert_float_absolute_eq;

use net_realization_rs::engine::{
    compute_net_realization, compute_net_realization_checked, compute_quality_loss,
    RealizationCalculator, TRANSPORT_RATE_PER_KM,
};
use net_realization_rs::models::PositiveQuantity;

#[test]
fn test_reference_breakdown() {
    let b = compute_net_realization(2000.0, 50.0, 100.0, 0.02);

    assert_float_absolute_eq!(b.gross_revenue, 100_000.0, 1e-9);
    assert_float_absolute_eq!(b.transport_cost, 1_500.0, 1e-9);
    assert_float_absolute_eq!(b.spoilage_penalty, 2_000.0, 1e-9);
    assert_float_absolute_eq!(b.net_profit, 96_500.0, 1e-9);
    assert_float_absolute_eq!(b.net_profit_per_unit, 1_930.0, 1e-9);
}

#[test]
fn test_net_is_gross_minus_deductions() {
    let b = compute_net_realization(1850.0, 37.5, 212.0, 0.137);
    assert_float_absolute_eq!(b.net_profit, b.gross_revenue - b.total_deductions(), 1e-9);
    assert_float_absolute_eq!(b.net_profit_per_unit * 37.5, b.net_profit, 1e-6);
}

#[test]
fn test_transport_uses_fixed_tariff() {
    let b = compute_net_realization(0.0, 1.0, 80.0, 0.0);
    assert_float_absolute_eq!(b.transport_cost, 80.0 * TRANSPORT_RATE_PER_KM, 1e-9);
}

#[test]
fn test_no_internal_rounding() {
    let b = compute_net_realization(1999.99, 3.0, 1.1, 0.0);
    assert_float_absolute_eq!(b.net_profit, 1999.99 * 3.0 - 16.5, 1e-9);
    assert!(b.net_profit.fract() != 0.0);
}

#[test]
fn test_zero_yield_is_unhandled_by_the_raw_calculator() {
    let b = compute_net_realization(2000.0, 0.0, 100.0, 0.02);
    assert!(b.net_profit_per_unit.is_infinite() || b.net_profit_per_unit.is_nan());
}

#[test]
fn test_checked_boundary_is_stricter_than_raw_calculator() {
    // The raw function happily divides by zero; the typed boundary refuses it.
    assert!(PositiveQuantity::new(0.0).is_err());
    assert!(PositiveQuantity::new(-10.0).is_err());

    let yield_units = PositiveQuantity::new(50.0).unwrap();
    let checked = compute_net_realization_checked(2000.0, yield_units, 100.0, 0.02);
    assert!(checked.net_profit_per_unit.is_finite());
}

#[test]
fn test_decay_feeds_calculator() {
    // 3 h transit for tomato at 40°C: 0.005 * 4 * 2 * 3 = 0.12
    let loss = compute_quality_loss("Tomato", 40.0, 70.0, 3.0);
    let b = RealizationCalculator::default().breakdown(1500.0, 20.0, 90.0, loss);

    assert_float_absolute_eq!(loss, 0.12, 1e-12);
    assert_float_absolute_eq!(b.spoilage_penalty, 30_000.0 * 0.12, 1e-9);
    assert_float_absolute_eq!(b.net_profit, 30_000.0 - 1_350.0 - 3_600.0, 1e-9);
}

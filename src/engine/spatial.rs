use crate::engine::constants::*;
use crate::engine::decay::compute_quality_loss;
use crate::engine::realization::RealizationCalculator;
use crate::models::{Coordinate, HarvestConditions, Mandi, MandiEvaluation};

/// Hours on the road at `TRANSIT_SPEED_KMH`.
#[inline]
pub fn estimated_transit_hours(distance_km: f64) -> f64 {
    distance_km / TRANSIT_SPEED_KMH
}

/// Score one mandi at a known distance.
pub fn evaluate_mandi(
    conditions: &HarvestConditions,
    mandi: &Mandi,
    distance_km: f64,
) -> MandiEvaluation {
    let transit_hours = estimated_transit_hours(distance_km);
    let loss = compute_quality_loss(
        &conditions.crop,
        conditions.temperature_c,
        conditions.humidity_percent,
        transit_hours,
    );

    let calculator = mandi
        .transport_rate_per_km
        .map(RealizationCalculator::with_rate)
        .unwrap_or_default();
    let breakdown = calculator.breakdown_checked(
        mandi.current_price,
        conditions.yield_units,
        distance_km,
        loss,
    );

    MandiEvaluation {
        mandi_name: mandi.name.clone(),
        distance_km,
        estimated_transit_hours: transit_hours,
        market_price: mandi.current_price,
        quality_loss_fraction: loss,
        breakdown,
        is_dead_zone: loss > DEAD_ZONE_LOSS_FRACTION,
        is_recommended: false,
    }
}

/// Evaluate every reachable mandi and rank by total net profit.
///
/// Mandis beyond `MAX_MANDI_DISTANCE_KM` are dropped unless the list has a
/// single entry. Mandis whose distance cannot be resolved are skipped. The
/// best entry is flagged `is_recommended`.
pub fn evaluate_mandis(
    conditions: &HarvestConditions,
    farm: Option<&Coordinate>,
    mandis: &[Mandi],
) -> Vec<MandiEvaluation> {
    let only_option = mandis.len() == 1;

    let mut results: Vec<MandiEvaluation> = mandis
        .iter()
        .filter_map(|mandi| {
            let Some(distance) = mandi.resolve_distance_km(farm) else {
                tracing::warn!("Skipping mandi '{}': no distance or location", mandi.name);
                return None;
            };

            if distance > MAX_MANDI_DISTANCE_KM && !only_option {
                tracing::debug!(
                    "Skipping mandi '{}': {:.0} km exceeds {:.0} km limit",
                    mandi.name,
                    distance,
                    MAX_MANDI_DISTANCE_KM
                );
                return None;
            }

            Some(evaluate_mandi(conditions, mandi, distance))
        })
        .collect();

    results.sort_by(|a, b| {
        b.breakdown
            .net_profit
            .partial_cmp(&a.breakdown.net_profit)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    if let Some(best) = results.first_mut() {
        best.is_recommended = true;
    }

    results
}

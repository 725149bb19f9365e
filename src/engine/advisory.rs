use std::fmt;

use serde::Serialize;

use crate::engine::shock::{detect_market_shock, detect_volume_shock, ShockAssessment};
use crate::engine::spatial::evaluate_mandis;
use crate::models::{Coordinate, HarvestConditions, Mandi, MandiEvaluation, PriceRecord};

/// Headline recommendation for the farmer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Verdict {
    /// Best market is reachable and profitable.
    Sell,
    /// A shock is active; do not ship now.
    Wait,
    /// Nothing alarming, but no clean selling window either.
    Hold,
}

impl Verdict {
    pub fn label(&self) -> &'static str {
        match self {
            Verdict::Sell => "SELL",
            Verdict::Wait => "WAIT",
            Verdict::Hold => "HOLD",
        }
    }

    pub fn summary(&self) -> &'static str {
        match self {
            Verdict::Sell => "Optimal window detected",
            Verdict::Wait => "Sub-optimal conditions",
            Verdict::Hold => "Monitor conditions closely",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Everything needed to render a recommendation.
#[derive(Debug, Clone, Serialize)]
pub struct Advisory {
    pub verdict: Verdict,
    pub evaluations: Vec<MandiEvaluation>,
    pub price_shock: Option<ShockAssessment>,
    pub volume_shock: Option<ShockAssessment>,
}

impl Advisory {
    /// The top-ranked mandi, if any were reachable.
    pub fn best(&self) -> Option<&MandiEvaluation> {
        self.evaluations.iter().find(|e| e.is_recommended)
    }

    /// Active shocks, price first.
    pub fn active_shocks(&self) -> impl Iterator<Item = &ShockAssessment> {
        self.price_shock
            .iter()
            .chain(self.volume_shock.iter())
            .filter(|s| s.is_shock)
    }
}

/// Derive the verdict from ranked evaluations and shock checks.
///
/// Any active shock -> Wait. Otherwise a recommended, non-dead-zone mandi
/// with positive net profit -> Sell. Anything else -> Hold.
pub fn recommend(evaluations: &[MandiEvaluation], shocks: &[&ShockAssessment]) -> Verdict {
    if shocks.iter().any(|s| s.is_shock) {
        return Verdict::Wait;
    }

    match evaluations.iter().find(|e| e.is_recommended) {
        Some(best) if !best.is_dead_zone && best.breakdown.net_profit > 0.0 => Verdict::Sell,
        _ => Verdict::Hold,
    }
}

/// Price and volume shock checks over a daily history.
///
/// The last record is treated as today's price and volume; the earlier
/// records form the baseline. Volume is only checked when both today and
/// the baseline carry volumes.
pub fn assess_history(
    history: &[PriceRecord],
) -> (Option<ShockAssessment>, Option<ShockAssessment>) {
    let Some((today, baseline)) = history.split_last() else {
        return (None, None);
    };

    let prices: Vec<f64> = baseline.iter().map(|r| r.price).collect();
    let price_shock = detect_market_shock(today.price, &prices);

    let volumes: Vec<f64> = baseline.iter().filter_map(|r| r.volume).collect();
    let volume_shock = match today.volume {
        Some(current) if !volumes.is_empty() => {
            let average = volumes.iter().sum::<f64>() / volumes.len() as f64;
            Some(detect_volume_shock(current, average))
        }
        _ => None,
    };

    (Some(price_shock), volume_shock)
}

/// Run mandi ranking and shock checks, then pick a verdict.
pub fn build_advisory(
    conditions: &HarvestConditions,
    farm: Option<&Coordinate>,
    mandis: &[Mandi],
    history: &[PriceRecord],
) -> Advisory {
    let evaluations = evaluate_mandis(conditions, farm, mandis);
    let (price_shock, volume_shock) = assess_history(history);

    let shocks: Vec<&ShockAssessment> = price_shock.iter().chain(volume_shock.iter()).collect();
    let verdict = recommend(&evaluations, &shocks);

    tracing::info!(
        verdict = %verdict,
        mandis = evaluations.len(),
        "advisory built"
    );

    Advisory {
        verdict,
        evaluations,
        price_shock,
        volume_shock,
    }
}

use crate::engine::constants::TRANSPORT_RATE_PER_KM;
use crate::models::{PositiveQuantity, PriceBreakdown};

/// Linear net-realization model with a per-km transport tariff.
#[derive(Debug, Clone)]
pub struct RealizationCalculator {
    pub transport_rate_per_km: f64,
}

impl Default for RealizationCalculator {
    fn default() -> Self {
        Self {
            transport_rate_per_km: TRANSPORT_RATE_PER_KM,
        }
    }
}

impl RealizationCalculator {
    pub fn with_rate(transport_rate_per_km: f64) -> Self {
        Self {
            transport_rate_per_km,
        }
    }

    /// Profit breakdown for selling `yield_units` at `price_per_unit`.
    ///
    /// Formula: net = price * yield - distance * rate - price * yield * loss.
    /// No validation: a zero yield gives a NaN or infinite per-unit figure.
    pub fn breakdown(
        &self,
        price_per_unit: f64,
        yield_units: f64,
        distance_km: f64,
        quality_loss_fraction: f64,
    ) -> PriceBreakdown {
        let gross_revenue = price_per_unit * yield_units;
        let transport_cost = distance_km * self.transport_rate_per_km;
        let spoilage_penalty = gross_revenue * quality_loss_fraction;
        let net_profit = gross_revenue - transport_cost - spoilage_penalty;

        PriceBreakdown {
            gross_revenue,
            transport_cost,
            spoilage_penalty,
            net_profit,
            net_profit_per_unit: net_profit / yield_units,
        }
    }

    /// Same as [`breakdown`](Self::breakdown) with the yield checked up front.
    pub fn breakdown_checked(
        &self,
        price_per_unit: f64,
        yield_units: PositiveQuantity,
        distance_km: f64,
        quality_loss_fraction: f64,
    ) -> PriceBreakdown {
        self.breakdown(
            price_per_unit,
            yield_units.get(),
            distance_km,
            quality_loss_fraction,
        )
    }
}

/// Net realization at the standard tariff.
pub fn compute_net_realization(
    price_per_unit: f64,
    yield_units: f64,
    distance_km: f64,
    quality_loss_fraction: f64,
) -> PriceBreakdown {
    RealizationCalculator::default().breakdown(
        price_per_unit,
        yield_units,
        distance_km,
        quality_loss_fraction,
    )
}

/// Net realization at the standard tariff, with a yield that cannot be zero.
pub fn compute_net_realization_checked(
    price_per_unit: f64,
    yield_units: PositiveQuantity,
    distance_km: f64,
    quality_loss_fraction: f64,
) -> PriceBreakdown {
    RealizationCalculator::default().breakdown_checked(
        price_per_unit,
        yield_units,
        distance_km,
        quality_loss_fraction,
    )
}

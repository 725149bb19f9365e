use serde::{Deserialize, Serialize};

use crate::models::{Coordinate, PositiveQuantity};

/// Gross-to-net profit breakdown for one sale. Values are unrounded.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PriceBreakdown {
    pub gross_revenue: f64,
    pub transport_cost: f64,
    pub spoilage_penalty: f64,
    pub net_profit: f64,
    pub net_profit_per_unit: f64,
}

impl PriceBreakdown {
    /// Total deductions (transport + spoilage).
    #[inline]
    pub fn total_deductions(&self) -> f64 {
        self.transport_cost + self.spoilage_penalty
    }
}

/// A destination market as listed in the mandi file.
///
/// Either `distance_km` or `location` must be present for the mandi to be
/// evaluated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mandi {
    pub name: String,

    /// Price per quintal.
    pub current_price: f64,

    #[serde(default)]
    pub distance_km: Option<f64>,

    #[serde(default)]
    pub location: Option<Coordinate>,

    /// Overrides the standard per-km tariff for this route.
    #[serde(default)]
    pub transport_rate_per_km: Option<f64>,
}

impl Mandi {
    /// Canonical key for lookups (lowercase name).
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }

    /// Road distance if listed, else straight-line distance from `farm`.
    pub fn resolve_distance_km(&self, farm: Option<&Coordinate>) -> Option<f64> {
        match (self.distance_km, self.location.as_ref(), farm) {
            (Some(d), _, _) => Some(d),
            (None, Some(loc), Some(farm)) => Some(farm.distance_km(loc)),
            _ => None,
        }
    }
}

/// The harvest being taken to market.
#[derive(Debug, Clone)]
pub struct HarvestConditions {
    pub crop: String,
    /// Yield in quintals.
    pub yield_units: PositiveQuantity,
    pub temperature_c: f64,
    pub humidity_percent: f64,
}

/// One mandi scored for a given harvest.
#[derive(Debug, Clone, Serialize)]
pub struct MandiEvaluation {
    pub mandi_name: String,
    pub distance_km: f64,
    pub estimated_transit_hours: f64,
    pub market_price: f64,
    pub quality_loss_fraction: f64,
    pub breakdown: PriceBreakdown,
    pub is_dead_zone: bool,
    pub is_recommended: bool,
}

/// One row of a daily price history file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceRecord {
    pub date: String,
    pub price: f64,
    #[serde(default)]
    pub volume: Option<f64>,
}

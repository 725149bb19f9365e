use serde::{Deserialize, Serialize};
use statrs::statistics::Statistics;

use crate::engine::constants::{GLUT_VOLUME_RATIO, SHOCK_Z_THRESHOLD};

/// Market condition classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MarketStatus {
    Normal,
    ShockAlert,
    GlutWarning,
}

/// Outcome of a price or volume shock check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShockAssessment {
    pub status: MarketStatus,
    pub message: String,
    pub is_shock: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pivot_advice: Option<String>,
}

impl ShockAssessment {
    fn normal(message: &str) -> Self {
        Self {
            status: MarketStatus::Normal,
            message: message.to_string(),
            is_shock: false,
            z_score: None,
            pivot_advice: None,
        }
    }
}

/// Flag a price crash: current price more than two standard deviations
/// below the mean of the recent history.
///
/// Uses the sample standard deviation. Needs at least two samples; a flat
/// history is reported as stable.
pub fn detect_market_shock(current_price: f64, price_history: &[f64]) -> ShockAssessment {
    if price_history.len() < 2 {
        return ShockAssessment::normal("Insufficient data for shock analysis.");
    }

    let mean = price_history.iter().mean();
    let std_dev = price_history.iter().std_dev();

    if std_dev == 0.0 {
        return ShockAssessment::normal("Market is perfectly stable.");
    }

    let z_score = (current_price - mean) / std_dev;
    tracing::debug!(current_price, mean, std_dev, z_score, "price shock check");

    if z_score < SHOCK_Z_THRESHOLD {
        return ShockAssessment {
            status: MarketStatus::ShockAlert,
            message: format!(
                "CRITICAL: Price crashed by {:.2}σ below the {}-day average.",
                z_score.abs(),
                price_history.len()
            ),
            is_shock: true,
            z_score: Some(z_score),
            pivot_advice: Some(
                "Mandi prices just crashed. Hold the harvest in cold storage or sell to a local processor."
                    .to_string(),
            ),
        };
    }

    ShockAssessment {
        z_score: Some(z_score),
        ..ShockAssessment::normal("Prices are within normal volatility ranges.")
    }
}

/// Flag a market glut: arrivals more than twice the average volume.
pub fn detect_volume_shock(current_volume: f64, average_volume: f64) -> ShockAssessment {
    if current_volume > GLUT_VOLUME_RATIO * average_volume {
        return ShockAssessment {
            status: MarketStatus::GlutWarning,
            message: "High volume detected at neighboring mandis. Price crash likely.".to_string(),
            is_shock: true,
            z_score: None,
            pivot_advice: Some("Sell now or wait 3 days for the glut to clear.".to_string()),
        };
    }

    ShockAssessment::normal("Volume is normal.")
}

use serde::{Deserialize, Serialize};

/// Per-crop spoilage rate at the 20°C baseline.
///
/// The rate is a fraction of value lost per hour and must lie in `[0, 1)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CropDecayProfile {
    pub crop_name: String,
    pub base_decay_rate_per_hour: f64,
}

impl CropDecayProfile {
    pub fn new(crop_name: impl Into<String>, base_decay_rate_per_hour: f64) -> Self {
        Self {
            crop_name: crop_name.into(),
            base_decay_rate_per_hour,
        }
    }

    /// Basic validation: rate within `[0, 1)`.
    pub fn is_valid(&self) -> bool {
        (0.0..1.0).contains(&self.base_decay_rate_per_hour)
    }

    /// Canonical key for lookups (title-cased name).
    pub fn key(&self) -> String {
        normalize_crop_name(&self.crop_name)
    }
}

/// Inputs to a single quality-loss estimate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecayInput {
    pub crop_type: String,
    pub temperature_c: f64,
    /// Accepted for callers that already carry it; not used by the current formula.
    pub humidity_percent: f64,
    pub hours_elapsed: f64,
}

impl DecayInput {
    pub fn new(
        crop_type: impl Into<String>,
        temperature_c: f64,
        humidity_percent: f64,
        hours_elapsed: f64,
    ) -> Self {
        Self {
            crop_type: crop_type.into(),
            temperature_c,
            humidity_percent,
            hours_elapsed,
        }
    }

    /// Fraction of value lost, in `[0, 1]`.
    pub fn quality_loss(&self) -> f64 {
        crate::engine::compute_quality_loss(
            &self.crop_type,
            self.temperature_c,
            self.humidity_percent,
            self.hours_elapsed,
        )
    }
}

/// Title-case a crop name: first letter upper, rest lower ("tOMATO" -> "Tomato").
pub fn normalize_crop_name(name: &str) -> String {
    let trimmed = name.trim();
    let mut chars = trimmed.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

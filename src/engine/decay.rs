use strsim::jaro_winkler;

use crate::engine::constants::*;
use crate::models::{normalize_crop_name, CropDecayProfile};

/// Minimum similarity for an unknown crop to get a suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.7;

/// Look up the decay profile for a crop (case-insensitive).
///
/// Unknown crops get `DEFAULT_DECAY_RATE` under their normalized name.
pub fn decay_profile(crop_type: &str) -> CropDecayProfile {
    let name = normalize_crop_name(crop_type);
    match DECAY_RATES.get(name.as_str()) {
        Some(&rate) => CropDecayProfile::new(name, rate),
        None => {
            if tracing::enabled!(tracing::Level::DEBUG) {
                match suggest_crop(&name) {
                    Some(s) => tracing::debug!(
                        "Unknown crop '{}' (did you mean '{}'?), using default rate",
                        name,
                        s
                    ),
                    None => tracing::debug!("Unknown crop '{}', using default rate", name),
                }
            }
            CropDecayProfile::new(name, DEFAULT_DECAY_RATE)
        }
    }
}

/// Whether the crop has its own entry in the rate table.
pub fn is_known_crop(crop_type: &str) -> bool {
    DECAY_RATES.contains_key(normalize_crop_name(crop_type).as_str())
}

/// Known crops similar to `input` (Jaro-Winkler), best match first.
pub fn crop_suggestions(input: &str) -> Vec<(&'static str, f64)> {
    let needle = input.trim().to_lowercase();
    let mut candidates: Vec<(&'static str, f64)> = DECAY_RATES
        .keys()
        .map(|&c| (c, jaro_winkler(&c.to_lowercase(), &needle)))
        .filter(|(_, score)| *score > SUGGESTION_THRESHOLD)
        .collect();

    candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    candidates
}

/// Closest known crop, if any is close enough.
pub fn suggest_crop(input: &str) -> Option<&'static str> {
    crop_suggestions(input).first().map(|(c, _)| *c)
}

/// Q10 rate multiplier relative to `T_BASE_C`.
///
/// `Q10 ^ ((T - 20) / 10)`: 1.0 at 20°C, 2.0 at 30°C, 4.0 at 40°C.
pub fn relative_decay_rate(temperature_c: f64) -> f64 {
    Q10.powf((temperature_c - T_BASE_C) / 10.0)
}

/// Extra multiplier for perishables above `HIGH_TEMP_THRESHOLD_C`.
///
/// Returns 1.0 for non-perishables (base rate <= `PERISHABLE_RATE_THRESHOLD`)
/// at any temperature.
pub fn high_temp_multiplier(temperature_c: f64, base_rate: f64) -> f64 {
    if temperature_c > HIGH_TEMP_THRESHOLD_C && base_rate > PERISHABLE_RATE_THRESHOLD {
        1.0 + (temperature_c - HIGH_TEMP_THRESHOLD_C) * HIGH_TEMP_SLOPE
    } else {
        1.0
    }
}

/// Fraction of crop value lost after `hours_elapsed` at the given conditions.
///
/// Formula: base_rate * Q10^((T - 20) / 10) * high_temp_mult * hours, clamped
/// to `[0, 1]`. `humidity_percent` is accepted but does not enter the formula.
pub fn compute_quality_loss(
    crop_type: &str,
    temperature_c: f64,
    humidity_percent: f64,
    hours_elapsed: f64,
) -> f64 {
    let _ = humidity_percent;

    if hours_elapsed.is_nan() || hours_elapsed <= 0.0 {
        return 0.0;
    }

    let profile = decay_profile(crop_type);
    let base_rate = profile.base_decay_rate_per_hour;

    let relative_rate =
        relative_decay_rate(temperature_c) * high_temp_multiplier(temperature_c, base_rate);
    let loss = base_rate * relative_rate * hours_elapsed;

    tracing::debug!(
        crop = %profile.crop_name,
        temperature_c,
        hours_elapsed,
        relative_rate,
        loss,
        "quality loss"
    );

    // max() first so a NaN product collapses to 0
    loss.max(0.0).min(1.0)
}

use std::collections::HashMap;
use std::sync::LazyLock;

/// Q10 temperature coefficient: spoilage rate doubles per 10°C.
pub const Q10: f64 = 2.0;

/// Reference temperature for the base decay rates.
pub const T_BASE_C: f64 = 20.0;

/// Temperature above which perishables decay faster than the Q10 curve.
pub const HIGH_TEMP_THRESHOLD_C: f64 = 30.0;

/// Extra multiplier per degree above `HIGH_TEMP_THRESHOLD_C`.
pub const HIGH_TEMP_SLOPE: f64 = 0.1;

/// Crops at or below this base rate are treated as non-perishable.
pub const PERISHABLE_RATE_THRESHOLD: f64 = 0.0001;

/// Base rate for crops missing from the table.
pub const DEFAULT_DECAY_RATE: f64 = 0.005;

/// Standard transport tariff, currency units per km.
pub const TRANSPORT_RATE_PER_KM: f64 = 15.0;

// ─────────────────────────────────────────────────────────────────────────────
// Mandi evaluation
// ─────────────────────────────────────────────────────────────────────────────

/// Mandis farther than this are dropped (unless they are the only option).
pub const MAX_MANDI_DISTANCE_KM: f64 = 400.0;

/// Average speed of farm transport.
pub const TRANSIT_SPEED_KMH: f64 = 30.0;

/// Transit loss fraction above which a destination is a dead zone.
pub const DEAD_ZONE_LOSS_FRACTION: f64 = 0.15;

// ─────────────────────────────────────────────────────────────────────────────
// Shock detection
// ─────────────────────────────────────────────────────────────────────────────

/// Z-score below which a price drop counts as a shock.
pub const SHOCK_Z_THRESHOLD: f64 = -2.0;

/// Volume ratio over average that signals a glut.
pub const GLUT_VOLUME_RATIO: f64 = 2.0;

/// Base decay rate per hour at `T_BASE_C`, keyed by title-cased crop name.
pub static DECAY_RATES: LazyLock<HashMap<&'static str, f64>> = LazyLock::new(|| {
    let mut m = HashMap::new();
    m.insert("Tomato", 0.005); // 0.5% per hour
    m.insert("Onion", 0.001);
    m.insert("Potato", 0.0005);
    m.insert("Cotton", 0.00001);
    m.insert("Wheat", 0.00002);
    m.insert("Rice", 0.00002);
    m
});

/// Known crop names, sorted.
pub fn known_crops() -> Vec<&'static str> {
    let mut crops: Vec<&'static str> = DECAY_RATES.keys().copied().collect();
    crops.sort_unstable();
    crops
}

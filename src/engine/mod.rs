pub mod advisory;
pub mod constants;
pub mod decay;
pub mod realization;
pub mod shock;
pub mod spatial;

pub use advisory::{assess_history, build_advisory, recommend, Advisory, Verdict};
pub use constants::*;
pub use decay::{
    compute_quality_loss, crop_suggestions, decay_profile, high_temp_multiplier, is_known_crop,
    relative_decay_rate, suggest_crop,
};
pub use realization::{
    compute_net_realization, compute_net_realization_checked, RealizationCalculator,
};
pub use shock::{detect_market_shock, detect_volume_shock, MarketStatus, ShockAssessment};
pub use spatial::{estimated_transit_hours, evaluate_mandi, evaluate_mandis};

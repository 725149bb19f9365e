mod crop;
mod geo;
mod market;
mod quantity;

pub use crop::{normalize_crop_name, CropDecayProfile, DecayInput};
pub use geo::{Coordinate, EARTH_RADIUS_M};
pub use market::{HarvestConditions, Mandi, MandiEvaluation, PriceBreakdown, PriceRecord};
pub use quantity::PositiveQuantity;

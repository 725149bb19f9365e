pub mod cli;
pub mod engine;
pub mod error;
pub mod interface;
pub mod market;
pub mod models;
pub mod privacy;

pub use engine::{compute_net_realization, compute_quality_loss};
pub use error::{FarmError, Result};
pub use models::{Coordinate, PriceBreakdown};
pub use privacy::fuzz_location;

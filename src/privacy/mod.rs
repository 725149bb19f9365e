mod fuzz;

pub use fuzz::{fuzz_location, round_to, DEFAULT_FUZZ_RADIUS_M, MAX_FUZZ_LATITUDE, METERS_PER_DEGREE};

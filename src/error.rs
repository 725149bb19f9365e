use thiserror::Error;

#[derive(Debug, Error)]
pub enum FarmError {
    #[error("Mandi not found: {0}")]
    MandiNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Latitude {0} is outside the fuzzable range (|lat| <= 89.9)")]
    LatitudeOutOfRange(f64),

    #[error("No eligible mandis")]
    NoEligibleMandis,
}

pub type Result<T> = std::result::Result<T, FarmError>;

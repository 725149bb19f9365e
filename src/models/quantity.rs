use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{FarmError, Result};

/// A finite, strictly positive amount (e.g. yield in quintals).
///
/// The unchecked calculator accepts any `f64`; this type is the stricter
/// entry point that rules out a zero or negative divisor up front.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct PositiveQuantity(f64);

impl PositiveQuantity {
    pub fn new(value: f64) -> Result<Self> {
        if value.is_finite() && value > 0.0 {
            Ok(Self(value))
        } else {
            Err(FarmError::InvalidInput(format!(
                "expected a positive quantity, got {}",
                value
            )))
        }
    }

    #[inline]
    pub fn get(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for PositiveQuantity {
    type Error = FarmError;

    fn try_from(value: f64) -> Result<Self> {
        Self::new(value)
    }
}

impl From<PositiveQuantity> for f64 {
    fn from(q: PositiveQuantity) -> f64 {
        q.0
    }
}

impl fmt::Display for PositiveQuantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_positive() {
        assert_eq!(PositiveQuantity::new(50.0).unwrap().get(), 50.0);
        assert!(PositiveQuantity::new(1e-9).is_ok());
    }

    #[test]
    fn test_rejects_zero_negative_and_non_finite() {
        assert!(PositiveQuantity::new(0.0).is_err());
        assert!(PositiveQuantity::new(-3.0).is_err());
        assert!(PositiveQuantity::new(f64::NAN).is_err());
        assert!(PositiveQuantity::new(f64::INFINITY).is_err());
    }

    #[test]
    fn test_serde_rejects_zero() {
        let ok: PositiveQuantity = serde_json::from_str("12.5").unwrap();
        assert_eq!(ok.get(), 12.5);
        assert!(serde_json::from_str::<PositiveQuantity>("0").is_err());
    }
}

use std::collections::HashMap;

use crate::error::{FarmError, Result};
use crate::models::Mandi;

/// The set of mandis a farmer can sell into, keyed by lowercase name.
pub struct MarketBoard {
    mandis: HashMap<String, Mandi>,
}

impl MarketBoard {
    /// Build a board; later entries replace earlier ones with the same name.
    pub fn new(mandis: Vec<Mandi>) -> Self {
        let mut map = HashMap::new();
        for mandi in mandis {
            map.insert(mandi.key(), mandi);
        }
        Self { mandis: map }
    }

    /// Get a mandi by name (case-insensitive).
    pub fn get(&self, name: &str) -> Option<&Mandi> {
        self.mandis.get(&name.to_lowercase())
    }

    /// Get a mandi by name or fail with `MandiNotFound`.
    pub fn require(&self, name: &str) -> Result<&Mandi> {
        self.get(name)
            .ok_or_else(|| FarmError::MandiNotFound(name.to_string()))
    }

    /// Update the quoted price for a mandi.
    pub fn set_price(&mut self, name: &str, price: f64) -> Result<()> {
        let mandi = self
            .mandis
            .get_mut(&name.to_lowercase())
            .ok_or_else(|| FarmError::MandiNotFound(name.to_string()))?;

        if !price.is_finite() || price < 0.0 {
            return Err(FarmError::InvalidInput(format!(
                "price for {} must be non-negative, got {}",
                name, price
            )));
        }

        mandi.current_price = price;
        Ok(())
    }

    /// All mandis, sorted by name for stable output.
    pub fn all(&self) -> Vec<&Mandi> {
        let mut mandis: Vec<&Mandi> = self.mandis.values().collect();
        mandis.sort_by(|a, b| a.name.cmp(&b.name));
        mandis
    }

    /// Owned copy of every mandi, sorted by name.
    pub fn to_mandis(&self) -> Vec<Mandi> {
        self.all().into_iter().cloned().collect()
    }

    /// Highest quoted price on the board.
    pub fn best_quote(&self) -> Option<&Mandi> {
        self.mandis.values().max_by(|a, b| {
            a.current_price
                .partial_cmp(&b.current_price)
                .unwrap_or(std::cmp::Ordering::Equal)
        })
    }

    pub fn len(&self) -> usize {
        self.mandis.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mandis.is_empty()
    }
}

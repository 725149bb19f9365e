use dialoguer::{Confirm, Input, Select};

use crate::engine::constants::known_crops;
use crate::engine::crop_suggestions;
use crate::error::{FarmError, Result};
use crate::models::{normalize_crop_name, PositiveQuantity};

/// Answers collected by the interactive advisor.
#[derive(Debug, Clone)]
pub struct HarvestAnswers {
    pub crop: String,
    pub temperature_c: f64,
    pub humidity_percent: f64,
    pub yield_units: PositiveQuantity,
    pub price_per_unit: f64,
    pub distance_km: f64,
}

fn prompt_number(prompt: &str, default: &str) -> Result<f64> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .interact_text()?;

    input
        .trim()
        .parse()
        .map_err(|_| FarmError::InvalidInput(format!("Invalid number: {}", input)))
}

/// Prompt for the crop, with fuzzy matching against the known crops.
///
/// Unknown names are accepted after confirmation and use the default rate.
pub fn prompt_crop() -> Result<String> {
    let crops = known_crops();

    loop {
        let input: String = Input::new()
            .with_prompt("Which crop are you selling?")
            .default("Tomato".to_string())
            .interact_text()?;

        let name = normalize_crop_name(&input);
        if name.is_empty() {
            continue;
        }

        if crops.iter().any(|c| *c == name) {
            return Ok(name);
        }

        let candidates = crop_suggestions(&name);

        if candidates.is_empty() {
            let keep = Confirm::new()
                .with_prompt(format!("'{}' is not a known crop. Use the default decay rate?", name))
                .default(true)
                .interact()?;
            if keep {
                return Ok(name);
            }
            continue;
        }

        let mut options: Vec<String> = candidates.iter().take(3).map(|(c, _)| c.to_string()).collect();
        options.push(format!("Keep '{}'", name));

        let selection = Select::new()
            .with_prompt("Did you mean")
            .items(&options)
            .default(0)
            .interact()?;

        if selection + 1 == options.len() {
            return Ok(name);
        }
        return Ok(options[selection].clone());
    }
}

/// Prompt for ambient temperature in °C.
pub fn prompt_temperature() -> Result<f64> {
    prompt_number("Current temperature (°C)?", "30")
}

/// Prompt for relative humidity, 0-100.
pub fn prompt_humidity() -> Result<f64> {
    let humidity = prompt_number("Relative humidity (%)?", "65")?;
    if !(0.0..=100.0).contains(&humidity) {
        return Err(FarmError::InvalidInput(
            "Humidity must be between 0 and 100".to_string(),
        ));
    }
    Ok(humidity)
}

/// Prompt for the expected yield in quintals.
pub fn prompt_yield() -> Result<PositiveQuantity> {
    PositiveQuantity::new(prompt_number("Expected yield (quintals)?", "50")?)
}

/// Prompt for the market price per quintal.
pub fn prompt_price() -> Result<f64> {
    let price = prompt_number("Market price per quintal?", "2000")?;
    if price < 0.0 {
        return Err(FarmError::InvalidInput("Price must be >= 0".to_string()));
    }
    Ok(price)
}

/// Prompt for the distance to market in km.
pub fn prompt_distance() -> Result<f64> {
    let distance = prompt_number("Distance to mandi (km)?", "50")?;
    if distance < 0.0 {
        return Err(FarmError::InvalidInput("Distance must be >= 0".to_string()));
    }
    Ok(distance)
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Collect all harvest inputs for a single-market estimate.
pub fn collect_harvest_answers() -> Result<HarvestAnswers> {
    let crop = prompt_crop()?;
    let temperature_c = prompt_temperature()?;
    let humidity_percent = prompt_humidity()?;
    let yield_units = prompt_yield()?;
    let price_per_unit = prompt_price()?;
    let distance_km = prompt_distance()?;

    Ok(HarvestAnswers {
        crop,
        temperature_c,
        humidity_percent,
        yield_units,
        price_per_unit,
        distance_km,
    })
}

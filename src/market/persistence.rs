use std::fs;
use std::path::Path;

use crate::engine::Advisory;
use crate::error::Result;
use crate::market::MarketBoard;
use crate::models::{Mandi, MandiEvaluation, PriceRecord};

/// Load mandis from a JSON array file.
///
/// Deduplicates by lowercase name (last occurrence wins).
pub fn load_mandis<P: AsRef<Path>>(path: P) -> Result<Vec<Mandi>> {
    let content = fs::read_to_string(path)?;
    let mandis: Vec<Mandi> = serde_json::from_str(&content)?;
    Ok(MarketBoard::new(mandis).to_mandis())
}

/// Save mandis to a JSON file, sorted by name.
pub fn save_mandis<P: AsRef<Path>>(path: P, mandis: &[Mandi]) -> Result<()> {
    let board = MarketBoard::new(mandis.to_vec());
    let json = serde_json::to_string_pretty(&board.all())?;
    fs::write(path, json)?;
    Ok(())
}

/// Load a daily price history from CSV (`date,price[,volume]`).
///
/// Rows keep file order; the last row is taken as the most recent.
pub fn load_price_history<P: AsRef<Path>>(path: P) -> Result<Vec<PriceRecord>> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_path(path)?;

    let mut records = Vec::new();
    for row in rdr.deserialize() {
        let record: PriceRecord = row?;
        records.push(record);
    }
    Ok(records)
}

/// Write ranked mandi evaluations to CSV.
pub fn write_evaluations_csv<P: AsRef<Path>>(path: P, evaluations: &[MandiEvaluation]) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "rank",
        "mandi",
        "distance_km",
        "transit_hours",
        "market_price",
        "quality_loss_pct",
        "gross_revenue",
        "transport_cost",
        "spoilage_penalty",
        "net_profit",
        "net_profit_per_unit",
        "dead_zone",
        "recommended",
    ])?;

    for (i, e) in evaluations.iter().enumerate() {
        wtr.write_record([
            (i + 1).to_string(),
            e.mandi_name.clone(),
            format!("{:.1}", e.distance_km),
            format!("{:.1}", e.estimated_transit_hours),
            format!("{:.2}", e.market_price),
            format!("{:.2}", e.quality_loss_fraction * 100.0),
            format!("{:.2}", e.breakdown.gross_revenue),
            format!("{:.2}", e.breakdown.transport_cost),
            format!("{:.2}", e.breakdown.spoilage_penalty),
            format!("{:.2}", e.breakdown.net_profit),
            format!("{:.2}", e.breakdown.net_profit_per_unit),
            e.is_dead_zone.to_string(),
            e.is_recommended.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write a full advisory as pretty JSON.
pub fn write_advisory_json<P: AsRef<Path>>(path: P, advisory: &Advisory) -> Result<()> {
    let json = serde_json::to_string_pretty(advisory)?;
    fs::write(path, json)?;
    Ok(())
}

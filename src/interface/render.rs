use crate::engine::{Advisory, ShockAssessment};
use crate::models::{Coordinate, CropDecayProfile, MandiEvaluation, PriceBreakdown};

/// Display a quality-loss estimate.
pub fn display_quality_loss(profile: &CropDecayProfile, temperature_c: f64, hours: f64, loss: f64) {
    println!();
    println!("=== Spoilage Estimate ===");
    println!(
        "Crop: {} (base {:.5}/hr at 20°C)",
        profile.crop_name, profile.base_decay_rate_per_hour
    );
    println!("Conditions: {:.1}°C for {:.1} h", temperature_c, hours);
    println!("Quality loss: {:.2}%", loss * 100.0);
    println!();
}

/// Display a profit breakdown, rounded to whole currency units.
pub fn display_breakdown(breakdown: &PriceBreakdown) {
    println!();
    println!("=== Net Realization ===");
    println!();
    println!("  Gross revenue     {:>12.0}", breakdown.gross_revenue);
    println!("  Transport cost   -{:>12.0}", breakdown.transport_cost);
    println!("  Spoilage penalty -{:>12.0}", breakdown.spoilage_penalty);
    println!("  {}", "-".repeat(31));
    println!("  Net profit        {:>12.0}", breakdown.net_profit);

    if breakdown.net_profit_per_unit.is_finite() {
        println!("  Per quintal       {:>12.0}", breakdown.net_profit_per_unit);
    } else {
        println!("  Per quintal       {:>12}", "n/a");
    }
    println!();
}

/// Display a fuzzed coordinate.
pub fn display_fuzzed(original: &Coordinate, fuzzed: &Coordinate, radius_m: f64) {
    println!(
        "Fuzzed ({:.0} m): {:.5}, {:.5}  (moved {:.0} m)",
        radius_m,
        fuzzed.latitude,
        fuzzed.longitude,
        original.haversine_m(fuzzed)
    );
}

/// Display ranked mandi evaluations in a table.
pub fn display_evaluations(evaluations: &[MandiEvaluation]) {
    if evaluations.is_empty() {
        println!("No reachable mandis.");
        return;
    }

    println!();
    println!("=== Mandi Ranking ===");
    println!();

    let max_name_len = evaluations
        .iter()
        .map(|e| e.mandi_name.len())
        .max()
        .unwrap_or(10);

    for (i, e) in evaluations.iter().enumerate() {
        let mut tags = Vec::new();
        if e.is_recommended {
            tags.push("[Recommended]");
        }
        if e.is_dead_zone {
            tags.push("[Dead zone]");
        }

        let tags_str = if tags.is_empty() {
            String::new()
        } else {
            format!("  {}", tags.join(" "))
        };

        println!(
            "{:>3}. {:<width$} - {:>6.1} km {:>5.1} h | loss {:>5.2}% | net {:>10.0} ({:.0}/qtl){}",
            i + 1,
            e.mandi_name,
            e.distance_km,
            e.estimated_transit_hours,
            e.quality_loss_fraction * 100.0,
            e.breakdown.net_profit,
            e.breakdown.net_profit_per_unit,
            tags_str,
            width = max_name_len
        );
    }
    println!();
}

/// Display a shock assessment.
pub fn display_shock(label: &str, assessment: &ShockAssessment) {
    let z = assessment
        .z_score
        .map(|z| format!(" (z = {:+.2})", z))
        .unwrap_or_default();
    println!("{}: {:?}{} - {}", label, assessment.status, z, assessment.message);

    if let Some(advice) = &assessment.pivot_advice {
        println!("  Advice: {}", advice);
    }
}

/// Display the full advisory: verdict, best market and any shocks.
pub fn display_advisory(advisory: &Advisory) {
    display_evaluations(&advisory.evaluations);

    if let Some(shock) = &advisory.price_shock {
        display_shock("Price", shock);
    }
    if let Some(shock) = &advisory.volume_shock {
        display_shock("Volume", shock);
    }

    println!();
    println!("--- Recommendation ---");
    println!("{}: {}", advisory.verdict, advisory.verdict.summary());

    if let Some(best) = advisory.best() {
        println!(
            "Max projected realization: {:.0} at {}",
            best.breakdown.net_profit, best.mandi_name
        );
    }
    println!();
}

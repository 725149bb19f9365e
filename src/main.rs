use std::path::Path;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use net_realization_rs::cli::{Cli, Command, ConditionArgs};
use net_realization_rs::engine::{
    assess_history, build_advisory, compute_quality_loss, decay_profile,
    estimated_transit_hours, RealizationCalculator,
};
use net_realization_rs::error::{FarmError, Result};
use net_realization_rs::interface::{
    collect_harvest_answers, display_advisory, display_breakdown, display_fuzzed,
    display_quality_loss, display_shock, prompt_yes_no,
};
use net_realization_rs::market::{
    load_mandis, load_price_history, save_mandis, write_advisory_json, write_evaluations_csv,
    MarketBoard,
};
use net_realization_rs::models::{Coordinate, HarvestConditions, Mandi, PositiveQuantity};
use net_realization_rs::privacy::fuzz_location;

fn main() {
    init_tracing();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr; `RUST_LOG` overrides the default level.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "net_realization_rs=warn,net_realization=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();
    let calculator = RealizationCalculator::with_rate(cli.transport_rate);

    match command {
        Command::Advise { history } => cmd_advise(&cli.mandis, history.as_deref(), &calculator),
        Command::Decay { conditions, hours } => cmd_decay(&conditions, hours),
        Command::Realize {
            price,
            yield_units,
            distance,
            loss,
            hours,
            mandi,
            conditions,
        } => cmd_realize(
            &cli.mandis,
            &calculator,
            RealizeArgs {
                price,
                yield_units,
                distance,
                loss,
                hours,
                mandi,
                conditions,
            },
        ),
        Command::Fuzz { lat, lng, radius } => cmd_fuzz(lat, lng, radius),
        Command::Mandis {
            conditions,
            yield_units,
            farm_lat,
            farm_lng,
            history,
            csv,
            json,
        } => {
            let farm = farm_lat.zip(farm_lng).map(|(lat, lng)| Coordinate::new(lat, lng));
            cmd_mandis(
                &cli.mandis,
                cli.transport_rate,
                &conditions,
                yield_units,
                farm.as_ref(),
                history.as_deref(),
                csv.as_deref(),
                json.as_deref(),
            )
        }
        Command::Shock { history } => cmd_shock(&history),
        Command::Quote { name, price } => cmd_quote(&cli.mandis, &name, price),
    }
}

struct RealizeArgs {
    price: Option<f64>,
    yield_units: f64,
    distance: Option<f64>,
    loss: Option<f64>,
    hours: Option<f64>,
    mandi: Option<String>,
    conditions: ConditionArgs,
}

/// Apply the CLI tariff to mandis that don't carry their own.
fn with_default_tariff(mandis: Vec<Mandi>, rate: f64) -> Vec<Mandi> {
    mandis
        .into_iter()
        .map(|mut m| {
            m.transport_rate_per_km.get_or_insert(rate);
            m
        })
        .collect()
}

/// Interactive single-market advisor.
fn cmd_advise(
    mandis_path: &Path,
    history_path: Option<&Path>,
    calculator: &RealizationCalculator,
) -> Result<()> {
    let answers = collect_harvest_answers()?;

    let mut mandis = vec![Mandi {
        name: "Your mandi".to_string(),
        current_price: answers.price_per_unit,
        distance_km: Some(answers.distance_km),
        location: None,
        transport_rate_per_km: Some(calculator.transport_rate_per_km),
    }];

    if mandis_path.exists() {
        let listed = load_mandis(mandis_path)?;
        println!("Comparing against {} listed mandis", listed.len());
        mandis.extend(with_default_tariff(listed, calculator.transport_rate_per_km));
    }

    let history = match history_path {
        Some(path) => load_price_history(path)?,
        None => Vec::new(),
    };

    let conditions = HarvestConditions {
        crop: answers.crop,
        yield_units: answers.yield_units,
        temperature_c: answers.temperature_c,
        humidity_percent: answers.humidity_percent,
    };

    let advisory = build_advisory(&conditions, None, &mandis, &history);
    display_advisory(&advisory);

    if prompt_yes_no("Save advisory to advisory.json?", false)? {
        write_advisory_json("advisory.json", &advisory)?;
        println!("Advisory saved.");
    }

    Ok(())
}

fn cmd_decay(conditions: &ConditionArgs, hours: f64) -> Result<()> {
    if hours < 0.0 {
        return Err(FarmError::InvalidInput("Hours must be >= 0".to_string()));
    }

    let profile = decay_profile(&conditions.crop);
    let loss = compute_quality_loss(&conditions.crop, conditions.temp, conditions.humidity, hours);
    display_quality_loss(&profile, conditions.temp, hours, loss);
    Ok(())
}

fn cmd_realize(
    mandis_path: &Path,
    calculator: &RealizationCalculator,
    args: RealizeArgs,
) -> Result<()> {
    let yield_units = PositiveQuantity::new(args.yield_units)?;

    let (price, distance, calculator) = match &args.mandi {
        Some(name) => {
            let board = MarketBoard::new(load_mandis(mandis_path)?);
            let mandi = board.require(name)?;
            let distance = mandi.distance_km.or(args.distance).ok_or_else(|| {
                FarmError::InvalidInput(format!("No distance listed for {}; pass --distance", name))
            })?;
            let calculator = mandi
                .transport_rate_per_km
                .map(RealizationCalculator::with_rate)
                .unwrap_or_else(|| calculator.clone());
            (args.price.unwrap_or(mandi.current_price), distance, calculator)
        }
        None => {
            let price = args
                .price
                .ok_or_else(|| FarmError::InvalidInput("--price is required".to_string()))?;
            let distance = args
                .distance
                .ok_or_else(|| FarmError::InvalidInput("--distance is required".to_string()))?;
            (price, distance, calculator.clone())
        }
    };

    let loss = match args.loss {
        Some(loss) if (0.0..=1.0).contains(&loss) => loss,
        Some(loss) => {
            return Err(FarmError::InvalidInput(format!(
                "Loss must be a fraction between 0 and 1, got {}",
                loss
            )));
        }
        None => {
            let hours = args.hours.unwrap_or_else(|| estimated_transit_hours(distance));
            let c = &args.conditions;
            let loss = compute_quality_loss(&c.crop, c.temp, c.humidity, hours);
            display_quality_loss(&decay_profile(&c.crop), c.temp, hours, loss);
            loss
        }
    };

    let breakdown = calculator.breakdown_checked(price, yield_units, distance, loss);
    display_breakdown(&breakdown);
    Ok(())
}

fn cmd_fuzz(lat: f64, lng: f64, radius: f64) -> Result<()> {
    let original = Coordinate::new(lat, lng);
    if !original.is_valid() {
        return Err(FarmError::InvalidInput(format!(
            "Not a valid coordinate: {}, {}",
            lat, lng
        )));
    }

    let fuzzed = fuzz_location(lat, lng, radius)?;
    display_fuzzed(&original, &fuzzed, radius);
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn cmd_mandis(
    mandis_path: &Path,
    transport_rate: f64,
    conditions: &ConditionArgs,
    yield_units: f64,
    farm: Option<&Coordinate>,
    history_path: Option<&Path>,
    csv_path: Option<&Path>,
    json_path: Option<&Path>,
) -> Result<()> {
    if !mandis_path.exists() {
        eprintln!("Mandi file not found: {}", mandis_path.display());
        return Ok(());
    }

    let board = MarketBoard::new(load_mandis(mandis_path)?);
    println!("Loaded {} mandis", board.len());
    if let Some(top) = board.best_quote() {
        println!("Highest quote: {:.0}/qtl at {}", top.current_price, top.name);
    }
    let mandis = with_default_tariff(board.to_mandis(), transport_rate);

    let history = match history_path {
        Some(path) => load_price_history(path)?,
        None => Vec::new(),
    };

    let harvest = HarvestConditions {
        crop: conditions.crop.clone(),
        yield_units: PositiveQuantity::new(yield_units)?,
        temperature_c: conditions.temp,
        humidity_percent: conditions.humidity,
    };

    let advisory = build_advisory(&harvest, farm, &mandis, &history);
    if advisory.evaluations.is_empty() {
        return Err(FarmError::NoEligibleMandis);
    }

    display_advisory(&advisory);

    if let Some(path) = csv_path {
        write_evaluations_csv(path, &advisory.evaluations)?;
        println!("Wrote ranking to {}", path.display());
    }
    if let Some(path) = json_path {
        write_advisory_json(path, &advisory)?;
        println!("Wrote advisory to {}", path.display());
    }

    Ok(())
}

fn cmd_shock(history_path: &Path) -> Result<()> {
    let history = load_price_history(history_path)?;
    if history.is_empty() {
        return Err(FarmError::InvalidInput("Price history is empty".to_string()));
    }

    let (price_shock, volume_shock) = assess_history(&history);
    if let Some(shock) = &price_shock {
        display_shock("Price", shock);
    }
    if let Some(shock) = &volume_shock {
        display_shock("Volume", shock);
    }

    Ok(())
}

fn cmd_quote(mandis_path: &Path, name: &str, price: f64) -> Result<()> {
    let mut board = MarketBoard::new(load_mandis(mandis_path)?);
    board.set_price(name, price)?;
    save_mandis(mandis_path, &board.to_mandis())?;
    println!("Updated {} to {:.2}", name, price);
    Ok(())
}

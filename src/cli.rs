use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::engine::constants::TRANSPORT_RATE_PER_KM;
use crate::privacy::DEFAULT_FUZZ_RADIUS_M;

/// Net realization calculator: spoilage, transport and profit for selling a harvest.
#[derive(Parser, Debug)]
#[command(name = "net_realization")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the mandi list JSON file.
    #[arg(short, long, global = true, default_value = "mandis.json")]
    pub mandis: PathBuf,

    /// Transport tariff in currency units per km.
    #[arg(long, global = true, default_value_t = TRANSPORT_RATE_PER_KM)]
    pub transport_rate: f64,
}

/// Crop and weather inputs shared by several commands.
#[derive(Args, Debug, Clone)]
pub struct ConditionArgs {
    /// Crop name (case-insensitive).
    #[arg(long, default_value = "Tomato")]
    pub crop: String,

    /// Ambient temperature in °C.
    #[arg(long, default_value_t = 20.0, allow_hyphen_values = true)]
    pub temp: f64,

    /// Relative humidity, 0-100.
    #[arg(long, default_value_t = 65.0)]
    pub humidity: f64,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Interactive advisor: prompts for harvest details and prints a verdict.
    Advise {
        /// Optional price history CSV (date,price[,volume]) for shock checks.
        #[arg(long)]
        history: Option<PathBuf>,
    },

    /// Estimate quality loss for a crop held at a temperature.
    Decay {
        #[command(flatten)]
        conditions: ConditionArgs,

        /// Hours since harvest.
        #[arg(long)]
        hours: f64,
    },

    /// Compute the profit breakdown for one sale.
    Realize {
        /// Price per quintal. Taken from the mandi file when --mandi is set.
        #[arg(long)]
        price: Option<f64>,

        /// Yield in quintals.
        #[arg(long = "yield")]
        yield_units: f64,

        /// Distance to market in km. Taken from the mandi file when --mandi is set.
        #[arg(long)]
        distance: Option<f64>,

        /// Quality loss fraction (0-1). Estimated from crop conditions when omitted.
        #[arg(long)]
        loss: Option<f64>,

        /// Hours in transit; defaults to distance at 30 km/h.
        #[arg(long)]
        hours: Option<f64>,

        /// Use price and distance from this mandi in the mandi file.
        #[arg(long)]
        mandi: Option<String>,

        #[command(flatten)]
        conditions: ConditionArgs,
    },

    /// Mask a GPS coordinate before storing it.
    Fuzz {
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,

        #[arg(long, allow_hyphen_values = true)]
        lng: f64,

        /// Masking radius in meters.
        #[arg(long, default_value_t = DEFAULT_FUZZ_RADIUS_M)]
        radius: f64,
    },

    /// Rank every mandi in the mandi file for a harvest.
    Mandis {
        #[command(flatten)]
        conditions: ConditionArgs,

        /// Yield in quintals.
        #[arg(long = "yield")]
        yield_units: f64,

        /// Farm latitude, for mandis listed by location only.
        #[arg(long, requires = "farm_lng", allow_hyphen_values = true)]
        farm_lat: Option<f64>,

        /// Farm longitude, for mandis listed by location only.
        #[arg(long, requires = "farm_lat", allow_hyphen_values = true)]
        farm_lng: Option<f64>,

        /// Optional price history CSV for shock checks.
        #[arg(long)]
        history: Option<PathBuf>,

        /// Write the ranking to this CSV file.
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Write the full advisory to this JSON file.
        #[arg(long)]
        json: Option<PathBuf>,
    },

    /// Check a price history for a crash or glut.
    Shock {
        /// Price history CSV (date,price[,volume]); the last row is today.
        #[arg(long)]
        history: PathBuf,
    },

    /// Update the quoted price of one mandi in the mandi file.
    Quote {
        /// Mandi name (case-insensitive).
        name: String,

        /// New price per quintal.
        price: f64,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Advise { history: None }
    }
}

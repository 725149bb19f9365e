mod board;
mod persistence;

pub use board::MarketBoard;
pub use persistence::{
    load_mandis, load_price_history, save_mandis, write_advisory_json, write_evaluations_csv,
};

pub mod prompts;
pub mod render;

pub use prompts::{
    collect_harvest_answers, prompt_crop, prompt_distance, prompt_humidity, prompt_price,
    prompt_temperature, prompt_yes_no, prompt_yield, HarvestAnswers,
};
pub use render::{
    display_advisory, display_breakdown, display_evaluations, display_fuzzed,
    display_quality_loss, display_shock,
};

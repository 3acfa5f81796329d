//! Core domain types for the image playground

mod cost;
mod format;
mod history;
mod mode;

pub use cost::{
    HistoryTotals, IMAGE_TOKEN_RATE, NOT_AVAILABLE, TEXT_INPUT_TOKEN_RATE, TEXT_OUTPUT_TOKEN_RATE,
    calculate_cost, format_usd, round_cost, token_cost,
};
pub use format::{format_count, format_duration, format_timestamp};
pub use history::{CostDetails, HistoryImage, HistoryMetadata};
pub use mode::GenerationMode;

//! History records for past generations and edits

use serde::{Deserialize, Deserializer, Serialize};

use super::cost::{IMAGE_TOKEN_RATE, TEXT_INPUT_TOKEN_RATE, TEXT_OUTPUT_TOKEN_RATE, token_cost};
use super::mode::GenerationMode;

/// One image produced by a history entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryImage {
    /// File name relative to the image directory
    pub filename: String,
}

/// Token usage and estimated price of a single request
///
/// Token counts are optional so a missing or malformed value shows up as
/// "N/A" in the UI instead of rejecting the whole history file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CostDetails {
    /// Price reported when the request was made
    #[serde(default)]
    pub estimated_cost_usd: f64,
    #[serde(default, deserialize_with = "lenient_count")]
    pub text_input_tokens: Option<u64>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub text_output_tokens: Option<u64>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub image_tokens: Option<u64>,
}

impl CostDetails {
    /// Dollar cost of the text input tokens (NaN when unknown)
    pub fn text_input_cost(&self) -> f64 {
        token_cost(self.text_input_tokens, TEXT_INPUT_TOKEN_RATE)
    }

    /// Dollar cost of the text output tokens (NaN when unknown)
    pub fn text_output_cost(&self) -> f64 {
        token_cost(self.text_output_tokens, TEXT_OUTPUT_TOKEN_RATE)
    }

    /// Dollar cost of the image tokens (NaN when unknown)
    pub fn image_cost(&self) -> f64 {
        token_cost(self.image_tokens, IMAGE_TOKEN_RATE)
    }

    /// Sum of the three per-token contributions
    pub fn item_total(&self) -> f64 {
        self.text_input_cost() + self.text_output_cost() + self.image_cost()
    }
}

/// A recorded generation or edit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryMetadata {
    /// Unix milliseconds; unique per entry and used as its identity
    pub timestamp: i64,
    #[serde(default)]
    pub mode: GenerationMode,
    #[serde(default)]
    pub prompt: Option<String>,
    #[serde(default)]
    pub duration_ms: u64,
    #[serde(default)]
    pub quality: String,
    #[serde(default)]
    pub background: String,
    #[serde(default)]
    pub moderation: String,
    #[serde(default)]
    pub images: Vec<HistoryImage>,
    #[serde(default)]
    pub cost_details: Option<CostDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_format: Option<String>,
}

impl HistoryMetadata {
    /// Heading shown for the entry, e.g. "Generated Images"
    pub fn title(&self) -> String {
        let plural = if self.images.len() > 1 { "s" } else { "" };
        format!("{} Image{}", self.mode.past_tense(), plural)
    }

    /// Prompt text if one was recorded and is not empty
    pub fn prompt_text(&self) -> Option<&str> {
        self.prompt.as_deref().filter(|p| !p.is_empty())
    }
}

/// Accept any JSON number for a token count; anything else becomes `None`.
fn lenient_count<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| {
        v.as_u64().or_else(|| {
            v.as_f64()
                .filter(|f| f.is_finite() && *f >= 0.0)
                .map(|f| f.round() as u64)
        })
    }))
}

//! Cost arithmetic for history entries
//!
//! Per-token prices are fixed; the per-request total recorded by the backend
//! (`estimated_cost_usd`) is what the aggregate summary sums up.

use super::history::HistoryMetadata;

/// USD per text input token
pub const TEXT_INPUT_TOKEN_RATE: f64 = 0.000005;
/// USD per text output token
pub const TEXT_OUTPUT_TOKEN_RATE: f64 = 0.000015;
/// USD per image token
pub const IMAGE_TOKEN_RATE: f64 = 0.00001;

/// Placeholder shown when a cost cannot be computed
pub const NOT_AVAILABLE: &str = "N/A";

/// Cost of `tokens` at `rate`; NaN when the count is unknown
pub fn token_cost(tokens: Option<u64>, rate: f64) -> f64 {
    tokens.map_or(f64::NAN, |t| t as f64 * rate)
}

/// `value * rate` with four decimals, or "N/A" when the product is not finite
pub fn calculate_cost(value: f64, rate: f64) -> String {
    format_usd(value * rate)
}

/// Four-decimal dollar amount without the currency sign, "N/A" for NaN/infinite
pub fn format_usd(amount: f64) -> String {
    if amount.is_finite() {
        format!("{:.4}", amount)
    } else {
        NOT_AVAILABLE.to_string()
    }
}

/// Round to four decimal places
pub fn round_cost(amount: f64) -> f64 {
    (amount * 10_000.0).round() / 10_000.0
}

/// Aggregates over the whole history
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HistoryTotals {
    /// Sum of recorded request costs, rounded to four decimals
    pub total_cost: f64,
    pub total_images: usize,
    pub text_input_tokens: u64,
    pub text_output_tokens: u64,
    pub image_tokens: u64,
}

impl HistoryTotals {
    pub fn from_history(history: &[HistoryMetadata]) -> Self {
        let mut cost = 0.0;
        let mut totals = HistoryTotals::default();

        for item in history {
            if let Some(details) = &item.cost_details {
                cost += details.estimated_cost_usd;
                totals.text_input_tokens = totals
                    .text_input_tokens
                    .saturating_add(details.text_input_tokens.unwrap_or(0));
                totals.text_output_tokens = totals
                    .text_output_tokens
                    .saturating_add(details.text_output_tokens.unwrap_or(0));
                totals.image_tokens = totals
                    .image_tokens
                    .saturating_add(details.image_tokens.unwrap_or(0));
            }
            totals.total_images += item.images.len();
        }

        totals.total_cost = round_cost(cost);
        totals
    }

    /// Average cost per produced image, 0 when there are no images
    pub fn average_cost_per_image(&self) -> f64 {
        if self.total_images > 0 {
            self.total_cost / self.total_images as f64
        } else {
            0.0
        }
    }

    /// Whether the total cost badge should be shown
    pub fn has_cost(&self) -> bool {
        self.total_cost > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CostDetails, GenerationMode, HistoryImage};

    fn item(timestamp: i64, images: usize, cost: Option<f64>) -> HistoryMetadata {
        HistoryMetadata {
            timestamp,
            mode: GenerationMode::Generate,
            prompt: Some("prompt".to_string()),
            duration_ms: 500,
            quality: "auto".to_string(),
            background: "auto".to_string(),
            moderation: "auto".to_string(),
            images: (0..images)
                .map(|i| HistoryImage {
                    filename: format!("{}-{}.png", timestamp, i),
                })
                .collect(),
            cost_details: cost.map(|c| CostDetails {
                estimated_cost_usd: c,
                text_input_tokens: Some(10),
                text_output_tokens: Some(0),
                image_tokens: Some(100),
            }),
            output_format: None,
        }
    }

    #[test]
    fn test_calculate_cost_formats_four_decimals() {
        assert_eq!(calculate_cost(1000.0, TEXT_INPUT_TOKEN_RATE), "0.0050");
        assert_eq!(calculate_cost(1000.0, TEXT_OUTPUT_TOKEN_RATE), "0.0150");
        assert_eq!(calculate_cost(4160.0, IMAGE_TOKEN_RATE), "0.0416");
        assert_eq!(calculate_cost(0.0, IMAGE_TOKEN_RATE), "0.0000");
    }

    #[test]
    fn test_calculate_cost_nan_is_not_available() {
        assert_eq!(calculate_cost(f64::NAN, IMAGE_TOKEN_RATE), "N/A");
        assert_eq!(format_usd(token_cost(None, TEXT_INPUT_TOKEN_RATE)), "N/A");
    }

    #[test]
    fn test_calculate_cost_infinite_is_not_available() {
        assert_eq!(calculate_cost(f64::INFINITY, IMAGE_TOKEN_RATE), "N/A");
        assert_eq!(calculate_cost(f64::MAX, 10.0), "N/A");
    }

    #[test]
    fn test_totals_token_sums_saturate() {
        let json = r#"[
            {"timestamp": 2, "mode": "generate", "durationMs": 100, "quality": "auto",
             "background": "auto", "moderation": "auto", "images": [],
             "costDetails": {"estimated_cost_usd": 0.01, "image_tokens": 1e20}},
            {"timestamp": 1, "mode": "generate", "durationMs": 100, "quality": "auto",
             "background": "auto", "moderation": "auto", "images": [],
             "costDetails": {"estimated_cost_usd": 0.01, "image_tokens": 5}}
        ]"#;
        let history: Vec<HistoryMetadata> = serde_json::from_str(json).unwrap();

        let totals = HistoryTotals::from_history(&history);
        assert_eq!(totals.image_tokens, u64::MAX);
        assert_eq!(totals.text_input_tokens, 0);
        assert!((totals.total_cost - 0.02).abs() < 1e-12);
    }

    #[test]
    fn test_totals_empty_history() {
        let totals = HistoryTotals::from_history(&[]);
        assert_eq!(totals.total_images, 0);
        assert_eq!(totals.total_cost, 0.0);
        assert_eq!(totals.average_cost_per_image(), 0.0);
        assert!(!totals.has_cost());
    }

    #[test]
    fn test_totals_sum_and_round() {
        let history = vec![
            item(1, 2, Some(0.01234)),
            item(2, 1, Some(0.02)),
            item(3, 4, None),
        ];
        let totals = HistoryTotals::from_history(&history);
        assert_eq!(totals.total_images, 7);
        assert!((totals.total_cost - 0.0323).abs() < 1e-12);
        assert_eq!(totals.text_input_tokens, 20);
        assert_eq!(totals.image_tokens, 200);
        assert!((totals.average_cost_per_image() - 0.0323 / 7.0).abs() < 1e-12);
        assert!(totals.has_cost());
    }

    #[test]
    fn test_round_cost() {
        assert_eq!(round_cost(0.12345678), 0.1235);
        assert_eq!(round_cost(0.0), 0.0);
    }
}

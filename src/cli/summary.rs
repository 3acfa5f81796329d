//! Summary command implementation

use anyhow::{Context, Result};

use image_playground::config::AppConfig;
use image_playground::domain::{
    HistoryMetadata, HistoryTotals, format_count, format_duration, format_usd,
};
use image_playground::storage::HistoryStore;

/// Print the aggregate cost summary of the stored history
pub fn summary_command(config: &AppConfig) -> Result<()> {
    let store = HistoryStore::new(config.storage.history_path());
    let history = store
        .load()
        .with_context(|| format!("Failed to load history from {}", store.path().display()))?;

    print!("{}", summary_text(&history));
    Ok(())
}

fn summary_text(history: &[HistoryMetadata]) -> String {
    if history.is_empty() {
        return "No history yet.\n".to_string();
    }

    let totals = HistoryTotals::from_history(history);
    let mut out = format!("History ({} entries):\n\n", history.len());

    for item in history {
        let cost = item
            .cost_details
            .as_ref()
            .map(|d| format!("${}", format_usd(d.estimated_cost_usd)))
            .unwrap_or_else(|| "-".to_string());
        out.push_str(&format!(
            "  {} [{}] {} image(s), {}, {}\n",
            item.timestamp,
            item.mode,
            item.images.len(),
            format_duration(item.duration_ms),
            cost
        ));
    }

    out.push_str(&format!(
        "\nTotal images:        {}\n",
        format_count(totals.total_images as u64)
    ));
    out.push_str(&format!(
        "Text input tokens:   {}\n",
        format_count(totals.text_input_tokens)
    ));
    out.push_str(&format!(
        "Text output tokens:  {}\n",
        format_count(totals.text_output_tokens)
    ));
    out.push_str(&format!(
        "Image tokens:        {}\n",
        format_count(totals.image_tokens)
    ));
    out.push_str(&format!(
        "Average per image:   ${}\n",
        format_usd(totals.average_cost_per_image())
    ));
    out.push_str(&format!(
        "Total cost:          ${}\n",
        format_usd(totals.total_cost)
    ));
    out
}

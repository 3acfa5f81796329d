use serde::{Deserialize, Serialize};

/// Window and dialog settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuiConfig {
    /// Initial window width in points
    #[serde(default = "default_window_width")]
    pub window_width: f32,

    /// Initial window height in points
    #[serde(default = "default_window_height")]
    pub window_height: f32,

    /// Width of the history side panel
    #[serde(default = "default_history_panel_width")]
    pub history_panel_width: f32,

    /// Link behind "Get API Key" in the settings dialog
    #[serde(default = "default_api_key_url")]
    pub api_key_url: String,
}

fn default_window_width() -> f32 {
    1200.0
}

fn default_window_height() -> f32 {
    760.0
}

fn default_history_panel_width() -> f32 {
    420.0
}

fn default_api_key_url() -> String {
    "https://platform.openai.com/api-keys".to_string()
}

impl Default for GuiConfig {
    fn default() -> Self {
        Self {
            window_width: default_window_width(),
            window_height: default_window_height(),
            history_panel_width: default_history_panel_width(),
            api_key_url: default_api_key_url(),
        }
    }
}

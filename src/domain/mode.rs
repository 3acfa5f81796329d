use serde::{Deserialize, Serialize};

/// Workflow the playground is in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationMode {
    /// Create new images from a prompt
    #[default]
    Generate,
    /// Modify existing images
    Edit,
}

impl GenerationMode {
    /// All modes in display order
    pub const ALL: [GenerationMode; 2] = [GenerationMode::Generate, GenerationMode::Edit];

    /// Wire literal ("generate" / "edit")
    pub fn as_str(&self) -> &'static str {
        match self {
            GenerationMode::Generate => "generate",
            GenerationMode::Edit => "edit",
        }
    }

    /// Tab label
    pub fn label(&self) -> &'static str {
        match self {
            GenerationMode::Generate => "Generate",
            GenerationMode::Edit => "Edit",
        }
    }

    /// Past-tense verb used in history titles
    pub fn past_tense(&self) -> &'static str {
        match self {
            GenerationMode::Generate => "Generated",
            GenerationMode::Edit => "Edited",
        }
    }
}

impl std::fmt::Display for GenerationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for GenerationMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "generate" => Ok(GenerationMode::Generate),
            "edit" => Ok(GenerationMode::Edit),
            other => Err(format!("Unknown mode: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_literals() {
        assert_eq!(GenerationMode::Generate.as_str(), "generate");
        assert_eq!(GenerationMode::Edit.to_string(), "edit");
        assert_eq!("edit".parse::<GenerationMode>(), Ok(GenerationMode::Edit));
        assert!("Edit".parse::<GenerationMode>().is_err());
    }

    #[test]
    fn test_mode_serde_lowercase() {
        let json = serde_json::to_string(&GenerationMode::Edit).unwrap();
        assert_eq!(json, "\"edit\"");
        let mode: GenerationMode = serde_json::from_str("\"generate\"").unwrap();
        assert_eq!(mode, GenerationMode::Generate);
    }
}

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// User configuration for the text-fallback pattern table.
///
/// Loaded from `promptscore.toml` in the working directory when present:
///
/// ```toml
/// extra_patterns = ['(?i)\bgrade\s*[:=]\s*([0-9]+(?:\.[0-9]+)?)']
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Additional score patterns, tried after the built-in table. Each
    /// must carry the score as its first capture group.
    #[serde(default)]
    pub extra_patterns: Vec<String>,
}

impl Config {
    pub fn load_or_default() -> Self {
        let config_path = Path::new("promptscore.toml");

        if config_path.exists() {
            match Self::load(config_path) {
                Ok(config) => return config,
                Err(e) => {
                    tracing::warn!("failed to load config file, using defaults: {}", e);
                }
            }
        }

        Self::default()
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

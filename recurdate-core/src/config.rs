//! Global recurdate configuration.

use std::path::{Path, PathBuf};

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File};
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_SUGGEST_ENDPOINT, DEFAULT_SUGGEST_MODEL, DEFAULT_SUGGEST_TIMEOUT_SECS,
};
use crate::error::{RecurError, RecurResult};
use crate::spec::DailyStep;

fn default_preview_months() -> u32 {
    1
}

/// Global configuration at ~/.config/recurdate/config.toml
///
/// Every key can be overridden from the environment with a `RECURDATE_` prefix;
/// nested keys use a double underscore (`RECURDATE_SUGGEST__API_KEY`).
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct RecurdateConfig {
    /// Step daily rules by their interval instead of every day.
    #[serde(default)]
    pub daily_interval: bool,

    /// How many months `preview` shows when not told otherwise.
    #[serde(default = "default_preview_months")]
    pub preview_months: u32,

    #[serde(default)]
    pub suggest: SuggestConfig,
}

impl Default for RecurdateConfig {
    fn default() -> Self {
        RecurdateConfig {
            daily_interval: false,
            preview_months: default_preview_months(),
            suggest: SuggestConfig::default(),
        }
    }
}

/// Settings for the text-generation endpoint used by `suggest`.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct SuggestConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    pub model: String,
    pub endpoint: String,
    pub timeout_secs: u64,
}

impl Default for SuggestConfig {
    fn default() -> Self {
        SuggestConfig {
            api_key: None,
            model: DEFAULT_SUGGEST_MODEL.to_string(),
            endpoint: DEFAULT_SUGGEST_ENDPOINT.to_string(),
            timeout_secs: DEFAULT_SUGGEST_TIMEOUT_SECS,
        }
    }
}

impl RecurdateConfig {
    pub fn config_path() -> RecurResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| RecurError::Config("Could not determine config directory".into()))?
            .join("recurdate");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the config file (creating a commented default on first run) and
    /// apply environment overrides.
    pub fn load() -> RecurResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        let builder = Config::builder()
            .add_source(File::from(config_path).required(false))
            .add_source(
                Environment::with_prefix("RECURDATE")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        Self::from_builder(builder)
    }

    fn from_builder(builder: ConfigBuilder<DefaultState>) -> RecurResult<Self> {
        builder
            .build()
            .map_err(|e| RecurError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| RecurError::Config(e.to_string()))
    }

    pub fn daily_step(&self) -> DailyStep {
        if self.daily_interval {
            DailyStep::Interval
        } else {
            DailyStep::EveryDay
        }
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> RecurResult<()> {
        let contents = format!(
            "\
# recurdate configuration

# Step daily rules by their interval (\"every 3 days\") instead of every day:
# daily_interval = false

# Months shown by `recurdate preview`:
# preview_months = 1

[suggest]
# API key for the Generative Language API (or set RECURDATE_SUGGEST__API_KEY):
# api_key = \"...\"
# model = \"{}\"
# endpoint = \"{}\"
# timeout_secs = {}
",
            DEFAULT_SUGGEST_MODEL, DEFAULT_SUGGEST_ENDPOINT, DEFAULT_SUGGEST_TIMEOUT_SECS
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                RecurError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| RecurError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    fn parse(toml: &str) -> RecurdateConfig {
        RecurdateConfig::from_builder(
            Config::builder().add_source(File::from_str(toml, FileFormat::Toml)),
        )
        .unwrap()
    }

    #[test]
    fn empty_file_uses_defaults() {
        let config = parse("");
        assert!(!config.daily_interval);
        assert_eq!(config.preview_months, 1);
        assert_eq!(config.suggest.api_key, None);
        assert_eq!(config.suggest.model, DEFAULT_SUGGEST_MODEL);
        assert_eq!(config.suggest.endpoint, DEFAULT_SUGGEST_ENDPOINT);
        assert_eq!(config.daily_step(), DailyStep::EveryDay);
    }

    #[test]
    fn reads_values() {
        let config = parse(
            r#"
daily_interval = true
preview_months = 3

[suggest]
api_key = "secret"
model = "gemini-pro"
"#,
        );
        assert!(config.daily_interval);
        assert_eq!(config.preview_months, 3);
        assert_eq!(config.suggest.api_key.as_deref(), Some("secret"));
        assert_eq!(config.suggest.model, "gemini-pro");
        assert_eq!(config.suggest.timeout_secs, DEFAULT_SUGGEST_TIMEOUT_SECS);
        assert_eq!(config.daily_step(), DailyStep::Interval);
    }

    #[test]
    fn default_file_is_all_comments() {
        let dir = std::env::temp_dir().join(format!("recurdate-config-{}", std::process::id()));
        let path = dir.join("config.toml");

        RecurdateConfig::create_default_config(&path).unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        let config = parse(&contents);
        std::fs::remove_dir_all(&dir).unwrap();

        assert!(contents.contains("# daily_interval = false"));
        assert!(!config.daily_interval);
        assert_eq!(config.suggest.model, DEFAULT_SUGGEST_MODEL);
    }
}

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::view::{SectionLayout, DEFAULT_CATEGORY_ORDER, DEFAULT_EXPAND_STEP, DEFAULT_PAGE_SIZE};

/// Top-level configuration, usually loaded from
/// `~/.config/command-center/settings.toml` via [`SettingsManager`].
///
/// Only presentation defaults live here; view state itself (filters, hidden
/// cards, expansion) is never written to disk.
///
/// [`SettingsManager`]: crate::settings::SettingsManager
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub view: ViewConfig,
}

impl Config {
    /// Load from a specific path.
    pub fn load_from(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let text = std::fs::read_to_string(&path).map_err(|e| ConfigError::Io(e.to_string()))?;
        Self::from_toml(&text)
    }

    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let cfg: Config = toml::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Serialize config to TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        self.validate()?;
        toml::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Semantic validation for settings that are not fully expressible via type checks.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.view.validate()
    }
}

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("io: {0}")]
    Io(String),
    #[error("parse: {0}")]
    Parse(String),
    #[error("validation: {0}")]
    Validation(String),
}

// ---------------------------------------------------------------------------
// Section structs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Human,
    Json,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneralConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub log_format: LogFormat,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: LogFormat::default(),
        }
    }
}

fn default_log_level() -> String {
    "info".into()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewConfig {
    /// Items per category section before "view more".
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    #[serde(default = "default_expand_step")]
    pub expand_step: usize,
    /// Declared section order.
    #[serde(default = "default_category_order")]
    pub category_order: Vec<String>,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            expand_step: default_expand_step(),
            category_order: default_category_order(),
        }
    }
}

impl ViewConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.page_size == 0 {
            return Err(ConfigError::Validation(
                "view.page_size must be greater than 0".into(),
            ));
        }
        if self.expand_step == 0 {
            return Err(ConfigError::Validation(
                "view.expand_step must be greater than 0".into(),
            ));
        }
        if self.category_order.is_empty() {
            return Err(ConfigError::Validation(
                "view.category_order must list at least one category".into(),
            ));
        }
        for (i, category) in self.category_order.iter().enumerate() {
            if category.trim().is_empty() {
                return Err(ConfigError::Validation(
                    "view.category_order contains an empty name".into(),
                ));
            }
            if self.category_order[..i].contains(category) {
                return Err(ConfigError::Validation(format!(
                    "view.category_order lists '{category}' more than once"
                )));
            }
        }
        Ok(())
    }

    /// The section layout pages mount with.
    pub fn layout(&self) -> SectionLayout {
        SectionLayout::new(self.category_order.iter().cloned())
            .with_page_size(self.page_size)
            .with_expand_step(self.expand_step)
    }
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}
fn default_expand_step() -> usize {
    DEFAULT_EXPAND_STEP
}
fn default_category_order() -> Vec<String> {
    DEFAULT_CATEGORY_ORDER.iter().map(|c| c.to_string()).collect()
}

use std::path::PathBuf;

use crate::config::{Config, ConfigError};

/// Manages loading and saving settings to a TOML file on disk.
pub struct SettingsManager {
    path: PathBuf,
}

impl SettingsManager {
    /// Create a new `SettingsManager` that reads/writes the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create a `SettingsManager` using the default config location
    /// (`~/.config/command-center/settings.toml`).
    pub fn default_path() -> Self {
        let path = dirs::config_dir()
            .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
            .unwrap_or_else(|| PathBuf::from("."))
            .join("command-center")
            .join("settings.toml");
        Self { path }
    }

    /// Load config from the TOML file on disk.
    pub fn load(&self) -> Result<Config, ConfigError> {
        Config::load_from(&self.path)
    }

    /// Save config to the TOML file on disk, creating parent directories if
    /// they don't exist.
    pub fn save(&self, config: &Config) -> Result<(), ConfigError> {
        let text = config.to_toml()?;
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::Io(e.to_string()))?;
        }
        std::fs::write(&self.path, text).map_err(|e| ConfigError::Io(e.to_string()))?;
        Ok(())
    }

    /// Load config from disk, falling back to `Config::default()` when the
    /// file is missing. A file that exists but fails to parse or validate is
    /// also replaced by defaults, with a warning.
    pub fn load_or_default(&self) -> Config {
        if !self.path.exists() {
            return Config::default();
        }
        self.load().unwrap_or_else(|e| {
            tracing::warn!(path = %self.path.display(), error = %e, "invalid settings, using defaults");
            Config::default()
        })
    }

    /// Return the file path this manager reads/writes.
    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn tmp_settings_path() -> PathBuf {
        let dir = std::env::temp_dir().join(format!("cc-settings-test-{}", uuid::Uuid::new_v4()));
        dir.join("settings.toml")
    }

    #[test]
    fn save_and_load_roundtrip() {
        let path = tmp_settings_path();
        let mgr = SettingsManager::new(&path);

        let mut cfg = Config::default();
        cfg.general.log_level = "debug".into();
        cfg.view.page_size = 4;
        cfg.view.category_order = vec!["Sales".into(), "Marketing".into()];

        mgr.save(&cfg).unwrap();
        let loaded = mgr.load().unwrap();

        assert_eq!(loaded.general.log_level, "debug");
        assert_eq!(loaded.view.page_size, 4);
        assert_eq!(loaded.view.category_order, vec!["Sales", "Marketing"]);

        // cleanup
        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn load_or_default_returns_default_on_missing_file() {
        let path = tmp_settings_path();
        let mgr = SettingsManager::new(&path);

        let cfg = mgr.load_or_default();
        assert_eq!(cfg.view.page_size, 6);
        assert_eq!(cfg.view.expand_step, 6);
    }

    #[test]
    fn load_missing_file_returns_error() {
        let path = tmp_settings_path();
        let mgr = SettingsManager::new(&path);

        let result = mgr.load();
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn invalid_file_falls_back_to_defaults() {
        let path = tmp_settings_path();
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "[view]\nexpand_step = 0\n").unwrap();

        let mgr = SettingsManager::new(&path);
        assert!(mgr.load().is_err());
        assert_eq!(mgr.load_or_default(), Config::default());

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn save_creates_parent_directories() {
        let path = tmp_settings_path();
        assert!(!path.parent().unwrap().exists());

        let mgr = SettingsManager::new(&path);
        mgr.save(&Config::default()).unwrap();

        assert!(path.exists());

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn save_refuses_invalid_config() {
        let path = tmp_settings_path();
        let mgr = SettingsManager::new(&path);

        let mut cfg = Config::default();
        cfg.view.page_size = 0;
        assert!(mgr.save(&cfg).is_err());
        assert!(!path.exists());
    }
}

//! Hashing settings management
//!
//! Stores the default cost profile in a plain JSON file. Nothing secret is
//! ever written here.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{HashError, Result};
use crate::params::CostSettings;

/// Settings file version written by this crate
const SETTINGS_VERSION: u32 = 1;

const SETTINGS_FILE: &str = "settings.json";

/// Hashing settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Settings file version
    pub version: u32,
    /// Cost profile used for new hashes
    pub costs: CostSettings,
}

impl Settings {
    /// Create default settings
    pub fn new() -> Self {
        Self {
            version: SETTINGS_VERSION,
            costs: CostSettings::default(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::new()
    }
}

/// Settings manager
pub struct SettingsManager {
    settings_file: PathBuf,
    settings: Settings,
}

impl SettingsManager {
    /// Open the settings stored in `config_dir`, or defaults if there are none
    ///
    /// # Errors
    /// * `IoError` / `SerializationError` - the file exists but cannot be read
    /// * `Settings` - the file was written by a newer version
    pub fn open(config_dir: &Path) -> Result<Self> {
        let settings_file = config_dir.join(SETTINGS_FILE);
        let settings = Self::load_from_file(&settings_file)?;

        Ok(Self {
            settings_file,
            settings,
        })
    }

    /// Open the settings in the default per-user config directory
    pub fn open_default() -> Result<Self> {
        Self::open(&Self::default_dir()?)
    }

    /// Get the default config directory
    pub fn default_dir() -> Result<PathBuf> {
        ProjectDirs::from("com", "symbia-labs", "argon2id")
            .map(|dirs| dirs.config_dir().to_path_buf())
            .ok_or_else(|| HashError::Settings("Could not determine config directory".to_string()))
    }

    /// Load settings from file
    fn load_from_file(path: &Path) -> Result<Settings> {
        if !path.exists() {
            debug!("No settings file found, using defaults");
            return Ok(Settings::new());
        }

        let contents = std::fs::read_to_string(path)?;
        let settings: Settings = serde_json::from_str(&contents)?;

        if settings.version > SETTINGS_VERSION {
            return Err(HashError::Settings(format!(
                "Unsupported settings version: {}",
                settings.version
            )));
        }

        debug!("Loaded settings from {:?}", path);
        Ok(settings)
    }

    /// Save settings to file
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.settings_file.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(&self.settings)?;

        // Write atomically using temp file
        let temp_path = self.settings_file.with_extension("tmp");
        std::fs::write(&temp_path, &contents)?;
        std::fs::rename(&temp_path, &self.settings_file)?;

        debug!("Saved settings to {:?}", self.settings_file);
        Ok(())
    }

    /// Path of the settings file
    pub fn path(&self) -> &Path {
        &self.settings_file
    }

    /// Get current settings
    pub fn get(&self) -> &Settings {
        &self.settings
    }

    /// Get the cost profile for new hashes
    pub fn costs(&self) -> &CostSettings {
        &self.settings.costs
    }

    /// Update the cost profile and save
    pub fn update_costs(&mut self, costs: CostSettings) -> Result<()> {
        self.settings.costs = costs;
        self.save()
    }

    /// Reset settings to defaults and delete settings file
    pub fn reset(&mut self) -> Result<()> {
        self.settings = Settings::new();

        if self.settings_file.exists() {
            std::fs::remove_file(&self.settings_file)?;
        }

        debug!("Reset settings to defaults");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_without_file() {
        let temp = TempDir::new().unwrap();
        let manager = SettingsManager::open(temp.path()).unwrap();

        assert_eq!(manager.get(), &Settings::new());
        assert!(!manager.path().exists());
    }

    #[test]
    fn test_update_and_reload() {
        let temp = TempDir::new().unwrap();
        let costs = CostSettings {
            time: 4,
            memory: 131072,
            threads: 2,
            length: 24,
        };

        let mut manager = SettingsManager::open(temp.path()).unwrap();
        manager.update_costs(costs).unwrap();

        let reloaded = SettingsManager::open(temp.path()).unwrap();
        assert_eq!(reloaded.costs(), &costs);
    }

    #[test]
    fn test_save_creates_directory() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("nested").join("config");

        let manager = SettingsManager::open(&nested).unwrap();
        manager.save().unwrap();

        assert!(nested.join(SETTINGS_FILE).exists());
    }

    #[test]
    fn test_camel_case_file_format() {
        let temp = TempDir::new().unwrap();
        std::fs::write(
            temp.path().join(SETTINGS_FILE),
            r#"{"version":1,"costs":{"time":2,"memory":4096,"threads":1,"length":16}}"#,
        )
        .unwrap();

        let manager = SettingsManager::open(temp.path()).unwrap();
        assert_eq!(manager.costs().memory, 4096);
        assert_eq!(manager.costs().length, 16);
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join(SETTINGS_FILE), "not json").unwrap();

        let result = SettingsManager::open(temp.path());
        assert!(matches!(result, Err(HashError::SerializationError(_))));
    }

    #[test]
    fn test_newer_version_is_rejected() {
        let temp = TempDir::new().unwrap();
        std::fs::write(
            temp.path().join(SETTINGS_FILE),
            r#"{"version":2,"costs":{"time":2,"memory":4096,"threads":1,"length":16}}"#,
        )
        .unwrap();

        let result = SettingsManager::open(temp.path());
        assert!(matches!(result, Err(HashError::Settings(_))));
    }

    #[test]
    fn test_reset_removes_file() {
        let temp = TempDir::new().unwrap();
        let mut manager = SettingsManager::open(temp.path()).unwrap();
        manager
            .update_costs(CostSettings {
                time: 1,
                ..CostSettings::default()
            })
            .unwrap();
        assert!(manager.path().exists());

        manager.reset().unwrap();
        assert!(!manager.path().exists());
        assert_eq!(manager.get(), &Settings::new());
    }
}

//! Application settings
//!
//! Settings are read once at startup and handed to the code that needs
//! them. Every field has a default, so a partial or empty file is valid:
//!
//! ```toml
//! [backup]
//! max_project_backups = 50
//!
//! [csv]
//! separator = "comma"
//! ```

use crate::Result;
use revenue_csv::{BoolWords, CsvSeparator};
use revenue_fs::{ConfigFormat, ConfigStore, NormalizedPath};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

/// Allowed number of snapshots per backup stream.
pub const BACKUP_COUNT_RANGE: RangeInclusive<usize> = 10..=1000;

/// Allowed autosave interval in minutes.
pub const AUTO_SAVE_INTERVAL_RANGE: RangeInclusive<u32> = 1..=300;

const DEFAULT_MAX_BACKUPS: usize = 100;
const DEFAULT_AUTO_SAVE_INTERVAL: u32 = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackupSettings {
    pub max_project_backups: usize,
    pub max_sync_backups: usize,
    /// Snapshot the project when it is opened
    pub create_backup_on_open: bool,
}

impl Default for BackupSettings {
    fn default() -> Self {
        Self {
            max_project_backups: DEFAULT_MAX_BACKUPS,
            max_sync_backups: DEFAULT_MAX_BACKUPS,
            create_backup_on_open: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutoSaveSettings {
    pub enabled: bool,
    pub interval_minutes: u32,
    pub sync_step_2_enabled: bool,
    pub on_exit: bool,
}

impl Default for AutoSaveSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            interval_minutes: DEFAULT_AUTO_SAVE_INTERVAL,
            sync_step_2_enabled: true,
            on_exit: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CsvSettings {
    pub separator: CsvSeparator,
    pub use_quotes: bool,
}

impl Default for CsvSettings {
    fn default() -> Self {
        Self {
            separator: CsvSeparator::default(),
            use_quotes: true,
        }
    }
}

/// Regional preferences. Empty strings mean "use the locale default".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralSettings {
    pub language: String,
    pub currency: String,
    pub currency_symbol: String,
    pub unit_of_measurement: String,
    pub open_last_file_at_startup: bool,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            language: String::new(),
            currency: String::new(),
            currency_symbol: String::new(),
            unit_of_measurement: String::new(),
            open_last_file_at_startup: true,
        }
    }
}

/// All application settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub backup: BackupSettings,
    pub auto_save: AutoSaveSettings,
    pub csv: CsvSettings,
    pub general: GeneralSettings,
    /// Localized yes/no words for boolean CSV values
    pub localization: BoolWords,
}

impl Settings {
    /// Load settings from `path`; the format follows the extension.
    ///
    /// Out-of-range values are clamped.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let (settings, _) = Self::load_with_format(path)?;
        Ok(settings)
    }

    /// Load settings and the format the file was written in.
    pub fn load_with_format(path: impl AsRef<Path>) -> Result<(Self, ConfigFormat)> {
        let (settings, format): (Settings, _) =
            ConfigStore::new().load_with_format(&NormalizedPath::new(path))?;
        Ok((settings.normalized(), format))
    }

    /// Load settings, falling back to defaults when the file is missing or
    /// cannot be read.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match ConfigStore::new().load_optional::<Settings>(&NormalizedPath::new(path)) {
            Ok(Some((settings, _))) => settings.normalized(),
            Ok(None) => {
                tracing::debug!(path = %path.display(), "No settings file, using defaults");
                Self::default()
            }
            Err(e) => {
                tracing::warn!("Failed to load settings from {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save settings atomically; the format follows the extension.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<ConfigFormat> {
        Ok(ConfigStore::new().save(&NormalizedPath::new(path), self)?)
    }

    /// Copy of these settings with numeric values clamped into range.
    pub fn normalized(mut self) -> Self {
        self.backup.max_project_backups =
            clamp(self.backup.max_project_backups, &BACKUP_COUNT_RANGE);
        self.backup.max_sync_backups = clamp(self.backup.max_sync_backups, &BACKUP_COUNT_RANGE);
        self.auto_save.interval_minutes =
            clamp(self.auto_save.interval_minutes, &AUTO_SAVE_INTERVAL_RANGE);
        self
    }

    pub fn bool_words(&self) -> &BoolWords {
        &self.localization
    }
}

fn clamp<T: Ord + Copy>(value: T, range: &RangeInclusive<T>) -> T {
    value.clamp(*range.start(), *range.end())
}

/// Default location of the settings file:
/// `<config dir>/glasspath/revenue/settings.toml`.
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("glasspath").join("revenue").join("settings.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.backup.max_project_backups, 100);
        assert_eq!(settings.backup.max_sync_backups, 100);
        assert_eq!(settings.auto_save.interval_minutes, 10);
        assert_eq!(settings.csv.separator, CsvSeparator::Semicolon);
        assert!(settings.csv.use_quotes);
        assert!(settings.general.open_last_file_at_startup);
        assert_eq!(settings.bool_words(), &BoolWords::default());
    }

    #[test]
    fn test_normalized_clamps() {
        let mut settings = Settings::default();
        settings.backup.max_project_backups = 3;
        settings.backup.max_sync_backups = 5000;
        settings.auto_save.interval_minutes = 0;

        let settings = settings.normalized();
        assert_eq!(settings.backup.max_project_backups, 10);
        assert_eq!(settings.backup.max_sync_backups, 1000);
        assert_eq!(settings.auto_save.interval_minutes, 1);
    }

    #[test]
    fn test_default_path_file_name() {
        if let Some(path) = default_settings_path() {
            assert!(path.ends_with("glasspath/revenue/settings.toml"));
        }
    }
}

//! Settings files in TOML, JSON or YAML
//!
//! The format of a file is fixed by its extension, matched without regard
//! to case: `toml`, `json`, `yaml` or `yml`. Loading reports the format it
//! read so a caller can write the file back the same way.

use crate::{Error, NormalizedPath, Result, io};
use serde::{Serialize, de::DeserializeOwned};
use std::fmt;

/// Serialization format of a settings file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigFormat {
    Toml,
    Json,
    Yaml,
}

impl ConfigFormat {
    /// Format selected by the extension of `path`.
    pub fn from_path(path: &NormalizedPath) -> Result<Self> {
        let extension = path.extension().unwrap_or("").to_ascii_lowercase();
        match extension.as_str() {
            "toml" => Ok(Self::Toml),
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            _ => Err(Error::UnsupportedFormat { extension }),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Toml => "TOML",
            Self::Json => "JSON",
            Self::Yaml => "YAML",
        }
    }

    /// Canonical extension written for new files.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Toml => "toml",
            Self::Json => "json",
            Self::Yaml => "yaml",
        }
    }

    fn parse<T: DeserializeOwned>(&self, path: &NormalizedPath, content: &str) -> Result<T> {
        let parsed = match self {
            Self::Toml => toml::from_str(content).map_err(|e| e.to_string()),
            Self::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
            Self::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string()),
        };

        parsed.map_err(|message| Error::ConfigParse {
            path: path.to_native(),
            format: self.name().into(),
            message,
        })
    }

    fn render<T: Serialize>(&self, path: &NormalizedPath, value: &T) -> Result<String> {
        let rendered = match self {
            Self::Toml => toml::to_string_pretty(value).map_err(|e| e.to_string()),
            Self::Json => serde_json::to_string_pretty(value).map_err(|e| e.to_string()),
            Self::Yaml => serde_yaml::to_string(value).map_err(|e| e.to_string()),
        };

        rendered.map_err(|message| Error::ConfigSerialize {
            path: path.to_native(),
            format: self.name().into(),
            message,
        })
    }
}

impl fmt::Display for ConfigFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Reads and writes settings files.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConfigStore;

impl ConfigStore {
    pub fn new() -> Self {
        Self
    }

    pub fn load<T: DeserializeOwned>(&self, path: &NormalizedPath) -> Result<T> {
        self.load_with_format(path).map(|(value, _)| value)
    }

    /// Load `path` and report the format it was read as.
    ///
    /// The extension is checked before the file is touched, so an
    /// unsupported name fails even when the file does not exist.
    pub fn load_with_format<T: DeserializeOwned>(
        &self,
        path: &NormalizedPath,
    ) -> Result<(T, ConfigFormat)> {
        let format = ConfigFormat::from_path(path)?;
        let content = io::read_text(path)?;
        let value = format.parse(path, &content)?;

        tracing::debug!(path = %path, format = %format, "Loaded config");
        Ok((value, format))
    }

    /// Like [`Self::load_with_format`], but a missing file is `Ok(None)`.
    pub fn load_optional<T: DeserializeOwned>(
        &self,
        path: &NormalizedPath,
    ) -> Result<Option<(T, ConfigFormat)>> {
        // Surface a bad extension even for absent files
        ConfigFormat::from_path(path)?;
        if !path.exists() {
            return Ok(None);
        }
        self.load_with_format(path).map(Some)
    }

    /// Write `value` to `path` atomically, creating parent directories.
    ///
    /// Returns the format the file was written in.
    pub fn save<T: Serialize>(&self, path: &NormalizedPath, value: &T) -> Result<ConfigFormat> {
        let format = ConfigFormat::from_path(path)?;
        let content = format.render(path, value)?;

        tracing::debug!(path = %path, format = %format, "Saving config");
        io::write_atomic(path, content.as_bytes())?;
        Ok(format)
    }
}

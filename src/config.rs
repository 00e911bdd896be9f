//! Codec configuration.
//!
//! Holds the constants both ends of an exchange must agree on. Loaded from
//! TOML (by default `~/.quietmark/config.toml`) or built with `Default`.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, StegoError};
use crate::text::embed::ExtractMode;
use crate::text::invisible::InvisibleCodeMap;

/// Delimiter appended to image payloads.
pub const DEFAULT_DELIMITER: &str = "*^*^*";

/// Shared configuration for encoding and decoding.
///
/// ```toml
/// delimiter = "*^*^*"
/// extract_mode = "streaming"
///
/// [code_points]
/// "00" = "\u200C"
/// "01" = "\u202C"
/// "10" = "\u200E"
/// "11" = "\u202D"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    /// Invisible code point table for the text channel.
    pub code_points: InvisibleCodeMap,
    /// Delimiter appended to image payloads.
    pub delimiter: String,
    /// How far text extraction reads.
    pub extract_mode: ExtractMode,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            code_points: InvisibleCodeMap::default(),
            delimiter: DEFAULT_DELIMITER.to_string(),
            extract_mode: ExtractMode::default(),
        }
    }
}

impl CodecConfig {
    /// Parses and validates a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: CodecConfig =
            toml::from_str(content).map_err(|e| StegoError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a configuration file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Loads the default configuration file, or defaults if it doesn't exist.
    pub fn load_default() -> Result<Self> {
        match Self::default_path() {
            Some(path) if path.exists() => Self::load(path),
            _ => Ok(Self::default()),
        }
    }

    /// Path of the default configuration file, if a home directory exists.
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".quietmark").join("config.toml"))
    }

    /// Serializes to TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| StegoError::Config(e.to_string()))
    }

    /// Checks the code point table and the delimiter.
    pub fn validate(&self) -> Result<()> {
        self.code_points.validate()?;
        if self.delimiter.is_empty() {
            return Err(StegoError::Config("delimiter must not be empty".to_string()));
        }
        Ok(())
    }
}

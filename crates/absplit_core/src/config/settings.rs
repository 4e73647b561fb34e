//! Settings struct with TOML-based sections.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::DEFAULT_SEPARATOR;

/// Errors that can occur during config operations.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),
}

/// Result type for config operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Root settings structure containing all configuration sections.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// External tool binaries.
    #[serde(default)]
    pub tools: ToolSettings,

    /// Chapter encoding parameters.
    #[serde(default)]
    pub encoding: EncodingSettings,

    /// Filename derivation settings.
    #[serde(default)]
    pub naming: NamingSettings,
}

impl Settings {
    /// Load settings from a TOML file.
    ///
    /// Returns an error if the file does not exist or fails to parse.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load settings from a TOML file, falling back to defaults when
    /// the file does not exist.
    pub fn load_or_default(path: &Path) -> ConfigResult<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }
}

/// Names or paths of the external tool binaries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolSettings {
    /// Prober binary.
    #[serde(default = "default_ffprobe")]
    pub ffprobe: String,

    /// Transcoder binary (also used for cover extraction).
    #[serde(default = "default_ffmpeg")]
    pub ffmpeg: String,
}

fn default_ffprobe() -> String {
    "ffprobe".to_string()
}

fn default_ffmpeg() -> String {
    "ffmpeg".to_string()
}

impl Default for ToolSettings {
    fn default() -> Self {
        Self {
            ffprobe: default_ffprobe(),
            ffmpeg: default_ffmpeg(),
        }
    }
}

/// Chapter encoding parameters passed to the transcoder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncodingSettings {
    /// LAME VBR quality (`-q:a`). Higher means smaller files.
    #[serde(default = "default_quality")]
    pub quality: u32,

    /// Output channel count (`-ac`).
    #[serde(default = "default_channels")]
    pub channels: u32,
}

fn default_quality() -> u32 {
    9
}

fn default_channels() -> u32 {
    2
}

impl Default for EncodingSettings {
    fn default() -> Self {
        Self {
            quality: default_quality(),
            channels: default_channels(),
        }
    }
}

/// Filename derivation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamingSettings {
    /// String substituted for spaces in derived filenames.
    #[serde(default = "default_separator")]
    pub separator: String,
}

fn default_separator() -> String {
    DEFAULT_SEPARATOR.to_string()
}

impl Default for NamingSettings {
    fn default() -> Self {
        Self {
            separator: default_separator(),
        }
    }
}

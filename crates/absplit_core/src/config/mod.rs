//! Configuration for absplit.
//!
//! TOML-based settings with logical sections and per-field defaults.
//! The defaults reproduce the stock ffprobe/ffmpeg invocation exactly,
//! so a settings file is only needed to point at alternate binaries or
//! change the encoding knobs.

mod settings;

pub use settings::{
    ConfigError, ConfigResult, EncodingSettings, NamingSettings, Settings, ToolSettings,
};

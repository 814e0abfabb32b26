//! Settings struct with TOML-based sections.
//!
//! Every field carries a serde default so partial config files load
//! cleanly; unknown keys are ignored.

use serde::{Deserialize, Serialize};

/// Root settings structure containing all configuration sections.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// External tool executables.
    #[serde(default)]
    pub tools: ToolSettings,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Paths/names of the mkvtoolnix executables.
///
/// Bare names resolve through PATH; absolute paths pin a specific install.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolSettings {
    /// Probe tool executable.
    #[serde(default = "default_mkvinfo")]
    pub mkvinfo: String,

    /// Mutation tool executable.
    #[serde(default = "default_mkvpropedit")]
    pub mkvpropedit: String,
}

fn default_mkvinfo() -> String {
    "mkvinfo".to_string()
}

fn default_mkvpropedit() -> String {
    "mkvpropedit".to_string()
}

impl Default for ToolSettings {
    fn default() -> Self {
        Self {
            mkvinfo: default_mkvinfo(),
            mkvpropedit: default_mkvpropedit(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Default log level when RUST_LOG is not set
    /// (trace, debug, info, warn, error).
    #[serde(default = "default_level")]
    pub level: String,
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

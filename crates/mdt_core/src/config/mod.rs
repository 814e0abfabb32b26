//! Configuration management.
//!
//! Settings live in a TOML file with independent sections. The manager
//! handles loading with defaults for missing keys and atomic saves.

mod manager;
mod settings;

pub use manager::{ConfigError, ConfigManager, ConfigResult};
pub use settings::{LoggingSettings, Settings, ToolSettings};

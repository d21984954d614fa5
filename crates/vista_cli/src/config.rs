//! Viewport configuration file handling (vista.toml)

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use vista_viewport::ViewportConfig;

/// Load and validate a viewport configuration from a TOML file.
///
/// A directory is searched for `vista.toml`.
pub fn load_config(path: &Path) -> Result<ViewportConfig> {
    let config_path = if path.is_dir() {
        path.join("vista.toml")
    } else {
        path.to_path_buf()
    };

    if !config_path.exists() {
        anyhow::bail!("No viewport config found at {}", config_path.display());
    }

    let content = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read {}", config_path.display()))?;

    parse_config(&content).with_context(|| format!("Invalid config in {}", config_path.display()))
}

/// Parse and validate a TOML configuration
pub fn parse_config(content: &str) -> Result<ViewportConfig> {
    let config: ViewportConfig = toml::from_str(content).context("Failed to parse TOML")?;
    config.validate()?;
    Ok(config)
}

/// Serialize a configuration to TOML
pub fn to_toml(config: &ViewportConfig) -> Result<String> {
    toml::to_string_pretty(config).context("Failed to serialize config")
}

use crate::errors::ConfigError;
use serde::Deserialize;
use std::path::Path;

/// Default config file name, matching what release pipelines check in.
pub const DEFAULT_CONFIG_FILE: &str = "Config.json";

/// The project config record the gate reads its current version from.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub version: String,
    #[serde(default)]
    pub release_notes: String,
}

pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
        path: path.display().to_string(),
        source: e,
    })?;
    let cfg: Config = serde_json::from_str(&raw).map_err(|e| ConfigError::Parse {
        path: path.display().to_string(),
        source: e,
    })?;
    Ok(cfg)
}

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Configuration for the explorer backing the balance lookups
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub explorer: ExplorerConfig,
}

/// A Blockscout-compatible explorer API
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExplorerConfig {
    pub name: String,
    /// Base URL, without the `/api/v2` suffix
    pub api: String,
}

impl Config {
    /// Load configuration from embedded JSON
    pub fn load() -> Result<Self> {
        let config_str = include_str!("../config.json");
        let config: Config =
            serde_json::from_str(config_str).context("embedded config.json is malformed")?;
        Ok(config)
    }
}

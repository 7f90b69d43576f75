use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub client: ClientConfig,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct ClientConfig {
    pub endpoint: Option<String>,
    pub timeout_secs: Option<u64>,
    pub format: Option<String>,
}

pub fn load_config(path: &Path) -> Result<Config> {
    let contents =
        std::fs::read_to_string(path).with_context(|| format!("reading config file {path:?}"))?;
    toml::from_str(&contents).with_context(|| format!("parsing config file {path:?}"))
}

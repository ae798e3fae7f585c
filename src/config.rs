use anyhow::{anyhow, Result};
use dotenvy::dotenv;
use log::info;
use serde::Deserialize;
use std::env;

const CONFIG_PATH_ENV: &str = "CONFIG_PATH";
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct Config {
    pub http_bind_address: Option<String>,
    /// Pins the generated listing of every view. Unset means a fresh seed per page load.
    pub listing_seed: Option<u64>,
}

impl Config {
    pub fn bind_address(&self) -> String {
        self.http_bind_address
            .clone()
            .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string())
    }
}

pub fn create_test_config() -> Config {
    Config {
        http_bind_address: Some("127.0.0.1:0".to_string()),
        listing_seed: None,
    }
}

pub fn read_config() -> Result<Config> {
    dotenv().ok();
    let Ok(config_path) = env::var(CONFIG_PATH_ENV) else {
        info!("{CONFIG_PATH_ENV} not set, using default config");
        return Ok(Config::default());
    };

    load_config_file(&config_path)
}

pub fn load_config_file(config_path: &str) -> Result<Config> {
    let bytes = std::fs::read(config_path)
        .map_err(|e| anyhow!("failed to read config {config_path}: {e}"))?;
    toml::from_slice(&bytes).map_err(|e| anyhow!("failed to parse config {config_path}: {e}"))
}

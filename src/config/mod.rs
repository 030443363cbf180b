pub mod models;

use std::{borrow::Cow, fs, path::Path, time::Duration};

use anyhow::{Context, Result};
use log::{debug, info};
use validator::Validate;

pub use models::Config;

pub const DEFAULT_CONFIG_FILE: &str = "config.yaml";
pub const CONFIG_PATH_ENV: &str = "ZONEDASH_CONFIG";
pub const API_TOKEN_ENV: &str = "HETZNER_API_TOKEN";

impl Config {
    // A missing file falls back to defaults
    pub fn load(path: &Path) -> Result<Self> {
        let token = std::env::var(API_TOKEN_ENV).ok();
        Self::load_with_token(path, token)
    }

    pub fn load_with_token(path: &Path, env_token: Option<String>) -> Result<Self> {
        let mut config = if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;
            serde_yaml::from_str::<Config>(&contents)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))?
        } else {
            debug!("Config file {} not found, using defaults", path.display());
            Config::default()
        };

        if let Some(token) = env_token.filter(|t| !t.is_empty()) {
            info!("Using API token from {}", API_TOKEN_ENV);
            config.api_token = Cow::Owned(token);
        }

        config
            .validate()
            .with_context(|| format!("Invalid configuration in {}", path.display()))?;

        Ok(config)
    }

    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

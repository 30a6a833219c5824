//! # Configuration
//!
//! Application configuration loaded from `data/config.yaml`. Every section
//! has sensible defaults, so the file is optional; only the bot credential
//! (read from the environment at startup) is mandatory.

use anyhow::Context;
use serde::Deserialize;
use std::path::Path;

/// Main application configuration structure.
#[derive(Debug, Default, Deserialize, Clone)]
pub struct AppConfig {
    #[serde(default)]
    pub services: ServicesConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub http: HttpConfig,
    #[serde(default)]
    pub weather: WeatherConfig,
}

impl AppConfig {
    /// Read the YAML config at `path`, falling back to defaults when the
    /// file does not exist.
    pub fn load(path: &str) -> anyhow::Result<Self> {
        if !Path::new(path).exists() {
            return Ok(Self::default());
        }
        let content =
            std::fs::read_to_string(path).with_context(|| format!("Failed to read {path}"))?;
        serde_yaml::from_str(&content).with_context(|| format!("Failed to parse {path}"))
    }
}

/// Configuration for connected services.
#[derive(Debug, Default, Deserialize, Clone)]
pub struct ServicesConfig {
    #[serde(default)]
    pub telegram: TelegramConfig,
}

/// Specific configuration for the Telegram service. The token itself never
/// lives in the config file, only the name of the variable holding it.
#[derive(Debug, Deserialize, Clone)]
pub struct TelegramConfig {
    #[serde(default = "default_token_env")]
    pub token_env: String,
}

impl Default for TelegramConfig {
    fn default() -> Self {
        Self {
            token_env: default_token_env(),
        }
    }
}

fn default_token_env() -> String {
    "BOT_TOKEN".to_string()
}

/// Task database location.
#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    #[serde(default = "default_db_path")]
    pub db_path: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            db_path: default_db_path(),
        }
    }
}

fn default_db_path() -> String {
    "data/tasks.db".to_string()
}

/// Outbound HTTP settings shared by the rate and weather clients.
#[derive(Debug, Deserialize, Clone)]
pub struct HttpConfig {
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    10
}

/// Open-Meteo endpoints and result language.
#[derive(Debug, Deserialize, Clone)]
pub struct WeatherConfig {
    #[serde(default = "default_geocode_url")]
    pub geocode_url: String,
    #[serde(default = "default_forecast_url")]
    pub forecast_url: String,
    #[serde(default = "default_language")]
    pub language: String,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            geocode_url: default_geocode_url(),
            forecast_url: default_forecast_url(),
            language: default_language(),
        }
    }
}

fn default_geocode_url() -> String {
    "https://geocoding-api.open-meteo.com/v1/search".to_string()
}

fn default_forecast_url() -> String {
    "https://api.open-meteo.com/v1/forecast".to_string()
}

fn default_language() -> String {
    "en".to_string()
}

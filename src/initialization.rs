use std::env;
use std::fs;
use serde::Deserialize;
use crate::errors::ConfigError;
use crate::logging;

const CONFIG_PATH_VAR: &str = "WEATHERDASH_CONFIG";
const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Environment override for the provider credential, checked after the
/// config file so a key never has to be committed to disk
const API_KEY_VAR: &str = "OPENWEATHER_API_KEY";

#[derive(Deserialize, Clone)]
pub struct Config {
    pub web_server: WebServerConfig,
    pub provider: ProviderConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Deserialize, Clone)]
pub struct WebServerConfig {
    pub bind_address: String,
    pub bind_port: u16,
}

#[derive(Deserialize, Clone)]
pub struct ProviderConfig {
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_units")]
    pub units: String,
    #[serde(default = "default_lang")]
    pub lang: String,
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

#[derive(Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,
    #[serde(default)]
    pub log_file: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig { level: default_level(), log_file: None }
    }
}

fn default_base_url() -> String {
    "https://api.openweathermap.org/data/2.5".to_string()
}

fn default_units() -> String {
    "metric".to_string()
}

fn default_lang() -> String {
    "en".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_level() -> String {
    "info".to_string()
}

/// Loads the application configuration and initializes logging
///
/// The configuration file path is taken from the WEATHERDASH_CONFIG environment
/// variable, falling back to ./config.toml. An OPENWEATHER_API_KEY environment
/// variable overrides the api_key from the file.
pub fn config() -> Result<Config, ConfigError> {
    let path = env::var(CONFIG_PATH_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    let raw = fs::read_to_string(&path)?;
    let mut config: Config = toml::from_str(&raw)?;

    if let Ok(key) = env::var(API_KEY_VAR) {
        if !key.is_empty() {
            config.provider.api_key = key;
        }
    }
    if config.provider.api_key.is_empty() {
        return Err(ConfigError::from("no provider api key in config file or environment"));
    }

    logging::setup(&config.logging)?;

    Ok(config)
}

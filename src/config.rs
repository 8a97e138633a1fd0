//! Startup configuration: command-line flags with environment fallbacks
//!
//! Everything here is resolved once, before the terminal is taken over.

use std::path::PathBuf;

use crate::api::DEFAULT_BASE_URL;
use crate::i18n::Language;

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing OpenWeatherMap API key (pass --api-key or set OPENWEATHER_API_KEY)")]
    MissingApiKey,
    #[error("invalid base URL {0:?}: expected http:// or https://")]
    InvalidBaseUrl(String),
}

/// Flags shared by the binary; flattened into its argument parser
#[derive(clap::Args, Debug, Clone, Default)]
pub struct ConfigArgs {
    /// OpenWeatherMap API key
    #[arg(long, env = "OPENWEATHER_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// UI language (also selects °C or °F)
    #[arg(long, short, value_enum, env = "WEATHER_LANGUAGE", default_value = "tr")]
    pub language: Language,

    /// Pre-fill the city field
    #[arg(long, short)]
    pub city: Option<String>,

    /// Provider base URL
    #[arg(long, env = "OPENWEATHER_BASE_URL")]
    pub base_url: Option<String>,

    /// Log file (defaults to the platform data directory)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

/// Resolved configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub api_key: String,
    pub language: Language,
    pub city: Option<String>,
    pub base_url: String,
    pub log_file: PathBuf,
}

impl Config {
    pub fn resolve(args: ConfigArgs) -> Result<Self, ConfigError> {
        let api_key = args
            .api_key
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        let base_url = args
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ConfigError::InvalidBaseUrl(base_url));
        }

        Ok(Self {
            api_key,
            language: args.language,
            city: args.city.filter(|city| !city.trim().is_empty()),
            base_url,
            log_file: args.log_file.unwrap_or_else(default_log_file),
        })
    }
}

fn default_log_file() -> PathBuf {
    dirs_next::data_local_dir()
        .map(|dir| dir.join("city-weather"))
        .unwrap_or_else(|| PathBuf::from("."))
        .join("city-weather.log")
}

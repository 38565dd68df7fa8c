use crate::error::ConfigError;

const WEATHER_API_URL_ENV: &str = "WEATHER_API_URL";
const WEATHER_API_KEY_ENV: &str = "WEATHER_API_KEY";
const PORT_ENV: &str = "PORT";
const DEFAULT_PORT: u16 = 10000;

/// Process-wide configuration, read once at startup and shared immutably.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the external weather data provider.
    pub weather_api_url: String,
    /// Access key forwarded to the weather provider on every lookup.
    pub weather_api_key: String,
    /// Listening port, from `PORT` (default 10000).
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let weather_api_url = require(WEATHER_API_URL_ENV)?;
        let weather_api_key = require(WEATHER_API_KEY_ENV)?;

        let port = match std::env::var(PORT_ENV) {
            Ok(value) => value.parse().map_err(|_| ConfigError::InvalidVar {
                name: PORT_ENV,
                value,
            })?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Config {
            weather_api_url,
            weather_api_key,
            port,
        })
    }
}

fn require(name: &'static str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingVar(name))
}

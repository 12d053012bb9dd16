//! Runtime settings loaded via OrthoConfig.
//!
//! Values come from CLI flags, `PICNIC_*` environment variables or a
//! configuration file, in that order of precedence.

use std::net::SocketAddr;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::outbound::persistence::PoolConfig;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 10;
const DEFAULT_WEATHER_BASE_URL: &str = "https://api.openweathermap.org";
const DEFAULT_WEATHER_TIMEOUT_SECS: u64 = 5;
const DEFAULT_WEATHER_MAX_ATTEMPTS: u32 = 3;

/// Errors raised when settings are present but unusable.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("{key} must be set")]
    Missing { key: &'static str },
    #[error("{key} is invalid: {message}")]
    Invalid { key: &'static str, message: String },
}

/// Configuration for the picnic backend process.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "PICNIC")]
pub struct PicnicSettings {
    /// PostgreSQL connection URL. Required.
    pub database_url: Option<String>,
    /// Socket address to listen on.
    pub bind_addr: Option<String>,
    /// Upper bound on pooled database connections.
    pub db_max_connections: Option<u32>,
    /// Apply embedded migrations before serving. Read from the environment
    /// or a file only; a CLI `SetTrue` flag would mask `PICNIC_RUN_MIGRATIONS`.
    #[ortho_config(default = true, skip_cli)]
    pub run_migrations: bool,
    /// OpenWeatherMap API key. Required.
    pub weather_api_key: Option<String>,
    /// Base URL of the weather API.
    pub weather_base_url: Option<String>,
    /// Per-request timeout for weather lookups, in seconds.
    pub weather_timeout_secs: Option<u64>,
    /// Attempts per weather lookup, including the first.
    pub weather_max_attempts: Option<u32>,
}

impl PicnicSettings {
    pub fn database_url(&self) -> Result<&str, SettingsError> {
        required(self.database_url.as_deref(), "PICNIC_DATABASE_URL")
    }

    pub fn weather_api_key(&self) -> Result<&str, SettingsError> {
        required(self.weather_api_key.as_deref(), "PICNIC_WEATHER_API_KEY")
    }

    /// Parsed listen address, falling back to `0.0.0.0:8080`.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        self.bind_addr
            .as_deref()
            .unwrap_or(DEFAULT_BIND_ADDR)
            .parse()
            .map_err(|err: std::net::AddrParseError| SettingsError::Invalid {
                key: "PICNIC_BIND_ADDR",
                message: err.to_string(),
            })
    }

    pub fn pool_config(&self) -> Result<PoolConfig, SettingsError> {
        let url = self.database_url()?;
        let max = self
            .db_max_connections
            .unwrap_or(DEFAULT_DB_MAX_CONNECTIONS);
        Ok(PoolConfig::new(url).with_max_size(max))
    }

    pub fn run_migrations(&self) -> bool {
        self.run_migrations
    }

    pub fn weather_base_url(&self) -> &str {
        self.weather_base_url
            .as_deref()
            .unwrap_or(DEFAULT_WEATHER_BASE_URL)
    }

    pub fn weather_timeout(&self) -> Duration {
        Duration::from_secs(
            self.weather_timeout_secs
                .unwrap_or(DEFAULT_WEATHER_TIMEOUT_SECS),
        )
    }

    /// Lookup attempts, never less than one.
    pub fn weather_max_attempts(&self) -> u32 {
        self.weather_max_attempts
            .unwrap_or(DEFAULT_WEATHER_MAX_ATTEMPTS)
            .max(1)
    }
}

fn required<'a>(value: Option<&'a str>, key: &'static str) -> Result<&'a str, SettingsError> {
    value
        .filter(|v| !v.trim().is_empty())
        .ok_or(SettingsError::Missing { key })
}

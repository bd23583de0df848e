//! Environment-driven configuration.

use std::net::SocketAddr;

use crate::server::error::config::ConfigError;

/// Default address the HTTP server binds to.
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

/// Default look-ahead window, in days, for the upcoming contract expiry report.
pub const DEFAULT_EXPIRY_WINDOW_DAYS: i64 = 30;

/// Runtime configuration read from environment variables.
pub struct Config {
    /// SeaORM connection URL, e.g. `sqlite://clinitrack.db?mode=rwc`
    pub database_url: String,
    /// Socket address for the HTTP listener
    pub bind_address: SocketAddr,
    /// Days ahead of today included in the contract expiry report
    pub expiry_window_days: i64,
}

impl Config {
    /// Reads configuration from the environment.
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and valid
    /// - `Err(ConfigError::MissingEnvVar)` - `DATABASE_URL` is not set
    /// - `Err(ConfigError::InvalidBindAddress)` - `BIND_ADDRESS` is not a socket address
    /// - `Err(ConfigError::InvalidEnvValue)` - `EXPIRY_WINDOW_DAYS` is not a non-negative integer
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL"))?;

        let bind_address = parse_bind_address(
            &std::env::var("BIND_ADDRESS").unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string()),
        )?;

        let expiry_window_days = match std::env::var("EXPIRY_WINDOW_DAYS") {
            Ok(value) => parse_expiry_window(&value)?,
            Err(_) => DEFAULT_EXPIRY_WINDOW_DAYS,
        };

        Ok(Self {
            database_url,
            bind_address,
            expiry_window_days,
        })
    }
}

fn parse_bind_address(value: &str) -> Result<SocketAddr, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|source| ConfigError::InvalidBindAddress {
            value: value.to_string(),
            source,
        })
}

fn parse_expiry_window(value: &str) -> Result<i64, ConfigError> {
    let days = value
        .trim()
        .parse::<i64>()
        .map_err(|e| ConfigError::InvalidEnvValue {
            var: "EXPIRY_WINDOW_DAYS",
            reason: e.to_string(),
        })?;

    if days < 0 {
        return Err(ConfigError::InvalidEnvValue {
            var: "EXPIRY_WINDOW_DAYS",
            reason: "must not be negative".to_string(),
        });
    }

    Ok(days)
}

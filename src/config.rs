use std::env;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use std::time::Duration;
use crate::error::{AppError, Result};

#[derive(Clone, Debug)]
pub struct Config {
    pub server_addr: SocketAddr,
    /// Simulated thinking time before a joke is returned.
    pub generate_delay: Duration,
    pub environment: String,
    pub random_seed: Option<u64>,
    pub log_level: String,
}

impl Config {
    pub fn load() -> Result<Self> {
        // Load environment variables from .env file if it exists
        dotenv::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup, falling back to defaults for
    /// unset keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string());
        let port = lookup("PORT").unwrap_or_else(|| "3000".to_string());
        let port = port.parse::<u16>().map_err(|e| AppError::ConfigError(format!("Invalid port: {}", e)))?;
        let ip = IpAddr::from_str(&host).map_err(|e| AppError::ConfigError(format!("Invalid host address: {}", e)))?;

        let delay_ms = match lookup("GENERATE_DELAY_MS") {
            Some(raw) => raw
                .parse::<u64>()
                .map_err(|e| AppError::ConfigError(format!("Invalid GENERATE_DELAY_MS: {}", e)))?,
            None => 500,
        };

        let random_seed = lookup("RANDOM_SEED")
            .map(|raw| {
                raw.parse::<u64>()
                    .map_err(|e| AppError::ConfigError(format!("Invalid RANDOM_SEED: {}", e)))
            })
            .transpose()?;

        Ok(Config {
            server_addr: SocketAddr::new(ip, port),
            generate_delay: Duration::from_millis(delay_ms),
            environment: lookup("APP_ENVIRONMENT").unwrap_or_else(|| "development".to_string()),
            random_seed,
            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
        })
    }
}

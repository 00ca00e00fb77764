//! Server configuration from the environment

use crate::error::ServerError;
use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_DATASET_PATH: &str = "healthcare_dataset.csv";

/// Listener address, dataset location and forecast seeding.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub dataset_path: PathBuf,
    pub forecast_seed: Option<u64>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            dataset_path: PathBuf::from(DEFAULT_DATASET_PATH),
            forecast_seed: None,
        }
    }
}

impl ServerConfig {
    /// Read `HOST`, `PORT`, `DATASET_PATH` and `FORECAST_SEED`.
    pub fn from_env() -> Result<Self, ServerError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with a custom variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ServerError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ServerError::Config(format!("PORT must be a valid number, got '{}'", raw)))?,
            None => defaults.port,
        };

        let forecast_seed = match lookup("FORECAST_SEED") {
            Some(raw) if !raw.trim().is_empty() => Some(raw.trim().parse().map_err(|_| {
                ServerError::Config(format!("FORECAST_SEED must be an unsigned integer, got '{}'", raw))
            })?),
            _ => None,
        };

        Ok(Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port,
            dataset_path: lookup("DATASET_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.dataset_path),
            forecast_seed,
        })
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, ServerError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|_| {
                ServerError::Config(format!("Invalid HOST:PORT configuration: {}:{}", self.host, self.port))
            })
    }
}

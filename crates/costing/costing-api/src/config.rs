//! Forecast configuration

use serde::{Deserialize, Serialize};

/// Defaults applied to forecast requests and the RNG seeding policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastConfig {
    /// Service used when a request names none
    pub default_service: String,
    /// Horizon used when a request gives none
    pub default_horizon_days: u32,
    /// When set, every forecast draws from a generator seeded with this
    /// value and is therefore reproducible. When unset, each forecast is
    /// seeded from OS entropy.
    pub seed: Option<u64>,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            default_service: "Urgences".to_string(),
            default_horizon_days: 30,
            seed: None,
        }
    }
}

impl ForecastConfig {
    /// Default configuration with a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }
}

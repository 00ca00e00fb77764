//! Costing Consumer API
//!
//! The service object handed to request handlers, plus configuration types
//! and builders.
//!
//! This crate provides:
//! - `CostingService`, which owns the shared dataset and the estimators
//! - Configuration for forecast defaults and seeding
//! - Re-exports from SPI and core for convenience

pub mod config;
pub mod service;

pub use config::ForecastConfig;
pub use service::{CostingService, CostingServiceBuilder};

// Re-export from core
pub use costing_core::{
    all_service_stats, catalog, compare_services, estimator, forecaster, list_services,
    numeric, service_stats, severity_factor, stats, trend, PatientCostEstimator,
    ServiceForecaster, TrendForecaster, MAX_HORIZON_DAYS, MODEL_NAME, MODEL_VERSION,
};

// Re-export traits and models from SPI
pub use costing_spi::{
    ConfidenceBand, CostEstimator, CostForecaster, CostPrediction, CostingError,
    PatientRecord, Result, RiskLevel, ServiceForecast, ServiceForecastPoint, ServiceStats,
    TrendDirection, TrendForecast,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{CostingService, CostingServiceBuilder, ForecastConfig};
    pub use costing_core::{PatientCostEstimator, ServiceForecaster, TrendForecaster};
    pub use costing_spi::{
        CostEstimator, CostForecaster, CostPrediction, CostingError, PatientRecord,
        RiskLevel, ServiceForecast,
    };
}

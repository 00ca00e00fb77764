//! Costing Core
//!
//! Core implementations for per-patient cost estimation, per-service
//! forecasting, service statistics and trend projection.

pub mod catalog;
pub mod estimator;
pub mod forecaster;
pub mod numeric;
pub mod stats;
pub mod trend;

// Re-export SPI traits for implementations
pub use costing_spi::{
    ConfidenceBand, CostEstimator, CostForecaster, CostPrediction, CostingError,
    PatientRecord, Result, RiskLevel, ServiceForecast, ServiceForecastPoint, ServiceStats,
    TrendDirection, TrendForecast,
};

// Re-export main types
pub use catalog::list_services;
pub use estimator::{severity_factor, PatientCostEstimator, MODEL_NAME, MODEL_VERSION};
pub use forecaster::ServiceForecaster;
pub use numeric::MAX_HORIZON_DAYS;
pub use stats::{all_service_stats, service_stats};
pub use trend::{compare_services, TrendForecaster};

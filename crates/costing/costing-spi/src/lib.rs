//! Costing Service Provider Interface
//!
//! Defines the patient and forecast models, the costing error taxonomy, and
//! the traits implemented by estimators and forecasters.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::{CostEstimator, CostForecaster};
pub use error::{CostingError, Result};
pub use model::{
    ConfidenceBand, CostPrediction, PatientRecord, RiskLevel, ServiceForecast,
    ServiceForecastPoint, ServiceStats, TrendDirection, TrendForecast,
};

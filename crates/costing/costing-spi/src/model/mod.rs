//! Model module containing data structures

mod confidence_band;
mod patient;
mod prediction;
mod service_forecast;
mod service_stats;
mod trend_forecast;

pub use confidence_band::ConfidenceBand;
pub use patient::PatientRecord;
pub use prediction::{CostPrediction, RiskLevel};
pub use service_forecast::{ServiceForecast, ServiceForecastPoint};
pub use service_stats::ServiceStats;
pub use trend_forecast::{TrendDirection, TrendForecast};

//! Contract module containing trait definitions for costing operations

mod cost_estimator;
mod cost_forecaster;

pub use cost_estimator::CostEstimator;
pub use cost_forecaster::CostForecaster;

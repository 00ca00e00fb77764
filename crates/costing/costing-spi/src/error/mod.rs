//! Error module containing error types and result aliases

mod costing_error;

pub use costing_error::CostingError;

/// Result type for costing operations
pub type Result<T> = std::result::Result<T, CostingError>;

//! Costing error types

use thiserror::Error;

/// Errors that can occur while estimating or forecasting costs
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CostingError {
    /// Request body missing, unparseable, or carrying wrongly typed fields
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Historical dataset was never loaded
    #[error("Dataset not loaded")]
    DatasetUnavailable,

    /// No historical records for the requested service
    #[error("Service {0} not found")]
    ServiceNotFound(String),

    /// Not enough records for the requested computation
    #[error("Insufficient data: need at least {required} points, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    /// Invalid parameter value
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },

    /// Anything else
    #[error("Internal error: {0}")]
    InternalError(String),
}

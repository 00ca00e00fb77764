//! Costing Facade
//!
//! Unified re-exports for the costing module.
//!
//! This facade provides a single entry point for all costing functionality:
//! - `costing_spi` - Patient and forecast models, errors, estimator traits
//! - `costing_api` - `CostingService`, configuration and builders
//! - `costing_core` - Implementations (fixed-table estimator, forecasters, statistics)
//!
//! # Example
//!
//! ```rust
//! use costing_facade::{CostingService, PatientRecord, RiskLevel};
//!
//! let service = CostingService::new(None);
//! let patient = PatientRecord::new(70, "F", "Cancer", 10, 3);
//! let prediction = service.estimate(&patient);
//!
//! assert_eq!(prediction.estimated_cost, 5160.0);
//! assert_eq!(prediction.risk_level, RiskLevel::High);
//! ```

// Re-export everything from SPI
pub use costing_spi::*;

// Re-export everything from API
pub use costing_api::*;

// Re-export everything from Core
pub use costing_core::*;

//! Data Source Facade
//!
//! Unified re-exports for the data module.
//!
//! This facade provides a single entry point for all dataset functionality:
//! - `data_spi` - Records, dataset, errors and the `DataSource` trait
//! - `data_api` - Dataset configuration
//! - `data_core` - Implementations (CSV)
//!
//! # Example
//!
//! ```rust,no_run
//! use data_facade::{costs, DatasetConfig};
//!
//! let dataset = DatasetConfig::new("healthcare_dataset.csv").load().unwrap();
//! for service in dataset.services() {
//!     let total: f64 = costs(&dataset.for_service(&service)).iter().sum();
//!     println!("{}: {:.2}", service, total);
//! }
//! ```

// Re-export everything from SPI
pub use data_spi::*;

// Re-export everything from API
pub use data_api::*;

// Re-export everything from Core
pub use data_core::*;

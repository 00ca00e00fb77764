//! Data Consumer API
//!
//! Configuration types for locating and loading the historical dataset.

pub mod config;

pub use config::{DatasetConfig, DEFAULT_DATASET_PATH};

// Re-export from core
pub use data_core::{read_records, CsvDataSource, REQUIRED_COLUMNS};

// Re-export from SPI
pub use data_spi::{DataError, DataSource, HistoricalDataset, HistoricalRecord, Result};

//! Dataset configuration types.

use data_core::CsvDataSource;
use data_spi::{DataSource, HistoricalDataset, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// File name looked up when no dataset path is configured.
pub const DEFAULT_DATASET_PATH: &str = "healthcare_dataset.csv";

/// Configuration for loading the historical dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetConfig {
    /// Path to the CSV file
    pub path: PathBuf,
    /// Field delimiter
    pub delimiter: u8,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DATASET_PATH)
    }
}

impl DatasetConfig {
    /// Create a comma-separated dataset configuration.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            delimiter: b',',
        }
    }

    /// Build the loader described by this configuration.
    pub fn source(&self) -> CsvDataSource {
        CsvDataSource::new(self.path.clone()).with_delimiter(self.delimiter)
    }

    /// Load the dataset described by this configuration.
    pub fn load(&self) -> Result<HistoricalDataset> {
        self.source().load()
    }
}

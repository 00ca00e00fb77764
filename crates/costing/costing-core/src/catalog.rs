//! Service catalog

use costing_spi::{CostingError, Result};
use data_spi::HistoricalDataset;

/// Distinct service names present in the dataset, in first-seen order.
pub fn list_services(data: Option<&HistoricalDataset>) -> Result<Vec<String>> {
    data.map(HistoricalDataset::services)
        .ok_or(CostingError::DatasetUnavailable)
}

//! Data models for historical healthcare cost data.

mod dataset;
mod record;
mod utils;

pub use dataset::HistoricalDataset;
pub use record::HistoricalRecord;
pub use utils::{costs, occupancy_rates, patient_counts};

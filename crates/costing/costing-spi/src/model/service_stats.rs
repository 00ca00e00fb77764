//! Per-service descriptive statistics

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Summary of a service's historical records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceStats {
    pub service: String,
    pub records: usize,
    pub cost_mean: f64,
    /// Sample standard deviation; 0 for a single record
    pub cost_std: f64,
    pub cost_min: f64,
    pub cost_max: f64,
    pub patients_mean: f64,
    pub patients_std: f64,
    /// Mean occupancy ratio (0.85 means 85%)
    pub occupancy_mean: f64,
    pub first_date: NaiveDate,
    pub last_date: NaiveDate,
}

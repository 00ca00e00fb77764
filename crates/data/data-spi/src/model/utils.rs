//! Utility functions for extracting numeric columns from records.

use super::HistoricalRecord;
use std::borrow::Borrow;

/// Extract total costs from records.
pub fn costs<R: Borrow<HistoricalRecord>>(records: &[R]) -> Vec<f64> {
    records.iter().map(|r| r.borrow().cout_total).collect()
}

/// Extract patient counts from records.
pub fn patient_counts<R: Borrow<HistoricalRecord>>(records: &[R]) -> Vec<f64> {
    records
        .iter()
        .map(|r| r.borrow().patients_count as f64)
        .collect()
}

/// Extract occupancy ratios from records.
pub fn occupancy_rates<R: Borrow<HistoricalRecord>>(records: &[R]) -> Vec<f64> {
    records.iter().map(|r| r.borrow().taux_occupation).collect()
}

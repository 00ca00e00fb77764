//! In-memory historical dataset.

use super::HistoricalRecord;
use chrono::NaiveDate;
use std::collections::HashSet;

/// Immutable collection of historical records, loaded once and shared
/// read-only for the lifetime of the process.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HistoricalDataset {
    records: Vec<HistoricalRecord>,
}

impl HistoricalDataset {
    /// Create a dataset from records, keeping their order.
    pub fn new(records: Vec<HistoricalRecord>) -> Self {
        Self { records }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records in load order.
    pub fn records(&self) -> &[HistoricalRecord] {
        &self.records
    }

    /// Records belonging to `service` (exact match), in load order.
    pub fn for_service(&self, service: &str) -> Vec<&HistoricalRecord> {
        self.records
            .iter()
            .filter(|r| r.service == service)
            .collect()
    }

    /// Distinct service names in first-seen order.
    pub fn services(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.records
            .iter()
            .filter(|r| seen.insert(r.service.as_str()))
            .map(|r| r.service.clone())
            .collect()
    }

    /// Earliest and latest dates, or `None` for an empty dataset.
    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        let first = self.records.iter().map(|r| r.date).min()?;
        let last = self.records.iter().map(|r| r.date).max()?;
        Some((first, last))
    }
}

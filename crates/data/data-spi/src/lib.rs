//! Data Source Service Provider Interface
//!
//! Defines the historical cost records, the in-memory dataset built from them,
//! and the trait implemented by dataset loaders.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::DataSource;
pub use error::{DataError, Result};
pub use model::{
    costs, occupancy_rates, patient_counts, HistoricalDataset, HistoricalRecord,
};

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    #[test]
    fn test_record_new() {
        let record = HistoricalRecord::new(date(1), "Urgences", 1200.5, 42, 0.87);
        assert_eq!(record.date, date(1));
        assert_eq!(record.service, "Urgences");
        assert_eq!(record.cout_total, 1200.5);
        assert_eq!(record.patients_count, 42);
        assert_eq!(record.taux_occupation, 0.87);
    }

    #[test]
    fn test_costs_from_dataset() {
        let dataset = HistoricalDataset::new(vec![
            HistoricalRecord::new(date(1), "Urgences", 100.0, 10, 0.5),
            HistoricalRecord::new(date(1), "Pediatrie", 200.0, 20, 0.6),
        ]);
        assert_eq!(costs(dataset.records()), vec![100.0, 200.0]);
    }

    #[test]
    fn test_dataset_services_through_root_exports() {
        let dataset = HistoricalDataset::new(vec![
            HistoricalRecord::new(date(1), "Cardiologie", 100.0, 10, 0.5),
            HistoricalRecord::new(date(2), "Urgences", 200.0, 20, 0.6),
        ]);
        assert_eq!(dataset.services(), vec!["Cardiologie", "Urgences"]);
    }
}

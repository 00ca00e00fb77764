//! Historical record type.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One row of the historical dataset: the aggregate cost of a hospital
/// service on a given day.
///
/// Field names match the dataset's column headers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalRecord {
    /// Calendar day (YYYY-MM-DD)
    pub date: NaiveDate,
    /// Hospital service name (e.g. "Urgences")
    pub service: String,
    /// Total cost for the day
    pub cout_total: f64,
    /// Number of patients treated
    pub patients_count: u32,
    /// Bed occupancy ratio
    pub taux_occupation: f64,
}

impl HistoricalRecord {
    /// Create a new record.
    pub fn new(
        date: NaiveDate,
        service: &str,
        cout_total: f64,
        patients_count: u32,
        taux_occupation: f64,
    ) -> Self {
        Self {
            date,
            service: service.to_string(),
            cout_total,
            patients_count,
            taux_occupation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_uses_column_names() {
        let record = HistoricalRecord::new(
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            "Chirurgie",
            2500.75,
            18,
            0.92,
        );
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["date"], "2024-01-15");
        assert_eq!(json["service"], "Chirurgie");
        assert_eq!(json["cout_total"], 2500.75);
        assert_eq!(json["patients_count"], 18);
        assert_eq!(json["taux_occupation"], 0.92);
    }

    #[test]
    fn test_deserialize_from_json() {
        let json = r#"{
            "date": "2024-02-29",
            "service": "Pediatrie",
            "cout_total": 800.0,
            "patients_count": 7,
            "taux_occupation": 0.4
        }"#;
        let record: HistoricalRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.date, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
        assert_eq!(record.patients_count, 7);
    }
}

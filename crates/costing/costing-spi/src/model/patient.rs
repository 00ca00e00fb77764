//! Patient feature record

use serde::{Deserialize, Serialize};

/// Features of one patient stay, as submitted for a cost estimate.
///
/// Every field is optional on the wire; missing fields take the defaults
/// below. Ranges are not validated, so negative values pass through.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatientRecord {
    /// Age in years (default 45)
    pub age: i64,
    /// Gender (default "M"). Echoed back but not used by any rule.
    pub gender: String,
    /// Diagnosis key into the severity table (default "General")
    pub diagnosis: String,
    /// Planned stay in days (default 5)
    pub duration_days: i64,
    /// Number of prior admissions (default 0)
    pub previous_admissions: i64,
}

impl Default for PatientRecord {
    fn default() -> Self {
        Self {
            age: 45,
            gender: "M".to_string(),
            diagnosis: "General".to_string(),
            duration_days: 5,
            previous_admissions: 0,
        }
    }
}

impl PatientRecord {
    /// Create a record from explicit values.
    pub fn new(
        age: i64,
        gender: &str,
        diagnosis: &str,
        duration_days: i64,
        previous_admissions: i64,
    ) -> Self {
        Self {
            age,
            gender: gender.to_string(),
            diagnosis: diagnosis.to_string(),
            duration_days,
            previous_admissions,
        }
    }
}

//! Rule-based patient cost estimator
//!
//! Applies fixed multiplier tables to a patient record. There is no learned
//! model and no randomness: the same record always yields the same estimate.
//!
//! ## Rules
//!
//! 1. Start from a base cost of 500.
//! 2. Age over 65 multiplies by 1.3; age under 18 multiplies by 0.9.
//! 3. Each day of stay adds 150.
//! 4. More than two prior admissions multiplies by 1.2.
//! 5. The diagnosis severity factor multiplies the total.
//!
//! The confidence band is ±15% of the rounded estimate.

use crate::numeric::{round2, scaled_band};
use costing_spi::{CostEstimator, CostPrediction, PatientRecord, RiskLevel};

/// Name reported in response metadata.
pub const MODEL_NAME: &str = "Healthcare Cost Predictor";
/// Version reported in response metadata.
pub const MODEL_VERSION: &str = "1.0.0";

const BASE_COST: f64 = 500.0;
const DAILY_COST: f64 = 150.0;
const ELDERLY_AGE: i64 = 65;
const ELDERLY_FACTOR: f64 = 1.3;
const MINOR_AGE: i64 = 18;
const MINOR_FACTOR: f64 = 0.9;
const READMISSION_THRESHOLD: i64 = 2;
const READMISSION_FACTOR: f64 = 1.2;
const BAND_LOW: f64 = 0.85;
const BAND_HIGH: f64 = 1.15;

/// Diagnosis severity multipliers. Lookup is exact and case-sensitive.
const SEVERITY_TABLE: [(&str, f64); 6] = [
    ("Hypertension", 1.1),
    ("Diabetes", 1.15),
    ("Heart Disease", 1.5),
    ("Cancer", 2.0),
    ("Asthma", 0.9),
    ("General", 1.0),
];

/// Severity multiplier for a diagnosis; 1.0 when the diagnosis is unknown.
pub fn severity_factor(diagnosis: &str) -> f64 {
    SEVERITY_TABLE
        .iter()
        .find(|(name, _)| *name == diagnosis)
        .map(|(_, factor)| *factor)
        .unwrap_or(1.0)
}

/// Fixed-table patient cost estimator.
#[derive(Debug, Clone, Copy, Default)]
pub struct PatientCostEstimator;

impl PatientCostEstimator {
    pub fn new() -> Self {
        Self
    }

    /// Unrounded cost before the band is applied.
    fn raw_cost(patient: &PatientRecord, severity: f64) -> f64 {
        let mut cost = BASE_COST;

        if patient.age > ELDERLY_AGE {
            cost *= ELDERLY_FACTOR;
        } else if patient.age < MINOR_AGE {
            cost *= MINOR_FACTOR;
        }

        // Additive, after the age multiplier
        cost += patient.duration_days as f64 * DAILY_COST;

        if patient.previous_admissions > READMISSION_THRESHOLD {
            cost *= READMISSION_FACTOR;
        }

        cost * severity
    }

    /// Capped at 1.0 from above only; low-severity young patients can score
    /// below zero.
    fn risk_score(patient: &PatientRecord, severity: f64) -> f64 {
        let score = patient.age as f64 / 100.0
            + patient.previous_admissions as f64 * 0.1
            + (severity - 1.0);
        score.min(1.0)
    }

    fn length_of_stay(patient: &PatientRecord) -> i64 {
        let extra = if patient.previous_admissions > 1 { 1 } else { 0 };
        // Inputs are unvalidated, so the extra day must not overflow
        patient.duration_days.saturating_add(extra).max(1)
    }
}

impl CostEstimator for PatientCostEstimator {
    fn name(&self) -> &str {
        MODEL_NAME
    }

    fn version(&self) -> &str {
        MODEL_VERSION
    }

    fn estimate(&self, patient: &PatientRecord) -> CostPrediction {
        let severity = severity_factor(&patient.diagnosis);
        let estimated_cost = round2(Self::raw_cost(patient, severity));
        let risk_score = Self::risk_score(patient, severity);

        CostPrediction {
            estimated_cost,
            confidence: scaled_band(estimated_cost, BAND_LOW, BAND_HIGH),
            predicted_length_of_stay: Self::length_of_stay(patient),
            risk_score,
            risk_level: RiskLevel::from_score(risk_score),
        }
    }
}

//! Trait for per-patient cost estimation

use crate::model::{CostPrediction, PatientRecord};

/// Trait for rule-based or learned per-patient cost estimators
pub trait CostEstimator: Send + Sync {
    /// Estimator name, reported in response metadata
    fn name(&self) -> &str;

    /// Estimator version, reported in response metadata
    fn version(&self) -> &str;

    /// Estimate cost, stay length and risk for one patient
    fn estimate(&self, patient: &PatientRecord) -> CostPrediction;
}

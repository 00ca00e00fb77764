//! Patient cost prediction

use super::ConfidenceBand;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Risk classification derived from the risk score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Score above this is HIGH.
    pub const HIGH_THRESHOLD: f64 = 0.6;
    /// Score above this (and not HIGH) is MEDIUM.
    pub const MEDIUM_THRESHOLD: f64 = 0.3;

    /// Classify a risk score. Both thresholds are exclusive.
    pub fn from_score(score: f64) -> Self {
        if score > Self::HIGH_THRESHOLD {
            RiskLevel::High
        } else if score > Self::MEDIUM_THRESHOLD {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "LOW",
            RiskLevel::Medium => "MEDIUM",
            RiskLevel::High => "HIGH",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Cost and risk estimate for one patient stay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostPrediction {
    /// Point estimate, rounded to cents
    pub estimated_cost: f64,
    /// Band around the point estimate
    pub confidence: ConfidenceBand,
    /// Predicted stay in days, at least 1
    pub predicted_length_of_stay: i64,
    /// Unrounded risk score, capped at 1.0
    pub risk_score: f64,
    /// Classification of `risk_score`
    pub risk_level: RiskLevel,
}

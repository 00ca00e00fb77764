//! Confidence band model

use serde::{Deserialize, Serialize};

/// Lower and upper bound around a single point estimate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceBand {
    /// Lower bound
    pub min: f64,
    /// Upper bound
    pub max: f64,
}

impl ConfidenceBand {
    /// Create a band from explicit bounds.
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Whether `value` lies inside the band, allowing `epsilon` of slack at
    /// each edge.
    pub fn contains(&self, value: f64, epsilon: f64) -> bool {
        self.min - epsilon <= value && value <= self.max + epsilon
    }
}

//! Linear trend projection

use super::ServiceForecastPoint;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Sign of the fitted trend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TrendDirection {
    Up,
    Down,
}

impl TrendDirection {
    /// `Up` for a strictly positive slope, `Down` otherwise.
    pub fn from_slope(slope: f64) -> Self {
        if slope > 0.0 {
            TrendDirection::Up
        } else {
            TrendDirection::Down
        }
    }

    /// Arrow used in tabular output.
    pub fn arrow(&self) -> char {
        match self {
            TrendDirection::Up => '↑',
            TrendDirection::Down => '↓',
        }
    }
}

impl fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrendDirection::Up => f.pad("UP"),
            TrendDirection::Down => f.pad("DOWN"),
        }
    }
}

/// Projection of a service's cost along its recent least-squares trend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendForecast {
    pub service: String,
    /// Fitted cost change per day
    pub slope: f64,
    pub direction: TrendDirection,
    pub points: Vec<ServiceForecastPoint>,
    /// Mean of the unrounded projected values
    pub mean_predicted_cost: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_from_slope() {
        assert_eq!(TrendDirection::from_slope(12.5), TrendDirection::Up);
        assert_eq!(TrendDirection::from_slope(0.0), TrendDirection::Down);
        assert_eq!(TrendDirection::from_slope(-3.0), TrendDirection::Down);
    }

    #[test]
    fn test_direction_display_and_serde() {
        assert_eq!(TrendDirection::Up.to_string(), "UP");
        assert_eq!(
            serde_json::to_string(&TrendDirection::Down).unwrap(),
            "\"DOWN\""
        );
        assert_eq!(TrendDirection::Up.arrow(), '↑');
    }
}

//! Service cost forecast

use super::ConfidenceBand;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Forecast for a single future day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceForecastPoint {
    /// Forecast day
    pub date: NaiveDate,
    /// Point forecast, rounded to cents
    pub predicted_cost: f64,
    /// Band around the point forecast
    pub confidence: ConfidenceBand,
}

/// Daily cost forecast for one hospital service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceForecast {
    /// Service name
    pub service: String,
    /// Number of forecast days
    pub horizon_days: u32,
    /// Historical mean cost of the service, rounded to cents
    pub average_predicted_cost: f64,
    /// One point per day, in date order
    pub points: Vec<ServiceForecastPoint>,
}

impl ServiceForecast {
    /// Predicted costs in date order.
    pub fn predicted_costs(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.predicted_cost).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_date_serializes_iso() {
        let point = ServiceForecastPoint {
            date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            predicted_cost: 100.0,
            confidence: ConfidenceBand::new(90.0, 110.0),
        };
        let json = serde_json::to_value(&point).unwrap();
        assert_eq!(json["date"], "2024-06-01");
        assert_eq!(json["predicted_cost"], 100.0);
    }

    #[test]
    fn test_predicted_costs() {
        let day = |d| NaiveDate::from_ymd_opt(2024, 6, d).unwrap();
        let forecast = ServiceForecast {
            service: "Urgences".to_string(),
            horizon_days: 2,
            average_predicted_cost: 100.0,
            points: vec![
                ServiceForecastPoint {
                    date: day(1),
                    predicted_cost: 101.0,
                    confidence: ConfidenceBand::new(90.9, 111.1),
                },
                ServiceForecastPoint {
                    date: day(2),
                    predicted_cost: 99.0,
                    confidence: ConfidenceBand::new(89.1, 108.9),
                },
            ],
        };
        assert_eq!(forecast.predicted_costs(), vec![101.0, 99.0]);
    }
}

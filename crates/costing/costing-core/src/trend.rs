//! Linear trend projection
//!
//! Fits an ordinary least squares line to a service's most recent costs and
//! extends it from the last observed day.
//!
//! ## When to Use
//!
//! - Offline what-if projections where reproducibility matters
//! - Comparing the direction of cost drift across services
//!
//! Unlike [`ServiceForecaster`](crate::ServiceForecaster) this projection is
//! deterministic and anchored on the dataset's last date, not on today.

use crate::numeric::{
    add_days, check_horizon, is_weekend, mean, ols_slope, round2, scaled_band,
};
use costing_spi::{
    CostingError, Result, ServiceForecastPoint, TrendDirection, TrendForecast,
};
use data_spi::{costs, HistoricalDataset};

/// Least-squares trend forecaster.
#[derive(Debug, Clone)]
pub struct TrendForecaster {
    window: usize,
    weekend_factor: f64,
    band_ratio: f64,
}

impl Default for TrendForecaster {
    fn default() -> Self {
        Self::new()
    }
}

impl TrendForecaster {
    /// Fit on the last 30 records, 15% weekend discount, ±10% band.
    pub fn new() -> Self {
        Self {
            window: 30,
            weekend_factor: 0.85,
            band_ratio: 0.1,
        }
    }

    /// Number of most recent records used to fit the slope.
    pub fn with_window(mut self, window: usize) -> Self {
        self.window = window;
        self
    }

    pub fn with_weekend_factor(mut self, weekend_factor: f64) -> Self {
        self.weekend_factor = weekend_factor;
        self
    }

    pub fn with_band_ratio(mut self, band_ratio: f64) -> Self {
        self.band_ratio = band_ratio;
        self
    }

    pub fn window(&self) -> usize {
        self.window
    }

    /// Project `horizon_days` days past the service's last recorded date.
    pub fn project(
        &self,
        data: &HistoricalDataset,
        service: &str,
        horizon_days: u32,
    ) -> Result<TrendForecast> {
        check_horizon(horizon_days)?;
        if self.window < 2 {
            return Err(CostingError::InvalidParameter {
                name: "window".to_string(),
                reason: "must be at least 2".to_string(),
            });
        }

        let mut records = data.for_service(service);
        if records.is_empty() {
            return Err(CostingError::ServiceNotFound(service.to_string()));
        }
        // Stable: same-day records keep their load order
        records.sort_by_key(|r| r.date);

        let history = costs(&records);
        let recent = &history[history.len().saturating_sub(self.window)..];
        let slope = ols_slope(recent)?;

        let last = records[records.len() - 1];
        let mut points = Vec::with_capacity(horizon_days as usize);
        let mut values = Vec::with_capacity(horizon_days as usize);
        for i in 1..=u64::from(horizon_days) {
            let date = add_days(last.date, i)?;
            let mut value = last.cout_total + slope * i as f64;

            if is_weekend(date) {
                value *= self.weekend_factor;
            }

            values.push(value);
            points.push(ServiceForecastPoint {
                date,
                predicted_cost: round2(value),
                confidence: scaled_band(value, 1.0 - self.band_ratio, 1.0 + self.band_ratio),
            });
        }

        Ok(TrendForecast {
            service: service.to_string(),
            slope,
            direction: TrendDirection::from_slope(slope),
            points,
            mean_predicted_cost: mean(&values),
        })
    }
}

/// Trend projections for every service with at least two records, highest
/// mean projected cost first.
pub fn compare_services(
    forecaster: &TrendForecaster,
    data: &HistoricalDataset,
    horizon_days: u32,
) -> Result<Vec<TrendForecast>> {
    check_horizon(horizon_days)?;
    let mut forecasts: Vec<TrendForecast> = data
        .services()
        .iter()
        .filter_map(|service| forecaster.project(data, service, horizon_days).ok())
        .collect();
    forecasts.sort_by(|a, b| b.mean_predicted_cost.total_cmp(&a.mean_predicted_cost));
    Ok(forecasts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use data_spi::HistoricalRecord;

    // 2024-01-01 is a Monday
    fn day(offset: u64) -> NaiveDate {
        add_days(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(), offset).unwrap()
    }

    fn linear_dataset(service: &str, start: f64, step: f64, n: u64) -> Vec<HistoricalRecord> {
        (0..n)
            .map(|i| HistoricalRecord::new(day(i), service, start + step * i as f64, 10, 0.5))
            .collect()
    }

    #[test]
    fn test_recovers_linear_slope() {
        // 40 records, last on 2024-02-09 (Friday)
        let data = HistoricalDataset::new(linear_dataset("Urgences", 1000.0, 10.0, 40));
        let trend = TrendForecaster::new().project(&data, "Urgences", 3).unwrap();

        assert!((trend.slope - 10.0).abs() < 1e-9);
        assert_eq!(trend.direction, TrendDirection::Up);
        assert_eq!(trend.points.len(), 3);
        assert_eq!(trend.points[0].date, NaiveDate::from_ymd_opt(2024, 2, 10).unwrap());

        // Last value 1390; Saturday and Sunday are discounted
        assert_eq!(trend.points[0].predicted_cost, round2(1400.0 * 0.85));
        assert_eq!(trend.points[1].predicted_cost, round2(1410.0 * 0.85));
        assert_eq!(trend.points[2].predicted_cost, 1420.0);
    }

    #[test]
    fn test_window_uses_recent_records_only() {
        // Flat for 20 days, then decreasing for 10
        let mut records: Vec<HistoricalRecord> = (0..20)
            .map(|i| HistoricalRecord::new(day(i), "Chirurgie", 2000.0, 10, 0.5))
            .collect();
        records.extend(
            (20..30).map(|i| {
                HistoricalRecord::new(day(i), "Chirurgie", 2000.0 - 5.0 * (i - 19) as f64, 10, 0.5)
            }),
        );
        let data = HistoricalDataset::new(records);

        let trend = TrendForecaster::new()
            .with_window(10)
            .project(&data, "Chirurgie", 1)
            .unwrap();
        assert!((trend.slope + 5.0).abs() < 1e-9);
        assert_eq!(trend.direction, TrendDirection::Down);
    }

    #[test]
    fn test_sorts_by_date_before_fitting() {
        let mut records = linear_dataset("Urgences", 100.0, 1.0, 5);
        records.reverse();
        let data = HistoricalDataset::new(records);

        let trend = TrendForecaster::new().project(&data, "Urgences", 1).unwrap();
        assert!((trend.slope - 1.0).abs() < 1e-9);
        // Anchored on the latest date (2024-01-05, Friday) and its value 104
        assert_eq!(trend.points[0].date, day(5));
    }

    #[test]
    fn test_single_record_is_insufficient() {
        let data = HistoricalDataset::new(linear_dataset("Pediatrie", 500.0, 0.0, 1));
        assert_eq!(
            TrendForecaster::new().project(&data, "Pediatrie", 5),
            Err(CostingError::InsufficientData {
                required: 2,
                actual: 1
            })
        );
    }

    #[test]
    fn test_unknown_service() {
        let data = HistoricalDataset::new(linear_dataset("Urgences", 1.0, 1.0, 3));
        assert!(matches!(
            TrendForecaster::new().project(&data, "Oncologie", 5),
            Err(CostingError::ServiceNotFound(_))
        ));
    }

    #[test]
    fn test_window_too_small() {
        let data = HistoricalDataset::new(linear_dataset("Urgences", 1.0, 1.0, 3));
        assert!(matches!(
            TrendForecaster::new().with_window(1).project(&data, "Urgences", 5),
            Err(CostingError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_band_contains_projection() {
        let data = HistoricalDataset::new(linear_dataset("Urgences", 1000.0, -3.0, 60));
        let trend = TrendForecaster::new().project(&data, "Urgences", 30).unwrap();
        for point in &trend.points {
            assert!(point.confidence.contains(point.predicted_cost, 0.011));
        }
    }

    #[test]
    fn test_compare_services_sorted_descending() {
        let mut records = linear_dataset("Urgences", 1000.0, 1.0, 10);
        records.extend(linear_dataset("Cardiologie", 3000.0, -1.0, 10));
        records.extend(linear_dataset("Pediatrie", 500.0, 2.0, 10));
        // Single record: skipped
        records.extend(linear_dataset("Maternite", 9000.0, 0.0, 1));
        let data = HistoricalDataset::new(records);

        let ranked = compare_services(&TrendForecaster::new(), &data, 30).unwrap();
        let names: Vec<&str> = ranked.iter().map(|t| t.service.as_str()).collect();
        assert_eq!(names, vec!["Cardiologie", "Urgences", "Pediatrie"]);
        assert_eq!(ranked[0].direction, TrendDirection::Down);
        assert_eq!(ranked[1].direction, TrendDirection::Up);
    }

    #[test]
    fn test_horizon_above_cap_is_rejected() {
        let data = HistoricalDataset::new(linear_dataset("Urgences", 1.0, 1.0, 3));
        let forecaster = TrendForecaster::new();
        assert!(matches!(
            forecaster.project(&data, "Urgences", u32::MAX),
            Err(CostingError::InvalidInput(_))
        ));
        assert!(matches!(
            compare_services(&forecaster, &data, 3651),
            Err(CostingError::InvalidInput(_))
        ));
        assert_eq!(
            forecaster.project(&data, "Urgences", 3650).unwrap().points.len(),
            3650
        );
    }
}

//! Costing service object
//!
//! Built once at startup and cloned into every request handler. Clones share
//! the dataset and the estimators through `Arc`, and nothing behind them is
//! ever mutated, so concurrent requests need no locking.

use crate::config::ForecastConfig;
use chrono::NaiveDate;
use costing_core::{
    all_service_stats, compare_services, list_services, service_stats, PatientCostEstimator,
    ServiceForecaster, TrendForecaster,
};
use costing_spi::{
    CostEstimator, CostForecaster, CostPrediction, CostingError, PatientRecord, Result,
    ServiceForecast, ServiceStats, TrendForecast,
};
use data_spi::HistoricalDataset;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fmt;
use std::sync::Arc;

/// Entry point for every costing operation.
#[derive(Clone)]
pub struct CostingService {
    dataset: Option<Arc<HistoricalDataset>>,
    estimator: Arc<dyn CostEstimator>,
    forecaster: Arc<dyn CostForecaster>,
    trend: TrendForecaster,
    config: ForecastConfig,
}

impl fmt::Debug for CostingService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CostingService")
            .field("dataset_rows", &self.dataset_len())
            .field("estimator", &self.estimator.name())
            .field("trend", &self.trend)
            .field("config", &self.config)
            .finish()
    }
}

impl CostingService {
    /// Service with default estimators and configuration.
    pub fn new(dataset: Option<HistoricalDataset>) -> Self {
        CostingServiceBuilder::new().dataset(dataset).build()
    }

    pub fn builder() -> CostingServiceBuilder {
        CostingServiceBuilder::new()
    }

    pub fn is_dataset_loaded(&self) -> bool {
        self.dataset.is_some()
    }

    pub fn dataset(&self) -> Option<&HistoricalDataset> {
        self.dataset.as_deref()
    }

    /// Number of loaded records; 0 when no dataset is loaded.
    pub fn dataset_len(&self) -> usize {
        self.dataset.as_ref().map_or(0, |d| d.len())
    }

    pub fn config(&self) -> &ForecastConfig {
        &self.config
    }

    pub fn estimator(&self) -> &dyn CostEstimator {
        self.estimator.as_ref()
    }

    /// Estimate cost and risk for one patient.
    pub fn estimate(&self, patient: &PatientRecord) -> CostPrediction {
        self.estimator.estimate(patient)
    }

    /// Forecast a service's daily cost, starting the day after `start`.
    ///
    /// `service` and `days` fall back to the configured defaults.
    pub fn forecast(
        &self,
        service: Option<&str>,
        days: Option<u32>,
        start: NaiveDate,
    ) -> Result<ServiceForecast> {
        let service = service.unwrap_or(&self.config.default_service);
        let days = days.unwrap_or(self.config.default_horizon_days);
        let mut rng = self.rng();
        self.forecaster
            .forecast(self.dataset(), service, days, start, &mut rng)
    }

    /// Distinct service names.
    pub fn list_services(&self) -> Result<Vec<String>> {
        list_services(self.dataset())
    }

    /// Statistics for one service, or for all of them when `service` is `None`.
    pub fn stats(&self, service: Option<&str>) -> Result<Vec<ServiceStats>> {
        let data = self.loaded()?;
        match service {
            Some(name) => Ok(vec![service_stats(data, name)?]),
            None => Ok(all_service_stats(data)),
        }
    }

    /// Trend projection for one service past its last recorded day.
    pub fn trend(&self, service: Option<&str>, days: Option<u32>) -> Result<TrendForecast> {
        let service = service.unwrap_or(&self.config.default_service);
        let days = days.unwrap_or(self.config.default_horizon_days);
        self.trend.project(self.loaded()?, service, days)
    }

    /// Trend projections for every service, highest projected cost first.
    pub fn compare(&self, days: Option<u32>) -> Result<Vec<TrendForecast>> {
        let days = days.unwrap_or(self.config.default_horizon_days);
        compare_services(&self.trend, self.loaded()?, days)
    }

    fn loaded(&self) -> Result<&HistoricalDataset> {
        self.dataset().ok_or(CostingError::DatasetUnavailable)
    }

    // One generator per call, never shared between requests
    fn rng(&self) -> StdRng {
        match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

/// Builder for CostingService.
pub struct CostingServiceBuilder {
    dataset: Option<HistoricalDataset>,
    estimator: Arc<dyn CostEstimator>,
    forecaster: Arc<dyn CostForecaster>,
    trend: TrendForecaster,
    config: ForecastConfig,
}

impl Default for CostingServiceBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CostingServiceBuilder {
    /// Create a new builder with the fixed-table estimator and the default
    /// forecasters.
    pub fn new() -> Self {
        Self {
            dataset: None,
            estimator: Arc::new(PatientCostEstimator::new()),
            forecaster: Arc::new(ServiceForecaster::new()),
            trend: TrendForecaster::new(),
            config: ForecastConfig::default(),
        }
    }

    /// Set the historical dataset; `None` leaves the service degraded.
    pub fn dataset(mut self, dataset: Option<HistoricalDataset>) -> Self {
        self.dataset = dataset;
        self
    }

    /// Set the patient estimator.
    pub fn estimator(mut self, estimator: impl CostEstimator + 'static) -> Self {
        self.estimator = Arc::new(estimator);
        self
    }

    /// Set the service forecaster.
    pub fn forecaster(mut self, forecaster: impl CostForecaster + 'static) -> Self {
        self.forecaster = Arc::new(forecaster);
        self
    }

    /// Set the trend forecaster.
    pub fn trend_forecaster(mut self, trend: TrendForecaster) -> Self {
        self.trend = trend;
        self
    }

    /// Set the forecast configuration.
    pub fn config(mut self, config: ForecastConfig) -> Self {
        self.config = config;
        self
    }

    /// Fix the forecast seed.
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Build the service.
    pub fn build(self) -> CostingService {
        CostingService {
            dataset: self.dataset.map(Arc::new),
            estimator: self.estimator,
            forecaster: self.forecaster,
            trend: self.trend,
            config: self.config,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use costing_spi::RiskLevel;
    use data_spi::HistoricalRecord;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    fn dataset() -> HistoricalDataset {
        HistoricalDataset::new(vec![
            HistoricalRecord::new(day(1), "Urgences", 1000.0, 30, 0.8),
            HistoricalRecord::new(day(2), "Urgences", 1200.0, 35, 0.85),
            HistoricalRecord::new(day(3), "Urgences", 1100.0, 32, 0.82),
            HistoricalRecord::new(day(1), "Cardiologie", 5000.0, 10, 0.6),
            HistoricalRecord::new(day(2), "Cardiologie", 5200.0, 11, 0.62),
        ])
    }

    #[test]
    fn test_unloaded_service() {
        let service = CostingService::new(None);
        assert!(!service.is_dataset_loaded());
        assert_eq!(service.dataset_len(), 0);
        assert_eq!(service.list_services(), Err(CostingError::DatasetUnavailable));
        assert_eq!(
            service.forecast(None, None, day(1)),
            Err(CostingError::DatasetUnavailable)
        );
        assert_eq!(service.stats(None), Err(CostingError::DatasetUnavailable));
        assert_eq!(service.trend(None, None), Err(CostingError::DatasetUnavailable));
        assert_eq!(service.compare(None), Err(CostingError::DatasetUnavailable));
    }

    #[test]
    fn test_estimate_works_without_dataset() {
        let service = CostingService::new(None);
        let prediction = service.estimate(&PatientRecord::default());
        assert_eq!(prediction.estimated_cost, 1250.0);
        assert_eq!(prediction.risk_level, RiskLevel::Medium);
        assert_eq!(service.estimator().name(), "Healthcare Cost Predictor");
    }

    #[test]
    fn test_forecast_defaults() {
        let service = CostingService::new(Some(dataset()));
        let forecast = service.forecast(None, None, day(10)).unwrap();
        assert_eq!(forecast.service, "Urgences");
        assert_eq!(forecast.points.len(), 30);
        assert_eq!(forecast.horizon_days, 30);
        assert_eq!(forecast.points[0].date, day(11));
    }

    #[test]
    fn test_forecast_explicit_service_and_days() {
        let service = CostingService::new(Some(dataset()));
        let forecast = service.forecast(Some("Cardiologie"), Some(7), day(10)).unwrap();
        assert_eq!(forecast.service, "Cardiologie");
        assert_eq!(forecast.points.len(), 7);
    }

    #[test]
    fn test_forecast_unknown_service() {
        let service = CostingService::new(Some(dataset()));
        assert_eq!(
            service.forecast(Some("Radiologie"), None, day(10)),
            Err(CostingError::ServiceNotFound("Radiologie".to_string()))
        );
    }

    #[test]
    fn test_seeded_service_is_reproducible() {
        let service = CostingService::builder()
            .dataset(Some(dataset()))
            .seed(99)
            .build();
        let a = service.forecast(None, Some(14), day(10)).unwrap();
        let b = service.clone().forecast(None, Some(14), day(10)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_list_services() {
        let service = CostingService::new(Some(dataset()));
        assert_eq!(service.list_services().unwrap(), vec!["Urgences", "Cardiologie"]);
        assert_eq!(service.dataset_len(), 5);
    }

    #[test]
    fn test_stats() {
        let service = CostingService::new(Some(dataset()));
        assert_eq!(service.stats(None).unwrap().len(), 2);

        let one = service.stats(Some("Cardiologie")).unwrap();
        assert_eq!(one.len(), 1);
        assert_eq!(one[0].cost_mean, 5100.0);

        assert!(matches!(
            service.stats(Some("Oncologie")),
            Err(CostingError::ServiceNotFound(_))
        ));
    }

    #[test]
    fn test_trend_and_compare() {
        let service = CostingService::new(Some(dataset()));
        let trend = service.trend(Some("Cardiologie"), Some(5)).unwrap();
        assert!((trend.slope - 200.0).abs() < 1e-9);
        assert_eq!(trend.points.len(), 5);

        let ranked = service.compare(Some(5)).unwrap();
        assert_eq!(ranked[0].service, "Cardiologie");
    }

    #[test]
    fn test_custom_config() {
        let config = ForecastConfig {
            default_service: "Cardiologie".to_string(),
            default_horizon_days: 3,
            seed: Some(1),
        };
        let service = CostingService::builder()
            .dataset(Some(dataset()))
            .config(config)
            .forecaster(ServiceForecaster::new().with_weekend_factor(1.0))
            .build();
        let forecast = service.forecast(None, None, day(10)).unwrap();
        assert_eq!(forecast.service, "Cardiologie");
        assert_eq!(forecast.points.len(), 3);
    }

    #[test]
    fn test_debug_does_not_dump_dataset() {
        let service = CostingService::new(Some(dataset()));
        let debug = format!("{:?}", service);
        assert!(debug.contains("dataset_rows: 5"));
        assert!(!debug.contains("Urgences"));
    }
}

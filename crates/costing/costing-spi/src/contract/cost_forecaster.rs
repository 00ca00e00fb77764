//! Trait for per-service cost forecasting

use crate::error::Result;
use crate::model::ServiceForecast;
use chrono::NaiveDate;
use data_spi::HistoricalDataset;
use rand::RngCore;

/// Trait for daily cost forecasters over the historical dataset
pub trait CostForecaster: Send + Sync {
    /// Forecast `horizon_days` days for `service`, the first one being the
    /// day after `start`.
    ///
    /// Any randomness is drawn from `rng`, so a seeded generator gives a
    /// reproducible forecast.
    ///
    /// # Errors
    ///
    /// `DatasetUnavailable` when `data` is `None`, `ServiceNotFound` when
    /// the dataset has no record for `service`.
    fn forecast(
        &self,
        data: Option<&HistoricalDataset>,
        service: &str,
        horizon_days: u32,
        start: NaiveDate,
        rng: &mut dyn RngCore,
    ) -> Result<ServiceForecast>;
}

//! Stochastic per-service cost forecaster
//!
//! Every forecast day starts from the service's historical mean cost, adds a
//! Gaussian perturbation scaled to the historical spread, and applies a
//! weekend discount.
//!
//! ## Algorithm
//!
//! For day `i` in `1..=horizon`:
//!
//! ```text
//! value = mean + N(0, std * noise_ratio)
//! value *= weekend_factor          (Saturday and Sunday only)
//! band  = value * (1 -/+ band_ratio)
//! ```
//!
//! The generator is supplied by the caller; seed it for reproducible output.

use crate::numeric::{
    add_days, check_horizon, is_weekend, mean, round2, sample_std, scaled_band,
};
use chrono::NaiveDate;
use costing_spi::{
    CostForecaster, CostingError, Result, ServiceForecast, ServiceForecastPoint,
};
use data_spi::{costs, HistoricalDataset};
use rand::RngCore;
use rand_distr::{Distribution, Normal};

/// Mean/standard-deviation sampling forecaster with a weekend discount.
#[derive(Debug, Clone)]
pub struct ServiceForecaster {
    noise_ratio: f64,
    weekend_factor: f64,
    band_ratio: f64,
}

impl Default for ServiceForecaster {
    fn default() -> Self {
        Self::new()
    }
}

impl ServiceForecaster {
    /// Noise of 10% of the historical spread, 15% weekend discount and a
    /// ±10% band.
    pub fn new() -> Self {
        Self {
            noise_ratio: 0.1,
            weekend_factor: 0.85,
            band_ratio: 0.1,
        }
    }

    /// Scale of the Gaussian term relative to the historical standard deviation.
    pub fn with_noise_ratio(mut self, noise_ratio: f64) -> Self {
        self.noise_ratio = noise_ratio;
        self
    }

    /// Multiplier applied to Saturday and Sunday forecasts.
    pub fn with_weekend_factor(mut self, weekend_factor: f64) -> Self {
        self.weekend_factor = weekend_factor;
        self
    }

    /// Half-width of the confidence band as a fraction of the forecast.
    pub fn with_band_ratio(mut self, band_ratio: f64) -> Self {
        self.band_ratio = band_ratio;
        self
    }

    pub fn noise_ratio(&self) -> f64 {
        self.noise_ratio
    }

    pub fn weekend_factor(&self) -> f64 {
        self.weekend_factor
    }

    pub fn band_ratio(&self) -> f64 {
        self.band_ratio
    }

    fn noise(&self, std_cost: f64) -> Result<Normal<f64>> {
        Normal::new(0.0, std_cost * self.noise_ratio).map_err(|e| {
            CostingError::InvalidParameter {
                name: "noise_ratio".to_string(),
                reason: e.to_string(),
            }
        })
    }
}

impl CostForecaster for ServiceForecaster {
    fn forecast(
        &self,
        data: Option<&HistoricalDataset>,
        service: &str,
        horizon_days: u32,
        start: NaiveDate,
        rng: &mut dyn RngCore,
    ) -> Result<ServiceForecast> {
        check_horizon(horizon_days)?;
        let data = data.ok_or(CostingError::DatasetUnavailable)?;
        let history = costs(&data.for_service(service));
        if history.is_empty() {
            return Err(CostingError::ServiceNotFound(service.to_string()));
        }

        let avg_cost = mean(&history);
        let std_cost = sample_std(&history);
        let noise = self.noise(std_cost)?;

        let mut points = Vec::with_capacity(horizon_days as usize);
        for i in 1..=u64::from(horizon_days) {
            let date = add_days(start, i)?;
            let mut value = avg_cost + noise.sample(&mut *rng);

            if is_weekend(date) {
                value *= self.weekend_factor;
            }

            points.push(ServiceForecastPoint {
                date,
                predicted_cost: round2(value),
                confidence: scaled_band(value, 1.0 - self.band_ratio, 1.0 + self.band_ratio),
            });
        }

        Ok(ServiceForecast {
            service: service.to_string(),
            horizon_days,
            average_predicted_cost: round2(avg_cost),
            points,
        })
    }
}

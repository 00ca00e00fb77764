//! Numeric and calendar helpers shared by the estimators and forecasters.

use chrono::{Datelike, Days, NaiveDate, Weekday};
use costing_spi::{ConfidenceBand, CostingError, Result};

/// Round to two decimal places (cents), half away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Arithmetic mean; 0 for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample standard deviation (n - 1 denominator).
///
/// Fewer than two values have no spread, so this returns 0 rather than NaN.
pub fn sample_std(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let m = mean(values);
    let variance =
        values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / (values.len() - 1) as f64;
    variance.sqrt()
}

/// Ordinary least squares slope of `values` against their index 0..n.
pub fn ols_slope(values: &[f64]) -> Result<f64> {
    if values.len() < 2 {
        return Err(CostingError::InsufficientData {
            required: 2,
            actual: values.len(),
        });
    }

    let n = values.len() as f64;
    let sum_t: f64 = (0..values.len()).map(|i| i as f64).sum();
    let sum_y: f64 = values.iter().sum();
    let sum_t2: f64 = (0..values.len()).map(|i| (i * i) as f64).sum();
    let sum_ty: f64 = values.iter().enumerate().map(|(i, &y)| i as f64 * y).sum();

    let denominator = n * sum_t2 - sum_t * sum_t;
    if denominator.abs() < 1e-10 {
        return Err(CostingError::InternalError(
            "Singular matrix in regression".to_string(),
        ));
    }

    Ok((n * sum_ty - sum_t * sum_y) / denominator)
}

/// Saturday or Sunday.
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// `date` shifted forward by `days`.
pub fn add_days(date: NaiveDate, days: u64) -> Result<NaiveDate> {
    date.checked_add_days(Days::new(days)).ok_or_else(|| {
        CostingError::InternalError(format!("date overflow: {} + {} days", date, days))
    })
}

/// Longest accepted forecast horizon: ten years of days.
pub const MAX_HORIZON_DAYS: u32 = 3650;

/// Reject horizons longer than [`MAX_HORIZON_DAYS`].
pub fn check_horizon(horizon_days: u32) -> Result<()> {
    if horizon_days > MAX_HORIZON_DAYS {
        return Err(CostingError::InvalidInput(format!(
            "days must be at most {}, got {}",
            MAX_HORIZON_DAYS, horizon_days
        )));
    }
    Ok(())
}

/// Band of `value * low` to `value * high`, each bound rounded to cents.
pub fn scaled_band(value: f64, low: f64, high: f64) -> ConfidenceBand {
    ConfidenceBand::new(round2(value * low), round2(value * high))
}

//! Per-service descriptive statistics

use crate::numeric::{mean, sample_std};
use costing_spi::{CostingError, Result, ServiceStats};
use data_spi::{costs, occupancy_rates, patient_counts, HistoricalDataset};

/// Statistics for one service.
pub fn service_stats(data: &HistoricalDataset, service: &str) -> Result<ServiceStats> {
    let records = data.for_service(service);
    let (first_date, last_date) = match (
        records.iter().map(|r| r.date).min(),
        records.iter().map(|r| r.date).max(),
    ) {
        (Some(first), Some(last)) => (first, last),
        _ => return Err(CostingError::ServiceNotFound(service.to_string())),
    };

    let cost = costs(&records);
    let patients = patient_counts(&records);

    Ok(ServiceStats {
        service: service.to_string(),
        records: records.len(),
        cost_mean: mean(&cost),
        cost_std: sample_std(&cost),
        cost_min: cost.iter().copied().fold(f64::INFINITY, f64::min),
        cost_max: cost.iter().copied().fold(f64::NEG_INFINITY, f64::max),
        patients_mean: mean(&patients),
        patients_std: sample_std(&patients),
        occupancy_mean: mean(&occupancy_rates(&records)),
        first_date,
        last_date,
    })
}

/// Statistics for every service, in catalog order.
pub fn all_service_stats(data: &HistoricalDataset) -> Vec<ServiceStats> {
    data.services()
        .iter()
        .filter_map(|service| service_stats(data, service).ok())
        .collect()
}

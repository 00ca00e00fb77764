//! API route handlers

use crate::error::ApiError;
use crate::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use chrono::{Local, NaiveDate};
use costing_facade::numeric::round2;
use costing_facade::{
    ConfidenceBand, CostEstimator, CostPrediction, CostingError, PatientRecord, RiskLevel,
    ServiceForecast,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Name reported by the health check.
pub const SERVICE_NAME: &str = "ML Prediction API";

fn timestamp() -> String {
    Local::now().to_rfc3339()
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
    pub timestamp: String,
    pub dataset_loaded: bool,
}

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: SERVICE_NAME,
        version: env!("CARGO_PKG_VERSION"),
        timestamp: timestamp(),
        dataset_loaded: state.costing.is_dataset_loaded(),
    })
}

#[derive(Debug, Serialize)]
pub struct IntervalBody {
    pub min: f64,
    pub max: f64,
}

impl From<ConfidenceBand> for IntervalBody {
    fn from(band: ConfidenceBand) -> Self {
        Self {
            min: band.min,
            max: band.max,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RiskAssessment {
    pub score: f64,
    pub level: RiskLevel,
}

#[derive(Debug, Serialize)]
pub struct PredictionBody {
    pub estimated_cost: f64,
    pub confidence_interval: IntervalBody,
    pub predicted_length_of_stay: i64,
    pub risk_assessment: RiskAssessment,
}

impl From<CostPrediction> for PredictionBody {
    fn from(p: CostPrediction) -> Self {
        Self {
            estimated_cost: p.estimated_cost,
            confidence_interval: p.confidence.into(),
            predicted_length_of_stay: p.predicted_length_of_stay,
            risk_assessment: RiskAssessment {
                score: round2(p.risk_score),
                level: p.risk_level,
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ModelInfo {
    pub name: String,
    pub version: String,
    pub timestamp: String,
}

#[derive(Debug, Serialize)]
pub struct PredictResponse {
    pub prediction: PredictionBody,
    /// Resolved inputs, defaults filled in
    pub input: PatientRecord,
    pub model: ModelInfo,
}

// null, false, 0, "", [] and {} all count as no data
fn is_empty_payload(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}

/// Absent patient fields take their defaults. A missing, empty or malformed
/// body is rejected with 400.
pub async fn predict(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<PredictResponse>, ApiError> {
    let Json(value) = payload?;
    if is_empty_payload(&value) {
        return Err(CostingError::InvalidInput("No JSON data provided".to_string()).into());
    }
    let patient: PatientRecord = serde_json::from_value(value)
        .map_err(|e| CostingError::InvalidInput(e.to_string()))?;
    let prediction = state.costing.estimate(&patient);

    tracing::debug!(
        diagnosis = %patient.diagnosis,
        estimated_cost = prediction.estimated_cost,
        risk = %prediction.risk_level,
        "patient estimate"
    );

    let estimator = state.costing.estimator();
    Ok(Json(PredictResponse {
        prediction: prediction.into(),
        input: patient,
        model: ModelInfo {
            name: estimator.name().to_string(),
            version: estimator.version().to_string(),
            timestamp: timestamp(),
        },
    }))
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CostRequest {
    pub service: Option<String>,
    pub days: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct CostPoint {
    pub date: NaiveDate,
    pub predicted_cost: f64,
    pub confidence_interval: IntervalBody,
}

#[derive(Debug, Serialize)]
pub struct CostResponse {
    pub service: String,
    pub prediction_period_days: u32,
    pub average_predicted_cost: f64,
    pub predictions: Vec<CostPoint>,
    pub generated_at: String,
}

impl From<ServiceForecast> for CostResponse {
    fn from(forecast: ServiceForecast) -> Self {
        Self {
            service: forecast.service,
            prediction_period_days: forecast.horizon_days,
            average_predicted_cost: forecast.average_predicted_cost,
            predictions: forecast
                .points
                .into_iter()
                .map(|p| CostPoint {
                    date: p.date,
                    predicted_cost: p.predicted_cost,
                    confidence_interval: p.confidence.into(),
                })
                .collect(),
            generated_at: timestamp(),
        }
    }
}

/// Daily forecast starting tomorrow for one service.
pub async fn predict_cost(
    State(state): State<AppState>,
    payload: Result<Json<CostRequest>, JsonRejection>,
) -> Result<Json<CostResponse>, ApiError> {
    let Json(req) = payload?;
    let today = Local::now().date_naive();
    let forecast = state
        .costing
        .forecast(req.service.as_deref(), req.days, today)?;

    tracing::info!(
        service = %forecast.service,
        days = forecast.horizon_days,
        average = forecast.average_predicted_cost,
        "service forecast"
    );

    Ok(Json(forecast.into()))
}

#[derive(Debug, Serialize)]
pub struct ServicesResponse {
    pub services: Vec<String>,
    pub count: usize,
}

pub async fn services(State(state): State<AppState>) -> Result<Json<ServicesResponse>, ApiError> {
    let services = state.costing.list_services()?;
    Ok(Json(ServicesResponse {
        count: services.len(),
        services,
    }))
}

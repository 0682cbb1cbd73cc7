use crate::models::{PredictionRecord, EXAMPLE_URLS};
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};
use phishguard_core::ConfidenceMap;
use serde::Deserialize;
use std::time::Instant;

// ============================================================================
// Health and model endpoints
// ============================================================================

pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "model_loaded": state.predictor.is_ready(),
    }))
}

pub async fn model_info(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.model_status.as_ref().clone())
}

// ============================================================================
// Prediction endpoint
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct PredictRequest {
    pub url: String,
}

pub async fn predict(
    State(state): State<AppState>,
    Json(req): Json<PredictRequest>,
) -> impl IntoResponse {
    let started = Instant::now();
    let outcome = state.predictor.classify(&req.url).await;
    let latency_ms = started.elapsed().as_secs_f64() * 1000.0;

    let (scores, label) = match outcome {
        Ok(verdict) => (
            ConfidenceMap::from_verdict(verdict),
            Some(verdict.as_str().to_string()),
        ),
        Err(ref err) => (ConfidenceMap::from(err), None),
    };

    let record = PredictionRecord {
        id: uuid::Uuid::new_v4().to_string(),
        url: req.url,
        scores,
        label,
        latency_ms,
        timestamp: chrono::Utc::now(),
    };
    state.add_record(record.clone());

    Json(record)
}

// ============================================================================
// Example inputs
// ============================================================================

pub async fn examples() -> impl IntoResponse {
    Json(serde_json::json!({ "examples": EXAMPLE_URLS }))
}

// ============================================================================
// History endpoints
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    pub limit: Option<usize>,
}

pub async fn list_history(
    State(state): State<AppState>,
    Query(query): Query<HistoryQuery>,
) -> impl IntoResponse {
    let limit = query.limit.unwrap_or(50);
    Json(state.recent(limit))
}

pub async fn reset_history(State(state): State<AppState>) -> impl IntoResponse {
    state.clear_history();
    Json(serde_json::json!({ "status": "reset" }))
}

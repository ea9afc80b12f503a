//! Route handlers

use autoquote_common::{QuoteResult, VehiclePolicyRequest};
use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde_json::{json, Value};

use super::{AppState, ApiError};
use crate::{SERVICE_DESCRIPTION, SERVICE_NAME};

/// `POST /calculate-premium`
pub async fn calculate_premium(
    State(state): State<AppState>,
    payload: Result<Json<VehiclePolicyRequest>, JsonRejection>,
) -> Result<Json<QuoteResult>, ApiError> {
    let Json(request) = payload?;
    let quote = state.calculator.compute(&request)?;
    Ok(Json(quote))
}

pub async fn health_check() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}

pub async fn version() -> Json<Value> {
    Json(json!({
        "service": SERVICE_NAME,
        "version": autoquote_common::VERSION,
        "description": SERVICE_DESCRIPTION,
    }))
}

/// Active pricing constants, reference year included
pub async fn pricing_config(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let mut config = serde_json::to_value(state.calculator.config())
        .map_err(autoquote_common::AutoquoteError::from)?;
    config["reference_year"] = json!(autoquote_pricing::REFERENCE_YEAR);
    Ok(Json(config))
}

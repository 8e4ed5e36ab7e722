//! Live estimate: calculate without storing anything.

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::routing::post;
use axum::{Json, Router};
use inheritance_core::{Declaration, TaxResult, validate_declaration};

use super::extract_json;
use crate::error::AppError;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/v1/calculate", post(calculate))
}

/// POST /v1/calculate
async fn calculate(
    State(state): State<AppState>,
    body: Result<Json<Declaration>, JsonRejection>,
) -> Result<Json<TaxResult>, AppError> {
    let declaration = extract_json(body)?;
    validate_declaration(&declaration)?;

    Ok(Json(state.calculator().calculate(&declaration)))
}

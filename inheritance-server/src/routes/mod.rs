use axum::Json;
use axum::Router;
use axum::extract::rejection::JsonRejection;

use crate::error::AppError;
use crate::state::AppState;

pub mod calculate;
pub mod declarations;
pub mod health;

pub fn router() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(calculate::router())
        .merge(declarations::router())
}

/// Unwraps a JSON body, reporting shape errors (bad syntax, wrong types,
/// missing fields) as 422 instead of axum's plain-text rejection.
pub(crate) fn extract_json<T>(body: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    body.map(|Json(value)| value)
        .map_err(|rejection| AppError::BadRequest(rejection.body_text()))
}

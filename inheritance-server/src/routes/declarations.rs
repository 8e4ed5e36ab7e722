//! Submitted declarations: validate, calculate, persist, and read back.

use std::sync::LazyLock;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use inheritance_core::{
    Declaration, DeclarationRecord, NewDeclarationRecord, validate_declaration,
};
use regex::Regex;
use serde::Deserialize;
use tracing::info;

use super::extract_json;
use crate::error::AppError;
use crate::state::AppState;

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern compiles")
});

/// Korean landline and mobile numbers, dashes optional: `02-123-4567`,
/// `010-1234-5678`, `01012345678`.
static PHONE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^0\d{1,2}-?\d{3,4}-?\d{4}$").expect("phone pattern compiles")
});

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDeclarationRequest {
    pub user_id: String,
    pub decedent_name: String,
    #[serde(default)]
    pub contact_email: Option<String>,
    #[serde(default)]
    pub contact_phone: Option<String>,
    pub declaration: Declaration,
}

impl CreateDeclarationRequest {
    fn validate(&self) -> Result<(), AppError> {
        if self.user_id.trim().is_empty() {
            return Err(AppError::Validation("userId must not be empty".to_string()));
        }
        if self.decedent_name.trim().is_empty() {
            return Err(AppError::Validation(
                "decedentName must not be empty".to_string(),
            ));
        }
        if let Some(email) = &self.contact_email
            && !EMAIL.is_match(email.trim())
        {
            return Err(AppError::Validation(format!(
                "contactEmail is not a valid address: {email}"
            )));
        }
        if let Some(phone) = &self.contact_phone
            && !PHONE.is_match(phone.trim())
        {
            return Err(AppError::Validation(format!(
                "contactPhone is not a valid number: {phone}"
            )));
        }
        validate_declaration(&self.declaration)?;
        Ok(())
    }
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/v1/declarations", post(create_declaration))
        .route(
            "/v1/declarations/{id}",
            get(get_declaration).delete(delete_declaration),
        )
        .route("/v1/users/{user_id}/declarations", get(list_declarations))
}

/// POST /v1/declarations
async fn create_declaration(
    State(state): State<AppState>,
    body: Result<Json<CreateDeclarationRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<DeclarationRecord>), AppError> {
    let req = extract_json(body)?;
    req.validate()?;

    let result = state.calculator().calculate(&req.declaration);
    let record = state
        .repository
        .create(NewDeclarationRecord {
            user_id: req.user_id.trim().to_string(),
            decedent_name: req.decedent_name.trim().to_string(),
            declaration: req.declaration,
            result,
        })
        .await?;

    info!(id = record.id, user_id = %record.user_id, "declaration submitted");
    Ok((StatusCode::CREATED, Json(record)))
}

/// GET /v1/declarations/{id}
async fn get_declaration(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<DeclarationRecord>, AppError> {
    Ok(Json(state.repository.get(id).await?))
}

/// DELETE /v1/declarations/{id}
async fn delete_declaration(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    state.repository.delete(id).await?;
    info!(id, "declaration deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// GET /v1/users/{user_id}/declarations
async fn list_declarations(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<DeclarationRecord>>, AppError> {
    Ok(Json(state.repository.list_for_user(&user_id).await?))
}

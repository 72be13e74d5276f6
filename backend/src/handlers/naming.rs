use std::sync::Arc;

use axum::{Json, extract::State, extract::rejection::JsonRejection};

use crate::AppState;
use crate::models::{GeneratedName, NamingRequest};
use crate::utils::error::ApiErrorResponse;
use crate::utils::{ApiError, ApiResult};

/// Generate candidate Chinese names
#[utoipa::path(
    post,
    path = "/api/generate",
    request_body = NamingRequest,
    responses(
        (status = 200, description = "Generated names", body = Vec<GeneratedName>),
        (status = 400, description = "Name missing or body invalid", body = ApiErrorResponse),
        (status = 500, description = "Provider call failed", body = ApiErrorResponse),
    ),
    tag = "Naming"
)]
pub async fn generate_names(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<NamingRequest>, JsonRejection>,
) -> ApiResult<Json<Vec<GeneratedName>>> {
    let Json(req) = payload.map_err(|e| ApiError::validation_error(e.body_text()))?;
    let name = req.name().ok_or(ApiError::NameRequired)?;

    let names = state.naming_service.generate(name, req.description()).await?;
    tracing::debug!("Returning {} generated names", names.len());
    Ok(Json(names))
}

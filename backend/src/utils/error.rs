use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rust_i18n::t;
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

use super::i18n::get_locale;
use crate::services::llm::LLMError;

/// API Error surfaced at the HTTP boundary
///
/// Validation errors never reach the generation service. Generation errors
/// carry the provider failure for logging; only a fixed message is returned.
#[derive(Error, Debug)]
pub enum ApiError {
    // Validation errors 4xxx
    #[error("Name is required")]
    NameRequired,

    #[error("Validation error: {0}")]
    ValidationError(String),

    // System errors 5xxx
    #[error("Name generation failed: {0}")]
    GenerationFailed(#[from] LLMError),
}

impl ApiError {
    /// Helper to create validation error
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::ValidationError(message.into())
    }

    pub fn error_code(&self) -> i32 {
        match self {
            Self::NameRequired => 4001,
            Self::ValidationError(_) => 4002,
            Self::GenerationFailed(_) => 5001,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self.error_code() {
            4001..=4999 => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get localized error message based on current locale
    pub fn localized_message(&self) -> String {
        let locale = get_locale();
        match self {
            Self::NameRequired => t!("naming.name_required", locale = &locale).to_string(),
            Self::ValidationError(details) => {
                t!("validation.failed", locale = &locale, details = details).to_string()
            },
            // Provider details stay in the logs
            Self::GenerationFailed(_) => {
                t!("naming.generation_failed", locale = &locale).to_string()
            },
        }
    }
}

/// Error body returned to the UI
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiErrorResponse {
    pub error: String,
    pub code: i32,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("API error: {}", self);
        } else {
            tracing::debug!("Rejected request: {}", self);
        }

        let response = ApiErrorResponse { error: self.localized_message(), code: self.error_code() };

        (status, Json(response)).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

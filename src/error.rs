use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use serde_json::Value;
use thiserror::Error;
use tracing::{error, warn};

use crate::views;

/// Failure of a single call to the advising API.
///
/// Upstream statuses and transport failures look the same to callers; a
/// transport failure carries `502` since no upstream status exists.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Advisor API Error {status}: {message}")]
pub struct GatewayError {
    pub status: u16,
    pub message: String,
}

impl GatewayError {
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// Builds the error for a non-success upstream response.
    ///
    /// Endpoints disagree on the body shape, so every known one is tried:
    /// `{"error":{"message":..}}`, `{"Error":..}`, `{"message":..}`, then the
    /// raw text, then the reason phrase.
    pub fn from_response(status: StatusCode, body: &str) -> Self {
        let parsed = serde_json::from_str::<Value>(body).ok();
        let message = parsed
            .as_ref()
            .and_then(|v| {
                v.pointer("/error/message")
                    .or_else(|| v.get("Error"))
                    .or_else(|| v.get("message"))
            })
            .map(|m| match m {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .or_else(|| {
                let trimmed = body.trim();
                (!trimmed.is_empty()).then(|| trimmed.to_string())
            })
            .unwrap_or_else(|| status.canonical_reason().unwrap_or("Unknown").to_string());

        Self::new(status.as_u16(), message)
    }

    pub fn transport(err: reqwest::Error) -> Self {
        Self::new(StatusCode::BAD_GATEWAY.as_u16(), err.to_string())
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Gateway(#[from] GatewayError),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Internal server error")]
    InternalServerError,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::BadRequest(msg) => {
                warn!("rejected request body: {}", msg);
                (StatusCode::BAD_REQUEST, msg.clone())
            }
            AppError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                "You must sign in to view this page.".to_string(),
            ),
            AppError::Gateway(e) => {
                error!("gateway error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }
            AppError::Configuration(msg) => {
                error!("configuration error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            AppError::InternalServerError => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
        };

        (status, Html(views::error_page(status, &message))).into_response()
    }
}

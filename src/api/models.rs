use crate::analysis::{LabAnalysis, RuleSet};
use crate::processing::ProcessingReport;
use crate::storage::{DocumentStore, StorageError, StoredDocument};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::error;

/// Application state shared across handlers. The rule set is immutable
/// after startup; the store only appends files.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<DocumentStore>,
    pub rules: Arc<RuleSet>,
}

/// Form body for the explain endpoint.
#[derive(Debug, Deserialize)]
pub struct ExplainRequest {
    pub text: String,
    #[serde(default)]
    pub context: String,
}

#[derive(Debug, Serialize)]
pub struct ExplainResponse {
    pub original: String,
    pub explanation: String,
    pub context: String,
    pub confidence: &'static str,
    pub model: &'static str,
    pub timestamp: String,
}

#[derive(Debug, Serialize)]
pub struct LabAnalysisResponse {
    pub lab_data: serde_json::Map<String, serde_json::Value>,
    pub analysis: LabAnalysis,
    pub analyzed_at: String,
    pub note: &'static str,
}

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub success: bool,
    pub message: String,
    pub document: StoredDocument,
    pub processing: ProcessingReport,
}

/// Form body for the demo login endpoint.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
    pub timestamp: String,
}

/// Structured failure body: `success` is always false so callers can
/// distinguish failures without inspecting the status code.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
    pub message: String,
}

/// Application error taxonomy. Every variant converts to a structured JSON
/// response; nothing surfaces as a bare fault.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("{0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, message) = match self {
            AppError::Validation(msg) => {
                (StatusCode::BAD_REQUEST, "validation_error".to_string(), msg)
            }
            AppError::Storage(err) => {
                error!("Storage error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    err.to_string(),
                    "File upload failed".to_string(),
                )
            }
            AppError::Internal(msg) => {
                error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error".to_string(),
                    msg,
                )
            }
        };

        let body = Json(ErrorResponse {
            success: false,
            error,
            message,
        });

        (status, body).into_response()
    }
}

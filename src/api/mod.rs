pub mod auth;
pub mod dashboard;
pub mod documents;
pub mod explain;
pub mod labs;
pub mod models;

// Re-exports
pub use models::*;

use axum::{
    Json, Router,
    http::{StatusCode, Uri},
    routing::get,
};
use chrono::Utc;
use serde_json::{Value, json};
use std::path::Path;
use tower_http::services::ServeDir;

/// Assemble the full application router. Stored uploads are served under
/// `/static` from `static_dir` so generated download URLs resolve.
pub fn router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .route("/api/health", get(api_health_handler))
        .merge(explain::routes())
        .merge(labs::routes())
        .merge(documents::routes())
        .merge(dashboard::routes())
        .merge(auth::routes())
        .nest_service("/static", ServeDir::new(static_dir))
        .fallback(not_found_handler)
        .with_state(state)
}

/// Service index.
async fn root_handler() -> Json<Value> {
    Json(json!({
        "app": "Mediclinic AI Dashboard",
        "version": env!("CARGO_PKG_VERSION"),
        "status": "operational",
        "endpoints": {
            "/health": "Health check",
            "/demo/data": "Demo patient data",
            "/api/explain": "Explain medical text",
            "/api/analyze/labs": "Analyze lab results",
            "/api/upload": "Upload medical document"
        },
        "timestamp": Utc::now().to_rfc3339()
    }))
}

pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: "mediclinic-backend",
        version: env!("CARGO_PKG_VERSION"),
        timestamp: Utc::now().to_rfc3339(),
    })
}

async fn api_health_handler() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "api_version": "v2",
        "timestamp": Utc::now().to_rfc3339()
    }))
}

/// Structured 404 for unmatched routes.
async fn not_found_handler(uri: Uri) -> (StatusCode, Json<Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "error": "Endpoint not found",
            "path": uri.path()
        })),
    )
}

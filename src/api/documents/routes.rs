use crate::api::documents::handlers::{patient_documents_handler, upload_handler};
use crate::api::models::AppState;
use axum::{
    Router,
    routing::{get, post},
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/upload", post(upload_handler))
        .route("/api/documents/{patient_id}", get(patient_documents_handler))
}

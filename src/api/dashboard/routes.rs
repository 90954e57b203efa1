use crate::api::dashboard::handlers::{
    chart_handler, demo_analyze_handler, demo_data_handler, patient_summary_handler,
};
use crate::api::models::AppState;
use axum::{
    Router,
    routing::{get, post},
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/demo/data", get(demo_data_handler))
        .route("/demo/analyze", post(demo_analyze_handler))
        .route("/api/chart", get(chart_handler))
        .route("/api/patient/{patient_id}/summary", get(patient_summary_handler))
}

use crate::api::labs::handlers::analyze_labs_handler;
use crate::api::models::AppState;
use axum::{Router, routing::post};

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/analyze/labs", post(analyze_labs_handler))
}

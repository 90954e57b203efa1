use crate::api::explain::handlers::explain_handler;
use crate::api::models::AppState;
use axum::{Router, routing::post};

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/explain", post(explain_handler))
}

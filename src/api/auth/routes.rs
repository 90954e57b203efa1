use crate::api::auth::handlers::login_handler;
use crate::api::models::AppState;
use axum::{Router, routing::post};

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/auth/login", post(login_handler))
}

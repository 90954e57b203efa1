use crate::api::models::*;
use axum::{Form, Json};
use serde_json::{Value, json};
use tracing::info;

/// Demo login. There is no credential check beyond non-empty fields and the
/// token is a fixed placeholder; this surface carries no security model.
pub async fn login_handler(Form(request): Form<LoginRequest>) -> Result<Json<Value>, AppError> {
    if request.email.trim().is_empty() || request.password.trim().is_empty() {
        return Err(AppError::Validation(
            "email and password are required".to_string(),
        ));
    }

    info!(email = %request.email, "Demo login");

    Ok(Json(json!({
        "success": true,
        "user": { "email": request.email },
        "token": "demo-token-for-auth"
    })))
}

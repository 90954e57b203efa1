use crate::api::models::*;
use crate::glossary;
use axum::{Form, Json};
use chrono::Utc;
use tracing::info;

/// Explain medical text in plain language via the fixed term table.
pub async fn explain_handler(
    Form(request): Form<ExplainRequest>,
) -> Result<Json<ExplainResponse>, AppError> {
    if request.text.trim().is_empty() {
        return Err(AppError::Validation("text cannot be empty".to_string()));
    }

    info!(text = %request.text, "Explaining medical text");

    let explanation = glossary::explain(&request.text);

    Ok(Json(ExplainResponse {
        original: request.text,
        explanation: explanation.into_owned(),
        context: request.context,
        confidence: glossary::CONFIDENCE,
        model: glossary::MODEL,
        timestamp: Utc::now().to_rfc3339(),
    }))
}

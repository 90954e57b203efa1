use crate::analysis::panel_from_json;
use crate::api::models::*;
use axum::{Json, extract::State};
use chrono::Utc;
use tracing::info;

/// Run the threshold rules over a caller-supplied lab panel.
pub async fn analyze_labs_handler(
    State(state): State<AppState>,
    Json(lab_data): Json<serde_json::Map<String, serde_json::Value>>,
) -> Result<Json<LabAnalysisResponse>, AppError> {
    let panel = panel_from_json(&lab_data).map_err(AppError::Validation)?;

    info!(measurements = panel.len(), "Analyzing lab panel");

    let analysis = state.rules.evaluate(&panel);

    info!(
        findings = analysis.findings.len(),
        risk_level = ?analysis.risk_level,
        "Lab analysis complete"
    );

    Ok(Json(LabAnalysisResponse {
        lab_data,
        analysis,
        analyzed_at: Utc::now().to_rfc3339(),
        note: "Basic analysis - connect AI model for detailed insights",
    }))
}

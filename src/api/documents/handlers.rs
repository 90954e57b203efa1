use crate::api::models::*;
use crate::processing;
use axum::{
    Json,
    extract::{Multipart, Path, State},
};
use chrono::Utc;
use serde_json::{Value, json};
use tracing::info;

const DEFAULT_DOCUMENT_TYPE: &str = "lab_report";
const DEFAULT_PATIENT_ID: &str = "demo-patient-001";

/// Upload a medical document: persist the bytes, then hand the stored path
/// to the processing step and merge its report into the response.
pub async fn upload_handler(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, AppError> {
    let mut file: Option<(String, Vec<u8>)> = None;
    let mut document_type = DEFAULT_DOCUMENT_TYPE.to_string();
    let mut patient_id = DEFAULT_PATIENT_ID.to_string();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("malformed multipart body: {e}")))?
    {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("file") => {
                let filename = field
                    .file_name()
                    .map(str::to_string)
                    .unwrap_or_else(|| "upload".to_string());
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("failed to read file field: {e}")))?;
                file = Some((filename, bytes.to_vec()));
            }
            Some("document_type") => {
                document_type = field
                    .text()
                    .await
                    .map_err(|e| AppError::Validation(format!("invalid document_type: {e}")))?;
            }
            Some("patient_id") => {
                patient_id = field
                    .text()
                    .await
                    .map_err(|e| AppError::Validation(format!("invalid patient_id: {e}")))?;
            }
            _ => {}
        }
    }

    let (filename, bytes) =
        file.ok_or_else(|| AppError::Validation("file field is required".to_string()))?;

    info!(
        patient_id = %patient_id,
        document_type = %document_type,
        filename = %filename,
        size = bytes.len(),
        "Processing document upload"
    );

    let document = state
        .store
        .store(&patient_id, &document_type, &filename, &bytes)?;
    let processing = processing::process_document(&document.file_path, &document.document_type);

    Ok(Json(UploadResponse {
        success: true,
        message: "File uploaded successfully".to_string(),
        document,
        processing,
    }))
}

/// Demo document list for a patient.
pub async fn patient_documents_handler(Path(patient_id): Path<String>) -> Json<Value> {
    Json(json!({
        "patient_id": patient_id,
        "documents": [
            {
                "id": "doc_001",
                "filename": "blood_test_january.pdf",
                "type": "lab_report",
                "uploaded_at": "2024-01-15T10:30:00",
                "size_kb": 245,
                "status": "processed"
            },
            {
                "id": "doc_002",
                "filename": "doctor_notes_february.docx",
                "type": "doctor_note",
                "uploaded_at": "2024-02-01T14:20:00",
                "size_kb": 89,
                "status": "processed"
            }
        ],
        "count": 2,
        "timestamp": Utc::now().to_rfc3339()
    }))
}

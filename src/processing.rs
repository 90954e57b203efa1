use serde::Serialize;

/// Report returned by the document-processing step after an upload.
#[derive(Debug, Clone, Serialize)]
pub struct ProcessingReport {
    pub status: String,
    pub extracted_data: ExtractedData,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExtractedData {
    #[serde(rename = "type")]
    pub document_type: String,
    pub note: String,
}

/// Hand a stored document to the processing collaborator. The intake path
/// does not interpret file contents; this stands in for the external
/// processor and acknowledges the stored file.
pub fn process_document(_file_path: &str, document_type: &str) -> ProcessingReport {
    ProcessingReport {
        status: "completed".to_string(),
        extracted_data: ExtractedData {
            document_type: document_type.to_string(),
            note: "File saved successfully".to_string(),
        },
    }
}

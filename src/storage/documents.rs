use chrono::{DateTime, Local, Utc};
use serde::Serialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// Upload persistence failures, reported to the caller as structured
/// responses rather than opaque faults.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to create upload directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A stored upload. Created once at upload time, never mutated.
#[derive(Debug, Clone, Serialize)]
pub struct StoredDocument {
    pub id: String,
    pub filename: String,
    pub patient_id: String,
    pub document_type: String,
    pub file_path: String,
    pub file_size_kb: f64,
    pub uploaded_at: DateTime<Utc>,
    pub download_url: String,
}

/// File-system store for uploaded medical documents.
///
/// Storage names embed the patient id, a second-resolution timestamp, and
/// the original filename. Two uploads landing in the same second overwrite
/// each other (last write wins); that is an accepted limitation of the
/// naming scheme.
pub struct DocumentStore {
    root: PathBuf,
    public_prefix: String,
}

impl DocumentStore {
    pub fn new(root: impl Into<PathBuf>, public_prefix: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            public_prefix: public_prefix.into(),
        }
    }

    /// Create the upload directory if it does not exist yet.
    pub fn initialize(&self) -> Result<(), StorageError> {
        std::fs::create_dir_all(&self.root).map_err(|source| StorageError::CreateDir {
            path: self.root.clone(),
            source,
        })?;
        info!(path = %self.root.display(), "Upload directory ready");
        Ok(())
    }

    /// Persist one upload and return its metadata. `std::fs::write` opens,
    /// writes, and closes the file, so the handle is released on every exit
    /// path including write failure.
    pub fn store(
        &self,
        patient_id: &str,
        document_type: &str,
        filename: &str,
        bytes: &[u8],
    ) -> Result<StoredDocument, StorageError> {
        let timestamp = Local::now().format("%Y%m%d_%H%M%S").to_string();
        let safe_name = format!(
            "{}_{}_{}",
            sanitize_component(patient_id, "patient"),
            timestamp,
            sanitize_component(filename, "upload")
        );
        let path = self.root.join(&safe_name);

        std::fs::write(&path, bytes).map_err(|source| StorageError::WriteFailed {
            path: path.clone(),
            source,
        })?;

        let file_size_kb = (bytes.len() as f64 / 1024.0 * 100.0).round() / 100.0;

        info!(
            patient_id = %patient_id,
            document_type = %document_type,
            size_kb = file_size_kb,
            path = %path.display(),
            "Stored uploaded document"
        );

        Ok(StoredDocument {
            id: format!("doc_{timestamp}"),
            filename: filename.to_string(),
            patient_id: patient_id.to_string(),
            document_type: document_type.to_string(),
            file_path: path.display().to_string(),
            file_size_kb,
            uploaded_at: Utc::now(),
            download_url: format!("{}/{}", self.public_prefix, safe_name),
        })
    }
}

/// Keep only the final path component of a client-supplied value. Both the
/// filename and the patient id feed the storage name, so both must be unable
/// to steer the write outside the upload directory.
fn sanitize_component(value: &str, fallback: &str) -> String {
    Path::new(value)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| fallback.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_store(dir: &Path) -> DocumentStore {
        DocumentStore::new(dir.join("uploads"), "/static/uploads")
    }

    #[test]
    fn initialize_creates_the_upload_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let store = test_store(tmp.path());

        store.initialize().unwrap();
        assert!(tmp.path().join("uploads").is_dir());
    }

    #[test]
    fn stored_bytes_round_trip() {
        let tmp = tempfile::tempdir().unwrap();
        let store = test_store(tmp.path());
        store.initialize().unwrap();

        let bytes = b"glucose: 145 mg/dL";
        let doc = store
            .store("patient-42", "lab_report", "blood_test.pdf", bytes)
            .unwrap();

        let read_back = std::fs::read(&doc.file_path).unwrap();
        assert_eq!(read_back, bytes);
    }

    #[test]
    fn metadata_reflects_the_upload() {
        let tmp = tempfile::tempdir().unwrap();
        let store = test_store(tmp.path());
        store.initialize().unwrap();

        let doc = store
            .store("patient-42", "doctor_note", "notes.docx", &[0u8; 2048])
            .unwrap();

        assert_eq!(doc.filename, "notes.docx");
        assert_eq!(doc.patient_id, "patient-42");
        assert_eq!(doc.document_type, "doctor_note");
        assert_eq!(doc.file_size_kb, 2.0);
        assert!(doc.id.starts_with("doc_"));
        assert!(doc.download_url.starts_with("/static/uploads/patient-42_"));
        assert!(doc.download_url.ends_with("_notes.docx"));
    }

    #[test]
    fn client_supplied_paths_are_stripped_to_the_filename() {
        let tmp = tempfile::tempdir().unwrap();
        let store = test_store(tmp.path());
        store.initialize().unwrap();

        let doc = store
            .store("p1", "lab_report", "../../etc/passwd", b"x")
            .unwrap();

        assert!(doc.download_url.ends_with("_passwd"));
        assert!(Path::new(&doc.file_path).starts_with(tmp.path().join("uploads")));
    }

    #[test]
    fn patient_id_with_separators_stays_in_the_upload_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let store = test_store(tmp.path());
        store.initialize().unwrap();

        let doc = store.store("../escape", "lab_report", "a.txt", b"x").unwrap();

        let path = Path::new(&doc.file_path).canonicalize().unwrap();
        let uploads = tmp.path().join("uploads").canonicalize().unwrap();
        assert!(path.starts_with(&uploads));
        assert!(doc.download_url.starts_with("/static/uploads/escape_"));
    }

    #[test]
    fn write_failure_is_a_structured_error() {
        let tmp = tempfile::tempdir().unwrap();
        // Point the store at a directory that was never created
        let store = DocumentStore::new(tmp.path().join("missing"), "/static/uploads");

        let err = store.store("p1", "lab_report", "a.txt", b"x").unwrap_err();
        assert!(matches!(err, StorageError::WriteFailed { .. }));
    }
}

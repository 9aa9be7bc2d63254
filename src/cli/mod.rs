use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Subcommand;
use serde_json::Value;

use crate::domain::{HistoryEntry, UploadFile, UploadRequest};

#[derive(Subcommand)]
pub enum Commands {
    /// Upload a document to the backend
    Upload {
        path: PathBuf,

        /// Session to attach the document to (a new one is generated when omitted)
        #[arg(short, long)]
        session_id: Option<String>,
    },

    /// Ask a question about an uploaded document
    Query {
        query: String,

        #[arg(short, long)]
        session_id: String,

        #[arg(short, long)]
        doc_id: String,

        /// JSON file with prior turns: [{"type": "user", "content": "..."}, ...]
        #[arg(long)]
        history: Option<PathBuf>,
    },

    /// Show the backend's name, version and description
    Info,
}

pub fn load_history(path: &Path) -> Result<Vec<HistoryEntry>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read history file {}", path.display()))?;
    let entries = serde_json::from_str(&raw)
        .with_context(|| format!("History file {} is not a JSON array of turns", path.display()))?;
    Ok(entries)
}

pub fn read_upload(path: &Path, session_id: &str) -> Result<UploadRequest> {
    let bytes =
        std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "upload".to_string());
    Ok(UploadRequest::new(UploadFile::new(file_name, bytes), session_id))
}

/// The backend answers queries with `{"message": ...}`; show just the text
/// when that is what came back.
pub fn render_response(response: &Value) -> String {
    match response.get("message").and_then(Value::as_str) {
        Some(message) => message.to_string(),
        None => serde_json::to_string_pretty(response).unwrap_or_else(|_| response.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use serde_json::json;

    use super::*;

    #[test]
    fn load_history_reads_turns() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"type":"user","content":"Hello"}},{{"type":"assistant","content":"Hi there"}}]"#
        )
        .unwrap();

        let history = load_history(file.path()).unwrap();

        assert_eq!(
            history,
            vec![
                HistoryEntry::user("Hello"),
                HistoryEntry::assistant("Hi there")
            ]
        );
    }

    #[test]
    fn load_history_rejects_non_array() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"type":"user"}}"#).unwrap();

        assert!(load_history(file.path()).is_err());
    }

    #[test]
    fn read_upload_uses_file_name_and_mime() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("paper.pdf");
        std::fs::write(&path, b"%PDF-1.7").unwrap();

        let upload = read_upload(&path, "session-9").unwrap();

        assert_eq!(upload.session_id, "session-9");
        assert_eq!(upload.file.file_name(), "paper.pdf");
        assert_eq!(upload.file.mime_type(), "application/pdf");
        assert_eq!(upload.file.bytes(), b"%PDF-1.7");
    }

    #[test]
    fn read_upload_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(read_upload(&dir.path().join("missing.pdf"), "s").is_err());
    }

    #[test]
    fn render_response_prefers_message() {
        assert_eq!(render_response(&json!({"message": "42"})), "42");
        assert_eq!(
            render_response(&json!({"filename": "a.pdf"})),
            "{\n  \"filename\": \"a.pdf\"\n}"
        );
    }
}

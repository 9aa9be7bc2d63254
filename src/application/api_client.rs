use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, error};

use crate::application::Transport;
use crate::domain::{ApiError, AppInfo, EndpointConfig, HistoryEntry, QueryRequest, UploadRequest};

const UPLOAD_PATH: &str = "/upload";
const QUERY_PATH: &str = "/query";
const ROOT_PATH: &str = "/";

/// Client for the document chat backend.
///
/// Holds the endpoint it was built with and nothing else, so a single instance
/// can serve any number of concurrent calls. Every call is one request; there
/// is no retry and transport failures reach the caller untouched.
pub struct ApiClient {
    endpoint: EndpointConfig,
    transport: Arc<dyn Transport>,
}

impl ApiClient {
    pub fn new(endpoint: EndpointConfig, transport: Arc<dyn Transport>) -> Self {
        Self {
            endpoint,
            transport,
        }
    }

    pub fn endpoint(&self) -> &EndpointConfig {
        &self.endpoint
    }

    /// Upload a document for `upload.session_id`.
    ///
    /// The session id travels inside the multipart body, never in the URL.
    pub async fn upload_file(&self, upload: &UploadRequest) -> Result<Value, ApiError> {
        let url = self.endpoint.url(UPLOAD_PATH);
        let response = self.transport.post_multipart(&url, upload).await?;
        Ok(response)
    }

    /// Ask a question about `doc_id`, optionally with prior turns.
    ///
    /// History entries without content or without a role are dropped; the
    /// rest keep their order. A missing history is sent as an empty list.
    pub async fn send_query(
        &self,
        query: &str,
        session_id: &str,
        doc_id: &str,
        chat_history: Option<&[HistoryEntry]>,
    ) -> Result<Value, ApiError> {
        let request = QueryRequest::new(query, session_id, doc_id)
            .with_history(chat_history.unwrap_or_default());
        let payload = serde_json::to_value(&request)?;

        debug!(
            "Sending payload: {}",
            serde_json::to_string_pretty(&payload).unwrap_or_default()
        );

        match self
            .transport
            .post_json(&self.endpoint.url(QUERY_PATH), &payload)
            .await
        {
            Ok(response) => Ok(response),
            Err(e) => {
                error!(
                    status = ?e.status(),
                    data = ?e.body(),
                    error_message = %e.message(),
                    sent_payload = %payload,
                    "Query request failed"
                );
                Err(e.into())
            }
        }
    }

    /// Fetch the backend's self-description from its root endpoint.
    pub async fn app_info(&self) -> Result<AppInfo, ApiError> {
        let response = self.transport.get(&self.endpoint.url(ROOT_PATH)).await?;
        Ok(serde_json::from_value(response)?)
    }
}

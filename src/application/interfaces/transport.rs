use async_trait::async_trait;
use serde_json::Value;

use crate::domain::{TransportError, UploadRequest};

/// Performs the HTTP exchanges the client needs.
///
/// Implementors own connection handling and status checking: any network
/// failure or non-success status comes back as a [`TransportError`], and a
/// successful response comes back as its JSON body. [`crate::application::ApiClient`]
/// only shapes requests, so it stays independent of the HTTP library.
#[async_trait]
pub trait Transport: Send + Sync {
    /// `POST` a JSON body.
    async fn post_json(&self, url: &str, body: &Value) -> Result<Value, TransportError>;

    /// `POST` a `multipart/form-data` body with `file` and `session_id` parts.
    async fn post_multipart(
        &self,
        url: &str,
        upload: &UploadRequest,
    ) -> Result<Value, TransportError>;

    async fn get(&self, url: &str) -> Result<Value, TransportError>;
}

use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use crate::application::Transport;
use crate::domain::{TransportError, UploadRequest};

/// A request captured by [`MockTransport`].
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedRequest {
    Json { url: String, body: Value },
    Multipart { url: String, upload: UploadRequest },
    Get { url: String },
}

#[derive(Debug, Clone)]
enum Outcome {
    Respond(Value),
    Fail(String),
    FailWithStatus(u16, String),
}

/// In-memory [`Transport`] that records every request and answers with a
/// canned response or failure.
pub struct MockTransport {
    outcome: Outcome,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self {
            outcome: Outcome::Respond(Value::Null),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn with_response(mut self, response: Value) -> Self {
        self.outcome = Outcome::Respond(response);
        self
    }

    /// Fail every call as a network error with `message`.
    pub fn failing_with(mut self, message: impl Into<String>) -> Self {
        self.outcome = Outcome::Fail(message.into());
        self
    }

    pub fn failing_with_status(mut self, status: u16, body: impl Into<String>) -> Self {
        self.outcome = Outcome::FailWithStatus(status, body.into());
        self
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }

    /// Body of the most recent JSON request, if any.
    pub fn last_json_body(&self) -> Option<Value> {
        self.requests().into_iter().rev().find_map(|r| match r {
            RecordedRequest::Json { body, .. } => Some(body),
            _ => None,
        })
    }

    fn record(&self, request: RecordedRequest) -> Result<Value, TransportError> {
        debug!("MockTransport recorded {:?}", request);
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request);
        }

        match &self.outcome {
            Outcome::Respond(value) => Ok(value.clone()),
            Outcome::Fail(message) => Err(TransportError::new(message.clone())),
            Outcome::FailWithStatus(status, body) => {
                Err(TransportError::from_status(*status, body.clone()))
            }
        }
    }
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn post_json(&self, url: &str, body: &Value) -> Result<Value, TransportError> {
        self.record(RecordedRequest::Json {
            url: url.to_string(),
            body: body.clone(),
        })
    }

    async fn post_multipart(
        &self,
        url: &str,
        upload: &UploadRequest,
    ) -> Result<Value, TransportError> {
        self.record(RecordedRequest::Multipart {
            url: url.to_string(),
            upload: upload.clone(),
        })
    }

    async fn get(&self, url: &str) -> Result<Value, TransportError> {
        self.record(RecordedRequest::Get {
            url: url.to_string(),
        })
    }
}

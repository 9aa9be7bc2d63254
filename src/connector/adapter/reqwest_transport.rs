use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{RequestBuilder, Response};
use serde_json::Value;
use tracing::debug;

use crate::application::Transport;
use crate::domain::{TransportError, UploadRequest};

/// [`Transport`] over a shared `reqwest::Client`.
///
/// No timeout is configured: a call waits as long as reqwest's defaults allow.
/// Response bodies are decoded as JSON; a non-JSON body is handed back as a
/// JSON string and an empty one as `null`, so the caller always sees what the
/// backend sent.
#[derive(Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    async fn execute(&self, request: RequestBuilder) -> Result<Value, TransportError> {
        let response = request.send().await.map_err(network_error)?;
        Self::read_response(response).await
    }

    async fn read_response(response: Response) -> Result<Value, TransportError> {
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            debug!("Backend returned {}: {}", status, body);
            return Err(TransportError::from_status(status.as_u16(), body));
        }

        let bytes = response.bytes().await.map_err(network_error)?;
        Ok(parse_body(&bytes))
    }
}

fn network_error(err: reqwest::Error) -> TransportError {
    TransportError::new(err.to_string()).with_source(err)
}

fn parse_body(bytes: &[u8]) -> Value {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Value::Null;
    }
    serde_json::from_slice(bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(bytes).into_owned()))
}

fn upload_form(upload: &UploadRequest) -> Result<Form, TransportError> {
    let file = &upload.file;
    let part = Part::bytes(file.bytes().to_vec())
        .file_name(file.file_name().to_string())
        .mime_str(file.mime_type())
        .map_err(|e| {
            TransportError::new(format!("Invalid MIME type '{}': {}", file.mime_type(), e))
                .with_source(e)
        })?;

    Ok(Form::new()
        .part("file", part)
        .text("session_id", upload.session_id.clone()))
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn post_json(&self, url: &str, body: &Value) -> Result<Value, TransportError> {
        debug!("POST {}", url);
        self.execute(self.client.post(url).json(body)).await
    }

    async fn post_multipart(
        &self,
        url: &str,
        upload: &UploadRequest,
    ) -> Result<Value, TransportError> {
        debug!(
            "POST {} ({} bytes, {})",
            url,
            upload.file.len(),
            upload.file.file_name()
        );
        let form = upload_form(upload)?;
        self.execute(self.client.post(url).multipart(form)).await
    }

    async fn get(&self, url: &str) -> Result<Value, TransportError> {
        debug!("GET {}", url);
        self.execute(self.client.get(url)).await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::domain::UploadFile;

    #[test]
    fn parse_body_passes_json_through() {
        assert_eq!(
            parse_body(br#"{"message":"ok","n":[1,2]}"#),
            json!({"message": "ok", "n": [1, 2]})
        );
    }

    #[test]
    fn parse_body_wraps_plain_text() {
        assert_eq!(parse_body(b"Internal Server Error"), json!("Internal Server Error"));
    }

    #[test]
    fn parse_body_empty_is_null() {
        assert_eq!(parse_body(b""), Value::Null);
        assert_eq!(parse_body(b" \n"), Value::Null);
    }

    #[test]
    fn upload_form_rejects_bad_mime() {
        let upload = UploadRequest::new(
            UploadFile::new("doc.pdf", vec![1]).with_mime_type("not a mime"),
            "s",
        );

        assert!(upload_form(&upload).is_err());
    }

    #[tokio::test]
    async fn unreachable_backend_is_network_error() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let transport = ReqwestTransport::new();

        let err = transport.get(&format!("http://{addr}/")).await.unwrap_err();

        assert_eq!(err.status(), None);
        assert!(std::error::Error::source(&err).is_some());
    }
}

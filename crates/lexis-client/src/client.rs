//! Analysis request transport
//!
//! One POST to the configured service per submission. No retries, and no
//! client-side timeout beyond the transport's own limits.

use lexis_core::{resolve, DocumentText};
use reqwest::StatusCode;
use serde_json::Value;
use shared_types::{AnalysisReport, AnalyzeRequest};

use crate::config::ServiceConfig;
use crate::error::ClientError;

/// HTTP client for the analysis service.
#[derive(Debug, Clone)]
pub struct AnalyzeClient {
    http: reqwest::Client,
    config: ServiceConfig,
}

impl AnalyzeClient {
    pub fn new(config: ServiceConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Submit one document for analysis. The text is consumed: the request
    /// body is exactly the text the normalizer produced at submission time.
    pub async fn analyze(&self, text: DocumentText) -> Result<AnalysisReport, ClientError> {
        let url = self.config.analyze_url();
        tracing::debug!(url = %url, "submitting document for analysis");

        let response = self
            .http
            .post(&url)
            .json(&AnalyzeRequest {
                text: text.into_string(),
            })
            .send()
            .await
            .map_err(ClientError::Transport)?;

        let status = response.status();
        if status.is_success() {
            // Handed to the resolver unconditionally: a body-level `error`
            // does not suppress whatever sections came with it.
            let body: Value = response.json().await.map_err(ClientError::Transport)?;
            Ok(resolve(&body))
        } else {
            let body = response.text().await.unwrap_or_default();
            tracing::debug!(status = status.as_u16(), "analysis request failed");
            Err(ClientError::Service(failure_message(status, &body)))
        }
    }
}

/// Derive the single message surfaced for a non-2xx response: the JSON
/// `error` field when the body parses and carries one, else the raw body
/// text, else a generic status line.
fn failure_message(status: StatusCode, body: &str) -> String {
    let generic = || format!("Request failed with status {}", status.as_u16());
    match serde_json::from_str::<Value>(body) {
        Ok(parsed) => parsed
            .get("error")
            .and_then(Value::as_str)
            .map(str::to_owned)
            .unwrap_or_else(generic),
        Err(_) if !body.is_empty() => body.to_owned(),
        Err(_) => generic(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn json_error_field_wins() {
        let message = failure_message(
            StatusCode::BAD_GATEWAY,
            r#"{"error": "upstream quota exhausted"}"#,
        );
        assert_eq!(message, "upstream quota exhausted");
    }

    #[test]
    fn non_json_body_is_surfaced_verbatim() {
        let message = failure_message(StatusCode::INTERNAL_SERVER_ERROR, "oops");
        assert_eq!(message, "oops");
    }

    #[test]
    fn empty_body_falls_back_to_the_status_line() {
        let message = failure_message(StatusCode::SERVICE_UNAVAILABLE, "");
        assert_eq!(message, "Request failed with status 503");
    }

    #[test]
    fn json_body_without_an_error_field_uses_the_status_line() {
        let message = failure_message(StatusCode::BAD_REQUEST, r#"{"detail": "bad input"}"#);
        assert_eq!(message, "Request failed with status 400");
    }
}

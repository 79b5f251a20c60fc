//! One-shot transport call exported to JavaScript.

use lexis_client::{AnalyzeClient, ServiceConfig};
use lexis_core::from_typed_text;
use serde::{Deserialize, Serialize};
use shared_types::AnalysisReport;
use wasm_bindgen::prelude::*;

/// Outcome of one analysis request, in a shape that crosses the JS
/// boundary. Exactly one of the two fields is set for a real request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalysisOutcome {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<AnalysisReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AnalysisOutcome {
    pub fn success(report: AnalysisReport) -> Self {
        Self {
            report: Some(report),
            error: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            report: None,
            error: Some(message.into()),
        }
    }

    pub fn into_result(self) -> Result<AnalysisReport, String> {
        match self.error {
            Some(message) => Err(message),
            None => Ok(self.report.unwrap_or_default()),
        }
    }
}

/// Issue the single analysis request for the text handed out by
/// `beginAnalysis`. Resolves to an outcome object for `applyOutcome`; it
/// never rejects, so the page needs no try/catch.
#[wasm_bindgen(js_name = requestAnalysis)]
pub async fn request_analysis(text: String, base_url: Option<String>) -> JsValue {
    let config = base_url.map(ServiceConfig::new).unwrap_or_default();
    let client = AnalyzeClient::new(config);

    let outcome = match from_typed_text(&text) {
        Some(document) => match client.analyze(document).await {
            Ok(report) => AnalysisOutcome::success(report),
            Err(error) => AnalysisOutcome::failure(error.to_string()),
        },
        // Blocked submission: callers that bypass beginAnalysis get the
        // empty outcome instead of a request.
        None => AnalysisOutcome::default(),
    };

    serde_wasm_bindgen::to_value(&outcome).unwrap_or(JsValue::NULL)
}

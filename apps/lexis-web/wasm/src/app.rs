//! Application state for the web client.
//!
//! Holds the editor text, the loaded file name, the single visible error,
//! and the request lifecycle in Rust; JavaScript renders `viewState()` and
//! keeps no state of its own.

use lexis_client::{AnalysisSession, AnalyzeClient, ServiceConfig};
use lexis_core::{from_file, from_typed_text, render_sections, RenderedSection};
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::transport::AnalysisOutcome;

/// Everything the page needs to render, as one JSON-friendly snapshot.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewState {
    /// Disables the analyze trigger while a request is in flight.
    pub loading: bool,
    /// At most one message; each operation replaces it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    /// The six report boxes, present when the service returned sections.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sections: Option<Vec<RenderedSection>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw: Option<String>,
    /// True when the empty-state placeholder should show instead of results.
    pub empty: bool,
}

#[wasm_bindgen]
pub struct LexisApp {
    text: String,
    file_name: Option<String>,
    /// Advisory notice from the file path; shares the single error slot.
    advisory: Option<String>,
    session: AnalysisSession,
}

impl LexisApp {
    pub fn with_config(config: ServiceConfig) -> Self {
        Self {
            text: String::new(),
            file_name: None,
            advisory: None,
            session: AnalysisSession::new(AnalyzeClient::new(config)),
        }
    }

    /// Replace the editor text. Supersedes any earlier typed or loaded text.
    pub fn set_text(&mut self, text: &str) {
        self.text = text.to_owned();
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Load a selected file: remember its name, decode its bytes into the
    /// editor, and raise the advisory warning for non-text-like files. The
    /// text is loaded either way; callers follow up with `begin_analysis`
    /// in the same action, with no separate confirm step.
    pub fn load_file(&mut self, name: &str, declared_type: &str, bytes: &[u8]) {
        let load = from_file(name, declared_type, bytes);
        self.file_name = Some(load.selection.name);
        self.text = load.text;
        self.advisory = load.warning.map(|warning| warning.to_string());
    }

    /// Gate and start one request. Returns the exact text to submit, or
    /// `None` when the submission is blocked (empty or all-whitespace
    /// text: a precondition, not an error). Starting clears the advisory
    /// notice and any previous outcome.
    pub fn begin_analysis(&mut self) -> Option<String> {
        let document = from_typed_text(&self.text)?;
        self.advisory = None;
        self.session.begin();
        Some(document.into_string())
    }

    /// Reduce a finished request into the state cell.
    pub fn apply_outcome(&mut self, outcome: AnalysisOutcome) {
        self.session.complete(outcome.into_result());
    }

    pub fn view_state(&self) -> ViewState {
        let state = self.session.state();
        let report = state.report();
        let error = self
            .advisory
            .clone()
            .or_else(|| state.error_message().map(str::to_owned));
        let empty = !report.is_some_and(|r| r.has_content()) && error.is_none();

        ViewState {
            loading: state.is_pending(),
            error,
            file_name: self.file_name.clone(),
            sections: report
                .and_then(|r| r.sections.as_ref())
                .map(render_sections),
            analysis: report.and_then(|r| r.analysis.clone()),
            raw: report.and_then(|r| r.raw.clone()),
            empty,
        }
    }
}

// WASM bindings
#[wasm_bindgen]
impl LexisApp {
    /// Create the app, optionally pointing it at a deployed service. With
    /// no argument the local development address is used.
    #[wasm_bindgen(constructor)]
    pub fn new(base_url: Option<String>) -> Self {
        Self::with_config(base_url.map(ServiceConfig::new).unwrap_or_default())
    }

    #[wasm_bindgen(js_name = setText)]
    pub fn set_text_wasm(&mut self, text: &str) {
        self.set_text(text);
    }

    #[wasm_bindgen(js_name = loadFile)]
    pub fn load_file_wasm(&mut self, name: &str, declared_type: &str, bytes: &[u8]) {
        self.load_file(name, declared_type, bytes);
    }

    #[wasm_bindgen(js_name = beginAnalysis)]
    pub fn begin_analysis_wasm(&mut self) -> Option<String> {
        self.begin_analysis()
    }

    #[wasm_bindgen(js_name = applyOutcome)]
    pub fn apply_outcome_wasm(&mut self, outcome: JsValue) -> Result<(), JsValue> {
        let outcome: AnalysisOutcome = serde_wasm_bindgen::from_value(outcome)
            .map_err(|e| JsValue::from_str(&format!("Malformed outcome: {}", e)))?;
        self.apply_outcome(outcome);
        Ok(())
    }

    #[wasm_bindgen(js_name = viewState)]
    pub fn view_state_wasm(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.view_state())
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
    }
}

//! Request lifecycle state
//!
//! The single mutable cell of the client: exactly one [`RequestState`]
//! holds at any time, written only by the session and read by the renderer.

use lexis_core::DocumentText;
use shared_types::AnalysisReport;

use crate::client::AnalyzeClient;

/// Lifecycle of the analysis request.
///
/// `Idle --submit--> Pending --success--> Succeeded`;
/// `Pending --failure--> Failed`; both terminal states re-enter `Pending`
/// on the next submit, with no cooldown.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum RequestState {
    #[default]
    Idle,
    Pending,
    Succeeded(AnalysisReport),
    Failed(String),
}

impl RequestState {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// The report to render, when one is available.
    pub fn report(&self) -> Option<&AnalysisReport> {
        match self {
            Self::Succeeded(report) => Some(report),
            _ => None,
        }
    }

    /// The single error message currently surfaced, if any. A succeeded
    /// request may still carry a service-reported error alongside results.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            Self::Succeeded(report) => report.error.as_deref(),
            _ => None,
        }
    }
}

/// Owns the request lifecycle: builds the payload, issues the call, and
/// reduces the outcome into the unified state cell. Overlap, if a caller
/// races two sessions, is last-completed-wins: whichever completion runs
/// last overwrites the cell.
#[derive(Debug)]
pub struct AnalysisSession {
    client: AnalyzeClient,
    state: RequestState,
}

impl AnalysisSession {
    pub fn new(client: AnalyzeClient) -> Self {
        Self {
            client,
            state: RequestState::Idle,
        }
    }

    pub fn state(&self) -> &RequestState {
        &self.state
    }

    /// Enter `Pending`, discarding any previous result and error so stale
    /// output never remains visible while a new request runs.
    pub fn begin(&mut self) {
        self.state = RequestState::Pending;
    }

    /// Leave `Pending` with the outcome of the call. Every exit path comes
    /// through here, so the session is never left marked in-flight.
    pub fn complete(&mut self, outcome: Result<AnalysisReport, String>) {
        self.state = match outcome {
            Ok(report) => RequestState::Succeeded(report),
            Err(message) => RequestState::Failed(message),
        };
    }

    /// Run one full request: `Pending`, one HTTP call, `Succeeded` or
    /// `Failed`. Re-entrant after either terminal state; no retries.
    pub async fn submit(&mut self, text: DocumentText) -> &RequestState {
        self.begin();
        let outcome = self
            .client
            .analyze(text)
            .await
            .map_err(|error| error.to_string());
        self.complete(outcome);
        &self.state
    }
}

//! HTTP client and request lifecycle for the Lexis analysis service.
//!
//! One configurable endpoint, one request in flight by convention, and a
//! single [`RequestState`] cell reduced from every outcome.

pub mod client;
pub mod config;
pub mod error;
pub mod session;

pub use client::AnalyzeClient;
pub use config::{ServiceConfig, BASE_URL_ENV, DEFAULT_BASE_URL};
pub use error::ClientError;
pub use session::{AnalysisSession, RequestState};

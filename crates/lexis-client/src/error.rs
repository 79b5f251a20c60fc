//! Client error taxonomy

use thiserror::Error;

/// Failure of one analysis request. Exactly one user-visible message is
/// derived per failed request; `Display` is that message.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The call could not be completed at all: network unreachable, DNS
    /// failure, or a success response whose body was not the expected JSON.
    /// No status is available, so the message is fixed.
    #[error("Failed to reach analysis service")]
    Transport(#[source] reqwest::Error),

    /// The service answered with a non-2xx status. The message was derived
    /// from the response: its JSON `error` field, else the raw body text,
    /// else a generic status line.
    #[error("{0}")]
    Service(String),
}

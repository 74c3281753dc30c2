//! Errors reported by the model client.
//!
//! The chat panel never shows these to the user; they are logged and then
//! collapsed into a single apology turn.

use reqwest::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    /// No API key was configured, so no request was sent.
    #[error("missing api key")]
    MissingApiKey,

    /// The HTTP request could not be sent or its body could not be decoded.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The provider answered with a non-success status.
    #[error("provider returned {status}: {body}")]
    Status { status: StatusCode, body: String },

    /// The response parsed but carried no message content.
    #[error("response contained no message content")]
    EmptyResponse,
}

pub type Result<T, E = LlmError> = std::result::Result<T, E>;

//! Error taxonomy for chat-completion calls.

use crate::sink::BoxError;

/// Errors from chat-completion operations.
///
/// Nothing is retried and nothing is swallowed, with two deliberate
/// leniencies on the streaming path: malformed individual frames are
/// skipped, and a failed best-effort read of an error body yields an empty
/// body string instead of masking the status error.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    /// The request could not be encoded to JSON.
    #[error("failed to encode request: {0}")]
    Serialization(#[source] serde_json::Error),

    /// The HTTP request could not be constructed or dispatched.
    #[error("failed to send request: {0}")]
    Transport(#[source] BoxError),

    /// The service returned a non-success status. `body` is a best-effort
    /// read of the response content; empty if the read itself failed.
    #[error("API error (status {status}): {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Raw response body, best-effort.
        body: String,
    },

    /// The response body was not a valid completion document.
    #[error("failed to decode response: {0}")]
    Decode(#[source] serde_json::Error),

    /// The underlying byte stream failed mid-read.
    #[error("failed to read stream: {0}")]
    StreamRead(#[source] BoxError),

    /// The sink rejected an increment, aborting the stream.
    #[error("sink rejected increment: {0}")]
    Sink(#[source] BoxError),
}

//! Errors raised while fetching the upstream dataset.
//!
//! Callers treat every variant as the same "upstream failed" kind; the
//! variants exist so logs and messages say what actually went wrong.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum UpstreamError {
    /// The request never produced a response (connect, DNS, timeout, I/O).
    #[error("upstream transport failed: {0}")]
    Transport(String),

    /// The upstream answered with a non-2xx status.
    #[error("upstream returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The body was not a JSON array of country objects.
    #[error("upstream payload could not be parsed: {0}")]
    Deserialization(String),
}

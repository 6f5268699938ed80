//! Errors surfaced by `TodoClient::parse_*`.
//!
//! The service only fails for caller mistakes, so 400 and 404 get their own
//! variants. Anything else lands in `HttpError` with the raw status and body.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// 404: no todo with the requested id.
    #[error("resource not found")]
    NotFound,

    /// 400: the service rejected the id or payload.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    #[error("serialization failed: {0}")]
    SerializationError(String),
}

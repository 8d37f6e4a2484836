use thiserror::Error;

/// Errors raised while building a response envelope.
///
/// All variants are synchronous caller errors: they indicate a malformed
/// call at the response-building site, not a runtime fault. The HTTP layer
/// maps them to a sanitized 500 response at the framework boundary.
#[derive(Debug, Error)]
pub enum EnvelopeError {
    /// Status code outside the valid HTTP range.
    #[error("Status code must be a valid HTTP status code, got {0}")]
    InvalidStatusCode(u16),

    /// Redirect target that does not parse as an absolute URL.
    #[error("Redirect must be a valid url, got '{0}'")]
    InvalidRedirect(String),

    /// Status flag other than `success` or `error`.
    #[error("Status must be either 'success' or 'error', got '{0}'")]
    InvalidStatus(String),

    /// Payload that does not serialize to a JSON object.
    #[error("Response payload must serialize to a JSON object")]
    NonObjectPayload,

    /// Payload serialization failure.
    #[error("Failed to serialize response payload: {0}")]
    Serialize(#[from] serde_json::Error),
}

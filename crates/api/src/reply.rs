//! The [`Reply`] type: a built envelope plus response headers.

use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::Value;

use manila_core::envelope::Envelope;

/// A response ready for the framework: an envelope plus caller headers.
///
/// Headers supplied via [`with_headers`](Self::with_headers) are merged on
/// top of whatever axum sets for the JSON body (`content-type` included).
#[derive(Debug)]
pub struct Reply {
    envelope: Envelope,
    headers: HeaderMap,
}

impl Reply {
    pub fn new(envelope: Envelope) -> Self {
        Self {
            envelope,
            headers: HeaderMap::new(),
        }
    }

    /// Merge caller-supplied headers into the reply.
    pub fn with_headers(mut self, headers: HeaderMap) -> Self {
        self.headers.extend(headers);
        self
    }

    /// HTTP status code the reply will be sent with.
    pub fn status_code(&self) -> u16 {
        self.envelope.status_code()
    }

    /// The wrapped envelope.
    pub fn envelope(&self) -> &Envelope {
        &self.envelope
    }
}

impl From<Envelope> for Reply {
    fn from(envelope: Envelope) -> Self {
        Self::new(envelope)
    }
}

impl IntoResponse for Reply {
    fn into_response(self) -> Response {
        let (code, body) = self.envelope.into_parts();
        // Builder-validated codes are within 100..=599; the fallback only
        // guards the StatusCode conversion itself.
        let status = StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, self.headers, Json(Value::Object(body))).into_response()
    }
}

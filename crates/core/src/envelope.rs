//! Response status flag and the emitted envelope value.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::EnvelopeError;

/// Semantic success/error flag carried in every envelope body.
///
/// Independent of the HTTP status code: the flag says what the body means,
/// the code says how the transport should treat it. The named outcome
/// helpers keep the two consistent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Error,
}

impl Status {
    /// Wire representation (`"success"` / `"error"`).
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Success => "success",
            Status::Error => "error",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = EnvelopeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "success" => Ok(Status::Success),
            "error" => Ok(Status::Error),
            other => Err(EnvelopeError::InvalidStatus(other.to_string())),
        }
    }
}

/// A fully built response: HTTP status code plus JSON body.
///
/// Derived immutably from builder state and the caller's payload at emission
/// time. The body always carries `status` and `redirect_to`; error emissions
/// add `data` and `error` per the envelope contract.
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope {
    status_code: u16,
    body: Map<String, Value>,
}

impl Envelope {
    pub(crate) fn new(status_code: u16, body: Map<String, Value>) -> Self {
        Self { status_code, body }
    }

    /// HTTP status code to send with the body.
    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    /// The JSON body object.
    pub fn body(&self) -> &Map<String, Value> {
        &self.body
    }

    /// Split into status code and body for transport packaging.
    pub fn into_parts(self) -> (u16, Map<String, Value>) {
        (self.status_code, self.body)
    }
}

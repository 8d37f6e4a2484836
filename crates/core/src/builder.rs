//! Request-scoped response building.
//!
//! A [`ResponseBuilder`] accumulates response metadata through fluent
//! setters, then emits [`Envelope`] values via the `respond_*` family.
//! One builder is created per request and owned exclusively by its handler;
//! all mutation goes through `&mut self`, so state never aliases across
//! requests.

use serde::Serialize;
use serde_json::{json, Map, Value};
use url::Url;

use crate::envelope::{Envelope, Status};
use crate::error::EnvelopeError;

/* --------------------------------------------------------------------------
Default outcome messages
-------------------------------------------------------------------------- */

/// Default message for 400 responses.
pub const MSG_BAD_REQUEST: &str = "Bad Request!";

/// Default message for 401 responses.
pub const MSG_UNAUTHORIZED: &str = "Unauthorized Request!";

/// Default message for 403 responses.
pub const MSG_FORBIDDEN: &str = "Forbidden!";

/// Default message for 404 responses.
pub const MSG_NOT_FOUND: &str = "Not Found!";

/// Default message for 422 responses.
pub const MSG_UNPROCESSABLE: &str = "Unprocessable Entity!";

/// Default message for 500 responses.
pub const MSG_INTERNAL_ERROR: &str = "Internal Error!";

/* --------------------------------------------------------------------------
ResponseBuilder
-------------------------------------------------------------------------- */

/// Builds JSON response envelopes for a single request.
///
/// Starts at status code 200 with a `success` flag and no redirect. Setters
/// validate their input and chain (`builder.set_status_code(404)?` returns
/// `&mut Self`); emission methods pair the accumulated state with a caller
/// payload to produce an [`Envelope`].
///
/// Emission never mutates the caller's payload: a new merged body is built
/// each time, and the builder's `status` / `redirect_to` values win over
/// same-named keys in the payload.
#[derive(Debug)]
pub struct ResponseBuilder {
    status_code: u16,
    status: Status,
    redirect_to: Option<Url>,
}

impl Default for ResponseBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ResponseBuilder {
    /// A fresh builder: 200, `success`, no redirect.
    pub fn new() -> Self {
        Self {
            status_code: 200,
            status: Status::Success,
            redirect_to: None,
        }
    }

    /* ---- Setters / getters ---- */

    /// Set the HTTP status code for the response.
    ///
    /// Rejects codes outside `100..=599`.
    pub fn set_status_code(&mut self, code: u16) -> Result<&mut Self, EnvelopeError> {
        if !(100..=599).contains(&code) {
            return Err(EnvelopeError::InvalidStatusCode(code));
        }
        self.status_code = code;
        Ok(self)
    }

    /// The HTTP status code currently set.
    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    /// Set the redirect target, validating it parses as an absolute URL.
    pub fn set_redirection(&mut self, url: &str) -> Result<&mut Self, EnvelopeError> {
        let parsed =
            Url::parse(url).map_err(|_| EnvelopeError::InvalidRedirect(url.to_string()))?;
        self.redirect_to = Some(parsed);
        Ok(self)
    }

    /// The redirect target, if one was set.
    pub fn redirection(&self) -> Option<&Url> {
        self.redirect_to.as_ref()
    }

    /// Set the status flag from its wire string (`"success"` / `"error"`).
    pub fn set_status(&mut self, status: &str) -> Result<&mut Self, EnvelopeError> {
        self.status = status.parse()?;
        Ok(self)
    }

    /// Set the status flag from the typed enum. Infallible.
    pub fn set_status_flag(&mut self, status: Status) -> &mut Self {
        self.status = status;
        self
    }

    /// The status flag currently set.
    pub fn status(&self) -> Status {
        self.status
    }

    /* ---- Emission ---- */

    /// Emit an envelope around `payload`.
    ///
    /// The payload must serialize to a JSON object; its fields land at the
    /// top level of the body alongside `status` and `redirect_to`.
    pub fn respond<T: Serialize>(&self, payload: T) -> Result<Envelope, EnvelopeError> {
        let value = serde_json::to_value(payload)?;
        let Value::Object(body) = value else {
            return Err(EnvelopeError::NonObjectPayload);
        };
        Ok(Envelope::new(self.status_code, self.merged_body(body)))
    }

    /// Emit a pure error envelope: `data` is null, `error` carries the
    /// message and the current status code.
    pub fn respond_with_error(&mut self, message: &str) -> Envelope {
        self.set_status_flag(Status::Error);
        let mut body = Map::new();
        body.insert("data".to_string(), Value::Null);
        body.insert("error".to_string(), self.error_value(message));
        Envelope::new(self.status_code, self.merged_body(body))
    }

    /// Emit a success envelope around `data`.
    pub fn respond_with_success<T: Serialize>(
        &mut self,
        data: T,
    ) -> Result<Envelope, EnvelopeError> {
        self.set_status_flag(Status::Success);
        self.respond(data)
    }

    /* ---- Named outcome helpers ---- */

    /// 200 OK with a success envelope.
    pub fn respond_ok<T: Serialize>(&mut self, data: T) -> Result<Envelope, EnvelopeError> {
        self.set_status_code(200)?.respond_with_success(data)
    }

    /// 201 Created with a success envelope.
    pub fn respond_created<T: Serialize>(&mut self, data: T) -> Result<Envelope, EnvelopeError> {
        self.set_status_code(201)?.respond_with_success(data)
    }

    /// 400 Bad Request with an error envelope.
    pub fn respond_bad_request(
        &mut self,
        message: Option<&str>,
    ) -> Result<Envelope, EnvelopeError> {
        Ok(self
            .set_status_code(400)?
            .respond_with_error(message.unwrap_or(MSG_BAD_REQUEST)))
    }

    /// 401 Unauthorized with an error envelope.
    pub fn respond_unauthorized(
        &mut self,
        message: Option<&str>,
    ) -> Result<Envelope, EnvelopeError> {
        Ok(self
            .set_status_code(401)?
            .respond_with_error(message.unwrap_or(MSG_UNAUTHORIZED)))
    }

    /// 403 Forbidden with an error envelope.
    pub fn respond_forbidden(&mut self, message: Option<&str>) -> Result<Envelope, EnvelopeError> {
        Ok(self
            .set_status_code(403)?
            .respond_with_error(message.unwrap_or(MSG_FORBIDDEN)))
    }

    /// 404 Not Found with an error envelope.
    pub fn respond_not_found(&mut self, message: Option<&str>) -> Result<Envelope, EnvelopeError> {
        Ok(self
            .set_status_code(404)?
            .respond_with_error(message.unwrap_or(MSG_NOT_FOUND)))
    }

    /// 500 Internal Error with an error envelope.
    pub fn respond_internal_error(
        &mut self,
        message: Option<&str>,
    ) -> Result<Envelope, EnvelopeError> {
        Ok(self
            .set_status_code(500)?
            .respond_with_error(message.unwrap_or(MSG_INTERNAL_ERROR)))
    }

    /// 422 Unprocessable Entity for form validation failures.
    ///
    /// Unlike [`respond_with_error`](Self::respond_with_error), the body
    /// carries the caller's `data` (typically per-field failures) alongside
    /// the `error` object. The asymmetry is part of the API contract.
    pub fn respond_form_validation<T: Serialize>(
        &mut self,
        data: T,
        message: Option<&str>,
    ) -> Result<Envelope, EnvelopeError> {
        self.set_status_code(422)?.set_status_flag(Status::Error);
        let mut body = Map::new();
        body.insert("data".to_string(), serde_json::to_value(data)?);
        body.insert(
            "error".to_string(),
            self.error_value(message.unwrap_or(MSG_UNPROCESSABLE)),
        );
        Ok(Envelope::new(self.status_code, self.merged_body(body)))
    }

    /* ---- Body construction ---- */

    /// Merge builder state into a payload object, building the final body.
    ///
    /// The map passed in is already a fresh serialization of the caller's
    /// payload; inserting here overwrites any `status` / `redirect_to` keys
    /// the payload carried, without touching the caller's data.
    fn merged_body(&self, mut payload: Map<String, Value>) -> Map<String, Value> {
        payload.insert(
            "status".to_string(),
            Value::String(self.status.as_str().to_string()),
        );
        payload.insert("redirect_to".to_string(), self.redirect_value());
        payload
    }

    /// The `error` object: message plus the status code it shipped with.
    fn error_value(&self, message: &str) -> Value {
        json!({
            "message": message,
            "status_code": self.status_code,
        })
    }

    /// `redirect_to` as a JSON value: the URL string, or null when unset.
    fn redirect_value(&self) -> Value {
        match &self.redirect_to {
            Some(url) => Value::String(url.to_string()),
            None => Value::Null,
        }
    }
}

/* --------------------------------------------------------------------------
Tests
-------------------------------------------------------------------------- */

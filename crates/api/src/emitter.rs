//! The [`ResponseEmitter`] capability trait.
//!
//! Replaces base-controller inheritance: any request-scoped component that
//! can hand out exclusive access to its [`ResponseBuilder`] gets the full
//! set of named outcome helpers as provided methods. Handlers compose a
//! [`Responder`] value per request instead of subclassing anything.

use axum::http::HeaderMap;
use serde::Serialize;

use manila_core::builder::ResponseBuilder;

use crate::error::ApiResult;
use crate::reply::Reply;

/// Capability to emit standardized JSON envelope replies.
///
/// Implementors supply [`builder`](Self::builder); every helper below is a
/// provided method delegating to the core [`ResponseBuilder`] and wrapping
/// the emitted envelope in a [`Reply`].
pub trait ResponseEmitter {
    /// Exclusive access to the per-request response builder.
    fn builder(&mut self) -> &mut ResponseBuilder;

    /// Emit the current builder state around `payload`, attaching extra
    /// response headers.
    fn respond<T: Serialize>(&mut self, payload: T, headers: HeaderMap) -> ApiResult<Reply> {
        let envelope = self.builder().respond(payload)?;
        Ok(Reply::new(envelope).with_headers(headers))
    }

    /// Emit a success envelope around `data` at the current status code.
    fn respond_with_success<T: Serialize>(&mut self, data: T) -> ApiResult<Reply> {
        Ok(self.builder().respond_with_success(data)?.into())
    }

    /// Emit a pure error envelope at the current status code.
    fn respond_with_error(&mut self, message: &str) -> ApiResult<Reply> {
        Ok(self.builder().respond_with_error(message).into())
    }

    /// 200 OK.
    fn respond_ok<T: Serialize>(&mut self, data: T) -> ApiResult<Reply> {
        Ok(self.builder().respond_ok(data)?.into())
    }

    /// 201 Created.
    fn respond_created<T: Serialize>(&mut self, data: T) -> ApiResult<Reply> {
        Ok(self.builder().respond_created(data)?.into())
    }

    /// 400 Bad Request. `None` uses the stock message.
    fn respond_bad_request(&mut self, message: Option<&str>) -> ApiResult<Reply> {
        Ok(self.builder().respond_bad_request(message)?.into())
    }

    /// 401 Unauthorized. `None` uses the stock message.
    fn respond_unauthorized(&mut self, message: Option<&str>) -> ApiResult<Reply> {
        Ok(self.builder().respond_unauthorized(message)?.into())
    }

    /// 403 Forbidden. `None` uses the stock message.
    fn respond_forbidden(&mut self, message: Option<&str>) -> ApiResult<Reply> {
        Ok(self.builder().respond_forbidden(message)?.into())
    }

    /// 404 Not Found. `None` uses the stock message.
    fn respond_not_found(&mut self, message: Option<&str>) -> ApiResult<Reply> {
        Ok(self.builder().respond_not_found(message)?.into())
    }

    /// 500 Internal Error. `None` uses the stock message.
    fn respond_internal_error(&mut self, message: Option<&str>) -> ApiResult<Reply> {
        Ok(self.builder().respond_internal_error(message)?.into())
    }

    /// 422 Unprocessable Entity, carrying `data` alongside the error object.
    fn respond_form_validation<T: Serialize>(
        &mut self,
        data: T,
        message: Option<&str>,
    ) -> ApiResult<Reply> {
        Ok(self.builder().respond_form_validation(data, message)?.into())
    }
}

/// A ready-made request-scoped emitter.
///
/// Create one per request; dropping it at the end of the handler discards
/// all response state, so nothing leaks across requests.
#[derive(Debug, Default)]
pub struct Responder {
    builder: ResponseBuilder,
}

impl Responder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ResponseEmitter for Responder {
    fn builder(&mut self) -> &mut ResponseBuilder {
        &mut self.builder
    }
}

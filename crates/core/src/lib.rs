//! Framework-free response envelope building.
//!
//! Provides the [`ResponseBuilder`](builder::ResponseBuilder), which
//! accumulates per-request response metadata (HTTP status code, success/error
//! flag, optional redirect target) and emits JSON
//! [`Envelope`](envelope::Envelope) values. The HTTP layer in `manila-api`
//! turns envelopes into framework responses.

pub mod builder;
pub mod envelope;
pub mod error;

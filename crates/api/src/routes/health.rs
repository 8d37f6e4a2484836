use axum::extract::State;
use axum::{routing::get, Router};
use serde_json::json;

use crate::emitter::{Responder, ResponseEmitter};
use crate::error::ApiResult;
use crate::reply::Reply;
use crate::state::AppState;

/// GET /health -- service liveness, emitted through the standard envelope.
///
/// The payload key is `service` rather than `status` so it does not collide
/// with the envelope's own `status` flag.
async fn health_check(State(_state): State<AppState>) -> ApiResult<Reply> {
    let mut responder = Responder::new();
    responder.respond_ok(json!({
        "service": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Mount health check routes (intended for root-level mounting).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

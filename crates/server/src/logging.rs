//! Request/response instrumentation for mutating endpoints.
//!
//! `TraceLayer` already records method, URI, status and latency for every
//! request; this middleware adds headers and body for writes.

use axum::body::{to_bytes, Body};
use axum::extract::Request;
use axum::http::Method;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use tracing::{debug, info};

use crate::errors::ApiError;

/// Write requests with a body larger than this are answered with 400
/// before reaching handlers.
pub const MAX_REQUEST_BODY: usize = 2 * 1024 * 1024;

fn is_mutation(method: &Method) -> bool {
    matches!(*method, Method::POST | Method::PUT | Method::PATCH | Method::DELETE)
}

pub async fn log_mutations(req: Request, next: Next) -> Response {
    if !is_mutation(req.method()) {
        return next.run(req).await;
    }

    let (parts, body) = req.into_parts();
    let bytes = match to_bytes(body, MAX_REQUEST_BODY).await {
        Ok(b) => b,
        Err(e) => return ApiError::BadRequest(format!("failed to read request body: {e}")).into_response(),
    };
    info!(method = %parts.method, uri = %parts.uri, "request received");
    debug!(headers = ?parts.headers, body = %String::from_utf8_lossy(&bytes), "request detail");

    let resp = next.run(Request::from_parts(parts, Body::from(bytes))).await;

    info!(status = %resp.status(), "response sent");
    debug!(headers = ?resp.headers(), "response detail");
    resp
}

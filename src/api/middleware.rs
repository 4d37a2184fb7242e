// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Request pipeline middleware: the API token gate and the timing observer.
//!
//! The gate is layered outside the timer, so rejected requests are answered
//! before any timing is recorded.

use crate::api::http_server::AppState;
use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use std::time::Instant;
use tracing::{info, warn};

/// Header clients supply the shared secret in.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Body returned when the header is absent on a guarded path.
pub const NO_TOKEN_BODY: &str = "No API Token Provided";

/// Body returned when the supplied token does not match.
pub const WRONG_TOKEN_BODY: &str = "Wrong API Token";

/// API token authentication gate.
///
/// Decides one of three outcomes per request:
/// - path is in the excluded set: skip the check, forward unconditionally
/// - no `x-api-key` header, or a mismatched token: 403 with a fixed
///   plain-text body, downstream never runs
/// - token matches exactly: forward, response passed through unmodified
///
/// A header value that is not valid UTF-8 counts as a wrong token: the
/// header is present, it just cannot match the configured secret.
pub async fn api_token_auth(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    info!("Running API token based authentication");

    if !state.config.is_excluded_path(request.uri().path()) {
        match request.headers().get(API_KEY_HEADER) {
            None => {
                warn!("No API token provided");
                return (StatusCode::FORBIDDEN, NO_TOKEN_BODY).into_response();
            }
            Some(value) => match value.to_str() {
                Ok(supplied) if supplied == state.config.api_token => {
                    info!("API token verified!");
                }
                _ => {
                    warn!("Wrong API token provided.");
                    return (StatusCode::FORBIDDEN, WRONG_TOKEN_BODY).into_response();
                }
            },
        }
    }

    next.run(request).await
}

/// Timing observer.
///
/// Measures wall-clock duration of the downstream call chain and logs it in
/// milliseconds to two decimal places. Never alters status code or body.
pub async fn track_timing(request: Request, next: Next) -> Response {
    let start = Instant::now();

    let response = next.run(request).await;

    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
    info!("Request processed in {:.2}ms", elapsed_ms);

    response
}

// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use crate::api::http_server::AppState;
use crate::api::sentence_compare::{SentenceComparatorRequest, SentenceComparatorResponse};
use crate::api::ApiError;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::{info, warn};

/// POST /sentence_compare/ handler.
///
/// Embeds both sentences with the loaded model and returns their cosine
/// similarity as a decimal string. There is no validation beyond the schema
/// check; empty strings go straight through to the model.
///
/// Failure modes:
/// - model never loaded: 503 service_unavailable
/// - embedding failure: captured by the error reporter, generic 500
pub async fn sentence_compare_handler(
    State(state): State<AppState>,
    request: Result<Json<SentenceComparatorRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(request) = match request {
        Ok(json) => json,
        Err(rejection) => {
            warn!("Rejected malformed POST body: {}", rejection.body_text());
            return Ok(
                (StatusCode::UNPROCESSABLE_ENTITY, rejection.body_text()).into_response(),
            );
        }
    };

    let comparator = state.comparator.as_ref().ok_or_else(|| {
        warn!("Sentence compare requested but no model is loaded");
        ApiError::ServiceUnavailable("sentence comparator model not loaded".to_string())
    })?;

    match comparator
        .similarity(&request.sentence_1, &request.sentence_2)
        .await
    {
        Ok(score) => {
            info!("Processed sentence compare request.");
            Ok(Json(SentenceComparatorResponse::from_score(score)).into_response())
        }
        Err(err) => {
            state.reporter.capture_error(&err);
            Err(ApiError::InternalError("internal server error".to_string()))
        }
    }
}

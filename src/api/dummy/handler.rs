// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use crate::api::dummy::{DummyRequest, DummyResponse};
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::{info, warn};

/// POST /dummy/ handler.
///
/// Schema errors from the JSON extractor (malformed body, missing field,
/// non-integer value) come back as 422 with the extractor's own body. The
/// handler then checks that `num_responses` is strictly between 0 and 100;
/// out-of-range values get a 422 with a plain descriptive string rather
/// than the `DummyResponse` shape. The two 422 body shapes are deliberately
/// left distinct.
///
/// # Response Body
/// ```json
/// {
///   "response_values": [1, 2, 3, 4],
///   "message": "Retrieved 4 responses."
/// }
/// ```
pub async fn dummy_post_handler(
    request: Result<Json<DummyRequest>, JsonRejection>,
) -> Response {
    info!("Parsing received POST request and extracting data ...");
    let Json(request) = match request {
        Ok(json) => json,
        Err(rejection) => {
            warn!("Rejected malformed POST body: {}", rejection.body_text());
            return (StatusCode::UNPROCESSABLE_ENTITY, rejection.body_text()).into_response();
        }
    };

    info!("Performing validation checks on input data ...");
    if !request.is_in_range() {
        let error_message = format!(
            "Invalid num_responses value {}. Must be between 0 and 100 (not inclusive).",
            request.num_responses
        );
        warn!("{}", error_message);
        return (StatusCode::UNPROCESSABLE_ENTITY, error_message).into_response();
    }

    info!("Validation checks passed.");
    info!("Computing responses ...");
    let response = DummyResponse::for_count(request.num_responses);

    info!("Processed POST request.");
    Json(response).into_response()
}

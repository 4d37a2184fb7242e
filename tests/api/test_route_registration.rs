// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Route registration tests: every endpoint resolves with and without the
//! trailing slash, wrong methods are rejected, and the router still works
//! when no embedding model is loaded.

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use sentence_compare_api::api::{create_app, AppState};
use sentence_compare_api::config::{ReporterConfig, ServiceConfig};
use tower::util::ServiceExt;

const API_KEY_HEADER: &str = "x-api-key";
const RIGHT_API_KEY: &str = "test-secret-token";

fn app_without_model() -> axum::Router {
    let config = ServiceConfig {
        listen_addr: "127.0.0.1:0".to_string(),
        api_token: RIGHT_API_KEY.to_string(),
        deployment_color: None,
        excluded_paths: ServiceConfig::default_excluded_paths(),
        model_path: None,
        tokenizer_path: None,
        reporting: ReporterConfig::default(),
    };
    create_app(AppState::new(config, None))
}

#[tokio::test]
async fn test_get_routes_resolve_with_and_without_trailing_slash() {
    for uri in [
        "/health",
        "/health/",
        "/deployment_color",
        "/deployment_color/",
        "/api_token_check",
        "/api_token_check/",
        "/dummy",
        "/dummy/",
    ] {
        let request = Request::builder()
            .method(Method::GET)
            .uri(uri)
            .header(API_KEY_HEADER, RIGHT_API_KEY)
            .body(Body::empty())
            .unwrap();

        let response = app_without_model().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK, "uri: {}", uri);
    }
}

#[tokio::test]
async fn test_sentence_compare_rejects_get() {
    let request = Request::builder()
        .method(Method::GET)
        .uri("/sentence_compare/")
        .header(API_KEY_HEADER, RIGHT_API_KEY)
        .body(Body::empty())
        .unwrap();

    let response = app_without_model().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_health_rejects_post() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/health/")
        .body(Body::empty())
        .unwrap();

    let response = app_without_model().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_sentence_compare_without_model_is_service_unavailable() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/sentence_compare/")
        .header(API_KEY_HEADER, RIGHT_API_KEY)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            r#"{"sentence_1": "hello", "sentence_2": "world"}"#,
        ))
        .unwrap();

    let response = app_without_model().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn test_unknown_route_is_not_found_with_valid_token() {
    let request = Request::builder()
        .method(Method::GET)
        .uri("/no_such_route/")
        .header(API_KEY_HEADER, RIGHT_API_KEY)
        .body(Body::empty())
        .unwrap();

    let response = app_without_model().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

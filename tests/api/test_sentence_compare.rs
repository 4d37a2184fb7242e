// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! POST /sentence_compare/ endpoint tests.
//!
//! Schema-level behavior runs without model files; scoring tests need the
//! ONNX model and tokenizer on disk and are `#[ignore]`d.

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use http_body_util::BodyExt;
use sentence_compare_api::api::{create_app, AppState, SentenceComparatorResponse};
use sentence_compare_api::config::{ReporterConfig, ServiceConfig};
use sentence_compare_api::embeddings::{OnnxEmbeddingModel, SentenceComparator};
use std::sync::Arc;
use tower::util::ServiceExt;

const API_KEY_HEADER: &str = "x-api-key";
const RIGHT_API_KEY: &str = "test-secret-token";

// Model files provisioned out of band
const MODEL_PATH: &str = "./models/sentence-transformer-onnx/model.onnx";
const TOKENIZER_PATH: &str = "./models/sentence-transformer-onnx/tokenizer.json";

fn test_config() -> ServiceConfig {
    ServiceConfig {
        listen_addr: "127.0.0.1:0".to_string(),
        api_token: RIGHT_API_KEY.to_string(),
        deployment_color: None,
        excluded_paths: ServiceConfig::default_excluded_paths(),
        model_path: None,
        tokenizer_path: None,
        reporting: ReporterConfig::default(),
    }
}

fn app_without_model() -> axum::Router {
    create_app(AppState::new(test_config(), None))
}

async fn app_with_model() -> axum::Router {
    let model = OnnxEmbeddingModel::new("sentence-transformer", MODEL_PATH, TOKENIZER_PATH)
        .await
        .expect("model files must be downloaded for this test");
    let comparator = Arc::new(SentenceComparator::new(Arc::new(model)));
    create_app(AppState::new(test_config(), Some(comparator)))
}

fn compare_request(body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/sentence_compare/")
        .header(API_KEY_HEADER, RIGHT_API_KEY)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_string(response: axum::response::Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn test_requires_api_token() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/sentence_compare/")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"sentence_1": "a", "sentence_2": "b"}"#))
        .unwrap();

    let response = app_without_model().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(body_string(response).await, "No API Token Provided");
}

#[tokio::test]
async fn test_missing_sentence_is_rejected_by_schema() {
    let response = app_without_model()
        .oneshot(compare_request(r#"{"sentence_1": "only one"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_non_string_sentence_is_rejected_by_schema() {
    let response = app_without_model()
        .oneshot(compare_request(r#"{"sentence_1": 7, "sentence_2": "b"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
#[ignore] // Only run if model files are downloaded
async fn test_identical_sentences_score_one() {
    let app = app_with_model().await;

    let response = app
        .oneshot(compare_request(
            r#"{"sentence_1": "The weather is lovely today.", "sentence_2": "The weather is lovely today."}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body: SentenceComparatorResponse =
        serde_json::from_str(&body_string(response).await).unwrap();
    let score: f32 = body.sentence_similarity_score.parse().unwrap();
    assert!((score - 1.0).abs() < 1e-4, "score: {}", score);
}

#[tokio::test]
#[ignore] // Only run if model files are downloaded
async fn test_different_sentences_score_in_range() {
    let app = app_with_model().await;

    let response = app
        .oneshot(compare_request(
            r#"{"sentence_1": "A man is playing a guitar.", "sentence_2": "Stock markets fell sharply on Monday."}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body: SentenceComparatorResponse =
        serde_json::from_str(&body_string(response).await).unwrap();
    let score: f32 = body.sentence_similarity_score.parse().unwrap();
    assert!((-1.0..=1.0).contains(&score), "score: {}", score);
    assert!(score < 0.9, "unrelated sentences scored {}", score);
}

#[tokio::test]
#[ignore] // Only run if model files are downloaded
async fn test_empty_sentences_are_passed_through() {
    let app = app_with_model().await;

    let response = app
        .oneshot(compare_request(r#"{"sentence_1": "", "sentence_2": ""}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

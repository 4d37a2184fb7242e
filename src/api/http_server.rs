// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! HTTP server assembly: shared state, router construction and the serve
//! loop. `create_app` is split from `start_server` so tests can drive the
//! full router (middleware included) through `tower::ServiceExt::oneshot`.

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tokio::signal;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::api::handlers::{
    api_token_check_handler, deployment_color_handler, dummy_get_handler, health_handler,
};
use crate::api::middleware::{api_token_auth, track_timing};
use crate::api::{dummy_post_handler, sentence_compare_handler};
use crate::config::ServiceConfig;
use crate::embeddings::SentenceComparator;
use crate::monitoring::ErrorReporter;

/// Shared per-request state.
///
/// Everything in here is write-once-at-startup, read-many: the config and
/// the comparator are immutable after construction, so clones are cheap and
/// no synchronization is needed across requests.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Arc<ServiceConfig>,
    /// Absent when the model files were not configured or failed to load;
    /// the sentence-compare handler answers 503 in that case.
    pub comparator: Option<Arc<SentenceComparator>>,
    pub reporter: Arc<ErrorReporter>,
}

impl AppState {
    pub fn new(config: ServiceConfig, comparator: Option<Arc<SentenceComparator>>) -> Self {
        Self {
            reporter: Arc::new(ErrorReporter::from_config(&config.reporting)),
            config: Arc::new(config),
            comparator,
        }
    }
}

/// Builds the application router.
///
/// Every route is registered with and without a trailing slash; the original
/// surface is slash-terminated but callers use both. Layer order matters:
/// the token gate sits outermost so rejected requests are answered before
/// the timing observer or any handler runs, and the observer wraps the rest
/// of the chain.
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/health/", get(health_handler))
        .route("/deployment_color", get(deployment_color_handler))
        .route("/deployment_color/", get(deployment_color_handler))
        .route("/api_token_check", get(api_token_check_handler))
        .route("/api_token_check/", get(api_token_check_handler))
        .route("/dummy", get(dummy_get_handler).post(dummy_post_handler))
        .route("/dummy/", get(dummy_get_handler).post(dummy_post_handler))
        .route("/sentence_compare", post(sentence_compare_handler))
        .route("/sentence_compare/", post(sentence_compare_handler))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(track_timing))
        .layer(middleware::from_fn_with_state(state.clone(), api_token_auth))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

/// Binds the configured address and serves until ctrl-c.
pub async fn start_server(state: AppState) -> anyhow::Result<()> {
    let listen_addr = state.config.listen_addr.clone();
    let app = create_app(state);

    let listener = tokio::net::TcpListener::bind(&listen_addr).await?;

    info!("API is up and now listening on {}", listen_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let _ = signal::ctrl_c().await;
    info!("Shutdown signal received");
}

// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::{Context, Result};
use sentence_compare_api::{
    api::{start_server, AppState},
    config::ServiceConfig,
    embeddings::{OnnxEmbeddingModel, SentenceComparator},
    monitoring::ErrorReporter,
    version,
};
use std::{env, sync::Arc};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    // Initialize tracing subscriber for logging
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    tracing_subscriber::fmt::init();

    info!("Starting {}", version::get_version_string());

    let config = ServiceConfig::from_env().context("Failed to read service configuration")?;
    let reporter = ErrorReporter::from_config(&config.reporting);

    // Best effort: the server still starts without the model so health
    // checks and the dummy endpoints keep working; /sentence_compare/
    // answers 503 until the model files are provisioned.
    let comparator = load_comparator(&config, &reporter).await;

    let state = AppState::new(config, comparator);

    start_server(state).await
}

async fn load_comparator(
    config: &ServiceConfig,
    reporter: &ErrorReporter,
) -> Option<Arc<SentenceComparator>> {
    let (model_path, tokenizer_path) =
        match (&config.model_path, &config.tokenizer_path) {
            (Some(model), Some(tokenizer)) => (model.clone(), tokenizer.clone()),
            _ => {
                warn!("MODEL_PATH/TOKENIZER_PATH not set; starting without sentence comparator");
                return None;
            }
        };

    info!("Loading sentence embedding model from {}", model_path);

    match OnnxEmbeddingModel::new("sentence-transformer", model_path, tokenizer_path).await {
        Ok(model) => {
            info!("Sentence comparator ready");
            Some(Arc::new(SentenceComparator::new(Arc::new(model))))
        }
        Err(err) => {
            reporter.capture_error(&err);
            warn!("Failed to load embedding model; starting without sentence comparator");
            None
        }
    }
}

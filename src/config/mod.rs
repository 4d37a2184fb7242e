// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Service configuration, read once from the environment at startup.
//!
//! Everything here is write-once-at-startup, read-many: the config is built
//! in `main`, wrapped in an `Arc` and shared read-only across requests.

use anyhow::{Context, Result};
use std::collections::HashSet;
use std::env;

/// Configuration for the external error reporter (DSN + environment tag).
#[derive(Debug, Clone, Default)]
pub struct ReporterConfig {
    /// Endpoint the reporter ships events to. `None` disables shipping;
    /// events are still logged locally.
    pub dsn: Option<String>,

    /// Deployment environment tag attached to every reported event.
    pub environment: String,
}

/// Process-wide service configuration.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Address the HTTP server binds to.
    pub listen_addr: String,

    /// The shared secret clients must supply in the `x-api-key` header.
    /// Compared by exact, case-sensitive match. No rotation.
    pub api_token: String,

    /// Deployment color label for blue/green monitoring, if this is a
    /// colored deployment.
    pub deployment_color: Option<String>,

    /// Route paths (with leading/trailing `/` stripped) exempt from the
    /// API token check.
    pub excluded_paths: HashSet<String>,

    /// Path to the ONNX sentence-transformer model file.
    pub model_path: Option<String>,

    /// Path to the tokenizer JSON file belonging to the model.
    pub tokenizer_path: Option<String>,

    /// Error reporter wiring.
    pub reporting: ReporterConfig,
}

/// Paths exempt from the API token check by default.
pub const DEFAULT_EXCLUDED_PATHS: &[&str] = &["health", "deployment_color"];

impl ServiceConfig {
    /// Builds the configuration from environment variables.
    ///
    /// Consumed variables:
    /// - `API_TOKEN` (required): the shared secret
    /// - `API_PORT` (default `8080`): listen port, bound on `0.0.0.0`
    /// - `DEPLOYMENT_COLOR`: color label, absent for uncolored deployments
    /// - `MODEL_PATH` / `TOKENIZER_PATH`: embedding model files on disk
    /// - `SENTRY_DSN` / `SENTRY_ENVIRONMENT`: error reporter wiring
    ///
    /// Fails only when `API_TOKEN` is unset; everything else has a default
    /// or is optional.
    pub fn from_env() -> Result<Self> {
        let api_token = env::var("API_TOKEN")
            .context("API_TOKEN environment variable must be set")?;

        let api_port = env::var("API_PORT").unwrap_or_else(|_| "8080".to_string());

        Ok(Self {
            listen_addr: format!("0.0.0.0:{}", api_port),
            api_token,
            deployment_color: env::var("DEPLOYMENT_COLOR").ok(),
            excluded_paths: Self::default_excluded_paths(),
            model_path: env::var("MODEL_PATH").ok(),
            tokenizer_path: env::var("TOKENIZER_PATH").ok(),
            reporting: ReporterConfig {
                dsn: env::var("SENTRY_DSN").ok(),
                environment: env::var("SENTRY_ENVIRONMENT")
                    .unwrap_or_else(|_| "development".to_string()),
            },
        })
    }

    /// The default set of paths exempt from the API token check.
    pub fn default_excluded_paths() -> HashSet<String> {
        DEFAULT_EXCLUDED_PATHS
            .iter()
            .map(|p| p.to_string())
            .collect()
    }

    /// Checks whether a request path is exempt from the API token check.
    /// Leading and trailing `/` characters are stripped before comparison,
    /// so `/health/`, `health/` and `health` all match `health`.
    pub fn is_excluded_path(&self, path: &str) -> bool {
        self.excluded_paths.contains(path.trim_matches('/'))
    }
}

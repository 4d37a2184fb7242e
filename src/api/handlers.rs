// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Fixed-response GET handlers: health, deployment color, token check and
//! the dummy reachability probe.

use crate::api::http_server::AppState;
use axum::extract::State;
use tracing::{debug, info};

/// GET /health/ — liveness probe for monitoring and alerting services.
/// Exempt from the API token check.
pub async fn health_handler() -> &'static str {
    debug!("Processed health-check request.");

    "API health ok."
}

/// GET /deployment_color/ — reports which color of a blue/green pair this
/// process is, or a fixed string for uncolored deployments. Exempt from the
/// API token check.
pub async fn deployment_color_handler(State(state): State<AppState>) -> String {
    let message = match &state.config.deployment_color {
        Some(color) => color.clone(),
        None => {
            debug!("Not a colored deployment.");
            "Not a colored deployment.".to_string()
        }
    };

    debug!("Processed deployment color request.");

    message
}

/// GET /api_token_check/ — guarded no-op so callers can verify their token
/// without side effects. Reaching the handler means the gate passed.
pub async fn api_token_check_handler() -> &'static str {
    info!("Processed API token check request.");

    "API Token is correct."
}

/// GET /dummy/ — guarded reachability probe.
pub async fn dummy_get_handler() -> &'static str {
    info!("Processed GET request.");

    "API Is Accessible."
}

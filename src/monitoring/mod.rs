// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Error reporting boundary.
//!
//! Unhandled failures are captured here before the caller gets a generic
//! 500. The reporter carries the DSN and environment tag from the service
//! configuration; event transport is the collaborator's concern, so a
//! reporter without a DSN simply records events in the local log.

use crate::config::ReporterConfig;
use chrono::Utc;
use tracing::error;

/// Receives unhandled errors and operational events.
#[derive(Debug, Clone)]
pub struct ErrorReporter {
    dsn: Option<String>,
    environment: String,
}

impl ErrorReporter {
    pub fn from_config(config: &ReporterConfig) -> Self {
        Self {
            dsn: config.dsn.clone(),
            environment: config.environment.clone(),
        }
    }

    /// Whether events are shipped to an external endpoint or only logged.
    pub fn is_enabled(&self) -> bool {
        self.dsn.is_some()
    }

    /// Records an unhandled error with the configured environment tag.
    pub fn capture_error(&self, err: &anyhow::Error) {
        error!(
            environment = %self.environment,
            reported = self.is_enabled(),
            timestamp = %Utc::now().to_rfc3339(),
            "Unhandled error: {:#}",
            err
        );
    }
}

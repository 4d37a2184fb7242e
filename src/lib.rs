// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod api;
pub mod config;
pub mod embeddings;
pub mod monitoring;
pub mod version;

pub use api::{ApiError, AppState, ErrorResponse};
pub use config::{ReporterConfig, ServiceConfig};
pub use embeddings::{OnnxEmbeddingModel, SentenceComparator};
pub use monitoring::ErrorReporter;

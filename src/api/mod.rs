// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod dummy;
pub mod errors;
pub mod handlers;
pub mod http_server;
pub mod middleware;
pub mod sentence_compare;

pub use dummy::{dummy_post_handler, DummyRequest, DummyResponse};
pub use errors::{ApiError, ErrorResponse};
pub use http_server::{create_app, start_server, AppState};
pub use sentence_compare::{
    sentence_compare_handler, SentenceComparatorRequest, SentenceComparatorResponse,
};

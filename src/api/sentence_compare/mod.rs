// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! POST /sentence_compare/ endpoint: cosine similarity between the
//! embeddings of two input sentences.

pub mod handler;
pub mod request;
pub mod response;

pub use handler::sentence_compare_handler;
pub use request::SentenceComparatorRequest;
pub use response::SentenceComparatorResponse;

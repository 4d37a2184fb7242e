// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use serde::{Deserialize, Serialize};

/// Response body for a successful POST /sentence_compare/ request.
///
/// The score is a cosine similarity in [-1, 1], serialized as a decimal
/// string with full floating-point precision.
///
/// # Example
/// ```json
/// {
///   "sentence_similarity_score": "0.87325436"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SentenceComparatorResponse {
    pub sentence_similarity_score: String,
}

impl SentenceComparatorResponse {
    pub fn from_score(score: f32) -> Self {
        Self {
            sentence_similarity_score: score.to_string(),
        }
    }
}

// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use serde::{Deserialize, Serialize};

/// Request body for POST /sentence_compare/.
///
/// No length or emptiness constraints: empty strings are legal and pass
/// through to the model unmodified.
///
/// # Example
/// ```json
/// {
///   "sentence_1": "The cat sat on the mat",
///   "sentence_2": "A cat was sitting on a mat"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentenceComparatorRequest {
    pub sentence_1: String,
    pub sentence_2: String,
}

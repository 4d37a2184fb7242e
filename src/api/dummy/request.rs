// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use serde::{Deserialize, Serialize};

/// Request body for POST /dummy/.
///
/// Shape errors (missing field, non-integer value, malformed JSON) are
/// answered by the JSON extractor before the handler runs; the range check
/// on the value happens inside the handler.
///
/// # Example
/// ```json
/// {
///   "num_responses": 4
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DummyRequest {
    /// Number of response values to generate. Must be strictly between
    /// 0 and 100 to get a 200 response.
    pub num_responses: i64,
}

impl DummyRequest {
    /// Whether `num_responses` is inside the accepted open interval (0, 100).
    pub fn is_in_range(&self) -> bool {
        0 < self.num_responses && self.num_responses < 100
    }
}

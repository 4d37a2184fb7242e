// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use serde::{Deserialize, Serialize};

/// Response body for a valid POST /dummy/ request.
///
/// # Example
/// ```json
/// {
///   "response_values": [1, 2, 3, 4],
///   "message": "Retrieved 4 responses."
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DummyResponse {
    /// Ascending integers from 1 through the requested count.
    pub response_values: Vec<i64>,

    /// Human-readable confirmation naming the count.
    pub message: String,
}

impl DummyResponse {
    /// Builds the response for a validated count.
    pub fn for_count(num_responses: i64) -> Self {
        Self {
            response_values: (1..=num_responses).collect(),
            message: format!("Retrieved {} responses.", num_responses),
        }
    }
}

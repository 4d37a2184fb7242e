// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Sentence similarity evaluator.

use crate::embeddings::OnnxEmbeddingModel;
use anyhow::Result;
use std::sync::Arc;

/// Computes cosine similarity between the embeddings of two texts.
///
/// Deterministic for a fixed model and fixed inputs. Embeddings are
/// recomputed on every call.
#[derive(Debug, Clone)]
pub struct SentenceComparator {
    model: Arc<OnnxEmbeddingModel>,
}

impl SentenceComparator {
    pub fn new(model: Arc<OnnxEmbeddingModel>) -> Self {
        Self { model }
    }

    /// Embeds both sentences and returns their cosine similarity in [-1, 1].
    ///
    /// Empty strings are passed through to the model unmodified; the
    /// tokenizer still produces special tokens for them.
    pub async fn similarity(&self, sentence_1: &str, sentence_2: &str) -> Result<f32> {
        let embedding_1 = self.model.embed(sentence_1).await?;
        let embedding_2 = self.model.embed(sentence_2).await?;

        Ok(cosine_similarity(&embedding_1, &embedding_2))
    }

    /// Returns the name of the underlying model.
    pub fn model_name(&self) -> &str {
        self.model.model_name()
    }
}

/// Cosine similarity between two vectors, clamped to [-1, 1].
///
/// Zero-magnitude input yields 0 rather than NaN.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    (dot / (norm_a * norm_b)).clamp(-1.0, 1.0)
}

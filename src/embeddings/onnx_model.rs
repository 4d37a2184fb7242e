// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! ONNX embedding model wrapper.
//!
//! Loads a sentence-transformer exported to ONNX (e.g. a BERT STS model)
//! together with its HuggingFace tokenizer and produces sentence embeddings
//! via attention-mask weighted mean pooling over the token embeddings.

use anyhow::{Context, Result};
use ndarray::{Array2, Axis};
use ort::execution_providers::CPU as CPUExecutionProvider;
use ort::session::builder::GraphOptimizationLevel;
use ort::session::Session;
use ort::value::Value;
use std::path::Path;
use std::sync::{Arc, Mutex};
use tokenizers::Tokenizer;
use tracing::info;

/// ONNX-based sentence embedding model.
///
/// The model is loaded once at startup and shared read-only afterwards. The
/// ort `Session` takes `&mut self` to run, so it sits behind a `Mutex`; that
/// is the only lock in the service.
#[derive(Clone)]
pub struct OnnxEmbeddingModel {
    session: Arc<Mutex<Session>>,
    tokenizer: Arc<Tokenizer>,
    model_name: String,
    /// Embedding dimension, taken from a probe inference at load time.
    dimension: usize,
}

impl std::fmt::Debug for OnnxEmbeddingModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OnnxEmbeddingModel")
            .field("model_name", &self.model_name)
            .field("dimension", &self.dimension)
            .finish_non_exhaustive()
    }
}

impl OnnxEmbeddingModel {
    /// Loads the model and tokenizer from disk and validates the model's
    /// output shape with a probe inference.
    ///
    /// # Errors
    /// Returns an error if either file is missing or invalid, if the ONNX
    /// session cannot be built, or if the model does not produce token-level
    /// embeddings of shape `[batch, seq_len, hidden_dim]`.
    pub async fn new<P: AsRef<Path>>(
        model_name: impl Into<String>,
        model_path: P,
        tokenizer_path: P,
    ) -> Result<Self> {
        let model_name = model_name.into();
        let model_path = model_path.as_ref();
        let tokenizer_path = tokenizer_path.as_ref();

        if !model_path.exists() {
            anyhow::bail!("ONNX model file not found: {}", model_path.display());
        }
        if !tokenizer_path.exists() {
            anyhow::bail!("Tokenizer file not found: {}", tokenizer_path.display());
        }

        let mut session = Session::builder()
            .context("Failed to create session builder")?
            .with_execution_providers([CPUExecutionProvider::default().build()])
            .map_err(ort::Error::<()>::from)
            .context("Failed to set CPU execution provider")?
            .with_optimization_level(GraphOptimizationLevel::Level3)
            .map_err(ort::Error::<()>::from)
            .context("Failed to set optimization level")?
            .with_intra_threads(4)
            .map_err(ort::Error::<()>::from)
            .context("Failed to set intra threads")?
            .commit_from_file(model_path)
            .context(format!(
                "Failed to load ONNX model from {}",
                model_path.display()
            ))?;

        let tokenizer = Tokenizer::from_file(tokenizer_path)
            .map_err(|e| anyhow::anyhow!("Failed to load tokenizer: {}", e))?;

        // Probe inference: validates the input/output contract and pins the
        // embedding dimension. Block scope so outputs drop before the
        // session moves into the struct.
        let dimension = {
            let encoding = tokenizer
                .encode("validation probe", true)
                .map_err(|e| anyhow::anyhow!("Tokenizer validation failed: {}", e))?;

            let (input_ids, attention_mask, token_type_ids) = encode_to_tensors(&encoding)?;

            let outputs = session.run(ort::inputs![
                "input_ids" => Value::from_array(input_ids)?,
                "attention_mask" => Value::from_array(attention_mask)?,
                "token_type_ids" => Value::from_array(token_type_ids)?
            ])?;

            let output_tensor = outputs[0]
                .try_extract_array::<f32>()
                .context("Failed to extract output tensor")?;
            let shape = output_tensor.shape();

            // Token-level embeddings: [batch, seq_len, hidden_dim]
            if shape.len() != 3 {
                anyhow::bail!(
                    "Model outputs unexpected dimensions: {:?} (expected [batch, seq_len, hidden_dim])",
                    shape
                );
            }
            shape[2]
        };

        info!(
            "Loaded ONNX embedding model '{}' ({} dimensions)",
            model_name, dimension
        );

        Ok(Self {
            session: Arc::new(Mutex::new(session)),
            tokenizer: Arc::new(tokenizer),
            model_name,
            dimension,
        })
    }

    /// Generates the sentence embedding for a single text.
    ///
    /// Tokenizes the input, runs the ONNX session, then applies
    /// attention-mask weighted mean pooling over the token embeddings.
    /// Embeddings are recomputed on every call; there is no query cache.
    pub async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        let encoding = self
            .tokenizer
            .encode(text, true)
            .map_err(|e| anyhow::anyhow!("Tokenization failed: {}", e))?;

        let mask: Vec<i64> = encoding
            .get_attention_mask()
            .iter()
            .map(|&m| m as i64)
            .collect();

        let (input_ids, attention_mask, token_type_ids) = encode_to_tensors(&encoding)?;

        // The guard stays alive until the outputs have been pooled; the
        // output tensors borrow the session.
        let mut session = self
            .session
            .lock()
            .map_err(|_| anyhow::anyhow!("Embedding session lock poisoned"))?;
        let outputs = session.run(ort::inputs![
            "input_ids" => Value::from_array(input_ids)?,
            "attention_mask" => Value::from_array(attention_mask)?,
            "token_type_ids" => Value::from_array(token_type_ids)?
        ])?;

        let output_array = outputs[0]
            .try_extract_array::<f32>()
            .context("Failed to extract output tensor")?;

        // [batch, seq_len, hidden_dim] -> take batch 0, mean-pool over
        // seq_len weighted by the attention mask so padding is ignored.
        let token_embeddings = output_array.index_axis(Axis(0), 0);
        let seq_len = token_embeddings.shape()[0];
        let hidden_dim = token_embeddings.shape()[1];

        let mut pooled = vec![0.0f32; hidden_dim];
        let mut sum_mask = 0.0f32;

        for i in 0..seq_len {
            let mask_value = mask[i] as f32;
            sum_mask += mask_value;
            for j in 0..hidden_dim {
                pooled[j] += token_embeddings[[i, j]] * mask_value;
            }
        }

        for val in &mut pooled {
            *val /= sum_mask.max(1e-9);
        }

        if pooled.len() != self.dimension {
            anyhow::bail!(
                "Unexpected embedding dimension: {} (expected {})",
                pooled.len(),
                self.dimension
            );
        }

        Ok(pooled)
    }

    /// Returns the embedding dimension of this model.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Returns the model name.
    pub fn model_name(&self) -> &str {
        &self.model_name
    }
}

/// Builds the three BERT input tensors for a single encoded text.
fn encode_to_tensors(
    encoding: &tokenizers::Encoding,
) -> Result<(Array2<i64>, Array2<i64>, Array2<i64>)> {
    let input_ids: Vec<i64> = encoding.get_ids().iter().map(|&id| id as i64).collect();
    let attention_mask: Vec<i64> = encoding
        .get_attention_mask()
        .iter()
        .map(|&m| m as i64)
        .collect();
    // All zeros: single-segment input
    let token_type_ids = vec![0i64; input_ids.len()];

    let len = input_ids.len();
    Ok((
        Array2::from_shape_vec((1, len), input_ids).context("Failed to create input_ids array")?,
        Array2::from_shape_vec((1, len), attention_mask)
            .context("Failed to create attention_mask array")?,
        Array2::from_shape_vec((1, len), token_type_ids)
            .context("Failed to create token_type_ids array")?,
    ))
}

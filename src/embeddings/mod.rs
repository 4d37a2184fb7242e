// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Sentence embedding and similarity scoring.
//!
//! `OnnxEmbeddingModel` wraps an ONNX Runtime session around a pretrained
//! sentence transformer; `SentenceComparator` turns two texts into a cosine
//! similarity score in [-1, 1].

pub mod comparator;
pub mod onnx_model;

pub use comparator::{cosine_similarity, SentenceComparator};
pub use onnx_model::OnnxEmbeddingModel;

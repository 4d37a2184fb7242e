// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! POST /dummy/ endpoint: a compute stand-in used to exercise the request
//! pipeline end to end without touching the model.

pub mod handler;
pub mod request;
pub mod response;

pub use handler::dummy_post_handler;
pub use request::DummyRequest;
pub use response::DummyResponse;

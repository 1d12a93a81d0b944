// ABOUTME: HTTP middleware for request tracing, request ids, and CORS
// ABOUTME: Layers applied once around the merged router
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Corpsite Contributors

/// CORS configuration
pub mod cors;
/// Request id assignment and HTTP tracing spans
pub mod request_id;

pub use cors::setup_cors;
pub use request_id::{
    propagate_request_id_layer, request_id_header, set_request_id_layer, stamp_error_request_id,
    trace_layer, RequestSpan,
};

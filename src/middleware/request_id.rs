// ABOUTME: Request ID and HTTP tracing layers for correlation and structured logging
// ABOUTME: Assigns x-request-id, echoes it back, stamps it into error bodies, and opens one span per request
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Corpsite Contributors

use crate::constants::REQUEST_ID_HEADER;
use axum::body::Body;
use axum::middleware::Next;
use axum::response::Response;
use corpsite_core::errors::ErrorResponse;
use http::{header, HeaderName, Request};
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::request_id::{
    MakeRequestUuid, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use tower_http::trace::{DefaultOnResponse, MakeSpan, TraceLayer};
use tracing::{warn, Level, Span};

/// Header carrying the request id
#[must_use]
pub fn request_id_header() -> HeaderName {
    HeaderName::from_static(REQUEST_ID_HEADER)
}

/// Generate a UUID request id unless the caller supplied one
#[must_use]
pub fn set_request_id_layer() -> SetRequestIdLayer<MakeRequestUuid> {
    SetRequestIdLayer::new(request_id_header(), MakeRequestUuid)
}

/// Copy the request id onto the response
#[must_use]
pub fn propagate_request_id_layer() -> PropagateRequestIdLayer {
    PropagateRequestIdLayer::new(request_id_header())
}

fn request_id_of<B>(request: &Request<B>) -> Option<&str> {
    request
        .extensions()
        .get::<RequestId>()
        .and_then(|id| id.header_value().to_str().ok())
}

/// Copy the request id into `error.request_id` of JSON error bodies
///
/// Runs inside [`set_request_id_layer`]. Only responses built from an
/// `AppError` are rewritten; everything else passes through untouched.
pub async fn stamp_error_request_id(request: Request<Body>, next: Next) -> Response {
    let request_id = request_id_of(&request).map(str::to_owned);
    let mut response = next.run(request).await;

    let Some(request_id) = request_id else {
        return response;
    };
    let Some(mut body) = response.extensions_mut().remove::<ErrorResponse>() else {
        return response;
    };

    body.error.request_id = Some(request_id);
    match serde_json::to_vec(&body) {
        Ok(bytes) => {
            let (mut parts, _) = response.into_parts();
            parts.headers.remove(header::CONTENT_LENGTH);
            Response::from_parts(parts, Body::from(bytes))
        }
        Err(e) => {
            warn!(error = %e, "failed to stamp request id into error body");
            response
        }
    }
}

/// Span factory recording method, path, and request id
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestSpan;

impl<B> MakeSpan<B> for RequestSpan {
    fn make_span(&mut self, request: &Request<B>) -> Span {
        let request_id = request_id_of(request).unwrap_or("-");

        tracing::info_span!(
            "http_request",
            method = %request.method(),
            path = %request.uri().path(),
            request_id = %request_id,
        )
    }
}

/// HTTP trace layer logging one line per response
#[must_use]
pub fn trace_layer(
) -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>, RequestSpan, (), DefaultOnResponse> {
    TraceLayer::new_for_http()
        .make_span_with(RequestSpan)
        .on_request(())
        .on_response(DefaultOnResponse::new().level(Level::INFO))
}

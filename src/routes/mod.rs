// ABOUTME: Route module organization for the corporate site HTTP endpoints
// ABOUTME: One route group per content entity plus public page aggregation and health checks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Corpsite Contributors

//! Route module for the corporate site server
//!
//! Each domain module exposes a `XxxRoutes::routes(resources)` constructor
//! holding only route definitions and thin handlers that delegate to the
//! database layer and content resolver.

/// Banner admin routes
pub mod banners;
/// Client admin routes
pub mod clients;
/// Health check and readiness routes
pub mod health;
/// Legal document admin routes
pub mod legal_documents;
/// Public page aggregation routes
pub mod pages;
/// Project admin routes
pub mod projects;
/// Site settings routes
pub mod settings;
/// Subsidiary admin routes
pub mod subsidiaries;
/// Upload and image serving routes
pub mod uploads;

pub use banners::BannerRoutes;
pub use clients::ClientRoutes;
pub use health::HealthRoutes;
pub use legal_documents::LegalDocumentRoutes;
pub use pages::PageRoutes;
pub use projects::ProjectRoutes;
pub use settings::SettingsRoutes;
pub use subsidiaries::SubsidiaryRoutes;
pub use uploads::UploadRoutes;

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use corpsite_core::errors::{AppError, AppResult};
use serde::Serialize;

/// Unwrap a JSON body, turning extractor rejections into 400 responses
///
/// # Errors
///
/// Returns an `INVALID_INPUT` error describing why the body was rejected
pub fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> AppResult<T> {
    payload
        .map(|Json(body)| body)
        .map_err(|rejection| AppError::invalid_input(rejection.body_text()))
}

/// Body returned by every delete endpoint
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    /// Always true; deletes are unconditional
    pub success: bool,
    /// Whether a row existed
    pub deleted: bool,
}

/// 200 response for an unconditional delete
#[must_use]
pub fn deleted_response(deleted: bool) -> Response {
    (
        StatusCode::OK,
        Json(DeleteResponse {
            success: true,
            deleted,
        }),
    )
        .into_response()
}

/// 201 response carrying the created record
#[must_use]
pub fn created_response<T: Serialize>(record: T) -> Response {
    (StatusCode::CREATED, Json(record)).into_response()
}

/// Normalize an optional filter parameter: blank means absent
#[must_use]
pub fn filter_param(value: Option<&String>) -> Option<&str> {
    value.map(|v| v.trim()).filter(|v| !v.is_empty())
}

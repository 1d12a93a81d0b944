// ABOUTME: Tests for the HTTP error envelope and status mapping
// ABOUTME: Verifies client errors keep their messages and server errors are redacted when asked
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Corpsite Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use axum::response::IntoResponse;
use corpsite_server::errors::{AppError, ErrorCode, ErrorResponse};

#[test]
fn test_status_codes() {
    assert_eq!(AppError::not_found("Banner x").http_status(), 404);
    assert_eq!(AppError::missing_field("title").http_status(), 400);
    assert_eq!(AppError::invalid_format("bad").http_status(), 400);
    assert_eq!(AppError::out_of_range("big").http_status(), 400);
    assert_eq!(AppError::unavailable("down").http_status(), 503);
    assert_eq!(AppError::database("boom").http_status(), 500);
    assert_eq!(AppError::internal("boom").http_status(), 500);
}

#[test]
fn test_client_errors_keep_message_when_redacting() {
    let body = ErrorResponse::from_error(AppError::missing_field("title"), false);

    assert_eq!(body.error.code, ErrorCode::MissingRequiredField);
    assert!(body.error.message.contains("title"));
    assert_eq!(body.error.details["field"], "title");
}

#[test]
fn test_server_errors_redacted_when_not_exposed() {
    let error = AppError::database("no such table: banners")
        .with_details(serde_json::json!({ "sql": "SELECT" }));

    let body = ErrorResponse::from_error(error, false);

    assert_eq!(body.error.code, ErrorCode::DatabaseError);
    assert!(!body.error.message.contains("banners"));
    assert!(body.error.details.is_null());
}

#[test]
fn test_server_errors_detailed_when_exposed() {
    let body = ErrorResponse::from_error(AppError::database("no such table: banners"), true);

    assert!(body.error.message.contains("banners"));
}

#[test]
fn test_into_response_status() {
    let response = AppError::not_found("Client 42").into_response();
    assert_eq!(response.status().as_u16(), 404);

    let response = AppError::invalid_input("bad body").into_response();
    assert_eq!(response.status().as_u16(), 400);
}

#[test]
fn test_sqlx_errors_map_to_database_code() {
    let error: AppError = sqlx::Error::PoolTimedOut.into();

    assert_eq!(error.code, ErrorCode::DatabaseError);
    assert!(error.message.contains("Timed out"));
}

// ABOUTME: HTTP integration tests for health check routes
// ABOUTME: Liveness always answers; readiness reflects database reachability
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Corpsite Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod helpers;

use corpsite_server::routes::HealthRoutes;
use helpers::axum_test::AxumTestRequest;
use helpers::test_utils::create_test_resources;
use std::sync::Arc;

#[tokio::test]
async fn test_health_endpoint_success() {
    let resources = create_test_resources().await;

    let response = AxumTestRequest::get("/health")
        .send(HealthRoutes::routes(resources))
        .await;

    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "healthy");
    let timestamp = body["timestamp"].as_str().unwrap();
    assert!(chrono::DateTime::parse_from_rfc3339(timestamp).is_ok());
}

#[tokio::test]
async fn test_ready_endpoint_with_database() {
    let resources = create_test_resources().await;

    let response = AxumTestRequest::get("/ready")
        .send(HealthRoutes::routes(resources))
        .await;

    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "ready");
    assert_eq!(body["database"], "ok");
}

#[tokio::test]
async fn test_ready_endpoint_when_database_closed() {
    let resources = create_test_resources().await;
    resources.database.close().await;

    let response = AxumTestRequest::get("/ready")
        .send(HealthRoutes::routes(Arc::clone(&resources)))
        .await;
    assert_eq!(response.status(), 503);

    let response = AxumTestRequest::get("/health")
        .send(HealthRoutes::routes(resources))
        .await;
    assert_eq!(response.status(), 200);
}

// ABOUTME: HTTP integration tests for subsidiary and legal document administration routes
// ABOUTME: Covers path derivation and uniqueness, lookup by path, and document filters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Corpsite Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod helpers;

use axum::Router;
use helpers::axum_test::AxumTestRequest;
use helpers::test_utils::create_test_app;
use serde_json::{json, Value};

async fn create(app: &Router, uri: &str, body: Value) -> Value {
    let response = AxumTestRequest::post(uri).json(&body).send(app.clone()).await;
    assert_eq!(response.status(), 201);
    response.json()
}

// ============================================================================
// Subsidiaries
// ============================================================================

#[tokio::test]
async fn test_create_subsidiary_derives_path_from_name() {
    let (app, _) = create_test_app().await;

    let subsidiary = create(
        &app,
        "/api/subsidiaries",
        json!({ "name": "Group Energy & Power" }),
    )
    .await;

    assert_eq!(subsidiary["path"], "group-energy-power");
    assert_eq!(subsidiary["display_order"], 0);
}

#[tokio::test]
async fn test_create_subsidiary_rejects_bad_path() {
    let (app, _) = create_test_app().await;

    let response = AxumTestRequest::post("/api/subsidiaries")
        .json(&json!({ "name": "Energy", "path": "Not A Slug" }))
        .send(app)
        .await;

    assert_eq!(response.status(), 400);
}

#[tokio::test]
async fn test_duplicate_path_is_rejected() {
    let (app, _) = create_test_app().await;
    create(&app, "/api/subsidiaries", json!({ "name": "Energy", "path": "energy" })).await;

    let response = AxumTestRequest::post("/api/subsidiaries")
        .json(&json!({ "name": "Energy Two", "path": "energy" }))
        .send(app.clone())
        .await;
    assert_eq!(response.status(), 400);

    let other = create(&app, "/api/subsidiaries", json!({ "name": "Logistics" })).await;
    let id = other["id"].as_str().unwrap();
    let response = AxumTestRequest::put(&format!("/api/subsidiaries/{id}"))
        .json(&json!({ "path": "energy" }))
        .send(app)
        .await;
    assert_eq!(response.status(), 400);
}

#[tokio::test]
async fn test_update_subsidiary_may_keep_its_own_path() {
    let (app, _) = create_test_app().await;
    let subsidiary = create(
        &app,
        "/api/subsidiaries",
        json!({ "name": "Energy", "path": "energy", "description": "Power" }),
    )
    .await;
    let id = subsidiary["id"].as_str().unwrap();

    let response = AxumTestRequest::put(&format!("/api/subsidiaries/{id}"))
        .json(&json!({ "path": "energy", "display_order": 3 }))
        .send(app)
        .await;

    assert_eq!(response.status(), 200);
    let updated: Value = response.json();
    assert_eq!(updated["display_order"], 3);
    assert_eq!(updated["description"], "Power");
}

#[tokio::test]
async fn test_lookup_by_path_and_listing_order() {
    let (app, _) = create_test_app().await;
    create(
        &app,
        "/api/subsidiaries",
        json!({ "name": "Trading", "display_order": 2 }),
    )
    .await;
    create(
        &app,
        "/api/subsidiaries",
        json!({ "name": "Construction", "display_order": 1 }),
    )
    .await;

    let found: Value = AxumTestRequest::get("/api/subsidiaries/by-path/trading")
        .send(app.clone())
        .await
        .json();
    assert_eq!(found["name"], "Trading");

    let response = AxumTestRequest::get("/api/subsidiaries/by-path/nowhere")
        .send(app.clone())
        .await;
    assert_eq!(response.status(), 404);

    let all: Vec<Value> = AxumTestRequest::get("/api/subsidiaries").send(app).await.json();
    let names: Vec<&str> = all.iter().map(|s| s["name"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["Construction", "Trading"]);
}

#[tokio::test]
async fn test_delete_subsidiary() {
    let (app, _) = create_test_app().await;
    let subsidiary = create(&app, "/api/subsidiaries", json!({ "name": "Energy" })).await;
    let id = subsidiary["id"].as_str().unwrap();

    let body: Value = AxumTestRequest::delete(&format!("/api/subsidiaries/{id}"))
        .send(app.clone())
        .await
        .json();
    assert_eq!(body, json!({ "success": true, "deleted": true }));

    let response = AxumTestRequest::get(&format!("/api/subsidiaries/{id}")).send(app).await;
    assert_eq!(response.status(), 404);
}

// ============================================================================
// Legal documents
// ============================================================================

#[tokio::test]
async fn test_create_legal_document_requires_url() {
    let (app, _) = create_test_app().await;

    let response = AxumTestRequest::post("/api/legal-documents")
        .json(&json!({ "title": "Business License" }))
        .send(app)
        .await;

    assert_eq!(response.status(), 400);
    let body: Value = response.json();
    assert_eq!(body["error"]["details"]["field"], "document_url");
}

#[tokio::test]
async fn test_legal_documents_filter_and_update() {
    let (app, _) = create_test_app().await;
    let license = create(
        &app,
        "/api/legal-documents",
        json!({
            "title": "Business License",
            "document_url": "/api/images/license",
            "doc_type": "license"
        }),
    )
    .await;
    create(
        &app,
        "/api/legal-documents",
        json!({
            "title": "ISO 9001",
            "document_url": "/api/images/iso",
            "doc_type": "certificate"
        }),
    )
    .await;

    let licenses: Vec<Value> = AxumTestRequest::get("/api/legal-documents?doc_type=license")
        .send(app.clone())
        .await
        .json();
    assert_eq!(licenses.len(), 1);
    assert_eq!(licenses[0]["title"], "Business License");

    let id = license["id"].as_str().unwrap();
    let updated: Value = AxumTestRequest::put(&format!("/api/legal-documents/{id}"))
        .json(&json!({ "description": "Renewed 2025" }))
        .send(app.clone())
        .await
        .json();
    assert_eq!(updated["description"], "Renewed 2025");
    assert_eq!(updated["doc_type"], "license");

    let all: Vec<Value> = AxumTestRequest::get("/api/legal-documents").send(app).await.json();
    assert_eq!(all.len(), 2);
}

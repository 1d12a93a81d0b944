// ABOUTME: HTTP integration tests for asset upload, search, delete, and image serving
// ABOUTME: Covers MIME allow-listing, the size cap, and byte-exact image responses
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Corpsite Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod helpers;

use axum::Router;
use corpsite_server::constants::uploads::{ASSET_CACHE_CONTROL, MAX_UPLOAD_BYTES};
use helpers::axum_test::AxumTestRequest;
use helpers::test_utils::create_test_app;
use serde_json::Value;

const PNG_BYTES: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0, 1, 2, 3];

async fn upload(app: &Router, filename: &str, content_type: &str, data: &[u8]) -> Value {
    let response = AxumTestRequest::post("/api/uploads")
        .multipart_file("file", filename, content_type, data)
        .send(app.clone())
        .await;
    assert_eq!(response.status(), 201);
    response.json()
}

#[tokio::test]
async fn test_upload_and_serve_image() {
    let (app, _) = create_test_app().await;

    let asset = upload(&app, "logo.png", "image/png", PNG_BYTES).await;
    assert_eq!(asset["filename"], "logo.png");
    assert_eq!(asset["mime_type"], "image/png");
    assert_eq!(asset["size_bytes"], PNG_BYTES.len());
    let url = asset["url"].as_str().unwrap();
    assert_eq!(url, format!("/api/images/{}", asset["id"].as_str().unwrap()));

    let response = AxumTestRequest::get(url).send(app).await;
    assert_eq!(response.status(), 200);
    assert_eq!(response.header("content-type").as_deref(), Some("image/png"));
    assert_eq!(
        response.header("cache-control").as_deref(),
        Some(ASSET_CACHE_CONTROL)
    );
    assert_eq!(response.bytes(), PNG_BYTES);
}

#[tokio::test]
async fn test_upload_rejects_disallowed_mime_type() {
    let (app, resources) = create_test_app().await;

    let response = AxumTestRequest::post("/api/uploads")
        .multipart_file("file", "notes.txt", "text/plain", b"hello")
        .send(app)
        .await;

    assert_eq!(response.status(), 400);
    assert!(resources
        .database
        .search_uploads(None, 10)
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn test_upload_rejects_oversized_file() {
    let (app, _) = create_test_app().await;
    let data = vec![0_u8; MAX_UPLOAD_BYTES + 1];

    let response = AxumTestRequest::post("/api/uploads")
        .multipart_file("file", "huge.jpg", "image/jpeg", &data)
        .send(app)
        .await;

    assert_eq!(response.status(), 400);
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "VALUE_OUT_OF_RANGE");
}

#[tokio::test]
async fn test_upload_accepts_file_at_size_limit() {
    let (app, _) = create_test_app().await;
    let data = vec![7_u8; MAX_UPLOAD_BYTES];

    let asset = upload(&app, "max.jpg", "image/jpeg", &data).await;

    assert_eq!(asset["size_bytes"], MAX_UPLOAD_BYTES);
}

#[tokio::test]
async fn test_upload_without_file_field() {
    let (app, _) = create_test_app().await;

    let response = AxumTestRequest::post("/api/uploads")
        .multipart_text("caption", "no file here")
        .send(app)
        .await;

    assert_eq!(response.status(), 400);
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "MISSING_REQUIRED_FIELD");
}

#[tokio::test]
async fn test_search_by_filename_substring() {
    let (app, _) = create_test_app().await;
    upload(&app, "Company-Logo.png", "image/png", PNG_BYTES).await;
    upload(&app, "banner-home.jpg", "image/jpeg", b"jpeg").await;

    let found: Vec<Value> = AxumTestRequest::get("/api/uploads?q=logo")
        .send(app.clone())
        .await
        .json();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0]["filename"], "Company-Logo.png");

    let limited: Vec<Value> = AxumTestRequest::get("/api/uploads?limit=1")
        .send(app.clone())
        .await
        .json();
    assert_eq!(limited.len(), 1);

    let all: Vec<Value> = AxumTestRequest::get("/api/uploads").send(app).await.json();
    assert_eq!(all.len(), 2);
    assert!(all.iter().all(|asset| asset.get("data").is_none()));
}

#[tokio::test]
async fn test_delete_upload_removes_image() {
    let (app, _) = create_test_app().await;
    let asset = upload(&app, "gone.gif", "image/gif", b"GIF89a").await;
    let id = asset["id"].as_str().unwrap();

    let body: Value = AxumTestRequest::delete(&format!("/api/uploads/{id}"))
        .send(app.clone())
        .await
        .json();
    assert_eq!(body["deleted"], true);

    let response = AxumTestRequest::get(&format!("/api/images/{id}")).send(app).await;
    assert_eq!(response.status(), 404);
}

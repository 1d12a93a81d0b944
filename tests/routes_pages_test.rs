// ABOUTME: HTTP integration tests for public page aggregation routes
// ABOUTME: Covers the home page, page banners, subsidiary pages, and the organization chart
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Corpsite Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod helpers;

use corpsite_server::models::{NewBanner, SettingKey};
use corpsite_server::routes::pages::{HomePage, SubsidiaryPage};
use helpers::axum_test::AxumTestRequest;
use helpers::test_utils::create_test_app;
use serde_json::{json, Value};

#[tokio::test]
async fn test_home_page_on_empty_storage() {
    let (app, resources) = create_test_app().await;

    let response = AxumTestRequest::get("/api/pages/home").send(app).await;

    assert_eq!(response.status(), 200);
    let page: HomePage = response.json();
    assert!(page.banners.len() >= 2);
    assert!(page.subsidiaries.is_empty());
    assert!(page.clients.is_empty());
    assert_eq!(page.settings.len(), SettingKey::ALL.len());
    assert!(resources.database.list_banners(None).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_home_page_uses_stored_content() {
    let (app, _) = create_test_app().await;
    for body in [
        json!({ "page": "home", "image_url": "/a.jpg", "sort_order": 1 }),
        json!({ "page": "home", "image_url": "/b.jpg", "sort_order": 0 }),
    ] {
        AxumTestRequest::post("/api/banners")
            .json(&body)
            .send(app.clone())
            .await;
    }
    AxumTestRequest::post("/api/clients")
        .json(&json!({ "name": "Acme", "logo_url": "/acme.png" }))
        .send(app.clone())
        .await;
    AxumTestRequest::post("/api/settings")
        .json(&json!({ "key": "mission", "value": "Stored mission" }))
        .send(app.clone())
        .await;

    let page: HomePage = AxumTestRequest::get("/api/pages/home").send(app).await.json();

    let images: Vec<&str> = page.banners.iter().map(|b| b.image_url.as_str()).collect();
    assert_eq!(images, vec!["/b.jpg", "/a.jpg"]);
    assert_eq!(page.clients.len(), 1);
    assert_eq!(page.settings["mission"], "Stored mission");
    assert_eq!(page.settings["vision"], SettingKey::Vision.default_value());
}

#[tokio::test]
async fn test_page_banners_duplicate_single_entry() {
    let (app, resources) = create_test_app().await;
    resources
        .database
        .create_banner(NewBanner {
            page: "about".to_owned(),
            title: Some("Only".to_owned()),
            subtitle: None,
            image_url: "/only.jpg".to_owned(),
            sort_order: 0,
            is_active: true,
        })
        .await
        .unwrap();

    let banners: Vec<Value> = AxumTestRequest::get("/api/pages/about/banners")
        .send(app)
        .await
        .json();

    assert_eq!(banners.len(), 2);
    assert_eq!(banners[0]["image_url"], "/only.jpg");
    assert_eq!(banners[1]["image_url"], "/only.jpg");
    assert_ne!(banners[0]["id"], banners[1]["id"]);
}

#[tokio::test]
async fn test_page_banners_for_unknown_page() {
    let (app, _) = create_test_app().await;

    let response = AxumTestRequest::get("/api/pages/careers/banners").send(app).await;

    assert_eq!(response.status(), 200);
    let banners: Vec<Value> = response.json();
    assert!(banners.len() >= 2);
}

#[tokio::test]
async fn test_subsidiary_page_collects_related_content() {
    let (app, _) = create_test_app().await;
    AxumTestRequest::post("/api/subsidiaries")
        .json(&json!({ "name": "Group Trading", "path": "trading" }))
        .send(app.clone())
        .await;
    AxumTestRequest::post("/api/projects")
        .json(&json!({ "title": "Import Hub", "subsidiary": "Group Trading" }))
        .send(app.clone())
        .await;
    AxumTestRequest::post("/api/projects")
        .json(&json!({ "title": "Unrelated", "subsidiary": "Group Construction" }))
        .send(app.clone())
        .await;
    AxumTestRequest::post("/api/clients")
        .json(&json!({ "name": "Port Authority", "logo_url": "/p.png", "subsidiary": "Group Trading" }))
        .send(app.clone())
        .await;

    let response = AxumTestRequest::get("/api/subsidiary-pages/trading").send(app).await;

    assert_eq!(response.status(), 200);
    let page: SubsidiaryPage = response.json();
    assert_eq!(page.subsidiary.name, "Group Trading");
    assert!(page.banners.len() >= 2);
    assert_eq!(page.projects.len(), 1);
    assert_eq!(page.projects[0].title, "Import Hub");
    assert_eq!(page.clients.len(), 1);
}

#[tokio::test]
async fn test_subsidiary_page_unknown_path() {
    let (app, _) = create_test_app().await;

    let response = AxumTestRequest::get("/api/subsidiary-pages/nowhere").send(app).await;

    assert_eq!(response.status(), 404);
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "RESOURCE_NOT_FOUND");
}

#[tokio::test]
async fn test_organization_chart_default_and_stored() {
    let (app, _) = create_test_app().await;

    let body: Value = AxumTestRequest::get("/api/organization-chart")
        .send(app.clone())
        .await
        .json();
    assert_eq!(body["url"], SettingKey::OrganizationChartUrl.default_value());

    AxumTestRequest::post("/api/settings")
        .json(&json!({ "organization_chart_url": "/api/images/chart" }))
        .send(app.clone())
        .await;

    let body: Value = AxumTestRequest::get("/api/organization-chart").send(app).await.json();
    assert_eq!(body["url"], "/api/images/chart");
}

// ABOUTME: Integration tests for the content repositories against in-memory SQLite
// ABOUTME: Covers guarded banner seeding, multi-key upserts, clearing content, and upload storage
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Corpsite Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod helpers;

use corpsite_server::content::defaults::{default_banners, default_subsidiaries};
use corpsite_server::database::NewUpload;
use corpsite_server::models::SettingKey;
use helpers::test_utils::create_test_database;

#[tokio::test]
async fn test_banner_seed_writes_once_in_display_order() {
    let db = create_test_database().await;
    let mut banners = default_banners("home");
    banners.reverse();
    let expected = banners.len();

    let seeded = db.seed_banners("home", banners).await.unwrap();

    let orders: Vec<i64> = seeded.iter().map(|b| b.sort_order).collect();
    let mut sorted = orders.clone();
    sorted.sort_unstable();
    assert_eq!(orders, sorted);
    assert_eq!(seeded.len(), expected);
    assert!(seeded.iter().all(|b| b.page == "home"));

    let again = db.seed_banners("home", default_banners("home")).await.unwrap();
    assert!(again.is_empty());
    assert_eq!(db.list_banners(Some("home")).await.unwrap().len(), expected);
    assert!(db.seed_banners("home", Vec::new()).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_banner_seed_skips_page_with_stored_banners() {
    let db = create_test_database().await;
    let mut single = default_banners("about");
    single.truncate(1);
    db.seed_banners("about", single).await.unwrap();

    let seeded = db.seed_banners("about", default_banners("about")).await.unwrap();

    assert!(seeded.is_empty());
    assert_eq!(db.list_banners(Some("about")).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_upsert_settings_overwrites_and_insert_missing_does_not() {
    let db = create_test_database().await;
    db.upsert_settings(&[
        (SettingKey::Mission, "One".to_owned()),
        (SettingKey::Vision, "Two".to_owned()),
    ])
    .await
    .unwrap();

    db.upsert_settings(&[(SettingKey::Mission, "Uno".to_owned())])
        .await
        .unwrap();
    let inserted = db
        .insert_missing_settings(&[
            (SettingKey::Vision, "ignored".to_owned()),
            (SettingKey::History, "New".to_owned()),
        ])
        .await
        .unwrap();

    assert_eq!(inserted.len(), 1);
    assert_eq!(
        db.get_setting(SettingKey::Mission).await.unwrap().unwrap().value,
        "Uno"
    );
    assert_eq!(
        db.get_setting(SettingKey::Vision).await.unwrap().unwrap().value,
        "Two"
    );
    assert!(db.get_setting(SettingKey::Attitude).await.unwrap().is_none());
}

#[tokio::test]
async fn test_clear_content_keeps_uploads() {
    let db = create_test_database().await;
    db.seed_banners("home", default_banners("home")).await.unwrap();
    for subsidiary in default_subsidiaries() {
        db.create_subsidiary(subsidiary).await.unwrap();
    }
    let asset = db
        .create_upload(NewUpload {
            filename: "logo.png".to_owned(),
            mime_type: "image/png".to_owned(),
            data: vec![1, 2, 3],
        })
        .await
        .unwrap();

    let removed = db.clear_content().await.unwrap();

    assert!(removed >= 4);
    assert!(db.list_banners(None).await.unwrap().is_empty());
    assert!(db.list_subsidiaries().await.unwrap().is_empty());
    let payload = db.get_asset_payload(&asset.id).await.unwrap().unwrap();
    assert_eq!(payload.data, vec![1, 2, 3]);
    assert_eq!(payload.mime_type, "image/png");
}

#[tokio::test]
async fn test_upload_metadata_and_search_limit() {
    let db = create_test_database().await;
    for name in ["a-logo.png", "b-logo.png", "c-banner.png"] {
        db.create_upload(NewUpload {
            filename: name.to_owned(),
            mime_type: "image/png".to_owned(),
            data: vec![0; 10],
        })
        .await
        .unwrap();
    }

    let logos = db.search_uploads(Some("LOGO"), 50).await.unwrap();
    assert_eq!(logos.len(), 2);
    assert!(logos.iter().all(|asset| asset.size_bytes == 10));

    assert_eq!(db.search_uploads(None, 2).await.unwrap().len(), 2);
    assert!(!db.delete_upload("missing").await.unwrap());
}

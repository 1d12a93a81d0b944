// ABOUTME: Banner persistence (page hero images with rotation ordering)
// ABOUTME: List, fetch, create, guarded seed insert, partial update, and delete via the query gateway
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Corpsite Contributors

use super::{Database, QueryParams, SqlValue};
use chrono::Utc;
use corpsite_core::errors::{AppError, AppResult};
use corpsite_core::models::{Banner, BannerChanges, NewBanner};
use uuid::Uuid;

const BANNER_COLUMNS: &str =
    "id, page, title, subtitle, image_url, sort_order, is_active, created_at, updated_at";

impl Database {
    /// List banners, optionally restricted to one page, in display order
    ///
    /// Inactive banners are included; this is the administrative view.
    ///
    /// # Errors
    ///
    /// Returns a database error if the query fails
    pub async fn list_banners(&self, page: Option<&str>) -> AppResult<Vec<Banner>> {
        self.query_as(
            &format!(
                "SELECT {BANNER_COLUMNS} FROM banners
                 WHERE (:page IS NULL OR page = :page)
                 ORDER BY page, sort_order, created_at"
            ),
            QueryParams::named().set("page", page),
        )
        .await
    }

    /// Active banners for a page ordered by `sort_order`
    ///
    /// # Errors
    ///
    /// Returns a database error if the query fails
    pub async fn list_active_banners(&self, page: &str) -> AppResult<Vec<Banner>> {
        self.query_as(
            &format!(
                "SELECT {BANNER_COLUMNS} FROM banners
                 WHERE page = :page AND is_active = 1
                 ORDER BY sort_order, created_at"
            ),
            QueryParams::named().set("page", page),
        )
        .await
    }

    /// Fetch one banner
    ///
    /// # Errors
    ///
    /// Returns a database error if the query fails
    pub async fn get_banner(&self, id: &str) -> AppResult<Option<Banner>> {
        self.query_optional_as(
            &format!("SELECT {BANNER_COLUMNS} FROM banners WHERE id = :id"),
            QueryParams::named().set("id", id),
        )
        .await
    }

    /// Insert a banner with a generated id
    ///
    /// # Errors
    ///
    /// Returns a database error if the insert fails
    pub async fn create_banner(&self, banner: NewBanner) -> AppResult<Banner> {
        let now = Utc::now();
        let params = QueryParams::named()
            .set("id", Uuid::new_v4().to_string())
            .set("page", banner.page)
            .set("title", banner.title)
            .set("subtitle", banner.subtitle)
            .set("image_url", banner.image_url)
            .set("sort_order", banner.sort_order)
            .set("is_active", banner.is_active)
            .set("now", now);

        let created = self
            .query_optional_as(
                &format!(
                    "INSERT INTO banners ({BANNER_COLUMNS})
                     VALUES (:id, :page, :title, :subtitle, :image_url, :sort_order, :is_active, :now, :now)
                     RETURNING {BANNER_COLUMNS}"
                ),
                params,
            )
            .await?;
        created.ok_or_else(|| AppError::database("Insert did not return the banner"))
    }

    /// Insert `banners` under `page` only while that page has no stored banners
    ///
    /// The emptiness check and the insert are one statement, so concurrent
    /// callers write the set at most once. Returns the inserted rows in display
    /// order; empty when the page already had banners.
    ///
    /// # Errors
    ///
    /// Returns a database error if the insert fails
    pub async fn seed_banners(&self, page: &str, banners: Vec<NewBanner>) -> AppResult<Vec<Banner>> {
        if banners.is_empty() {
            return Ok(Vec::new());
        }

        let rows = banner_rows(banners.len());
        let mut values = banner_values(
            banners
                .into_iter()
                .map(|banner| NewBanner {
                    page: page.to_owned(),
                    ..banner
                })
                .collect(),
        );
        values.push(SqlValue::from(page));

        let mut inserted: Vec<Banner> = self
            .query_as(
                &format!(
                    "INSERT INTO banners ({BANNER_COLUMNS})
                     SELECT * FROM (VALUES {rows})
                     WHERE NOT EXISTS (SELECT 1 FROM banners WHERE page = ?)
                     RETURNING {BANNER_COLUMNS}"
                ),
                QueryParams::Positional(values),
            )
            .await?;
        inserted.sort_by_key(|banner| banner.sort_order);
        Ok(inserted)
    }

    /// Apply a partial update; absent fields keep their stored values
    ///
    /// # Errors
    ///
    /// Returns a database error if the update fails
    pub async fn update_banner(&self, id: &str, changes: BannerChanges) -> AppResult<Option<Banner>> {
        let params = QueryParams::named()
            .set("id", id)
            .set("page", changes.page)
            .set("title", changes.title)
            .set("subtitle", changes.subtitle)
            .set("image_url", changes.image_url)
            .set("sort_order", changes.sort_order)
            .set("is_active", changes.is_active)
            .set("now", Utc::now());

        self.query_optional_as(
            &format!(
                "UPDATE banners SET
                    page = COALESCE(:page, page),
                    title = COALESCE(:title, title),
                    subtitle = COALESCE(:subtitle, subtitle),
                    image_url = COALESCE(:image_url, image_url),
                    sort_order = COALESCE(:sort_order, sort_order),
                    is_active = COALESCE(:is_active, is_active),
                    updated_at = :now
                 WHERE id = :id
                 RETURNING {BANNER_COLUMNS}"
            ),
            params,
        )
        .await
    }

    /// Delete a banner; returns whether a row existed
    ///
    /// # Errors
    ///
    /// Returns a database error if the delete fails
    pub async fn delete_banner(&self, id: &str) -> AppResult<bool> {
        let affected = self
            .execute(
                "DELETE FROM banners WHERE id = :id",
                QueryParams::named().set("id", id),
            )
            .await?;
        Ok(affected > 0)
    }
}

fn banner_rows(count: usize) -> String {
    vec!["(?, ?, ?, ?, ?, ?, ?, ?, ?)"; count].join(", ")
}

/// Positional values for [`banner_rows`], with a fresh id per banner
fn banner_values(banners: Vec<NewBanner>) -> Vec<SqlValue> {
    let now = Utc::now();
    let mut values: Vec<SqlValue> = Vec::with_capacity(banners.len() * 9);
    for banner in banners {
        values.extend([
            SqlValue::from(Uuid::new_v4().to_string()),
            SqlValue::from(banner.page),
            SqlValue::from(banner.title),
            SqlValue::from(banner.subtitle),
            SqlValue::from(banner.image_url),
            SqlValue::from(banner.sort_order),
            SqlValue::from(banner.is_active),
            SqlValue::from(now),
            SqlValue::from(now),
        ]);
    }
    values
}

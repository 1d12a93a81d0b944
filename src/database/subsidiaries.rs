// ABOUTME: Subsidiary persistence (group companies with their own landing pages)
// ABOUTME: Lookup by id or route path plus create, partial update, and delete
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Corpsite Contributors

use super::{Database, QueryParams};
use chrono::Utc;
use corpsite_core::errors::{AppError, AppResult};
use corpsite_core::models::{NewSubsidiary, Subsidiary, SubsidiaryChanges};
use uuid::Uuid;

const SUBSIDIARY_COLUMNS: &str =
    "id, name, path, description, image_url, display_order, created_at, updated_at";

impl Database {
    /// List subsidiaries in display order
    ///
    /// # Errors
    ///
    /// Returns a database error if the query fails
    pub async fn list_subsidiaries(&self) -> AppResult<Vec<Subsidiary>> {
        self.query_as(
            &format!(
                "SELECT {SUBSIDIARY_COLUMNS} FROM subsidiaries ORDER BY display_order, name COLLATE NOCASE"
            ),
            QueryParams::None,
        )
        .await
    }

    /// Fetch one subsidiary by id
    ///
    /// # Errors
    ///
    /// Returns a database error if the query fails
    pub async fn get_subsidiary(&self, id: &str) -> AppResult<Option<Subsidiary>> {
        self.query_optional_as(
            &format!("SELECT {SUBSIDIARY_COLUMNS} FROM subsidiaries WHERE id = :id"),
            QueryParams::named().set("id", id),
        )
        .await
    }

    /// Fetch one subsidiary by its route path
    ///
    /// # Errors
    ///
    /// Returns a database error if the query fails
    pub async fn get_subsidiary_by_path(&self, path: &str) -> AppResult<Option<Subsidiary>> {
        self.query_optional_as(
            &format!("SELECT {SUBSIDIARY_COLUMNS} FROM subsidiaries WHERE path = :path"),
            QueryParams::named().set("path", path),
        )
        .await
    }

    /// Insert a subsidiary with a generated id
    ///
    /// # Errors
    ///
    /// Returns a database error if the insert fails, including a path collision
    pub async fn create_subsidiary(&self, subsidiary: NewSubsidiary) -> AppResult<Subsidiary> {
        let params = QueryParams::named()
            .set("id", Uuid::new_v4().to_string())
            .set("name", subsidiary.name)
            .set("path", subsidiary.path)
            .set("description", subsidiary.description)
            .set("image_url", subsidiary.image_url)
            .set("display_order", subsidiary.display_order)
            .set("now", Utc::now());

        self.query_optional_as(
            &format!(
                "INSERT INTO subsidiaries ({SUBSIDIARY_COLUMNS})
                 VALUES (:id, :name, :path, :description, :image_url, :display_order, :now, :now)
                 RETURNING {SUBSIDIARY_COLUMNS}"
            ),
            params,
        )
        .await?
        .ok_or_else(|| AppError::database("Insert did not return the subsidiary"))
    }

    /// Apply a partial update; absent fields keep their stored values
    ///
    /// # Errors
    ///
    /// Returns a database error if the update fails
    pub async fn update_subsidiary(
        &self,
        id: &str,
        changes: SubsidiaryChanges,
    ) -> AppResult<Option<Subsidiary>> {
        let params = QueryParams::named()
            .set("id", id)
            .set("name", changes.name)
            .set("path", changes.path)
            .set("description", changes.description)
            .set("image_url", changes.image_url)
            .set("display_order", changes.display_order)
            .set("now", Utc::now());

        self.query_optional_as(
            &format!(
                "UPDATE subsidiaries SET
                    name = COALESCE(:name, name),
                    path = COALESCE(:path, path),
                    description = COALESCE(:description, description),
                    image_url = COALESCE(:image_url, image_url),
                    display_order = COALESCE(:display_order, display_order),
                    updated_at = :now
                 WHERE id = :id
                 RETURNING {SUBSIDIARY_COLUMNS}"
            ),
            params,
        )
        .await
    }

    /// Delete a subsidiary; returns whether a row existed
    ///
    /// Projects and clients referencing it by name are left untouched.
    ///
    /// # Errors
    ///
    /// Returns a database error if the delete fails
    pub async fn delete_subsidiary(&self, id: &str) -> AppResult<bool> {
        let affected = self
            .execute(
                "DELETE FROM subsidiaries WHERE id = :id",
                QueryParams::named().set("id", id),
            )
            .await?;
        Ok(affected > 0)
    }
}

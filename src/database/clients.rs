// ABOUTME: Client persistence for the customer logo wall
// ABOUTME: Filtered listing plus create, partial update, and delete via the query gateway
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Corpsite Contributors

use super::{Database, QueryParams};
use chrono::Utc;
use corpsite_core::errors::{AppError, AppResult};
use corpsite_core::models::{Client, ClientCategory, ClientChanges, NewClient};
use uuid::Uuid;

const CLIENT_COLUMNS: &str = "id, name, logo_url, category, subsidiary, created_at, updated_at";

impl Database {
    /// List clients, optionally narrowed by category and/or owning subsidiary name
    ///
    /// # Errors
    ///
    /// Returns a database error if the query fails
    pub async fn list_clients(
        &self,
        category: Option<ClientCategory>,
        subsidiary: Option<&str>,
    ) -> AppResult<Vec<Client>> {
        self.query_as(
            &format!(
                "SELECT {CLIENT_COLUMNS} FROM clients
                 WHERE (:category IS NULL OR category = :category)
                   AND (:subsidiary IS NULL OR subsidiary = :subsidiary)
                 ORDER BY name COLLATE NOCASE"
            ),
            QueryParams::named()
                .set("category", category.map(|c| c.as_str()))
                .set("subsidiary", subsidiary),
        )
        .await
    }

    /// Fetch one client
    ///
    /// # Errors
    ///
    /// Returns a database error if the query fails
    pub async fn get_client(&self, id: &str) -> AppResult<Option<Client>> {
        self.query_optional_as(
            &format!("SELECT {CLIENT_COLUMNS} FROM clients WHERE id = :id"),
            QueryParams::named().set("id", id),
        )
        .await
    }

    /// Insert a client with a generated id
    ///
    /// # Errors
    ///
    /// Returns a database error if the insert fails
    pub async fn create_client(&self, client: NewClient) -> AppResult<Client> {
        let params = QueryParams::named()
            .set("id", Uuid::new_v4().to_string())
            .set("name", client.name)
            .set("logo_url", client.logo_url)
            .set("category", client.category.as_str())
            .set("subsidiary", client.subsidiary)
            .set("now", Utc::now());

        self.query_optional_as(
            &format!(
                "INSERT INTO clients ({CLIENT_COLUMNS})
                 VALUES (:id, :name, :logo_url, :category, :subsidiary, :now, :now)
                 RETURNING {CLIENT_COLUMNS}"
            ),
            params,
        )
        .await?
        .ok_or_else(|| AppError::database("Insert did not return the client"))
    }

    /// Apply a partial update; absent fields keep their stored values
    ///
    /// # Errors
    ///
    /// Returns a database error if the update fails
    pub async fn update_client(&self, id: &str, changes: ClientChanges) -> AppResult<Option<Client>> {
        let params = QueryParams::named()
            .set("id", id)
            .set("name", changes.name)
            .set("logo_url", changes.logo_url)
            .set("category", changes.category.map(|c| c.as_str()))
            .set("subsidiary", changes.subsidiary)
            .set("now", Utc::now());

        self.query_optional_as(
            &format!(
                "UPDATE clients SET
                    name = COALESCE(:name, name),
                    logo_url = COALESCE(:logo_url, logo_url),
                    category = COALESCE(:category, category),
                    subsidiary = COALESCE(:subsidiary, subsidiary),
                    updated_at = :now
                 WHERE id = :id
                 RETURNING {CLIENT_COLUMNS}"
            ),
            params,
        )
        .await
    }

    /// Delete a client; returns whether a row existed
    ///
    /// # Errors
    ///
    /// Returns a database error if the delete fails
    pub async fn delete_client(&self, id: &str) -> AppResult<bool> {
        let affected = self
            .execute(
                "DELETE FROM clients WHERE id = :id",
                QueryParams::named().set("id", id),
            )
            .await?;
        Ok(affected > 0)
    }
}

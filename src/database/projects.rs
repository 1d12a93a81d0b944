// ABOUTME: Project persistence for the portfolio pages
// ABOUTME: Listing by subsidiary plus create, partial update, and delete via the query gateway
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Corpsite Contributors

use super::{Database, QueryParams};
use chrono::Utc;
use corpsite_core::errors::{AppError, AppResult};
use corpsite_core::models::{NewProject, Project, ProjectChanges};
use uuid::Uuid;

const PROJECT_COLUMNS: &str =
    "id, title, description, category, image_url, subsidiary, status, created_at, updated_at";

impl Database {
    /// List projects, newest first, optionally for one subsidiary name
    ///
    /// # Errors
    ///
    /// Returns a database error if the query fails
    pub async fn list_projects(&self, subsidiary: Option<&str>) -> AppResult<Vec<Project>> {
        self.query_as(
            &format!(
                "SELECT {PROJECT_COLUMNS} FROM projects
                 WHERE (:subsidiary IS NULL OR subsidiary = :subsidiary)
                 ORDER BY created_at DESC, title"
            ),
            QueryParams::named().set("subsidiary", subsidiary),
        )
        .await
    }

    /// Fetch one project
    ///
    /// # Errors
    ///
    /// Returns a database error if the query fails
    pub async fn get_project(&self, id: &str) -> AppResult<Option<Project>> {
        self.query_optional_as(
            &format!("SELECT {PROJECT_COLUMNS} FROM projects WHERE id = :id"),
            QueryParams::named().set("id", id),
        )
        .await
    }

    /// Insert a project with a generated id
    ///
    /// # Errors
    ///
    /// Returns a database error if the insert fails
    pub async fn create_project(&self, project: NewProject) -> AppResult<Project> {
        let params = QueryParams::named()
            .set("id", Uuid::new_v4().to_string())
            .set("title", project.title)
            .set("description", project.description)
            .set("category", project.category)
            .set("image_url", project.image_url)
            .set("subsidiary", project.subsidiary)
            .set("status", project.status.as_str())
            .set("now", Utc::now());

        self.query_optional_as(
            &format!(
                "INSERT INTO projects ({PROJECT_COLUMNS})
                 VALUES (:id, :title, :description, :category, :image_url, :subsidiary, :status, :now, :now)
                 RETURNING {PROJECT_COLUMNS}"
            ),
            params,
        )
        .await?
        .ok_or_else(|| AppError::database("Insert did not return the project"))
    }

    /// Apply a partial update; absent fields keep their stored values
    ///
    /// # Errors
    ///
    /// Returns a database error if the update fails
    pub async fn update_project(
        &self,
        id: &str,
        changes: ProjectChanges,
    ) -> AppResult<Option<Project>> {
        let params = QueryParams::named()
            .set("id", id)
            .set("title", changes.title)
            .set("description", changes.description)
            .set("category", changes.category)
            .set("image_url", changes.image_url)
            .set("subsidiary", changes.subsidiary)
            .set("status", changes.status.map(|s| s.as_str()))
            .set("now", Utc::now());

        self.query_optional_as(
            &format!(
                "UPDATE projects SET
                    title = COALESCE(:title, title),
                    description = COALESCE(:description, description),
                    category = COALESCE(:category, category),
                    image_url = COALESCE(:image_url, image_url),
                    subsidiary = COALESCE(:subsidiary, subsidiary),
                    status = COALESCE(:status, status),
                    updated_at = :now
                 WHERE id = :id
                 RETURNING {PROJECT_COLUMNS}"
            ),
            params,
        )
        .await
    }

    /// Delete a project; returns whether a row existed
    ///
    /// # Errors
    ///
    /// Returns a database error if the delete fails
    pub async fn delete_project(&self, id: &str) -> AppResult<bool> {
        let affected = self
            .execute(
                "DELETE FROM projects WHERE id = :id",
                QueryParams::named().set("id", id),
            )
            .await?;
        Ok(affected > 0)
    }
}

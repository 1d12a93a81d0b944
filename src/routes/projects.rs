// ABOUTME: Route handlers for project portfolio administration
// ABOUTME: CRUD under /api/projects with optional subsidiary filtering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Corpsite Contributors

use super::{created_response, deleted_response, filter_param, json_body};
use crate::resources::ServerResources;
use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use corpsite_core::errors::AppError;
use corpsite_core::models::ProjectInput;
use serde::Deserialize;
use std::sync::Arc;
use tracing::info;

/// Query parameters for listing projects
#[derive(Debug, Default, Deserialize)]
pub struct ProjectListQuery {
    /// Owning subsidiary name
    pub subsidiary: Option<String>,
}

/// Project routes implementation
pub struct ProjectRoutes;

impl ProjectRoutes {
    /// Create all project routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/api/projects",
                get(Self::handle_list).post(Self::handle_create),
            )
            .route(
                "/api/projects/:id",
                get(Self::handle_get)
                    .put(Self::handle_update)
                    .delete(Self::handle_delete),
            )
            .with_state(resources)
    }

    /// Handle GET /api/projects
    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
        Query(query): Query<ProjectListQuery>,
    ) -> Result<Response, AppError> {
        let subsidiary = filter_param(query.subsidiary.as_ref());
        let projects = resources.database.list_projects(subsidiary).await?;
        Ok(Json(projects).into_response())
    }

    /// Handle GET /api/projects/:id
    async fn handle_get(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<String>,
    ) -> Result<Response, AppError> {
        let project = resources
            .database
            .get_project(&id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Project {id}")).with_resource_id(&id))?;
        Ok(Json(project).into_response())
    }

    /// Handle POST /api/projects
    async fn handle_create(
        State(resources): State<Arc<ServerResources>>,
        payload: Result<Json<ProjectInput>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let new_project = json_body(payload)?.into_new()?;
        let project = resources.database.create_project(new_project).await?;
        info!(id = %project.id, status = %project.status, "project created");
        Ok(created_response(project))
    }

    /// Handle PUT /api/projects/:id
    async fn handle_update(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<String>,
        payload: Result<Json<ProjectInput>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let changes = json_body(payload)?.into_changes()?;
        let project = resources
            .database
            .update_project(&id, changes)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Project {id}")).with_resource_id(&id))?;
        info!(id = %project.id, "project updated");
        Ok(Json(project).into_response())
    }

    /// Handle DELETE /api/projects/:id
    async fn handle_delete(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<String>,
    ) -> Result<Response, AppError> {
        let deleted = resources.database.delete_project(&id).await?;
        info!(id = %id, deleted, "project delete");
        Ok(deleted_response(deleted))
    }
}

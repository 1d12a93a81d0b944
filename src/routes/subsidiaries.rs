// ABOUTME: Route handlers for subsidiary administration
// ABOUTME: CRUD under /api/subsidiaries plus lookup by route path with path collision checks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Corpsite Contributors

use super::{created_response, deleted_response, json_body};
use crate::resources::ServerResources;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use corpsite_core::errors::{AppError, AppResult};
use corpsite_core::models::SubsidiaryInput;
use std::sync::Arc;
use tracing::info;

/// Subsidiary routes implementation
pub struct SubsidiaryRoutes;

impl SubsidiaryRoutes {
    /// Create all subsidiary routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/api/subsidiaries",
                get(Self::handle_list).post(Self::handle_create),
            )
            .route(
                "/api/subsidiaries/by-path/:path",
                get(Self::handle_get_by_path),
            )
            .route(
                "/api/subsidiaries/:id",
                get(Self::handle_get)
                    .put(Self::handle_update)
                    .delete(Self::handle_delete),
            )
            .with_state(resources)
    }

    /// Reject a path already used by a different subsidiary
    async fn ensure_path_available(
        resources: &ServerResources,
        path: &str,
        current_id: Option<&str>,
    ) -> AppResult<()> {
        match resources.database.get_subsidiary_by_path(path).await? {
            Some(existing) if Some(existing.id.as_str()) != current_id => Err(
                AppError::invalid_input(format!("Path '{path}' is already used by '{}'", existing.name))
                    .with_details(serde_json::json!({ "field": "path" })),
            ),
            _ => Ok(()),
        }
    }

    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let subsidiaries = resources.database.list_subsidiaries().await?;
        Ok(Json(subsidiaries).into_response())
    }

    async fn handle_get(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<String>,
    ) -> Result<Response, AppError> {
        let subsidiary = resources
            .database
            .get_subsidiary(&id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Subsidiary {id}")).with_resource_id(&id))?;
        Ok(Json(subsidiary).into_response())
    }

    async fn handle_get_by_path(
        State(resources): State<Arc<ServerResources>>,
        Path(path): Path<String>,
    ) -> Result<Response, AppError> {
        let subsidiary = resources
            .database
            .get_subsidiary_by_path(&path)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Subsidiary with path '{path}'")))?;
        Ok(Json(subsidiary).into_response())
    }

    async fn handle_create(
        State(resources): State<Arc<ServerResources>>,
        payload: Result<Json<SubsidiaryInput>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let new_subsidiary = json_body(payload)?.into_new()?;
        Self::ensure_path_available(&resources, &new_subsidiary.path, None).await?;

        let subsidiary = resources.database.create_subsidiary(new_subsidiary).await?;
        info!(id = %subsidiary.id, path = %subsidiary.path, "subsidiary created");
        Ok(created_response(subsidiary))
    }

    async fn handle_update(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<String>,
        payload: Result<Json<SubsidiaryInput>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let changes = json_body(payload)?.into_changes()?;
        if let Some(path) = &changes.path {
            Self::ensure_path_available(&resources, path, Some(&id)).await?;
        }

        let subsidiary = resources
            .database
            .update_subsidiary(&id, changes)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Subsidiary {id}")).with_resource_id(&id))?;
        info!(id = %subsidiary.id, path = %subsidiary.path, "subsidiary updated");
        Ok(Json(subsidiary).into_response())
    }

    async fn handle_delete(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<String>,
    ) -> Result<Response, AppError> {
        let deleted = resources.database.delete_subsidiary(&id).await?;
        info!(id = %id, deleted, "subsidiary delete");
        Ok(deleted_response(deleted))
    }
}

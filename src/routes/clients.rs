// ABOUTME: Route handlers for client administration (logo wall entries)
// ABOUTME: CRUD under /api/clients with optional category filtering
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
use corpsite_core::models::{ClientCategory, ClientInput};
use serde::Deserialize;
use std::sync::Arc;
use tracing::info;

/// Query parameters for listing clients
#[derive(Debug, Default, Deserialize)]
pub struct ClientListQuery {
    /// Category filter (`government`, `state_owned`, `private`, `other`)
    pub category: Option<String>,
}

/// Client routes implementation
pub struct ClientRoutes;

impl ClientRoutes {
    /// Create all client routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/api/clients",
                get(Self::handle_list).post(Self::handle_create),
            )
            .route(
                "/api/clients/:id",
                get(Self::handle_get)
                    .put(Self::handle_update)
                    .delete(Self::handle_delete),
            )
            .with_state(resources)
    }

    /// Handle GET /api/clients
    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
        Query(query): Query<ClientListQuery>,
    ) -> Result<Response, AppError> {
        let category = filter_param(query.category.as_ref())
            .map(ClientCategory::validate)
            .transpose()?;
        let clients = resources.database.list_clients(category, None).await?;
        Ok(Json(clients).into_response())
    }

    /// Handle GET /api/clients/:id
    async fn handle_get(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<String>,
    ) -> Result<Response, AppError> {
        let client = resources
            .database
            .get_client(&id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Client {id}")).with_resource_id(&id))?;
        Ok(Json(client).into_response())
    }

    /// Handle POST /api/clients
    async fn handle_create(
        State(resources): State<Arc<ServerResources>>,
        payload: Result<Json<ClientInput>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let new_client = json_body(payload)?.into_new()?;
        let client = resources.database.create_client(new_client).await?;
        info!(id = %client.id, category = %client.category, "client created");
        Ok(created_response(client))
    }

    /// Handle PUT /api/clients/:id
    async fn handle_update(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<String>,
        payload: Result<Json<ClientInput>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let changes = json_body(payload)?.into_changes()?;
        let client = resources
            .database
            .update_client(&id, changes)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Client {id}")).with_resource_id(&id))?;
        info!(id = %client.id, "client updated");
        Ok(Json(client).into_response())
    }

    /// Handle DELETE /api/clients/:id
    async fn handle_delete(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<String>,
    ) -> Result<Response, AppError> {
        let deleted = resources.database.delete_client(&id).await?;
        info!(id = %id, deleted, "client delete");
        Ok(deleted_response(deleted))
    }
}

// ABOUTME: Route handlers for legal document administration
// ABOUTME: CRUD under /api/legal-documents with optional document type filtering
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
use corpsite_core::models::LegalDocumentInput;
use serde::Deserialize;
use std::sync::Arc;
use tracing::info;

/// Query parameters for listing legal documents
#[derive(Debug, Default, Deserialize)]
pub struct LegalDocumentListQuery {
    /// Document type filter
    pub doc_type: Option<String>,
}

/// Legal document routes implementation
pub struct LegalDocumentRoutes;

impl LegalDocumentRoutes {
    /// Create all legal document routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/api/legal-documents",
                get(Self::handle_list).post(Self::handle_create),
            )
            .route(
                "/api/legal-documents/:id",
                get(Self::handle_get)
                    .put(Self::handle_update)
                    .delete(Self::handle_delete),
            )
            .with_state(resources)
    }

    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
        Query(query): Query<LegalDocumentListQuery>,
    ) -> Result<Response, AppError> {
        let doc_type = filter_param(query.doc_type.as_ref());
        let documents = resources.database.list_legal_documents(doc_type).await?;
        Ok(Json(documents).into_response())
    }

    async fn handle_get(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<String>,
    ) -> Result<Response, AppError> {
        let document = resources
            .database
            .get_legal_document(&id)
            .await?
            .ok_or_else(|| {
                AppError::not_found(format!("Legal document {id}")).with_resource_id(&id)
            })?;
        Ok(Json(document).into_response())
    }

    async fn handle_create(
        State(resources): State<Arc<ServerResources>>,
        payload: Result<Json<LegalDocumentInput>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let new_document = json_body(payload)?.into_new()?;
        let document = resources.database.create_legal_document(new_document).await?;
        info!(id = %document.id, "legal document created");
        Ok(created_response(document))
    }

    async fn handle_update(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<String>,
        payload: Result<Json<LegalDocumentInput>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let changes = json_body(payload)?.into_changes()?;
        let document = resources
            .database
            .update_legal_document(&id, changes)
            .await?
            .ok_or_else(|| {
                AppError::not_found(format!("Legal document {id}")).with_resource_id(&id)
            })?;
        info!(id = %document.id, "legal document updated");
        Ok(Json(document).into_response())
    }

    async fn handle_delete(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<String>,
    ) -> Result<Response, AppError> {
        let deleted = resources.database.delete_legal_document(&id).await?;
        info!(id = %id, deleted, "legal document delete");
        Ok(deleted_response(deleted))
    }
}

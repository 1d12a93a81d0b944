// ABOUTME: Route handlers for banner administration
// ABOUTME: CRUD under /api/banners with seed-on-empty listing for known pages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Corpsite Contributors

//! Banner routes
//!
//! Listing a known page that has no stored banners writes that page's
//! built-in banners first (when `SEED_ON_EMPTY_READ` is enabled), so the admin
//! view starts from editable rows instead of an empty table. A failed list
//! read serves the built-in banners.

use super::{created_response, deleted_response, filter_param, json_body};
use crate::content::{builtin_banner_listing, seed_page_banners};
use crate::resources::ServerResources;
use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use corpsite_core::errors::AppError;
use corpsite_core::models::BannerInput;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, warn};

/// Query parameters for listing banners
#[derive(Debug, Default, Deserialize)]
pub struct BannerListQuery {
    /// Page key filter
    pub page: Option<String>,
}

/// Banner routes implementation
pub struct BannerRoutes;

impl BannerRoutes {
    /// Create all banner routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/api/banners",
                get(Self::handle_list).post(Self::handle_create),
            )
            .route(
                "/api/banners/:id",
                get(Self::handle_get)
                    .put(Self::handle_update)
                    .delete(Self::handle_delete),
            )
            .with_state(resources)
    }

    /// Handle GET /api/banners
    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
        Query(query): Query<BannerListQuery>,
    ) -> Response {
        let page = filter_param(query.page.as_ref());
        let banners = match resources.database.list_banners(page).await {
            Ok(banners) => banners,
            Err(e) => {
                warn!(page, error = %e, "banner list failed, serving built-in banners");
                return Json(builtin_banner_listing(page)).into_response();
            }
        };

        let seed_page = page.filter(|_| banners.is_empty() && resources.seed_on_empty_read());
        if let Some(page) = seed_page {
            if let Some(seeded) = seed_page_banners(&resources.database, page).await {
                return Json(seeded).into_response();
            }
        }

        Json(banners).into_response()
    }

    /// Handle GET /api/banners/:id
    async fn handle_get(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<String>,
    ) -> Result<Response, AppError> {
        let banner = resources
            .database
            .get_banner(&id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Banner {id}")).with_resource_id(&id))?;
        Ok(Json(banner).into_response())
    }

    /// Handle POST /api/banners
    async fn handle_create(
        State(resources): State<Arc<ServerResources>>,
        payload: Result<Json<BannerInput>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let new_banner = json_body(payload)?.into_new()?;
        let banner = resources.database.create_banner(new_banner).await?;
        info!(id = %banner.id, page = %banner.page, "banner created");
        Ok(created_response(banner))
    }

    /// Handle PUT /api/banners/:id
    async fn handle_update(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<String>,
        payload: Result<Json<BannerInput>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let changes = json_body(payload)?.into_changes()?;
        let banner = resources
            .database
            .update_banner(&id, changes)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Banner {id}")).with_resource_id(&id))?;
        info!(id = %banner.id, page = %banner.page, "banner updated");
        Ok(Json(banner).into_response())
    }

    /// Handle DELETE /api/banners/:id
    async fn handle_delete(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<String>,
    ) -> Result<Response, AppError> {
        let deleted = resources.database.delete_banner(&id).await?;
        info!(id = %id, deleted, "banner delete");
        Ok(deleted_response(deleted))
    }
}

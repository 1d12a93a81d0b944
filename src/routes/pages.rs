// ABOUTME: Public page aggregation routes for the marketing site frontend
// ABOUTME: Home and subsidiary pages in one response, page banners, and the organization chart
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Corpsite Contributors

//! Public page routes
//!
//! Banners and settings in these responses never fail: empty storage or a
//! failed query falls back to built-in content. Lists of subsidiaries,
//! clients, and projects propagate storage errors as 500.

use crate::content::{load_site_settings, organization_chart_url, resolve_page_banners};
use crate::resources::ServerResources;
use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use corpsite_core::errors::AppError;
use corpsite_core::models::{Banner, Client, Project, Subsidiary};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Everything the home page renders
#[derive(Debug, Serialize, Deserialize)]
pub struct HomePage {
    /// Rotating hero banners (at least two)
    pub banners: Vec<Banner>,
    /// Group companies in display order
    pub subsidiaries: Vec<Subsidiary>,
    /// Logo wall
    pub clients: Vec<Client>,
    /// Site copy keyed by setting name
    pub settings: BTreeMap<String, String>,
}

/// Everything a subsidiary landing page renders
#[derive(Debug, Serialize, Deserialize)]
pub struct SubsidiaryPage {
    /// The subsidiary itself
    pub subsidiary: Subsidiary,
    /// Banners stored under the subsidiary's path
    pub banners: Vec<Banner>,
    /// Projects attributed to the subsidiary
    pub projects: Vec<Project>,
    /// Clients attributed to the subsidiary
    pub clients: Vec<Client>,
}

/// Page routes implementation
pub struct PageRoutes;

impl PageRoutes {
    /// Create all public page routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/pages/home", get(Self::handle_home))
            .route("/api/pages/:page/banners", get(Self::handle_page_banners))
            .route("/api/subsidiary-pages/:path", get(Self::handle_subsidiary_page))
            .route("/api/organization-chart", get(Self::handle_organization_chart))
            .with_state(resources)
    }

    /// Handle GET /api/pages/:page/banners
    async fn handle_page_banners(
        State(resources): State<Arc<ServerResources>>,
        Path(page): Path<String>,
    ) -> Response {
        Json(resolve_page_banners(&resources.database, &page).await).into_response()
    }

    /// Handle GET /api/pages/home
    async fn handle_home(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let database = &resources.database;
        let page = HomePage {
            banners: resolve_page_banners(database, "home").await,
            subsidiaries: database.list_subsidiaries().await?,
            clients: database.list_clients(None, None).await?,
            settings: load_site_settings(database).await,
        };
        Ok(Json(page).into_response())
    }

    /// Handle GET /api/subsidiary-pages/:path
    async fn handle_subsidiary_page(
        State(resources): State<Arc<ServerResources>>,
        Path(path): Path<String>,
    ) -> Result<Response, AppError> {
        let database = &resources.database;
        let subsidiary = database
            .get_subsidiary_by_path(&path)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Subsidiary with path '{path}'")))?;

        let page = SubsidiaryPage {
            banners: resolve_page_banners(database, &subsidiary.path).await,
            projects: database.list_projects(Some(&subsidiary.name)).await?,
            clients: database.list_clients(None, Some(&subsidiary.name)).await?,
            subsidiary,
        };
        Ok(Json(page).into_response())
    }

    /// Handle GET /api/organization-chart
    async fn handle_organization_chart(
        State(resources): State<Arc<ServerResources>>,
    ) -> Response {
        let url = organization_chart_url(&resources.database).await;
        Json(serde_json::json!({ "url": url })).into_response()
    }
}

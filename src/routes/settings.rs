// ABOUTME: Route handlers for site settings (mission, vision, contact copy)
// ABOUTME: Map-shaped reads, single-key lookup, and one-statement multi-key upserts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Corpsite Contributors

//! Settings routes
//!
//! `GET /api/settings` returns a flat `{ key: value }` object. When the table
//! is empty and `SEED_ON_EMPTY_READ` is enabled, the built-in values are
//! written first. A failed read serves the built-in values.

use super::json_body;
use crate::content::seed_default_settings;
use crate::resources::ServerResources;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use corpsite_core::errors::AppError;
use corpsite_core::models::{SettingKey, SettingsPayload};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{info, warn};

/// Settings routes implementation
pub struct SettingsRoutes;

impl SettingsRoutes {
    /// Create all settings routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/api/settings",
                get(Self::handle_list)
                    .post(Self::handle_upsert)
                    .patch(Self::handle_upsert),
            )
            .route("/api/settings/:key", get(Self::handle_get))
            .with_state(resources)
    }

    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
    ) -> Response {
        let stored = match resources.database.list_settings().await {
            Ok(stored) => stored,
            Err(e) => {
                warn!(error = %e, "settings list failed, serving built-in settings");
                return Json(SettingKey::defaults()).into_response();
            }
        };

        let settings: BTreeMap<String, String> = if stored.is_empty() && resources.seed_on_empty_read()
        {
            seed_default_settings(&resources.database).await
        } else {
            stored.into_iter().map(|s| (s.key, s.value)).collect()
        };

        Json(settings).into_response()
    }

    async fn handle_get(
        State(resources): State<Arc<ServerResources>>,
        Path(key): Path<String>,
    ) -> Result<Response, AppError> {
        let key = SettingKey::validate(&key)?;
        let setting = resources
            .database
            .get_setting(key)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Setting '{key}'")))?;
        Ok(Json(setting).into_response())
    }

    /// Handle POST and PATCH /api/settings
    async fn handle_upsert(
        State(resources): State<Arc<ServerResources>>,
        payload: Result<Json<SettingsPayload>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let pairs = json_body(payload)?.into_pairs()?;
        let written = resources.database.upsert_settings(&pairs).await?;
        info!(
            keys = ?pairs.iter().map(|(key, _)| key.as_str()).collect::<Vec<_>>(),
            "settings upserted"
        );

        let settings: BTreeMap<String, String> =
            written.into_iter().map(|s| (s.key, s.value)).collect();
        Ok(Json(settings).into_response())
    }
}

// ABOUTME: Health check route handlers for service monitoring and status endpoints
// ABOUTME: Liveness always answers; readiness round-trips the database
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Corpsite Contributors

//! Health check routes for load balancers and orchestration probes

use crate::resources::ServerResources;
use axum::{extract::State, response::IntoResponse, routing::get, Json, Router};
use corpsite_core::errors::AppError;
use std::sync::Arc;
use tracing::warn;

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create all health check routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/health", get(Self::handle_health))
            .route("/ready", get(Self::handle_ready))
            .with_state(resources)
    }

    async fn handle_health() -> Json<serde_json::Value> {
        Json(serde_json::json!({
            "status": "healthy",
            "timestamp": chrono::Utc::now().to_rfc3339()
        }))
    }

    async fn handle_ready(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<impl IntoResponse, AppError> {
        if let Err(e) = resources.database.ping().await {
            warn!(error = %e, "readiness check failed");
            return Err(AppError::unavailable("Database is not reachable"));
        }

        Ok(Json(serde_json::json!({
            "status": "ready",
            "database": "ok",
            "timestamp": chrono::Utc::now().to_rfc3339()
        })))
    }
}

// ABOUTME: HTTP server assembly: merges route groups, applies middleware, and serves
// ABOUTME: Binds the listener and shuts down gracefully on Ctrl-C or SIGTERM
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Corpsite Contributors

use crate::middleware::{
    propagate_request_id_layer, set_request_id_layer, setup_cors, stamp_error_request_id,
    trace_layer,
};
use crate::resources::ServerResources;
use crate::routes::{
    BannerRoutes, ClientRoutes, HealthRoutes, LegalDocumentRoutes, PageRoutes, ProjectRoutes,
    SettingsRoutes, SubsidiaryRoutes, UploadRoutes,
};
use anyhow::{Context, Result};
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

/// Build the full application router with middleware applied
pub fn build_router(resources: &Arc<ServerResources>) -> Router {
    Router::new()
        .merge(HealthRoutes::routes(Arc::clone(resources)))
        .merge(BannerRoutes::routes(Arc::clone(resources)))
        .merge(ClientRoutes::routes(Arc::clone(resources)))
        .merge(ProjectRoutes::routes(Arc::clone(resources)))
        .merge(SubsidiaryRoutes::routes(Arc::clone(resources)))
        .merge(LegalDocumentRoutes::routes(Arc::clone(resources)))
        .merge(SettingsRoutes::routes(Arc::clone(resources)))
        .merge(UploadRoutes::routes(Arc::clone(resources)))
        .merge(PageRoutes::routes(Arc::clone(resources)))
        .layer(axum::middleware::from_fn(stamp_error_request_id))
        .layer(propagate_request_id_layer())
        .layer(trace_layer())
        .layer(set_request_id_layer())
        .layer(setup_cors(&resources.config))
}

/// Bind `host:http_port` and serve until a shutdown signal arrives
///
/// # Errors
///
/// Returns an error if the address is invalid, the port cannot be bound, or
/// the server fails while running
pub async fn run(resources: Arc<ServerResources>) -> Result<()> {
    let addr: SocketAddr = format!("{}:{}", resources.config.host, resources.config.http_port)
        .parse()
        .with_context(|| {
            format!(
                "Invalid bind address {}:{}",
                resources.config.host, resources.config.http_port
            )
        })?;

    let router = build_router(&resources);
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {addr}"))?;

    info!("HTTP server listening on {addr}");
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    resources.database.close().await;
    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    info!("Shutdown signal received");
}

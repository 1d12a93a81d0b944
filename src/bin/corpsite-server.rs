// ABOUTME: Server binary for the corporate site backend
// ABOUTME: Loads configuration, prepares the content store, and serves the HTTP API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Corpsite Contributors

//! # Corpsite Server Binary
//!
//! Starts the public content API and admin endpoints on the configured port.

use anyhow::Result;
use clap::Parser;
use corpsite_server::{
    config::ServerConfig, database::Database, errors::set_expose_internal_details, logging,
    resources::ServerResources, server,
};
use std::sync::Arc;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "corpsite-server")]
#[command(about = "Corporate site backend - page content and admin API")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override database URL
    #[arg(long)]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(url) = args.database_url.as_deref() {
        config.database.url = corpsite_server::config::DatabaseUrl::parse_url(url)?;
    }

    logging::init_from_env()?;

    info!("Starting Corpsite Server");
    info!("{}", config.summary());

    set_expose_internal_details(!config.environment.is_production());

    let database = Database::connect(&config.database).await?;
    if config.database.auto_migrate {
        database.migrate().await?;
        info!("Database schema is up to date");
    }

    display_available_endpoints(&config);

    let resources = Arc::new(ServerResources::new(database, config));
    if let Err(e) = server::run(resources).await {
        error!("Server error: {e:#}");
        return Err(e);
    }

    Ok(())
}

#[allow(clippy::cognitive_complexity)]
fn display_available_endpoints(config: &ServerConfig) {
    let base = format!("http://{}:{}", config.host, config.http_port);
    info!("=== Available API Endpoints ===");
    info!("Health:");
    info!("   Liveness:          GET  {base}/health");
    info!("   Readiness:         GET  {base}/ready");
    info!("Public pages:");
    info!("   Home:              GET  {base}/api/pages/home");
    info!("   Page banners:      GET  {base}/api/pages/{{page}}/banners");
    info!("   Subsidiary page:   GET  {base}/api/subsidiary-pages/{{path}}");
    info!("   Organization chart: GET {base}/api/organization-chart");
    info!("   Images:            GET  {base}/api/images/{{id}}");
    info!("Admin content:");
    info!("   Banners:           {base}/api/banners");
    info!("   Clients:           {base}/api/clients");
    info!("   Projects:          {base}/api/projects");
    info!("   Subsidiaries:      {base}/api/subsidiaries");
    info!("   Legal documents:   {base}/api/legal-documents");
    info!("   Settings:          {base}/api/settings");
    info!("   Uploads:           {base}/api/uploads");
    info!("=== End of Endpoint List ===");
}

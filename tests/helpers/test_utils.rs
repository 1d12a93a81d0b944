// ABOUTME: In-memory server fixtures for integration tests
// ABOUTME: Builds a migrated SQLite database, shared resources, and the full router

use axum::Router;
use corpsite_server::config::{DatabaseConfig, DatabaseUrl, ServerConfig};
use corpsite_server::database::Database;
use corpsite_server::resources::ServerResources;
use corpsite_server::server::build_router;
use std::sync::Arc;

/// Configuration pointing at a private in-memory database
pub fn test_config() -> ServerConfig {
    ServerConfig {
        database: DatabaseConfig {
            url: DatabaseUrl::Memory,
            ..DatabaseConfig::default()
        },
        ..ServerConfig::default()
    }
}

/// Connect and migrate a fresh in-memory database
pub async fn create_test_database() -> Database {
    let database = Database::connect(&test_config().database)
        .await
        .expect("Failed to open in-memory database");
    database.migrate().await.expect("Failed to migrate");
    database
}

/// Resources over a fresh database with the given configuration tweaks
pub async fn create_test_resources_with(
    configure: impl FnOnce(&mut ServerConfig),
) -> Arc<ServerResources> {
    let mut config = test_config();
    configure(&mut config);
    Arc::new(ServerResources::new(create_test_database().await, config))
}

/// Resources over a fresh database with default settings
pub async fn create_test_resources() -> Arc<ServerResources> {
    create_test_resources_with(|_| {}).await
}

/// Full application router plus the resources behind it
pub async fn create_test_app() -> (Router, Arc<ServerResources>) {
    let resources = create_test_resources().await;
    (build_router(&resources), resources)
}

// ABOUTME: Shared server resources handed to every route group through router state
// ABOUTME: Bundles the database pool handle with the immutable server configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Corpsite Contributors

use crate::config::ServerConfig;
use crate::database::Database;
use std::sync::Arc;

/// Immutable state shared by all handlers
///
/// Wrapped in an `Arc` by the router; nothing in here is mutated after startup.
#[derive(Clone)]
pub struct ServerResources {
    /// Content store
    pub database: Database,
    /// Configuration loaded at startup
    pub config: Arc<ServerConfig>,
}

impl ServerResources {
    /// Bundle resources for the router
    #[must_use]
    pub fn new(database: Database, config: ServerConfig) -> Self {
        Self {
            database,
            config: Arc::new(config),
        }
    }

    /// Whether admin list reads should seed built-in content into empty storage
    #[must_use]
    pub fn seed_on_empty_read(&self) -> bool {
        self.config.content.seed_on_empty_read
    }
}

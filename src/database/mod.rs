// ABOUTME: Database pool management, schema migrations, and per-entity persistence
// ABOUTME: Owns the SQLite connection pool handed to every handler through router state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Corpsite Contributors

//! # Database Management
//!
//! The pool is created once by [`Database::connect`] at startup and shared via
//! `ServerResources`. Every statement goes through the query gateway in
//! [`gateway`], which translates named or positional placeholders before
//! binding.

mod banners;
mod clients;
/// Query execution entry points
pub mod gateway;
mod legal_documents;
/// Placeholder translation
pub mod params;
mod projects;
mod settings;
mod subsidiaries;
mod uploads;

pub use params::{translate, ParamError, QueryParams, SqlValue, TranslatedQuery};
pub use uploads::NewUpload;

use crate::config::DatabaseConfig;
use anyhow::{Context, Result};
use corpsite_core::errors::AppResult;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;
use tracing::{debug, info};

/// Shared handle to the content store
#[derive(Clone)]
pub struct Database {
    pool: Pool<Sqlite>,
}

impl Database {
    /// Open the connection pool described by `config`
    ///
    /// In-memory databases use a single long-lived connection so every query
    /// sees the same schema and rows.
    ///
    /// # Errors
    ///
    /// Returns an error if the database file cannot be created or opened
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        let connection_string = config.url.to_connection_string();
        let mut options = SqliteConnectOptions::from_str(&connection_string)
            .with_context(|| format!("Invalid database URL '{connection_string}'"))?;

        let pool_options = if config.url.is_memory() {
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            if let crate::config::DatabaseUrl::SQLite { path } = &config.url {
                if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    std::fs::create_dir_all(parent).with_context(|| {
                        format!("Failed to create database directory {}", parent.display())
                    })?;
                }
            }
            options = options
                .create_if_missing(true)
                .journal_mode(SqliteJournalMode::Wal);
            SqlitePoolOptions::new().max_connections(config.max_connections)
        };

        let pool = pool_options
            .acquire_timeout(config.acquire_timeout())
            .connect_with(options)
            .await
            .with_context(|| format!("Failed to connect to {connection_string}"))?;

        info!(
            database = %config.url,
            max_connections = config.max_connections,
            "Database pool ready"
        );

        Ok(Self { pool })
    }

    /// Get a reference to the database pool for advanced operations
    #[must_use]
    pub const fn pool(&self) -> &Pool<Sqlite> {
        &self.pool
    }

    /// Create all tables and indexes if they do not already exist
    ///
    /// # Errors
    ///
    /// Returns an error if any schema statement fails
    pub async fn migrate(&self) -> Result<()> {
        for statement in SCHEMA {
            sqlx::query(statement)
                .execute(&self.pool)
                .await
                .with_context(|| format!("Migration failed: {}", statement.trim()))?;
        }
        debug!(statements = SCHEMA.len(), "Schema migrations applied");
        Ok(())
    }

    /// Round-trip a trivial statement to confirm the pool can serve queries
    ///
    /// # Errors
    ///
    /// Returns a database error when no connection can be acquired or the query fails
    pub async fn ping(&self) -> AppResult<()> {
        self.execute("SELECT 1", QueryParams::None).await?;
        Ok(())
    }

    /// Close all pooled connections
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

const SCHEMA: &[&str] = &[
    r"
    CREATE TABLE IF NOT EXISTS banners (
        id TEXT PRIMARY KEY,
        page TEXT NOT NULL,
        title TEXT,
        subtitle TEXT,
        image_url TEXT NOT NULL,
        sort_order INTEGER NOT NULL DEFAULT 0,
        is_active INTEGER NOT NULL DEFAULT 1,
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL
    )
    ",
    "CREATE INDEX IF NOT EXISTS idx_banners_page ON banners(page, sort_order)",
    r"
    CREATE TABLE IF NOT EXISTS clients (
        id TEXT PRIMARY KEY,
        name TEXT NOT NULL,
        logo_url TEXT NOT NULL,
        category TEXT NOT NULL DEFAULT 'other',
        subsidiary TEXT,
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL
    )
    ",
    "CREATE INDEX IF NOT EXISTS idx_clients_category ON clients(category)",
    "CREATE INDEX IF NOT EXISTS idx_clients_subsidiary ON clients(subsidiary)",
    r"
    CREATE TABLE IF NOT EXISTS projects (
        id TEXT PRIMARY KEY,
        title TEXT NOT NULL,
        description TEXT,
        category TEXT,
        image_url TEXT,
        subsidiary TEXT,
        status TEXT NOT NULL DEFAULT 'unknown',
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL
    )
    ",
    "CREATE INDEX IF NOT EXISTS idx_projects_subsidiary ON projects(subsidiary)",
    r"
    CREATE TABLE IF NOT EXISTS subsidiaries (
        id TEXT PRIMARY KEY,
        name TEXT NOT NULL,
        path TEXT NOT NULL UNIQUE,
        description TEXT,
        image_url TEXT,
        display_order INTEGER NOT NULL DEFAULT 0,
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL
    )
    ",
    r"
    CREATE TABLE IF NOT EXISTS legal_documents (
        id TEXT PRIMARY KEY,
        title TEXT NOT NULL,
        description TEXT,
        document_url TEXT NOT NULL,
        doc_type TEXT,
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL
    )
    ",
    "CREATE INDEX IF NOT EXISTS idx_legal_documents_type ON legal_documents(doc_type)",
    r"
    CREATE TABLE IF NOT EXISTS settings (
        key TEXT PRIMARY KEY,
        value TEXT NOT NULL,
        updated_at TEXT NOT NULL
    )
    ",
    r"
    CREATE TABLE IF NOT EXISTS uploads (
        id TEXT PRIMARY KEY,
        filename TEXT NOT NULL,
        mime_type TEXT NOT NULL,
        size_bytes INTEGER NOT NULL,
        data BLOB NOT NULL,
        created_at TEXT NOT NULL
    )
    ",
    "CREATE INDEX IF NOT EXISTS idx_uploads_created ON uploads(created_at)",
];

/// Tables cleared by [`Database::clear_content`]
const CONTENT_TABLES: &[&str] = &[
    "banners",
    "clients",
    "projects",
    "subsidiaries",
    "legal_documents",
    "settings",
];

impl Database {
    /// Delete every row from the content tables (uploads are kept)
    ///
    /// # Errors
    ///
    /// Returns a database error if any delete fails
    pub async fn clear_content(&self) -> AppResult<u64> {
        let mut removed = 0;
        for table in CONTENT_TABLES {
            removed += self
                .execute(&format!("DELETE FROM {table}"), QueryParams::None)
                .await?;
        }
        Ok(removed)
    }
}

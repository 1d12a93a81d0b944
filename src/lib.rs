// ABOUTME: Main library entry point for the corporate site backend
// ABOUTME: Public page content API and admin CRUD endpoints over a SQLite content store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Corpsite Contributors

#![deny(unsafe_code)]

//! # Corpsite Server
//!
//! Backend for a business group's brochure website. It serves the content the
//! public pages render (banners, subsidiaries, clients, projects, legal
//! documents, site copy) and the admin endpoints used to edit it.
//!
//! ## Architecture
//!
//! - **database**: pool management, migrations, and the query gateway that
//!   translates `:name` / `?` placeholders into numbered parameters
//! - **content**: banner rotation and built-in fallbacks so pages never render empty
//! - **routes**: one route group per entity, plus public page aggregation
//! - **server**: router assembly, middleware, and graceful shutdown

/// Environment-driven configuration
pub mod config;

/// Constants and defaults
pub mod constants;

/// Built-in content and fallback resolution
pub mod content;

/// Connection pool, migrations, and per-entity persistence
pub mod database;

/// Structured logging setup
pub mod logging;

/// HTTP middleware layers
pub mod middleware;

/// Shared handler state
pub mod resources;

/// HTTP route groups
pub mod routes;

/// Router assembly and serving
pub mod server;

pub use corpsite_core::errors;
pub use corpsite_core::models;

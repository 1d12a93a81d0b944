// ABOUTME: Configuration management module for centralized server settings
// ABOUTME: Re-exports the environment-driven ServerConfig and its sections
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Corpsite Contributors

//! Configuration module for the corporate site server
//!
//! All configuration comes from environment variables; see
//! [`environment::ServerConfig::from_env`].

/// Environment and server configuration
pub mod environment;

pub use environment::{
    ContentConfig, CorsConfig, DatabaseConfig, DatabaseUrl, Environment, ServerConfig,
};

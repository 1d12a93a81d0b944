// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Parses environment variables into a typed ServerConfig with validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Corpsite Contributors

//! Environment-based configuration management for production deployment

use crate::constants::defaults;
use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use tracing::info;

/// Environment type for error verbosity and logging defaults
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Type-safe database location
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum DatabaseUrl {
    /// `SQLite` database file
    SQLite {
        /// File path
        path: PathBuf,
    },
    /// In-memory `SQLite` (tests and throwaway runs)
    Memory,
}

impl DatabaseUrl {
    /// Parse from a connection string
    ///
    /// # Errors
    ///
    /// Returns an error for connection strings of an unsupported backend
    pub fn parse_url(s: &str) -> Result<Self> {
        let s = s.trim();
        if let Some(path_str) = s.strip_prefix("sqlite:") {
            let path_str = path_str.trim_start_matches("//");
            if path_str == ":memory:" || path_str.is_empty() {
                Ok(Self::Memory)
            } else {
                Ok(Self::SQLite {
                    path: PathBuf::from(path_str),
                })
            }
        } else if s.contains("://") {
            Err(anyhow!(
                "Unsupported DATABASE_URL scheme in '{s}': only sqlite: URLs are supported"
            ))
        } else {
            // Bare paths are treated as SQLite files
            Ok(Self::SQLite {
                path: PathBuf::from(s),
            })
        }
    }

    /// Convert to connection string
    #[must_use]
    pub fn to_connection_string(&self) -> String {
        match self {
            Self::SQLite { path } => format!("sqlite:{}", path.display()),
            Self::Memory => "sqlite::memory:".to_owned(),
        }
    }

    /// Check if this is an in-memory database
    #[must_use]
    pub const fn is_memory(&self) -> bool {
        matches!(self, Self::Memory)
    }
}

impl Default for DatabaseUrl {
    fn default() -> Self {
        Self::SQLite {
            path: PathBuf::from("./data/corpsite.db"),
        }
    }
}

impl fmt::Display for DatabaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_connection_string())
    }
}

/// Connection pool configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Database location
    pub url: DatabaseUrl,
    /// Upper bound on pooled connections
    pub max_connections: u32,
    /// How long a request waits for a pooled connection before failing
    pub acquire_timeout_secs: u64,
    /// Run schema migrations on startup
    pub auto_migrate: bool,
}

impl DatabaseConfig {
    /// Acquisition timeout as a `Duration`
    #[must_use]
    pub const fn acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.acquire_timeout_secs)
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: DatabaseUrl::default(),
            max_connections: defaults::DB_MAX_CONNECTIONS,
            acquire_timeout_secs: defaults::DB_ACQUIRE_TIMEOUT_SECS,
            auto_migrate: true,
        }
    }
}

/// Content behavior settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentConfig {
    /// Insert built-in defaults when an admin list read finds an empty page or settings table
    pub seed_on_empty_read: bool,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            seed_on_empty_read: true,
        }
    }
}

/// CORS settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    /// Comma-separated allowed origins, or `*`
    pub allowed_origins: String,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: "*".to_owned(),
        }
    }
}

/// Complete server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// HTTP API port
    pub http_port: u16,
    /// Bind address
    pub host: String,
    /// Deployment environment
    pub environment: Environment,
    /// Database configuration
    pub database: DatabaseConfig,
    /// Content behavior
    pub content: ContentConfig,
    /// CORS settings
    pub cors: CorsConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_port: defaults::HTTP_PORT,
            host: defaults::HOST.to_owned(),
            environment: Environment::default(),
            database: DatabaseConfig::default(),
            content: ContentConfig::default(),
            cors: CorsConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is present but cannot be parsed, or the
    /// resulting configuration fails validation
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let config = Self {
            http_port: parse_env("HTTP_PORT", defaults::HTTP_PORT)?,
            host: env_var_or("HOST", defaults::HOST),
            environment: Environment::from_str_or_default(&env_var_or(
                "ENVIRONMENT",
                "development",
            )),
            database: DatabaseConfig {
                url: DatabaseUrl::parse_url(&env_var_or("DATABASE_URL", defaults::DATABASE_URL))?,
                max_connections: parse_env("DB_MAX_CONNECTIONS", defaults::DB_MAX_CONNECTIONS)?,
                acquire_timeout_secs: parse_env(
                    "DB_ACQUIRE_TIMEOUT_SECS",
                    defaults::DB_ACQUIRE_TIMEOUT_SECS,
                )?,
                auto_migrate: parse_bool_env("AUTO_MIGRATE", true),
            },
            content: ContentConfig {
                seed_on_empty_read: parse_bool_env("SEED_ON_EMPTY_READ", true),
            },
            cors: CorsConfig {
                allowed_origins: env_var_or("CORS_ALLOWED_ORIGINS", "*"),
            },
        };

        config.validate()?;
        info!("Configuration loaded successfully");
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error for a zero-sized pool or zero acquisition timeout
    pub fn validate(&self) -> Result<()> {
        if self.database.max_connections == 0 {
            return Err(anyhow!("DB_MAX_CONNECTIONS must be at least 1"));
        }
        if self.database.acquire_timeout_secs == 0 {
            return Err(anyhow!("DB_ACQUIRE_TIMEOUT_SECS must be at least 1"));
        }
        Ok(())
    }

    /// Get a summary of the configuration for logging
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Corpsite Server Configuration:\n\
             - HTTP: {}:{}\n\
             - Environment: {}\n\
             - Database: {} (pool {}, acquire timeout {}s)\n\
             - Auto Migrate: {}\n\
             - Seed On Empty Read: {}\n\
             - CORS Origins: {}",
            self.host,
            self.http_port,
            self.environment,
            self.database.url,
            self.database.max_connections,
            self.database.acquire_timeout_secs,
            self.database.auto_migrate,
            self.content.seed_on_empty_read,
            self.cors.allowed_origins,
        )
    }
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Parse a typed environment variable, falling back to `default` when unset
fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|e| anyhow!("Invalid value for {key} ('{raw}'): {e}")),
        Err(_) => Ok(default),
    }
}

/// Parse a boolean flag; anything but `false`/`0`/`no`/`off` counts as true
fn parse_bool_env(key: &str, default: bool) -> bool {
    env::var(key).map_or(default, |v| {
        !matches!(
            v.trim().to_lowercase().as_str(),
            "false" | "0" | "no" | "off"
        )
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_memory_url() {
        assert_eq!(
            DatabaseUrl::parse_url("sqlite::memory:").unwrap(),
            DatabaseUrl::Memory
        );
    }

    #[test]
    fn test_parse_file_url() {
        let url = DatabaseUrl::parse_url("sqlite:./data/site.db").unwrap();
        assert_eq!(url.to_connection_string(), "sqlite:./data/site.db");
    }

    #[test]
    fn test_foreign_scheme_rejected() {
        assert!(DatabaseUrl::parse_url("mysql://localhost/site").is_err());
    }

    #[test]
    fn test_environment_parse() {
        assert!(Environment::from_str_or_default("PROD").is_production());
        assert_eq!(
            Environment::from_str_or_default("whatever"),
            Environment::Development
        );
    }
}

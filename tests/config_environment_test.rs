// ABOUTME: Unit tests for config environment functionality
// ABOUTME: Validates environment variable parsing, defaults, and rejection of bad values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Corpsite Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use corpsite_server::config::{DatabaseUrl, Environment, ServerConfig};
use corpsite_server::logging::{LogFormat, LoggingConfig};
use serial_test::serial;
use std::env;
use std::path::PathBuf;

const VARS: &[&str] = &[
    "HTTP_PORT",
    "HOST",
    "ENVIRONMENT",
    "DATABASE_URL",
    "DB_MAX_CONNECTIONS",
    "DB_ACQUIRE_TIMEOUT_SECS",
    "AUTO_MIGRATE",
    "SEED_ON_EMPTY_READ",
    "CORS_ALLOWED_ORIGINS",
    "RUST_LOG",
    "LOG_FORMAT",
];

fn clear_env() {
    for var in VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_defaults_without_environment() {
    clear_env();

    let config = ServerConfig::from_env().unwrap();

    assert_eq!(config.http_port, 8080);
    assert_eq!(config.host, "0.0.0.0");
    assert_eq!(config.environment, Environment::Development);
    assert_eq!(
        config.database.url,
        DatabaseUrl::SQLite {
            path: PathBuf::from("./data/corpsite.db")
        }
    );
    assert!(config.database.auto_migrate);
    assert!(config.content.seed_on_empty_read);
    assert_eq!(config.cors.allowed_origins, "*");
}

#[test]
#[serial]
fn test_values_from_environment() {
    clear_env();
    env::set_var("HTTP_PORT", "9090");
    env::set_var("ENVIRONMENT", "production");
    env::set_var("DATABASE_URL", "sqlite::memory:");
    env::set_var("DB_MAX_CONNECTIONS", "4");
    env::set_var("SEED_ON_EMPTY_READ", "false");
    env::set_var("AUTO_MIGRATE", "0");

    let config = ServerConfig::from_env().unwrap();
    clear_env();

    assert_eq!(config.http_port, 9090);
    assert!(config.environment.is_production());
    assert!(config.database.url.is_memory());
    assert_eq!(config.database.max_connections, 4);
    assert!(!config.content.seed_on_empty_read);
    assert!(!config.database.auto_migrate);
    assert!(config.summary().contains("9090"));
}

#[test]
#[serial]
fn test_invalid_port_is_rejected() {
    clear_env();
    env::set_var("HTTP_PORT", "not-a-port");

    let result = ServerConfig::from_env();
    clear_env();

    assert!(result.is_err());
}

#[test]
#[serial]
fn test_zero_pool_size_is_rejected() {
    clear_env();
    env::set_var("DB_MAX_CONNECTIONS", "0");

    let result = ServerConfig::from_env();
    clear_env();

    assert!(result.is_err());
}

#[test]
#[serial]
fn test_non_sqlite_database_url_is_rejected() {
    clear_env();
    env::set_var("DATABASE_URL", "postgres://localhost/site");

    let result = ServerConfig::from_env();
    clear_env();

    assert!(result.is_err());
}

#[test]
fn test_database_url_forms() {
    assert!(DatabaseUrl::parse_url("sqlite:").unwrap().is_memory());
    assert_eq!(
        DatabaseUrl::parse_url("data/site.db").unwrap(),
        DatabaseUrl::SQLite {
            path: PathBuf::from("data/site.db")
        }
    );
    assert_eq!(
        DatabaseUrl::parse_url("sqlite://data/site.db")
            .unwrap()
            .to_connection_string(),
        "sqlite:data/site.db"
    );
}

#[test]
fn test_log_format_parsing() {
    assert_eq!(LogFormat::from_str_or_default("JSON"), LogFormat::Json);
    assert_eq!(LogFormat::from_str_or_default("compact"), LogFormat::Compact);
    assert_eq!(LogFormat::from_str_or_default("fancy"), LogFormat::Pretty);
}

#[test]
#[serial]
fn test_logging_config_from_env() {
    clear_env();
    env::set_var("RUST_LOG", "debug");
    env::set_var("LOG_FORMAT", "json");

    let config = LoggingConfig::from_env();
    clear_env();

    assert_eq!(config.level, "debug");
    assert_eq!(config.format, LogFormat::Json);
}

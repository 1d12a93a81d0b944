// ABOUTME: System-wide constants and configuration defaults for the corporate site server
// ABOUTME: Service naming, environment defaults, upload limits, and cache headers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Corpsite Contributors

//! # Constants Module
//!
//! Hardcoded values and the defaults used when an environment variable is unset.

/// Service naming used in logs
pub mod service_names {
    /// Service name reported in structured logs
    pub const CORPSITE_SERVER: &str = "corpsite-server";
}

/// Defaults applied by `ServerConfig::from_env`
pub mod defaults {
    /// Default HTTP port
    pub const HTTP_PORT: u16 = 8080;
    /// Default bind address
    pub const HOST: &str = "0.0.0.0";
    /// Default database location
    pub const DATABASE_URL: &str = "sqlite:./data/corpsite.db";
    /// Default upper bound on pooled connections
    pub const DB_MAX_CONNECTIONS: u32 = 10;
    /// Default pool acquisition timeout
    pub const DB_ACQUIRE_TIMEOUT_SECS: u64 = 5;
}

/// Upload validation limits
pub mod uploads {
    /// Largest accepted upload payload (5 MiB)
    pub const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

    /// Request body cap for the upload route; leaves room for multipart framing
    /// so oversized files are rejected by validation rather than by the transport
    pub const UPLOAD_BODY_LIMIT_BYTES: usize = MAX_UPLOAD_BYTES + 1024 * 1024;

    /// Multipart field carrying the file
    pub const FILE_FIELD: &str = "file";

    /// MIME types accepted for upload
    pub const ALLOWED_MIME_TYPES: &[&str] = &[
        "image/jpeg",
        "image/png",
        "image/gif",
        "image/webp",
        "image/svg+xml",
        "application/pdf",
    ];

    /// Cache header for served assets; identifiers are never reused
    pub const ASSET_CACHE_CONTROL: &str = "public, max-age=31536000, immutable";

    /// Default page size for upload search
    pub const DEFAULT_SEARCH_LIMIT: u32 = 50;

    /// Largest page size for upload search
    pub const MAX_SEARCH_LIMIT: u32 = 200;
}

/// Request header carrying the correlation id
pub const REQUEST_ID_HEADER: &str = "x-request-id";

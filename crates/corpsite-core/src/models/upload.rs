// ABOUTME: Uploaded asset models (image and PDF uploads served back verbatim)
// ABOUTME: Metadata record for listings and the payload record for retrieval
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Corpsite Contributors

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Metadata describing an uploaded asset (without its bytes)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx-sqlite", derive(sqlx::FromRow))]
pub struct UploadedAsset {
    /// Generated identifier
    pub id: String,
    /// Original file name as sent by the browser
    pub filename: String,
    /// Stored MIME type
    pub mime_type: String,
    /// Payload length in bytes
    pub size_bytes: i64,
    /// Upload timestamp
    pub created_at: DateTime<Utc>,
}

impl UploadedAsset {
    /// Public retrieval URL for this asset
    #[must_use]
    pub fn url(&self) -> String {
        format!("/api/images/{}", self.id)
    }
}

/// Stored bytes and MIME type, as served by the image endpoint
#[derive(Debug, Clone)]
#[cfg_attr(feature = "sqlx-sqlite", derive(sqlx::FromRow))]
pub struct AssetPayload {
    /// Stored MIME type
    pub mime_type: String,
    /// Raw bytes
    pub data: Vec<u8>,
}

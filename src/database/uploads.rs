// ABOUTME: Uploaded asset persistence (image and PDF bytes stored inline)
// ABOUTME: Store, fetch payload, filename search, and delete
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Corpsite Contributors

use super::{Database, QueryParams};
use chrono::Utc;
use corpsite_core::errors::{AppError, AppResult};
use corpsite_core::models::{AssetPayload, UploadedAsset};
use uuid::Uuid;

const ASSET_COLUMNS: &str = "id, filename, mime_type, size_bytes, created_at";

/// A validated upload ready to be stored
#[derive(Debug, Clone)]
pub struct NewUpload {
    /// Original file name
    pub filename: String,
    /// Allow-listed MIME type
    pub mime_type: String,
    /// File contents
    pub data: Vec<u8>,
}

impl Database {
    /// Store an upload and return its metadata
    ///
    /// # Errors
    ///
    /// Returns a database error if the insert fails
    pub async fn create_upload(&self, upload: NewUpload) -> AppResult<UploadedAsset> {
        let size_bytes = i64::try_from(upload.data.len())
            .map_err(|_| AppError::out_of_range("Upload is too large to store"))?;
        let params = QueryParams::named()
            .set("id", Uuid::new_v4().to_string())
            .set("filename", upload.filename)
            .set("mime_type", upload.mime_type)
            .set("size_bytes", size_bytes)
            .set("data", upload.data)
            .set("now", Utc::now());

        self.query_optional_as(
            &format!(
                "INSERT INTO uploads (id, filename, mime_type, size_bytes, data, created_at)
                 VALUES (:id, :filename, :mime_type, :size_bytes, :data, :now)
                 RETURNING {ASSET_COLUMNS}"
            ),
            params,
        )
        .await?
        .ok_or_else(|| AppError::storage("Insert did not return the upload"))
    }

    /// Stored bytes and MIME type for an asset
    ///
    /// # Errors
    ///
    /// Returns a database error if the query fails
    pub async fn get_asset_payload(&self, id: &str) -> AppResult<Option<AssetPayload>> {
        self.query_optional_as(
            "SELECT mime_type, data FROM uploads WHERE id = :id",
            QueryParams::named().set("id", id),
        )
        .await
    }

    /// Asset metadata, newest first, optionally filtered by a case-insensitive
    /// filename substring
    ///
    /// # Errors
    ///
    /// Returns a database error if the query fails
    pub async fn search_uploads(&self, term: Option<&str>, limit: u32) -> AppResult<Vec<UploadedAsset>> {
        self.query_as(
            &format!(
                "SELECT {ASSET_COLUMNS} FROM uploads
                 WHERE (:term IS NULL OR instr(lower(filename), lower(:term)) > 0)
                 ORDER BY created_at DESC, id
                 LIMIT :limit"
            ),
            QueryParams::named().set("term", term).set("limit", limit),
        )
        .await
    }

    /// Delete an asset; returns whether a row existed
    ///
    /// # Errors
    ///
    /// Returns a database error if the delete fails
    pub async fn delete_upload(&self, id: &str) -> AppResult<bool> {
        let affected = self
            .execute(
                "DELETE FROM uploads WHERE id = :id",
                QueryParams::named().set("id", id),
            )
            .await?;
        Ok(affected > 0)
    }
}

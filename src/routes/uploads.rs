// ABOUTME: Route handlers for asset uploads and image serving
// ABOUTME: Multipart upload with MIME allow-list and size cap, search, delete, and cached retrieval
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Corpsite Contributors

//! Upload routes
//!
//! Files are stored inline in the database and served back verbatim from
//! `/api/images/:id` with a long-lived immutable cache header, since an id is
//! never reused for different bytes.

use super::{created_response, deleted_response, filter_param};
use crate::constants::uploads::{
    ALLOWED_MIME_TYPES, ASSET_CACHE_CONTROL, DEFAULT_SEARCH_LIMIT, FILE_FIELD, MAX_SEARCH_LIMIT,
    MAX_UPLOAD_BYTES, UPLOAD_BODY_LIMIT_BYTES,
};
use crate::database::NewUpload;
use crate::resources::ServerResources;
use axum::{
    extract::{
        multipart::{Field, MultipartError},
        DefaultBodyLimit, Multipart, Path, Query, State,
    },
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{delete, get},
    Json, Router,
};
use corpsite_core::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

/// Query parameters for searching uploads
#[derive(Debug, Default, Deserialize)]
pub struct UploadSearchQuery {
    /// Case-insensitive filename substring
    pub q: Option<String>,
    /// Maximum number of results
    pub limit: Option<u32>,
}

/// Metadata returned after a successful upload
#[derive(Debug, Serialize, Deserialize)]
pub struct UploadResponse {
    /// Generated identifier
    pub id: String,
    /// Original file name
    pub filename: String,
    /// Stored MIME type
    pub mime_type: String,
    /// Payload length in bytes
    pub size_bytes: i64,
    /// Retrieval URL
    pub url: String,
}

/// Normalize a part's content type (`image/PNG; name=x` becomes `image/png`) and
/// check it against the allow-list
///
/// # Errors
///
/// Returns an `INVALID_FORMAT` error naming the rejected type
pub fn validate_mime_type(content_type: Option<&str>) -> AppResult<String> {
    let mime = content_type
        .and_then(|ct| ct.split(';').next())
        .map(|ct| ct.trim().to_ascii_lowercase())
        .unwrap_or_default();

    if ALLOWED_MIME_TYPES.contains(&mime.as_str()) {
        Ok(mime)
    } else {
        Err(AppError::invalid_format(format!(
            "Unsupported file type '{mime}'; allowed types: {}",
            ALLOWED_MIME_TYPES.join(", ")
        ))
        .with_details(serde_json::json!({ "allowed": ALLOWED_MIME_TYPES })))
    }
}

fn too_large() -> AppError {
    AppError::out_of_range(format!(
        "File exceeds the maximum upload size of {MAX_UPLOAD_BYTES} bytes"
    ))
    .with_details(serde_json::json!({ "max_bytes": MAX_UPLOAD_BYTES }))
}

/// Body-limit overruns count as oversized files; anything else is a malformed request
fn multipart_error(error: MultipartError) -> AppError {
    if error.status() == StatusCode::PAYLOAD_TOO_LARGE {
        too_large()
    } else {
        AppError::invalid_input(format!("Malformed upload: {}", error.body_text()))
    }
}

/// Read a part's bytes, stopping as soon as the running total passes the cap
async fn read_capped(field: &mut Field<'_>) -> AppResult<Vec<u8>> {
    let mut data = Vec::new();
    loop {
        let chunk = field.chunk().await.map_err(multipart_error)?;
        let Some(chunk) = chunk else {
            return Ok(data);
        };
        if data.len() + chunk.len() > MAX_UPLOAD_BYTES {
            return Err(too_large());
        }
        data.extend_from_slice(&chunk);
    }
}

/// Upload routes implementation
pub struct UploadRoutes;

impl UploadRoutes {
    /// Create upload, search, delete, and image routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/api/uploads",
                get(Self::handle_search)
                    .post(Self::handle_upload)
                    .layer(DefaultBodyLimit::max(UPLOAD_BODY_LIMIT_BYTES)),
            )
            .route("/api/uploads/:id", delete(Self::handle_delete))
            .route("/api/images/:id", get(Self::handle_image))
            .with_state(resources)
    }

    /// Handle POST /api/uploads
    async fn handle_upload(
        State(resources): State<Arc<ServerResources>>,
        mut multipart: Multipart,
    ) -> Result<Response, AppError> {
        while let Some(mut field) = multipart.next_field().await.map_err(multipart_error)? {
            if field.name() != Some(FILE_FIELD) {
                continue;
            }

            let mime_type = validate_mime_type(field.content_type())?;
            let filename = field
                .file_name()
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .unwrap_or("upload")
                .to_owned();
            let data = read_capped(&mut field).await?;

            let asset = resources
                .database
                .create_upload(NewUpload {
                    filename,
                    mime_type,
                    data,
                })
                .await?;
            info!(
                id = %asset.id,
                mime_type = %asset.mime_type,
                size_bytes = asset.size_bytes,
                "asset uploaded"
            );

            let url = asset.url();
            return Ok(created_response(UploadResponse {
                id: asset.id,
                filename: asset.filename,
                mime_type: asset.mime_type,
                size_bytes: asset.size_bytes,
                url,
            }));
        }

        Err(AppError::missing_field(FILE_FIELD))
    }

    /// Handle GET /api/uploads
    async fn handle_search(
        State(resources): State<Arc<ServerResources>>,
        Query(query): Query<UploadSearchQuery>,
    ) -> Result<Response, AppError> {
        let limit = query
            .limit
            .unwrap_or(DEFAULT_SEARCH_LIMIT)
            .clamp(1, MAX_SEARCH_LIMIT);
        let term = filter_param(query.q.as_ref());
        let assets = resources.database.search_uploads(term, limit).await?;

        let results: Vec<UploadResponse> = assets
            .into_iter()
            .map(|asset| UploadResponse {
                url: asset.url(),
                id: asset.id,
                filename: asset.filename,
                mime_type: asset.mime_type,
                size_bytes: asset.size_bytes,
            })
            .collect();
        Ok(Json(results).into_response())
    }

    /// Handle DELETE /api/uploads/:id
    async fn handle_delete(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<String>,
    ) -> Result<Response, AppError> {
        let deleted = resources.database.delete_upload(&id).await?;
        info!(id = %id, deleted, "asset delete");
        Ok(deleted_response(deleted))
    }

    /// Handle GET /api/images/:id
    async fn handle_image(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<String>,
    ) -> Result<Response, AppError> {
        let payload = resources
            .database
            .get_asset_payload(&id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Image {id}")).with_resource_id(&id))?;

        Ok((
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, payload.mime_type),
                (header::CACHE_CONTROL, ASSET_CACHE_CONTROL.to_owned()),
            ],
            payload.data,
        )
            .into_response())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mime_type_normalized() {
        assert_eq!(
            validate_mime_type(Some("Image/PNG; name=logo.png")).ok(),
            Some("image/png".to_owned())
        );
    }

    #[test]
    fn test_mime_type_rejected() {
        assert!(validate_mime_type(Some("text/html")).is_err());
        assert!(validate_mime_type(None).is_err());
    }
}

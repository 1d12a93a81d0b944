// ABOUTME: Legal document model (licences, certificates, company deeds)
// ABOUTME: LegalDocument record and create/update payload validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Corpsite Contributors

use super::{non_blank_update, required_text};
use crate::errors::AppResult;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A published legal document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx-sqlite", derive(sqlx::FromRow))]
pub struct LegalDocument {
    /// Unique identifier
    pub id: String,
    /// Document title
    pub title: String,
    /// Short description
    pub description: Option<String>,
    /// Document reference (usually `/api/images/<id>` for an uploaded PDF)
    pub document_url: String,
    /// Document type, e.g. `licence` or `certificate`
    pub doc_type: Option<String>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// Request body for creating or updating a legal document
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LegalDocumentInput {
    /// Document title
    pub title: Option<String>,
    /// Short description
    pub description: Option<String>,
    /// Document reference
    pub document_url: Option<String>,
    /// Document type
    pub doc_type: Option<String>,
}

/// Validated legal document ready for insertion
#[derive(Debug, Clone)]
pub struct NewLegalDocument {
    /// Document title
    pub title: String,
    /// Short description
    pub description: Option<String>,
    /// Document reference
    pub document_url: String,
    /// Document type
    pub doc_type: Option<String>,
}

/// Partial legal document update; `None` keeps the stored value
#[derive(Debug, Clone, Default)]
pub struct LegalDocumentChanges {
    /// Document title
    pub title: Option<String>,
    /// Short description
    pub description: Option<String>,
    /// Document reference
    pub document_url: Option<String>,
    /// Document type
    pub doc_type: Option<String>,
}

impl LegalDocumentInput {
    /// Validate a create request
    ///
    /// # Errors
    ///
    /// Returns a validation error when `title` or `document_url` is missing
    pub fn into_new(self) -> AppResult<NewLegalDocument> {
        Ok(NewLegalDocument {
            title: required_text(self.title, "title")?,
            document_url: required_text(self.document_url, "document_url")?,
            description: self.description,
            doc_type: self.doc_type,
        })
    }

    /// Validate an update request
    ///
    /// # Errors
    ///
    /// Returns a validation error when `title` or `document_url` is present but blank
    pub fn into_changes(self) -> AppResult<LegalDocumentChanges> {
        Ok(LegalDocumentChanges {
            title: non_blank_update(self.title, "title")?,
            document_url: non_blank_update(self.document_url, "document_url")?,
            description: self.description,
            doc_type: self.doc_type,
        })
    }
}

// ABOUTME: Legal document persistence (licences, certificates, and policies)
// ABOUTME: Listing by document type plus create, partial update, and delete
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Corpsite Contributors

use super::{Database, QueryParams};
use chrono::Utc;
use corpsite_core::errors::{AppError, AppResult};
use corpsite_core::models::{LegalDocument, LegalDocumentChanges, NewLegalDocument};
use uuid::Uuid;

const LEGAL_DOCUMENT_COLUMNS: &str =
    "id, title, description, document_url, doc_type, created_at, updated_at";

impl Database {
    /// List legal documents, optionally of one type
    ///
    /// # Errors
    ///
    /// Returns a database error if the query fails
    pub async fn list_legal_documents(&self, doc_type: Option<&str>) -> AppResult<Vec<LegalDocument>> {
        self.query_as(
            &format!(
                "SELECT {LEGAL_DOCUMENT_COLUMNS} FROM legal_documents
                 WHERE (:doc_type IS NULL OR doc_type = :doc_type)
                 ORDER BY title COLLATE NOCASE"
            ),
            QueryParams::named().set("doc_type", doc_type),
        )
        .await
    }

    /// Fetch one legal document
    ///
    /// # Errors
    ///
    /// Returns a database error if the query fails
    pub async fn get_legal_document(&self, id: &str) -> AppResult<Option<LegalDocument>> {
        self.query_optional_as(
            &format!("SELECT {LEGAL_DOCUMENT_COLUMNS} FROM legal_documents WHERE id = :id"),
            QueryParams::named().set("id", id),
        )
        .await
    }

    /// Insert a legal document with a generated id
    ///
    /// # Errors
    ///
    /// Returns a database error if the insert fails
    pub async fn create_legal_document(&self, document: NewLegalDocument) -> AppResult<LegalDocument> {
        let params = QueryParams::named()
            .set("id", Uuid::new_v4().to_string())
            .set("title", document.title)
            .set("description", document.description)
            .set("document_url", document.document_url)
            .set("doc_type", document.doc_type)
            .set("now", Utc::now());

        self.query_optional_as(
            &format!(
                "INSERT INTO legal_documents ({LEGAL_DOCUMENT_COLUMNS})
                 VALUES (:id, :title, :description, :document_url, :doc_type, :now, :now)
                 RETURNING {LEGAL_DOCUMENT_COLUMNS}"
            ),
            params,
        )
        .await?
        .ok_or_else(|| AppError::database("Insert did not return the legal document"))
    }

    /// Apply a partial update; absent fields keep their stored values
    ///
    /// # Errors
    ///
    /// Returns a database error if the update fails
    pub async fn update_legal_document(
        &self,
        id: &str,
        changes: LegalDocumentChanges,
    ) -> AppResult<Option<LegalDocument>> {
        let params = QueryParams::named()
            .set("id", id)
            .set("title", changes.title)
            .set("description", changes.description)
            .set("document_url", changes.document_url)
            .set("doc_type", changes.doc_type)
            .set("now", Utc::now());

        self.query_optional_as(
            &format!(
                "UPDATE legal_documents SET
                    title = COALESCE(:title, title),
                    description = COALESCE(:description, description),
                    document_url = COALESCE(:document_url, document_url),
                    doc_type = COALESCE(:doc_type, doc_type),
                    updated_at = :now
                 WHERE id = :id
                 RETURNING {LEGAL_DOCUMENT_COLUMNS}"
            ),
            params,
        )
        .await
    }

    /// Delete a legal document; returns whether a row existed
    ///
    /// # Errors
    ///
    /// Returns a database error if the delete fails
    pub async fn delete_legal_document(&self, id: &str) -> AppResult<bool> {
        let affected = self
            .execute(
                "DELETE FROM legal_documents WHERE id = :id",
                QueryParams::named().set("id", id),
            )
            .await?;
        Ok(affected > 0)
    }
}

// ABOUTME: Content models for the corporate site (banners, clients, projects, and more)
// ABOUTME: Canonical row records plus request payloads with required-field validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Corpsite Contributors

//! # Content Models
//!
//! Each entity has exactly one canonical record type. When the `sqlx-sqlite`
//! feature is enabled the records derive `sqlx::FromRow`, which is the single
//! place where a database row is normalized into field names the rest of the
//! server uses.
//!
//! Request payloads (`*Input`) deserialize every field as optional so that
//! required-field violations surface as 400 responses carrying the field name,
//! rather than as extractor rejections.

mod banner;
mod client;
mod legal_document;
mod project;
mod setting;
mod subsidiary;
mod upload;

pub use banner::{Banner, BannerChanges, BannerInput, NewBanner};
pub use client::{Client, ClientCategory, ClientChanges, ClientInput, NewClient};
pub use legal_document::{LegalDocument, LegalDocumentChanges, LegalDocumentInput, NewLegalDocument};
pub use project::{NewProject, Project, ProjectChanges, ProjectInput, ProjectStatus};
pub use setting::{Setting, SettingKey, SettingsPayload};
pub use subsidiary::{
    is_valid_path, slugify, NewSubsidiary, Subsidiary, SubsidiaryChanges, SubsidiaryInput,
};
pub use upload::{AssetPayload, UploadedAsset};

use crate::errors::{AppError, AppResult};

/// Take a required text field, rejecting absent or blank values
///
/// # Errors
///
/// Returns a `MISSING_REQUIRED_FIELD` error naming `field`
pub fn required_text(value: Option<String>, field: &str) -> AppResult<String> {
    match value {
        Some(text) if !text.trim().is_empty() => Ok(text.trim().to_owned()),
        _ => Err(AppError::missing_field(field)),
    }
}

/// Validate a required field on update: absent is fine, blank is not
///
/// # Errors
///
/// Returns a `MISSING_REQUIRED_FIELD` error naming `field` for blank values
pub fn non_blank_update(value: Option<String>, field: &str) -> AppResult<Option<String>> {
    value.map(|text| required_text(Some(text), field)).transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    #[test]
    fn test_required_text_trims() {
        assert_eq!(
            required_text(Some("  Acme ".to_owned()), "name").ok(),
            Some("Acme".to_owned())
        );
    }

    #[test]
    fn test_required_text_rejects_blank_and_absent() {
        for value in [None, Some(String::new()), Some("   ".to_owned())] {
            let err = required_text(value, "title").err();
            assert_eq!(err.map(|e| e.code), Some(ErrorCode::MissingRequiredField));
        }
    }

    #[test]
    fn test_non_blank_update_allows_absent() {
        assert!(matches!(non_blank_update(None, "title"), Ok(None)));
        assert!(non_blank_update(Some(" ".to_owned()), "title").is_err());
    }
}

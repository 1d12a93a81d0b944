// ABOUTME: Subsidiary model and route-segment (path) helpers
// ABOUTME: Subsidiary record, slug derivation, and create/update payload validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Corpsite Contributors

use super::{non_blank_update, required_text};
use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A subsidiary company of the group, rendered at `/subsidiaries/<path>`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx-sqlite", derive(sqlx::FromRow))]
pub struct Subsidiary {
    /// Unique identifier
    pub id: String,
    /// Display name; projects and clients reference subsidiaries by this name
    pub name: String,
    /// Route segment
    pub path: String,
    /// Long description
    pub description: Option<String>,
    /// Image reference
    pub image_url: Option<String>,
    /// Ordering on listing pages, ascending
    pub display_order: i64,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// Derive a route segment from a display name
///
/// Lowercases ASCII alphanumerics and collapses every other run of characters
/// into a single `-`.
#[must_use]
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_dash = false;
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(ch.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }
    slug
}

/// True when `path` is a non-empty lowercase slug (`[a-z0-9]+(-[a-z0-9]+)*`)
#[must_use]
pub fn is_valid_path(path: &str) -> bool {
    !path.is_empty()
        && !path.starts_with('-')
        && !path.ends_with('-')
        && !path.contains("--")
        && path
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

fn validate_path(path: String) -> AppResult<String> {
    let path = path.trim().to_owned();
    if is_valid_path(&path) {
        Ok(path)
    } else {
        Err(AppError::invalid_format(format!(
            "Invalid subsidiary path '{path}': use lowercase letters, digits and single dashes"
        )))
    }
}

/// Request body for creating or updating a subsidiary
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubsidiaryInput {
    /// Display name
    pub name: Option<String>,
    /// Route segment
    pub path: Option<String>,
    /// Long description
    pub description: Option<String>,
    /// Image reference
    pub image_url: Option<String>,
    /// Listing order
    pub display_order: Option<i64>,
}

/// Validated subsidiary ready for insertion
#[derive(Debug, Clone)]
pub struct NewSubsidiary {
    /// Display name
    pub name: String,
    /// Route segment
    pub path: String,
    /// Long description
    pub description: Option<String>,
    /// Image reference
    pub image_url: Option<String>,
    /// Listing order
    pub display_order: i64,
}

/// Partial subsidiary update; `None` keeps the stored value
#[derive(Debug, Clone, Default)]
pub struct SubsidiaryChanges {
    /// Display name
    pub name: Option<String>,
    /// Route segment
    pub path: Option<String>,
    /// Long description
    pub description: Option<String>,
    /// Image reference
    pub image_url: Option<String>,
    /// Listing order
    pub display_order: Option<i64>,
}

impl SubsidiaryInput {
    /// Validate a create request, deriving `path` from `name` when absent
    ///
    /// # Errors
    ///
    /// Returns a validation error for a missing name or malformed path
    pub fn into_new(self) -> AppResult<NewSubsidiary> {
        let name = required_text(self.name, "name")?;
        let path = match self.path.filter(|p| !p.trim().is_empty()) {
            Some(path) => validate_path(path)?,
            None => validate_path(slugify(&name))?,
        };
        Ok(NewSubsidiary {
            name,
            path,
            description: self.description,
            image_url: self.image_url,
            display_order: self.display_order.unwrap_or(0),
        })
    }

    /// Validate an update request
    ///
    /// # Errors
    ///
    /// Returns a validation error for a blank name or malformed path
    pub fn into_changes(self) -> AppResult<SubsidiaryChanges> {
        Ok(SubsidiaryChanges {
            name: non_blank_update(self.name, "name")?,
            path: self.path.map(validate_path).transpose()?,
            description: self.description,
            image_url: self.image_url,
            display_order: self.display_order,
        })
    }
}

// ABOUTME: Banner model for rotating page hero images
// ABOUTME: Banner record, create/update payloads, and their validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Corpsite Contributors

use super::{non_blank_update, required_text};
use crate::errors::AppResult;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A banner shown in the rotating header of a site page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx-sqlite", derive(sqlx::FromRow))]
pub struct Banner {
    /// Unique identifier
    pub id: String,
    /// Page key this banner belongs to
    pub page: String,
    /// Optional headline
    pub title: Option<String>,
    /// Optional secondary line
    pub subtitle: Option<String>,
    /// Image reference (URL or `/api/images/<id>`)
    pub image_url: String,
    /// Position within the page rotation, ascending
    pub sort_order: i64,
    /// Inactive banners are kept but never rendered
    pub is_active: bool,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl Banner {
    /// Build the synthetic second banner used when a page has a single stored banner
    #[must_use]
    pub fn rotation_clone(&self) -> Self {
        Self {
            id: format!("{}-rotation", self.id),
            sort_order: self.sort_order.saturating_add(1),
            ..self.clone()
        }
    }
}

/// Request body for creating or updating a banner
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BannerInput {
    /// Page key
    pub page: Option<String>,
    /// Headline
    pub title: Option<String>,
    /// Secondary line
    pub subtitle: Option<String>,
    /// Image reference
    pub image_url: Option<String>,
    /// Rotation position
    pub sort_order: Option<i64>,
    /// Active flag
    pub is_active: Option<bool>,
}

/// Validated banner ready for insertion
#[derive(Debug, Clone)]
pub struct NewBanner {
    /// Page key
    pub page: String,
    /// Headline
    pub title: Option<String>,
    /// Secondary line
    pub subtitle: Option<String>,
    /// Image reference
    pub image_url: String,
    /// Rotation position
    pub sort_order: i64,
    /// Active flag
    pub is_active: bool,
}

/// Partial banner update; `None` keeps the stored value
#[derive(Debug, Clone, Default)]
pub struct BannerChanges {
    /// Page key
    pub page: Option<String>,
    /// Headline
    pub title: Option<String>,
    /// Secondary line
    pub subtitle: Option<String>,
    /// Image reference
    pub image_url: Option<String>,
    /// Rotation position
    pub sort_order: Option<i64>,
    /// Active flag
    pub is_active: Option<bool>,
}

impl BannerInput {
    /// Validate a create request
    ///
    /// # Errors
    ///
    /// Returns a validation error when `page` or `image_url` is missing
    pub fn into_new(self) -> AppResult<NewBanner> {
        Ok(NewBanner {
            page: required_text(self.page, "page")?,
            image_url: required_text(self.image_url, "image_url")?,
            title: self.title,
            subtitle: self.subtitle,
            sort_order: self.sort_order.unwrap_or(0),
            is_active: self.is_active.unwrap_or(true),
        })
    }

    /// Validate an update request
    ///
    /// # Errors
    ///
    /// Returns a validation error when `page` or `image_url` is present but blank
    pub fn into_changes(self) -> AppResult<BannerChanges> {
        Ok(BannerChanges {
            page: non_blank_update(self.page, "page")?,
            image_url: non_blank_update(self.image_url, "image_url")?,
            title: self.title,
            subtitle: self.subtitle,
            sort_order: self.sort_order,
            is_active: self.is_active,
        })
    }
}

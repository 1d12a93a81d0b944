// ABOUTME: Project model for the subsidiary portfolio pages
// ABOUTME: Project record, status enum, and create/update payload validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Corpsite Contributors

use super::{non_blank_update, required_text};
use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Delivery status of a project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    /// Work in progress
    Ongoing,
    /// Delivered
    Finished,
    /// Not recorded
    #[default]
    Unknown,
}

impl ProjectStatus {
    /// All statuses
    pub const ALL: [Self; 3] = [Self::Ongoing, Self::Finished, Self::Unknown];

    /// Stored string form
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ongoing => "ongoing",
            Self::Finished => "finished",
            Self::Unknown => "unknown",
        }
    }

    /// Strict parse used for request validation
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s.trim()))
    }

    /// Validate a status supplied by a client
    ///
    /// # Errors
    ///
    /// Returns an `INVALID_FORMAT` error for anything but ongoing/finished/unknown
    pub fn validate(s: &str) -> AppResult<Self> {
        Self::parse(s).ok_or_else(|| {
            AppError::invalid_format(format!(
                "Unknown project status '{s}', expected ongoing, finished or unknown"
            ))
        })
    }
}

impl From<String> for ProjectStatus {
    fn from(value: String) -> Self {
        Self::parse(&value).unwrap_or_default()
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A project delivered by one of the subsidiaries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx-sqlite", derive(sqlx::FromRow))]
pub struct Project {
    /// Unique identifier
    pub id: String,
    /// Project title
    pub title: String,
    /// Long description
    pub description: Option<String>,
    /// Free-form category
    pub category: Option<String>,
    /// Image reference
    pub image_url: Option<String>,
    /// Name of the owning subsidiary
    pub subsidiary: Option<String>,
    /// Delivery status
    #[cfg_attr(feature = "sqlx-sqlite", sqlx(try_from = "String"))]
    pub status: ProjectStatus,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// Request body for creating or updating a project
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectInput {
    /// Project title
    pub title: Option<String>,
    /// Long description
    pub description: Option<String>,
    /// Free-form category
    pub category: Option<String>,
    /// Image reference
    pub image_url: Option<String>,
    /// Owning subsidiary name
    pub subsidiary: Option<String>,
    /// Status string
    pub status: Option<String>,
}

/// Validated project ready for insertion
#[derive(Debug, Clone)]
pub struct NewProject {
    /// Project title
    pub title: String,
    /// Long description
    pub description: Option<String>,
    /// Free-form category
    pub category: Option<String>,
    /// Image reference
    pub image_url: Option<String>,
    /// Owning subsidiary name
    pub subsidiary: Option<String>,
    /// Delivery status
    pub status: ProjectStatus,
}

/// Partial project update; `None` keeps the stored value
#[derive(Debug, Clone, Default)]
pub struct ProjectChanges {
    /// Project title
    pub title: Option<String>,
    /// Long description
    pub description: Option<String>,
    /// Free-form category
    pub category: Option<String>,
    /// Image reference
    pub image_url: Option<String>,
    /// Owning subsidiary name
    pub subsidiary: Option<String>,
    /// Delivery status
    pub status: Option<ProjectStatus>,
}

impl ProjectInput {
    /// Validate a create request
    ///
    /// # Errors
    ///
    /// Returns a validation error for a missing title or unknown status
    pub fn into_new(self) -> AppResult<NewProject> {
        Ok(NewProject {
            title: required_text(self.title, "title")?,
            status: self
                .status
                .as_deref()
                .map(ProjectStatus::validate)
                .transpose()?
                .unwrap_or_default(),
            description: self.description,
            category: self.category,
            image_url: self.image_url,
            subsidiary: self.subsidiary,
        })
    }

    /// Validate an update request
    ///
    /// # Errors
    ///
    /// Returns a validation error for a blank title or unknown status
    pub fn into_changes(self) -> AppResult<ProjectChanges> {
        Ok(ProjectChanges {
            title: non_blank_update(self.title, "title")?,
            status: self
                .status
                .as_deref()
                .map(ProjectStatus::validate)
                .transpose()?,
            description: self.description,
            category: self.category,
            image_url: self.image_url,
            subsidiary: self.subsidiary,
        })
    }
}

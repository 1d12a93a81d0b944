// ABOUTME: Client model for the customer logo wall
// ABOUTME: Client record, category enum, and create/update payload validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Corpsite Contributors

use super::{non_blank_update, required_text};
use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Category grouping clients on the logo wall
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClientCategory {
    /// Government agencies and ministries
    Government,
    /// State-owned enterprises
    StateOwned,
    /// Private companies
    Private,
    /// Anything else
    #[default]
    Other,
}

impl ClientCategory {
    /// All categories in display order
    pub const ALL: [Self; 4] = [Self::Government, Self::StateOwned, Self::Private, Self::Other];

    /// Stored string form
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Government => "government",
            Self::StateOwned => "state_owned",
            Self::Private => "private",
            Self::Other => "other",
        }
    }

    /// Strict parse used for request validation
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(s.trim()))
    }

    /// Validate a category supplied by a client
    ///
    /// # Errors
    ///
    /// Returns an `INVALID_FORMAT` error listing the accepted values
    pub fn validate(s: &str) -> AppResult<Self> {
        Self::parse(s).ok_or_else(|| {
            let accepted: Vec<&str> = Self::ALL.iter().map(Self::as_str).collect();
            AppError::invalid_format(format!(
                "Unknown client category '{s}', expected one of: {}",
                accepted.join(", ")
            ))
        })
    }
}

// Lenient conversion for stored rows: unrecognized values read as `Other`
impl From<String> for ClientCategory {
    fn from(value: String) -> Self {
        Self::parse(&value).unwrap_or_default()
    }
}

impl fmt::Display for ClientCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A client shown on the logo wall
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx-sqlite", derive(sqlx::FromRow))]
pub struct Client {
    /// Unique identifier
    pub id: String,
    /// Client name
    pub name: String,
    /// Logo reference
    pub logo_url: String,
    /// Category
    #[cfg_attr(feature = "sqlx-sqlite", sqlx(try_from = "String"))]
    pub category: ClientCategory,
    /// Name of the subsidiary serving this client, if any
    pub subsidiary: Option<String>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// Request body for creating or updating a client
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClientInput {
    /// Client name
    pub name: Option<String>,
    /// Logo reference
    pub logo_url: Option<String>,
    /// Category string
    pub category: Option<String>,
    /// Subsidiary name
    pub subsidiary: Option<String>,
}

/// Validated client ready for insertion
#[derive(Debug, Clone)]
pub struct NewClient {
    /// Client name
    pub name: String,
    /// Logo reference
    pub logo_url: String,
    /// Category
    pub category: ClientCategory,
    /// Subsidiary name
    pub subsidiary: Option<String>,
}

/// Partial client update; `None` keeps the stored value
#[derive(Debug, Clone, Default)]
pub struct ClientChanges {
    /// Client name
    pub name: Option<String>,
    /// Logo reference
    pub logo_url: Option<String>,
    /// Category
    pub category: Option<ClientCategory>,
    /// Subsidiary name
    pub subsidiary: Option<String>,
}

impl ClientInput {
    /// Validate a create request
    ///
    /// # Errors
    ///
    /// Returns a validation error for missing `name`/`logo_url` or an unknown category
    pub fn into_new(self) -> AppResult<NewClient> {
        Ok(NewClient {
            name: required_text(self.name, "name")?,
            logo_url: required_text(self.logo_url, "logo_url")?,
            category: self
                .category
                .as_deref()
                .map(ClientCategory::validate)
                .transpose()?
                .unwrap_or_default(),
            subsidiary: self.subsidiary,
        })
    }

    /// Validate an update request
    ///
    /// # Errors
    ///
    /// Returns a validation error for blank `name`/`logo_url` or an unknown category
    pub fn into_changes(self) -> AppResult<ClientChanges> {
        Ok(ClientChanges {
            name: non_blank_update(self.name, "name")?,
            logo_url: non_blank_update(self.logo_url, "logo_url")?,
            category: self
                .category
                .as_deref()
                .map(ClientCategory::validate)
                .transpose()?,
            subsidiary: self.subsidiary,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parse_is_case_insensitive() {
        assert_eq!(
            ClientCategory::parse("Government"),
            Some(ClientCategory::Government)
        );
        assert_eq!(
            ClientCategory::parse("state_owned"),
            Some(ClientCategory::StateOwned)
        );
        assert_eq!(ClientCategory::parse("bank"), None);
    }

    #[test]
    fn test_stored_unknown_category_reads_as_other() {
        assert_eq!(
            ClientCategory::from("legacy".to_owned()),
            ClientCategory::Other
        );
    }

    #[test]
    fn test_create_rejects_unknown_category() {
        let input = ClientInput {
            name: Some("Acme".to_owned()),
            logo_url: Some("/img/acme.png".to_owned()),
            category: Some("bank".to_owned()),
            subsidiary: None,
        };
        assert!(input.into_new().is_err());
    }
}

// ABOUTME: Site settings model (mission, vision, office address, organization chart)
// ABOUTME: Known setting keys with built-in defaults and the upsert payload shape
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Corpsite Contributors

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A stored key/value setting
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx-sqlite", derive(sqlx::FromRow))]
pub struct Setting {
    /// Setting key (unique)
    pub key: String,
    /// Setting value
    pub value: String,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// The keys the site understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SettingKey {
    /// Mission statement
    Mission,
    /// Vision statement
    Vision,
    /// Company history
    History,
    /// Corporate attitude
    Attitude,
    /// Core values
    CoreValues,
    /// Head office address
    OfficeAddress,
    /// Organization chart image URL
    OrganizationChartUrl,
}

impl SettingKey {
    /// Every known key
    pub const ALL: [Self; 7] = [
        Self::Mission,
        Self::Vision,
        Self::History,
        Self::Attitude,
        Self::CoreValues,
        Self::OfficeAddress,
        Self::OrganizationChartUrl,
    ];

    /// Stored string form
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Mission => "mission",
            Self::Vision => "vision",
            Self::History => "history",
            Self::Attitude => "attitude",
            Self::CoreValues => "core_values",
            Self::OfficeAddress => "office_address",
            Self::OrganizationChartUrl => "organization_chart_url",
        }
    }

    /// Parse a stored or requested key
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.as_str() == s.trim())
    }

    /// Validate a requested key
    ///
    /// # Errors
    ///
    /// Returns an `INVALID_INPUT` error for unknown keys
    pub fn validate(s: &str) -> AppResult<Self> {
        Self::parse(s).ok_or_else(|| {
            AppError::invalid_input(format!("Unknown setting key '{s}'"))
                .with_details(serde_json::json!({
                    "accepted": Self::ALL.iter().map(Self::as_str).collect::<Vec<_>>()
                }))
        })
    }

    /// Built-in value used until an administrator stores one
    #[must_use]
    pub const fn default_value(&self) -> &'static str {
        match self {
            Self::Mission => "Delivering dependable infrastructure and services across the group.",
            Self::Vision => "To be the most trusted business group in the region.",
            Self::History => "Founded as a single contractor, the group has grown into a family of subsidiaries.",
            Self::Attitude => "Integrity, diligence and care in every engagement.",
            Self::CoreValues => "Integrity, Excellence, Collaboration, Responsibility",
            Self::OfficeAddress => "Head office address not yet configured",
            Self::OrganizationChartUrl => "/images/organization-chart.png",
        }
    }

    /// All keys paired with their built-in values
    #[must_use]
    pub fn defaults() -> BTreeMap<String, String> {
        Self::ALL
            .iter()
            .map(|key| (key.as_str().to_owned(), key.default_value().to_owned()))
            .collect()
    }
}

impl fmt::Display for SettingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body accepted by the settings upsert endpoints
///
/// Either a single `{ "key": ..., "value": ... }` pair or a flat object of
/// `key -> value` entries.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SettingsPayload {
    /// One key
    Single {
        /// Setting key
        key: String,
        /// New value
        value: String,
    },
    /// Several keys at once
    Many(BTreeMap<String, String>),
}

impl SettingsPayload {
    /// Validate keys and flatten into `(key, value)` pairs
    ///
    /// # Errors
    ///
    /// Returns a validation error for an empty payload or any unknown key
    pub fn into_pairs(self) -> AppResult<Vec<(SettingKey, String)>> {
        let pairs = match self {
            Self::Single { key, value } => vec![(SettingKey::validate(&key)?, value)],
            Self::Many(entries) => entries
                .into_iter()
                .map(|(key, value)| SettingKey::validate(&key).map(|key| (key, value)))
                .collect::<AppResult<Vec<_>>>()?,
        };

        if pairs.is_empty() {
            return Err(AppError::missing_field("key"));
        }
        Ok(pairs)
    }
}

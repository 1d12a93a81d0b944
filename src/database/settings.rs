// ABOUTME: Site settings persistence (mission, vision, office address, and similar copy)
// ABOUTME: Key/value reads and single-statement multi-key upserts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Corpsite Contributors

use super::{Database, QueryParams, SqlValue};
use chrono::Utc;
use corpsite_core::errors::AppResult;
use corpsite_core::models::{Setting, SettingKey};

impl Database {
    /// All stored settings ordered by key
    ///
    /// # Errors
    ///
    /// Returns a database error if the query fails
    pub async fn list_settings(&self) -> AppResult<Vec<Setting>> {
        self.query_as(
            "SELECT key, value, updated_at FROM settings ORDER BY key",
            QueryParams::None,
        )
        .await
    }

    /// Fetch one setting
    ///
    /// # Errors
    ///
    /// Returns a database error if the query fails
    pub async fn get_setting(&self, key: SettingKey) -> AppResult<Option<Setting>> {
        self.query_optional_as(
            "SELECT key, value, updated_at FROM settings WHERE key = :key",
            QueryParams::named().set("key", key.as_str()),
        )
        .await
    }

    /// Insert or overwrite every pair in one statement
    ///
    /// # Errors
    ///
    /// Returns a database error if the statement fails
    pub async fn upsert_settings(&self, pairs: &[(SettingKey, String)]) -> AppResult<Vec<Setting>> {
        self.write_settings(
            pairs,
            "ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
        )
        .await
    }

    /// Insert the pairs whose keys are not stored yet, leaving existing values alone
    ///
    /// # Errors
    ///
    /// Returns a database error if the statement fails
    pub async fn insert_missing_settings(
        &self,
        pairs: &[(SettingKey, String)],
    ) -> AppResult<Vec<Setting>> {
        self.write_settings(pairs, "ON CONFLICT(key) DO NOTHING").await
    }

    async fn write_settings(
        &self,
        pairs: &[(SettingKey, String)],
        conflict_clause: &str,
    ) -> AppResult<Vec<Setting>> {
        if pairs.is_empty() {
            return Ok(Vec::new());
        }

        let now = Utc::now();
        let rows = vec!["(?, ?, ?)"; pairs.len()].join(", ");
        let values: Vec<SqlValue> = pairs
            .iter()
            .flat_map(|(key, value)| {
                [
                    SqlValue::from(key.as_str()),
                    SqlValue::from(value),
                    SqlValue::from(now),
                ]
            })
            .collect();

        self.query_as(
            &format!(
                "INSERT INTO settings (key, value, updated_at) VALUES {rows} {conflict_clause}
                 RETURNING key, value, updated_at"
            ),
            QueryParams::Positional(values),
        )
        .await
    }
}

// ABOUTME: Site settings reads that degrade to built-in values on empty storage or failure
// ABOUTME: Used by public page aggregation and the settings seed-on-empty read
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Corpsite Contributors

use crate::database::Database;
use corpsite_core::models::{Setting, SettingKey};
use std::collections::BTreeMap;
use tracing::{info, warn};

fn into_map(settings: Vec<Setting>) -> BTreeMap<String, String> {
    settings.into_iter().map(|s| (s.key, s.value)).collect()
}

/// Settings for public pages: built-in values overlaid with stored ones
///
/// A failed query yields the built-in values alone.
pub async fn load_site_settings(database: &Database) -> BTreeMap<String, String> {
    let mut merged = SettingKey::defaults();
    match database.list_settings().await {
        Ok(stored) => merged.extend(into_map(stored)),
        Err(e) => warn!(error = %e, "settings query failed, serving built-in settings"),
    }
    merged
}

/// Store the built-in settings and return the stored map
///
/// An insert failure is logged and the built-in values are returned unsaved.
pub async fn seed_default_settings(database: &Database) -> BTreeMap<String, String> {
    let pairs: Vec<(SettingKey, String)> = SettingKey::ALL
        .iter()
        .map(|key| (*key, key.default_value().to_owned()))
        .collect();

    let seeded = match database.insert_missing_settings(&pairs).await {
        Ok(created) => {
            info!(count = created.len(), "seeded built-in settings");
            database.list_settings().await
        }
        Err(e) => Err(e),
    };

    match seeded {
        Ok(stored) => into_map(stored),
        Err(e) => {
            warn!(error = %e, "settings seeding failed, serving built-in settings");
            SettingKey::defaults()
        }
    }
}

/// Organization chart image URL, or the built-in one when unset or unreadable
pub async fn organization_chart_url(database: &Database) -> String {
    let key = SettingKey::OrganizationChartUrl;
    match database.get_setting(key).await {
        Ok(Some(setting)) if !setting.value.trim().is_empty() => setting.value,
        Ok(_) => key.default_value().to_owned(),
        Err(e) => {
            warn!(error = %e, "organization chart query failed, serving built-in url");
            key.default_value().to_owned()
        }
    }
}
